use lexi_core::dictionary::{Definition, DictionaryEntry, Script};
use serde::{Deserialize, Serialize};

/// One CC-CEDICT line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    /// First gloss of the line
    pub english: String,
}

impl ChineseEntry {
    /// Headword in the requested script
    pub fn form(&self, script: Script) -> &str {
        match script {
            Script::Traditional => &self.traditional,
            Script::Simplified => &self.simplified,
        }
    }

    pub fn is_surname(&self) -> bool {
        self.english.contains("surname ")
    }
}

impl DictionaryEntry for ChineseEntry {
    fn headword(&self) -> String {
        self.simplified.clone()
    }

    fn readings(&self) -> Vec<String> {
        vec![self.pinyin.clone()]
    }

    fn definitions(&self) -> Vec<Definition> {
        vec![Definition {
            text: self.english.clone(),
            part_of_speech: vec![],
            tags: vec![],
        }]
    }
}
