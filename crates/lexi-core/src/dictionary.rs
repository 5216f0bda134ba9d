use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::language::LookupResult;

/// Read-only access to a built dictionary
pub trait Dictionary: Send + Sync {
    type Entry: DictionaryEntry;

    /// Number of entries held by the dictionary
    fn entry_count(&self) -> usize;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Individual dictionary entry
pub trait DictionaryEntry: Send + Sync {
    /// Main headword/term
    fn headword(&self) -> String;

    /// All possible readings/pronunciations
    fn readings(&self) -> Vec<String>;

    /// All definitions
    fn definitions(&self) -> Vec<Definition>;

    /// Convert to generic lookup result
    fn to_lookup_result(&self) -> LookupResult {
        LookupResult {
            term: self.headword(),
            readings: self.readings(),
            definitions: self.definitions().iter().map(|d| d.text.clone()).collect(),
            metadata: HashMap::new(),
        }
    }
}

/// Which written form of a Chinese headword a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Traditional,
    Simplified,
}

impl Script {
    pub fn from_simplified(use_simplified: bool) -> Self {
        if use_simplified {
            Script::Simplified
        } else {
            Script::Traditional
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Traditional => "traditional",
            Script::Simplified => "simplified",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, Clone)]
pub struct Definition {
    pub text: String,
    pub part_of_speech: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Corrupt archive: {0}")]
    CorruptArchive(#[from] zip::result::ZipError),

    #[error("Archive member not found: {0}")]
    MissingArchiveMember(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
