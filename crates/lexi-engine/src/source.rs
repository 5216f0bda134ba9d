/// Raw dictionary bytes handed over by the host at start-up
#[derive(Debug, Clone, Default)]
pub struct RawSources {
    /// ECDICT CSV table
    pub ecdict: Vec<u8>,
    /// ECDICT lemma list
    pub lemmas: Vec<u8>,
    /// Zip archive holding the CC-CEDICT text
    pub cedict_archive: Vec<u8>,
}

impl RawSources {
    pub fn new(ecdict: Vec<u8>, lemmas: Vec<u8>, cedict_archive: Vec<u8>) -> Self {
        Self {
            ecdict,
            lemmas,
            cedict_archive,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.ecdict.len() + self.lemmas.len() + self.cedict_archive.len()
    }
}

pub(crate) struct EnglishSource {
    pub(crate) table: Vec<u8>,
    pub(crate) lemmas: Vec<u8>,
}

impl EnglishSource {
    pub(crate) fn len(&self) -> usize {
        self.table.len() + self.lemmas.len()
    }
}
