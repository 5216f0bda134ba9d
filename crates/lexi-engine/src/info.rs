use lexi_core::dictionary::DictionaryMetadata;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Attribution {
    pub dataset: &'static str,
    pub url: &'static str,
    pub license: &'static str,
}

pub const ATTRIBUTION: &[Attribution] = &[
    Attribution {
        dataset: "ECDICT",
        url: "https://github.com/skywind3000/ECDICT",
        license: "MIT",
    },
    Attribution {
        dataset: "CC-CEDICT",
        url: "https://www.mdbg.net/chinese/dictionary?page=cc-cedict",
        license: "CC BY-SA 4.0",
    },
];

/// Snapshot of what the engine has loaded so far
#[derive(Debug, Clone, Serialize)]
pub struct EngineInfo {
    pub version: &'static str,
    /// English lookup keys, case variants counted separately
    pub words: usize,
    pub lemmas: usize,
    pub chinese_entries: usize,
    pub loaded: Vec<DictionaryMetadata>,
    pub attribution: &'static [Attribution],
}
