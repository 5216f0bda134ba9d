use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the host reads the raw dictionary sources from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub ecdict_path: PathBuf,
    pub lemma_path: PathBuf,
    /// Zip archive holding the CC-CEDICT text
    pub cedict_path: PathBuf,
}

impl DataConfig {
    pub fn new() -> Self {
        Self {
            ecdict_path: path_var("LEXI_ECDICT_PATH", "data/ecdict.csv"),
            lemma_path: path_var("LEXI_LEMMA_PATH", "data/lemma.en.txt"),
            cedict_path: path_var("LEXI_CEDICT_PATH", "data/cedict_1_0_ts_utf-8_mdbg.zip"),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
