use std::env;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::engine::EngineConfig;

pub mod data;
pub mod engine;

pub use self::engine::PrefixPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    pub data: DataConfig,

    /// Emit logs as JSON lines instead of human readable text
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let log_json = env::var("LEXI_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Config {
            engine: EngineConfig::new(),
            data: DataConfig::new(),
            log_json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
