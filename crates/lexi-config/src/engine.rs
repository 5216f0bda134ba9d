use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CEDICT_MEMBER: &str = "cedict_ts.u8";

fn default_limit() -> usize {
    10
}

fn default_cedict_member() -> String {
    DEFAULT_CEDICT_MEMBER.to_string()
}

/// What a Chinese prefix query returns when fewer than `limit` entries match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixPolicy {
    /// Return whatever matched
    #[default]
    KeepPartial,
    /// Return nothing unless the limit was reached
    DiscardPartial,
}

impl FromStr for PrefixPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep-partial" | "keep" => Ok(PrefixPolicy::KeepPartial),
            "discard-partial" | "discard" => Ok(PrefixPolicy::DiscardPartial),
            other => Err(format!("unknown prefix policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Result limit used by hosts when the caller gives none
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Name of the CEDICT text inside the archive
    #[serde(default = "default_cedict_member")]
    pub cedict_member: String,
    pub prefix_policy: PrefixPolicy,
}

impl EngineConfig {
    pub fn new() -> Self {
        let default_limit = env::var("LEXI_DEFAULT_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_limit);

        let cedict_member =
            env::var("LEXI_CEDICT_MEMBER").unwrap_or_else(|_| default_cedict_member());

        let prefix_policy = env::var("LEXI_PREFIX_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            default_limit,
            cedict_member,
            prefix_policy,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            cedict_member: default_cedict_member(),
            prefix_policy: PrefixPolicy::default(),
        }
    }
}
