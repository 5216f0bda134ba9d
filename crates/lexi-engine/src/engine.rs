use std::sync::{Mutex, OnceLock};

use lexi_config::engine::EngineConfig;
use lexi_core::dictionary::{Dictionary, Script};
use lexi_lang_chinese::{CeDict, CeDictLoader, ChineseEntry};
use lexi_lang_english::{EcDict, EnglishEntry};

use crate::error::EngineError;
use crate::info::{ATTRIBUTION, EngineInfo};
use crate::source::{EnglishSource, RawSources};

/// Query handle owning both dictionaries.
///
/// Each dictionary is built from its raw bytes on first use, at most once even
/// under concurrent first use. A failed build keeps the raw bytes so the next
/// query retries; a successful one drops them.
pub struct LexicalEngine {
    config: EngineConfig,
    english_source: Mutex<Option<EnglishSource>>,
    chinese_source: Mutex<Option<Vec<u8>>>,
    english: OnceLock<EcDict>,
    chinese: OnceLock<CeDict>,
}

impl LexicalEngine {
    pub fn new(sources: RawSources, config: EngineConfig) -> Self {
        let RawSources {
            ecdict,
            lemmas,
            cedict_archive,
        } = sources;

        Self {
            config,
            english_source: Mutex::new(Some(EnglishSource {
                table: ecdict,
                lemmas,
            })),
            chinese_source: Mutex::new(Some(cedict_archive)),
            english: OnceLock::new(),
            chinese: OnceLock::new(),
        }
    }

    /// Build the English dictionary if needed
    pub fn try_english(&self) -> Result<&EcDict, EngineError> {
        if let Some(dict) = self.english.get() {
            return Ok(dict);
        }

        let mut source = self
            .english_source
            .lock()
            .map_err(|_| EngineError::Poisoned("english"))?;
        // Another caller may have finished while we waited
        if let Some(dict) = self.english.get() {
            return Ok(dict);
        }

        let raw = source
            .as_ref()
            .ok_or(EngineError::SourceUnavailable("english"))?;
        let dict = EcDict::from_sources(&raw.table, &raw.lemmas)?;

        *source = None;
        tracing::debug!("Released raw english sources");
        Ok(self.english.get_or_init(|| dict))
    }

    /// Build the Chinese dictionary if needed
    pub fn try_chinese(&self) -> Result<&CeDict, EngineError> {
        if let Some(dict) = self.chinese.get() {
            return Ok(dict);
        }

        let mut source = self
            .chinese_source
            .lock()
            .map_err(|_| EngineError::Poisoned("chinese"))?;
        if let Some(dict) = self.chinese.get() {
            return Ok(dict);
        }

        let raw = source
            .as_ref()
            .ok_or(EngineError::SourceUnavailable("chinese"))?;
        let dict = CeDictLoader::load_archive(raw, &self.config.cedict_member)?;

        *source = None;
        tracing::debug!("Released raw chinese archive");
        Ok(self.chinese.get_or_init(|| dict))
    }

    fn english(&self) -> Option<&EcDict> {
        match self.try_english() {
            Ok(dict) => Some(dict),
            Err(e) => {
                tracing::warn!("English dictionary unavailable: {}", e);
                None
            }
        }
    }

    fn chinese(&self) -> Option<&CeDict> {
        match self.try_chinese() {
            Ok(dict) => Some(dict),
            Err(e) => {
                tracing::warn!("Chinese dictionary unavailable: {}", e);
                None
            }
        }
    }

    /// Look up an English word, resolving inflected forms to their headword
    pub fn english_lookup(&self, word: &str) -> Option<&EnglishEntry> {
        self.english()?.lookup(word)
    }

    /// English keys starting with `prefix`, each word reported once
    pub fn english_prefix_query(&self, prefix: &str, limit: usize) -> Vec<&str> {
        self.english()
            .map(|dict| dict.prefix(prefix, limit))
            .unwrap_or_default()
    }

    /// First entry in source order whose selected headword equals `text`
    pub fn chinese_lookup(&self, text: &str, use_simplified: bool) -> Option<&ChineseEntry> {
        self.chinese()?
            .lookup(text, Script::from_simplified(use_simplified))
    }

    /// Entries whose selected headword starts with `text`, in source order
    pub fn chinese_prefix_query(
        &self,
        text: &str,
        use_simplified: bool,
        limit: usize,
    ) -> Vec<&ChineseEntry> {
        self.chinese()
            .map(|dict| {
                dict.prefix(
                    text,
                    Script::from_simplified(use_simplified),
                    limit,
                    self.config.prefix_policy,
                )
            })
            .unwrap_or_default()
    }

    pub fn is_english_loaded(&self) -> bool {
        self.english.get().is_some()
    }

    pub fn is_chinese_loaded(&self) -> bool {
        self.chinese.get().is_some()
    }

    /// Raw input bytes not yet released
    pub fn held_source_bytes(&self) -> usize {
        let english = self
            .english_source
            .lock()
            .ok()
            .and_then(|s| s.as_ref().map(EnglishSource::len))
            .unwrap_or(0);
        let chinese = self
            .chinese_source
            .lock()
            .ok()
            .and_then(|s| s.as_ref().map(Vec::len))
            .unwrap_or(0);
        english + chinese
    }

    /// Counts and attribution. Does not trigger a build.
    pub fn info(&self) -> EngineInfo {
        let english = self.english.get();
        let chinese = self.chinese.get();

        let mut loaded = Vec::new();
        loaded.extend(english.map(|d| d.metadata()));
        loaded.extend(chinese.map(|d| d.metadata()));

        EngineInfo {
            version: env!("CARGO_PKG_VERSION"),
            words: english.map(EcDict::key_count).unwrap_or(0),
            lemmas: english.map(EcDict::lemma_count).unwrap_or(0),
            chinese_entries: chinese.map(|d| d.entry_count()).unwrap_or(0),
            loaded,
            attribution: ATTRIBUTION,
        }
    }
}
