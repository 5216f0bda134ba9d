use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use lexi_core::dictionary::{Dictionary, DictionaryMetadata, LoadError};
use lexi_core::language::Lemmatizer;

use crate::entry::EnglishEntry;
use crate::lemma::LemmaMap;

const FIELD_COUNT: usize = 13;

/// Parse the ECDICT CSV table into entries, in source order.
///
/// Rows with the wrong number of fields, an empty word or the column header
/// are skipped. A reader error aborts the parse.
pub fn parse_table(data: &[u8]) -> Result<Vec<EnglishEntry>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| LoadError::ParseError(format!("ecdict row {}: {}", idx + 1, e)))?;

        if record.len() != FIELD_COUNT {
            skipped += 1;
            continue;
        }

        let field = |i: usize| record.get(i).unwrap_or_default();
        let word = field(0).trim();
        if word.is_empty() {
            skipped += 1;
            continue;
        }
        // Column header
        if word == "word" && field(1) == "phonetic" {
            continue;
        }

        entries.push(EnglishEntry {
            word: word.to_string(),
            phonetic: field(1).to_string(),
            definition: unescape_newlines(field(2)),
            translation: unescape_newlines(field(3)),
            pos: field(4).to_string(),
            collins: field(5).to_string(),
            oxford: field(6).to_string(),
            tag: field(7).to_string(),
            bnc: field(8).to_string(),
            frq: field(9).to_string(),
            exchange: field(10).to_string(),
            detail: field(11).to_string(),
            audio: field(12).to_string(),
        });
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} malformed ecdict rows", skipped);
    }

    Ok(entries)
}

fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}

/// English to Chinese dictionary with inflection resolution
pub struct EcDict {
    /// Keyed by the word as written and by its lowercase form
    index: BTreeMap<String, Arc<EnglishEntry>>,
    lemmas: LemmaMap,
    rows: usize,
}

impl EcDict {
    pub fn new(entries: Vec<EnglishEntry>, lemmas: LemmaMap) -> Self {
        let rows = entries.len();
        let mut index = BTreeMap::new();

        for entry in entries {
            let lower = entry.word.to_lowercase();
            let entry = Arc::new(entry);
            if lower != entry.word {
                index.insert(lower, Arc::clone(&entry));
            }
            index.insert(entry.word.clone(), entry);
        }

        Self {
            index,
            lemmas,
            rows,
        }
    }

    /// Parse both raw sources and build the dictionary
    pub fn from_sources(table: &[u8], lemmas: &[u8]) -> Result<Self, LoadError> {
        let entries = parse_table(table)?;
        let lemmas = LemmaMap::from_bytes(lemmas)?;
        let dict = Self::new(entries, lemmas);
        tracing::info!(
            "Loaded {} ecdict rows ({} keys) and {} lemma forms",
            dict.rows,
            dict.index.len(),
            dict.lemmas.len()
        );
        Ok(dict)
    }

    /// Exact lookup after inflection resolution.
    ///
    /// The lemma map is consulted first; the resolved word must then exist in
    /// the index as given or as stored lowercase.
    pub fn lookup(&self, word: &str) -> Option<&EnglishEntry> {
        let word = word.trim();
        let base = self.lemmas.resolve(word);
        self.index.get(base).map(Arc::as_ref)
    }

    /// Keys starting with `prefix` in lexicographic order.
    ///
    /// A word stored under both its own and its lowercase key is reported once,
    /// under whichever key sorts first.
    pub fn prefix(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        if limit == 0 {
            return result;
        }

        for (key, entry) in self.index.range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded)) {
            if !key.starts_with(prefix) {
                break;
            }
            if !seen.insert(Arc::as_ptr(entry)) {
                continue;
            }
            result.push(key.as_str());
            if result.len() >= limit {
                break;
            }
        }

        result
    }

    /// Number of lookup keys, counting case variants separately
    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    /// Number of accepted source rows
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

impl Dictionary for EcDict {
    type Entry = EnglishEntry;

    fn entry_count(&self) -> usize {
        self.rows
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "ECDICT".to_string(),
            language: "en-zh".to_string(),
            entry_count: self.rows,
        }
    }
}
