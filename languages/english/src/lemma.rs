use std::collections::HashMap;

use lexi_core::dictionary::LoadError;
use lexi_core::language::Lemmatizer;

const SEPARATOR: &str = " -> ";

/// Inflected form to headword mapping built from the ECDICT lemma list
#[derive(Debug, Clone, Default)]
pub struct LemmaMap {
    forms: HashMap<String, String>,
}

impl LemmaMap {
    /// Parse `base/freq -> form1,form2,...` lines.
    ///
    /// Comment (`;`) and blank lines are ignored, as is any line that does not
    /// contain the arrow exactly once or whose base word is empty. A form seen
    /// again later points at the later base word.
    pub fn parse(text: &str) -> Self {
        let mut forms = HashMap::new();
        let mut skipped = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let parts: Vec<&str> = line.split(SEPARATOR).collect();
            let [left, right] = parts.as_slice() else {
                skipped += 1;
                continue;
            };

            let base = left.split('/').next().unwrap_or_default().trim();
            if base.is_empty() {
                skipped += 1;
                continue;
            }

            for form in right.split(',') {
                let form = form.trim();
                if form.is_empty() {
                    continue;
                }
                forms.insert(form.to_string(), base.to_string());
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} malformed lemma lines", skipped);
        }

        Self { forms }
    }

    /// Parse raw bytes. Invalid UTF-8 fails the parse, as it does for the
    /// word table.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| LoadError::ParseError(format!("lemma list: {}", e)))?;
        Ok(Self::parse(text))
    }
}

impl Lemmatizer for LemmaMap {
    fn lemma(&self, word: &str) -> Option<&str> {
        self.forms.get(word).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.forms.len()
    }
}
