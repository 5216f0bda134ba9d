use std::collections::HashMap;

/// Optional trait for languages with inflected surface forms
pub trait Lemmatizer: Send + Sync {
    /// Canonical headword for an inflected form, None if the form is not known
    fn lemma(&self, word: &str) -> Option<&str>;

    /// Number of known inflected forms
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a word to its headword, falling back to the word itself
    fn resolve<'a>(&'a self, word: &'a str) -> &'a str {
        self.lemma(word).unwrap_or(word)
    }
}

#[derive(Debug, Clone)]
pub struct LookupResult {
    pub term: String,
    pub readings: Vec<String>,
    pub definitions: Vec<String>,
    pub metadata: HashMap<String, String>,
}
