use lexi_core::dictionary::{Definition, DictionaryEntry};
use serde::{Deserialize, Serialize};

/// One ECDICT row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishEntry {
    pub word: String,
    pub phonetic: String,
    pub definition: String,
    pub translation: String,
    pub pos: String,
    /// Collins star rating, "0" to "5"
    pub collins: String,
    /// "1" when the word is in the Oxford 3000 core list
    pub oxford: String,
    pub tag: String,
    /// British National Corpus rank
    pub bnc: String,
    /// Contemporary corpus frequency rank
    pub frq: String,
    pub exchange: String,
    pub detail: String,
    pub audio: String,
}

impl EnglishEntry {
    /// Collins stars, None for unrated words
    pub fn collins_stars(&self) -> Option<u8> {
        match self.collins.trim().parse::<u8>() {
            Ok(stars @ 1..=5) => Some(stars),
            _ => None,
        }
    }

    pub fn is_oxford_core(&self) -> bool {
        self.oxford.trim() == "1"
    }

    /// Exam tags such as `cet4` or `toefl`
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tag.split_whitespace()
    }

    pub fn bnc_rank(&self) -> Option<u32> {
        parse_rank(&self.bnc)
    }

    pub fn frq_rank(&self) -> Option<u32> {
        parse_rank(&self.frq)
    }

    /// Decode the `code:form/code:form` exchange column
    pub fn exchanges(&self) -> Vec<Exchange> {
        self.exchange
            .split('/')
            .filter_map(|item| {
                let (code, form) = item.split_once(':')?;
                let kind = ExchangeKind::from_code(code.trim())?;
                let form = form.trim();
                if form.is_empty() {
                    return None;
                }
                Some(Exchange {
                    kind,
                    form: form.to_string(),
                })
            })
            .collect()
    }

    /// First inflected form of the given kind
    pub fn exchange_form(&self, kind: ExchangeKind) -> Option<String> {
        self.exchanges()
            .into_iter()
            .find(|e| e.kind == kind)
            .map(|e| e.form)
    }
}

fn parse_rank(value: &str) -> Option<u32> {
    value.trim().parse().ok().filter(|rank| *rank > 0)
}

impl DictionaryEntry for EnglishEntry {
    fn headword(&self) -> String {
        self.word.clone()
    }

    fn readings(&self) -> Vec<String> {
        if self.phonetic.is_empty() {
            vec![]
        } else {
            vec![self.phonetic.clone()]
        }
    }

    fn definitions(&self) -> Vec<Definition> {
        let tags: Vec<String> = self.tags().map(str::to_string).collect();
        let part_of_speech: Vec<String> = self
            .pos
            .split('/')
            .filter_map(|p| p.split(':').next())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        self.translation
            .lines()
            .chain(self.definition.lines())
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|text| Definition {
                text: text.to_string(),
                part_of_speech: part_of_speech.clone(),
                tags: tags.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub kind: ExchangeKind,
    pub form: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeKind {
    PastTense,
    PastParticiple,
    PresentParticiple,
    ThirdPersonSingular,
    Comparative,
    Superlative,
    Plural,
    Lemma,
    LemmaTransform,
}

impl ExchangeKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(ExchangeKind::PastTense),
            "d" => Some(ExchangeKind::PastParticiple),
            "i" => Some(ExchangeKind::PresentParticiple),
            "3" => Some(ExchangeKind::ThirdPersonSingular),
            "r" => Some(ExchangeKind::Comparative),
            "t" => Some(ExchangeKind::Superlative),
            "s" => Some(ExchangeKind::Plural),
            "0" => Some(ExchangeKind::Lemma),
            "1" => Some(ExchangeKind::LemmaTransform),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeKind::PastTense => "past tense",
            ExchangeKind::PastParticiple => "past participle",
            ExchangeKind::PresentParticiple => "present participle",
            ExchangeKind::ThirdPersonSingular => "third person singular",
            ExchangeKind::Comparative => "comparative",
            ExchangeKind::Superlative => "superlative",
            ExchangeKind::Plural => "plural",
            ExchangeKind::Lemma => "lemma",
            ExchangeKind::LemmaTransform => "lemma transform",
        }
    }
}
