use lexi_config::PrefixPolicy;
use lexi_core::dictionary::{Dictionary, DictionaryMetadata, Script};

use crate::entry::ChineseEntry;
use crate::script_index::ScriptIndex;

/// Parse one `Traditional Simplified [pin1 yin1] /gloss/gloss/` line.
///
/// Returns None for blank lines, `#` comments and lines missing a gloss, a
/// pinyin bracket or either headword. Only the first gloss is kept.
pub fn parse_line(line: &str) -> Option<ChineseEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut parts = line.split('/');
    let head = parts.next()?;
    let english = parts.next()?;

    let mut head_parts = head.split('[');
    let characters = head_parts.next()?;
    let pinyin = head_parts.next()?;

    let mut characters = characters.split_whitespace();
    let traditional = characters.next()?;
    let simplified = characters.next()?;

    Some(ChineseEntry {
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
        pinyin: pinyin.trim().trim_end_matches(']').to_string(),
        english: english.to_string(),
    })
}

/// Drop surname readings that are immediately followed by another entry for
/// the same traditional headword.
pub fn remove_surnames(entries: Vec<ChineseEntry>) -> Vec<ChineseEntry> {
    let mut result = Vec::with_capacity(entries.len());
    let mut iter = entries.into_iter().peekable();

    while let Some(entry) = iter.next() {
        let shadowed = entry.is_surname()
            && iter
                .peek()
                .is_some_and(|next| next.traditional == entry.traditional);
        if !shadowed {
            result.push(entry);
        }
    }

    result
}

/// Chinese to English dictionary in source order
pub struct CeDict {
    entries: Vec<ChineseEntry>,
    traditional: ScriptIndex,
    simplified: ScriptIndex,
}

impl CeDict {
    pub fn new(entries: Vec<ChineseEntry>) -> Self {
        let traditional = ScriptIndex::build(&entries, Script::Traditional);
        let simplified = ScriptIndex::build(&entries, Script::Simplified);
        Self {
            entries,
            traditional,
            simplified,
        }
    }

    /// Parse CEDICT text, applying the surname rule
    pub fn parse(text: &str) -> Self {
        let mut parsed = Vec::new();
        let mut skipped = 0usize;

        for line in text.lines() {
            match parse_line(line) {
                Some(entry) => parsed.push(entry),
                None => {
                    let line = line.trim();
                    if !line.is_empty() && !line.starts_with('#') {
                        skipped += 1;
                    }
                }
            }
        }

        let parsed_count = parsed.len();
        let entries = remove_surnames(parsed);
        tracing::debug!(
            "Parsed {} cedict lines, skipped {} malformed, dropped {} surname readings",
            parsed_count,
            skipped,
            parsed_count - entries.len()
        );

        Self::new(entries)
    }

    fn index(&self, script: Script) -> &ScriptIndex {
        match script {
            Script::Traditional => &self.traditional,
            Script::Simplified => &self.simplified,
        }
    }

    /// Earliest entry whose headword in `script` equals `text`
    pub fn lookup(&self, text: &str, script: Script) -> Option<&ChineseEntry> {
        let text = text.trim();
        self.index(script)
            .first(&self.entries, text)
            .map(|i| &self.entries[i])
    }

    /// Entries whose headword in `script` starts with `text`, in source order.
    ///
    /// At most `limit` entries are returned. When fewer than `limit` match,
    /// `policy` decides between returning them and returning nothing.
    pub fn prefix(
        &self,
        text: &str,
        script: Script,
        limit: usize,
        policy: PrefixPolicy,
    ) -> Vec<&ChineseEntry> {
        if limit == 0 {
            return Vec::new();
        }

        let text = text.trim();
        let positions = self.index(script).starting_with(&self.entries, text, limit);
        if positions.len() < limit && policy == PrefixPolicy::DiscardPartial {
            return Vec::new();
        }

        positions.into_iter().map(|i| &self.entries[i]).collect()
    }

    pub fn entries(&self) -> &[ChineseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for CeDict {
    type Entry = ChineseEntry;

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "CC-CEDICT".to_string(),
            language: "zh-en".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../tests/fixtures/cedict_sample.u8");

    #[test]
    fn parses_a_full_line() {
        let entry = parse_line("中國 中国 [Zhong1 guo2] /China/Middle Kingdom/\r").unwrap();

        assert_eq!(entry.traditional, "中國");
        assert_eq!(entry.simplified, "中国");
        assert_eq!(entry.pinyin, "Zhong1 guo2");
        assert_eq!(entry.english, "China");
    }

    #[test]
    fn rejects_incomplete_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("# 中國 中国 [Zhong1 guo2] /China/").is_none());
        assert!(parse_line("中國 中国 [Zhong1 guo2]").is_none());
        assert!(parse_line("單 [dan1] /single/").is_none());
        assert!(parse_line("無拼音 无拼音 /missing pinyin/").is_none());
    }

    #[test]
    fn keeps_gloss_verbatim() {
        let entry = parse_line("了 了 [le5] / (modal particle) /").unwrap();
        assert_eq!(entry.english, " (modal particle) ");
    }

    #[test]
    fn surname_before_same_headword_is_dropped() {
        let entries = vec![
            parse_line("楊 杨 [Yang2] /surname Yang/").unwrap(),
            parse_line("楊 杨 [yang2] /poplar/").unwrap(),
        ];

        let kept = remove_surnames(entries);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].english, "poplar");
    }

    #[test]
    fn surname_rule_is_adjacency_only() {
        let entries = vec![
            parse_line("張 张 [Zhang1] /surname Zhang/").unwrap(),
            parse_line("中國 中国 [Zhong1 guo2] /China/").unwrap(),
            parse_line("張 张 [zhang1] /to open up/").unwrap(),
            parse_line("李 李 [Li3] /surname Li/").unwrap(),
        ];

        let kept = remove_surnames(entries);
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn sample_drops_three_surnames() {
        let dict = CeDict::parse(SAMPLE);

        assert_eq!(dict.len(), 19);
        assert!(
            dict.entries()
                .iter()
                .all(|e| !(e.is_surname() && ["過", "楊", "陳"].contains(&e.traditional.as_str())))
        );
        // No following entry shares their headword
        assert!(dict.entries().iter().any(|e| e.english == "surname Zhang"));
        assert!(dict.entries().iter().any(|e| e.english == "surname Li"));
    }

    #[test]
    fn exact_lookup_by_script() {
        let dict = CeDict::parse(SAMPLE);

        let by_traditional = dict.lookup("過", Script::Traditional).unwrap();
        assert_eq!(by_traditional.english, "to cross");
        assert_eq!(by_traditional.pinyin, "guo4");

        assert!(dict.lookup("過", Script::Simplified).is_none());
        assert_eq!(dict.lookup(" 过 ", Script::Simplified), Some(by_traditional));
        assert_eq!(dict.lookup("陈", Script::Simplified).unwrap().english, "to lay out");
    }

    #[test]
    fn every_entry_is_reachable() {
        let dict = CeDict::parse(SAMPLE);

        for entry in dict.entries() {
            assert!(dict.lookup(&entry.traditional, Script::Traditional).is_some());
            assert!(dict.lookup(&entry.simplified, Script::Simplified).is_some());
        }
    }

    #[test]
    fn prefix_returns_source_order_up_to_limit() {
        let dict = CeDict::parse(SAMPLE);

        let found = dict.prefix("过", Script::Simplified, 10, PrefixPolicy::KeepPartial);
        assert_eq!(found.len(), 10);
        assert!(found.iter().all(|e| e.simplified.starts_with("过")));
        let glosses: Vec<&str> = found.iter().take(3).map(|e| e.english.as_str()).collect();
        assert_eq!(glosses, vec!["to cross", "too", "excessive"]);
        assert_eq!(found[9].simplified, "过渡");
    }

    #[test]
    fn partial_prefix_results_follow_policy() {
        let dict = CeDict::parse(SAMPLE);

        let kept = dict.prefix("楊", Script::Traditional, 10, PrefixPolicy::KeepPartial);
        let glosses: Vec<&str> = kept.iter().map(|e| e.english.as_str()).collect();
        assert_eq!(glosses, vec!["poplar", "poplar tree"]);

        // Never reaching the limit empties the result under the legacy policy
        let discarded = dict.prefix("楊", Script::Traditional, 10, PrefixPolicy::DiscardPartial);
        assert!(discarded.is_empty());

        let exact = dict.prefix("楊", Script::Traditional, 2, PrefixPolicy::DiscardPartial);
        assert_eq!(exact.len(), 2);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let dict = CeDict::parse(SAMPLE);
        assert!(
            dict.prefix("过", Script::Simplified, 0, PrefixPolicy::KeepPartial)
                .is_empty()
        );
    }
}
