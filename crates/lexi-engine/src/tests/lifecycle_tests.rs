use std::sync::Barrier;
use std::thread;

use lexi_core::dictionary::LoadError;
use lexi_lang_english::EnglishEntry;

use crate::error::EngineError;

use super::*;

#[test]
fn builds_lazily_and_releases_sources() {
    let engine = sample_engine();
    let total = sample_sources().len();

    assert!(!engine.is_english_loaded());
    assert!(!engine.is_chinese_loaded());
    assert_eq!(engine.held_source_bytes(), total);

    engine.english_lookup("book");
    assert!(engine.is_english_loaded());
    assert!(!engine.is_chinese_loaded());
    assert!(engine.held_source_bytes() < total);

    engine.chinese_lookup("过", true);
    assert!(engine.is_chinese_loaded());
    assert_eq!(engine.held_source_bytes(), 0);
}

#[test]
fn info_reports_loaded_counts_without_building() {
    let engine = sample_engine();

    let before = engine.info();
    assert_eq!(before.words, 0);
    assert_eq!(before.chinese_entries, 0);
    assert!(before.loaded.is_empty());
    assert_eq!(before.attribution.len(), 2);
    assert!(!engine.is_english_loaded());

    engine.try_english().unwrap();
    engine.try_chinese().unwrap();

    let after = engine.info();
    assert_eq!(after.words, 12);
    assert_eq!(after.lemmas, 19);
    assert_eq!(after.chinese_entries, 19);
    assert_eq!(after.loaded.len(), 2);
    assert_eq!(after.loaded[0].name, "ECDICT");
    assert_eq!(after.loaded[0].entry_count, 11);
}

#[test]
fn repeated_lookups_are_identical() {
    let engine = sample_engine();

    let first = engine.english_lookup("books").map(|e| e as *const EnglishEntry);
    let second = engine.english_lookup("books").map(|e| e as *const EnglishEntry);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn concurrent_first_use_builds_once() {
    let engine = sample_engine();
    let threads = 8;
    let barrier = Barrier::new(threads);
    let (engine, barrier) = (&engine, &barrier);

    let results: Vec<(usize, usize, usize)> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(move || {
                    barrier.wait();
                    let english = engine.try_english().unwrap() as *const _ as usize;
                    let chinese = engine.try_chinese().unwrap() as *const _ as usize;
                    let entry = engine
                        .english_lookup("book")
                        .map(|e| e as *const EnglishEntry as usize)
                        .unwrap_or(0);
                    (english, chinese, entry)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("query thread panicked"))
            .collect()
    });

    assert!(results[0].2 != 0);
    assert!(results.iter().all(|r| *r == results[0]));
    assert_eq!(engine.held_source_bytes(), 0);
}

#[test]
fn corrupt_archive_fails_chinese_only_and_is_retried() {
    let sources = RawSources::new(
        ECDICT.as_bytes().to_vec(),
        LEMMAS.as_bytes().to_vec(),
        b"not a zip archive".to_vec(),
    );
    let engine = LexicalEngine::new(sources, EngineConfig::default());

    assert_eq!(engine.english_lookup("book").unwrap().word, "book");

    assert!(engine.chinese_lookup("过", true).is_none());
    assert!(engine.chinese_prefix_query("过", true, 10).is_empty());
    assert!(matches!(
        engine.try_chinese(),
        Err(EngineError::Load(LoadError::CorruptArchive(_)))
    ));
    // The archive is kept for the next attempt
    assert!(!engine.is_chinese_loaded());
    assert_eq!(engine.held_source_bytes(), b"not a zip archive".len());
}

#[test]
fn missing_member_fails_chinese_build() {
    let sources = RawSources::new(
        ECDICT.as_bytes().to_vec(),
        LEMMAS.as_bytes().to_vec(),
        zip_member("cedict.txt", CEDICT),
    );
    let engine = LexicalEngine::new(sources, EngineConfig::default());

    assert!(matches!(
        engine.try_chinese(),
        Err(EngineError::Load(LoadError::MissingArchiveMember(name))) if name == "cedict_ts.u8"
    ));
    assert!(engine.chinese_lookup("过", true).is_none());
}

#[test]
fn configured_member_name_is_used() {
    let sources = RawSources::new(Vec::new(), Vec::new(), zip_member("cedict.txt", CEDICT));
    let config = EngineConfig {
        cedict_member: "cedict.txt".to_string(),
        ..EngineConfig::default()
    };
    let engine = LexicalEngine::new(sources, config);

    assert!(engine.chinese_lookup("过", true).is_some());
}

#[test]
fn unreadable_table_fails_english_build() {
    let mut table = ECDICT.as_bytes().to_vec();
    table.extend_from_slice(b"bad\xff,x,x,x,x,x,x,x,x,x,x,x,x\n");
    let sources = RawSources::new(table, LEMMAS.as_bytes().to_vec(), Vec::new());
    let engine = LexicalEngine::new(sources, EngineConfig::default());

    assert!(engine.english_lookup("book").is_none());
    assert!(engine.english_prefix_query("b", 5).is_empty());
    assert!(matches!(
        engine.try_english(),
        Err(EngineError::Load(LoadError::ParseError(_)))
    ));
    assert!(!engine.is_english_loaded());
}
