use std::io::{Cursor, Write};

use lexi_config::PrefixPolicy;
use lexi_config::engine::EngineConfig;
use zip::write::SimpleFileOptions;

use crate::engine::LexicalEngine;
use crate::source::RawSources;

mod lifecycle_tests;

const ECDICT: &str = include_str!("../../../../languages/english/tests/fixtures/ecdict_sample.csv");
const LEMMAS: &str = include_str!("../../../../languages/english/tests/fixtures/lemma_sample.txt");
const CEDICT: &str = include_str!("../../../../languages/chinese/tests/fixtures/cedict_sample.u8");

fn zip_member(name: &str, body: &str) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(name, SimpleFileOptions::default())
        .expect("start zip member");
    writer.write_all(body.as_bytes()).expect("write zip member");
    writer.finish().expect("finish zip").into_inner()
}

fn sample_sources() -> RawSources {
    RawSources::new(
        ECDICT.as_bytes().to_vec(),
        LEMMAS.as_bytes().to_vec(),
        zip_member("cedict_ts.u8", CEDICT),
    )
}

fn sample_engine() -> LexicalEngine {
    LexicalEngine::new(sample_sources(), EngineConfig::default())
}

fn engine_with_policy(policy: PrefixPolicy) -> LexicalEngine {
    let config = EngineConfig {
        prefix_policy: policy,
        ..EngineConfig::default()
    };
    LexicalEngine::new(sample_sources(), config)
}
