use std::path::Path;

use anyhow::Context;
use lexi_config::data::DataConfig;
use lexi_engine::RawSources;

use crate::cli::{Cli, Command};

/// Read the raw sources the command needs; the rest stay empty
pub fn read_sources(cli: &Cli, data: &DataConfig) -> anyhow::Result<RawSources> {
    let mut sources = RawSources::default();

    if cli.command.needs_english() {
        let ecdict = cli.ecdict.as_deref().unwrap_or(&data.ecdict_path);
        let lemma = cli.lemma.as_deref().unwrap_or(&data.lemma_path);
        sources.ecdict = read(ecdict)?;
        sources.lemmas = read(lemma)?;
    }

    if cli.command.needs_chinese() {
        let cedict = cli.cedict.as_deref().unwrap_or(&data.cedict_path);
        sources.cedict_archive = read(cedict)?;
    }

    Ok(sources)
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read dictionary data: {}", path.display()))?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
