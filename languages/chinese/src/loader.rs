use lexi_core::archive;
use lexi_core::dictionary::LoadError;

use crate::cedict::CeDict;

pub struct CeDictLoader;

impl CeDictLoader {
    /// Load the dictionary from the named member of a zip archive
    pub fn load_archive(data: &[u8], member: &str) -> Result<CeDict, LoadError> {
        tracing::info!("Extracting {} from {} byte archive", member, data.len());
        let text = archive::extract_member(data, member)?;

        let dict = Self::load_text(&text);
        tracing::info!("Loaded {} cedict entries", dict.len());
        Ok(dict)
    }

    /// Load the dictionary from raw CEDICT text.
    ///
    /// Invalid UTF-8 is replaced, so a bad byte costs at most the line it is on.
    pub fn load_text(data: &[u8]) -> CeDict {
        CeDict::parse(&String::from_utf8_lossy(data))
    }
}
