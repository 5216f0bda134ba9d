//! Zip archive extraction for bundled dictionary data.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use crate::dictionary::LoadError;

/// Upper bound on the buffer reserved from a member's declared size. The
/// header value is untrusted, so larger members grow while reading.
const PREALLOC_LIMIT: u64 = 64 * 1024 * 1024;

/// Decompress every file stored in `data`, keyed by its name inside the archive.
///
/// Members that fail to open or read are logged and skipped, so the map may be
/// partial. Only an unreadable archive fails the whole call.
pub fn extract_archive(data: &[u8]) -> Result<HashMap<String, Vec<u8>>, LoadError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut files = HashMap::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut file = match archive.by_index(i) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Skipping archive member #{}: {}", i, e);
                continue;
            }
        };

        if file.is_dir() {
            continue;
        }

        let name = file.name().to_string();
        let hint = usize::try_from(file.size().min(PREALLOC_LIMIT)).unwrap_or(0);
        let mut content = Vec::with_capacity(hint);
        if let Err(e) = file.read_to_end(&mut content) {
            tracing::warn!("Failed to read archive member {}: {}", name, e);
            continue;
        }

        files.insert(name, content);
    }

    Ok(files)
}

/// Decompress a single named member
pub fn extract_member(data: &[u8], name: &str) -> Result<Vec<u8>, LoadError> {
    extract_archive(data)?
        .remove(name)
        .ok_or_else(|| LoadError::MissingArchiveMember(name.to_string()))
}
