use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::scanner::KeyIndex;

/// One duplicated key and every file it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateKey {
    pub key: String,
    pub paths: Vec<PathBuf>,
}

/// Keys that occurred in more than one file, in index order.
pub fn duplicates(index: KeyIndex) -> Vec<DuplicateKey> {
    index
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(key, paths)| DuplicateKey { key, paths })
        .collect()
}

/// One stdout line per duplicate. No duplicates, no output.
pub fn print_report(duplicates: &[DuplicateKey]) {
    for duplicate in duplicates {
        println!(
            "Duplicate Key: {} found in: {:?}",
            duplicate.key, duplicate.paths
        );
    }
}

/// Writes the report as JSON next to the stdout rendition.
pub fn write_json(path: &Path, duplicates: &[DuplicateKey]) -> std::io::Result<()> {
    let src = serde_json::to_string(duplicates).unwrap_or_else(|err| {
        log::error!("{err}");
        "[]".to_string()
    });
    std::fs::write(path, src)
}
