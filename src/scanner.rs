use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Widget key literal (quotes included) mapped to every file it was
/// extracted from, in walk order.
pub type KeyIndex = BTreeMap<String, Vec<PathBuf>>;

/// Matches `ValueKey('...')` / `ValueKey("...")` in raw source text.
/// The capture keeps the quote characters, so `'a'` and `"a"` stay
/// distinct keys.
fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"ValueKey\((['"].*?['"])\)"#).expect("key pattern is valid")
    })
}

/// All non-overlapping key literals in `content`, left to right.
pub fn extract_keys(content: &str) -> impl Iterator<Item = &str> {
    key_pattern()
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|literal| literal.as_str())
}

/// Appends `path` to each key's occurrence list. A key repeated within
/// one file is recorded once: duplication is measured across files, so
/// the list never holds the same path twice in a row.
pub fn record_occurrences<'a, I>(index: &mut KeyIndex, path: &Path, keys: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for key in keys {
        let paths = index.entry(key.to_owned()).or_default();
        if paths.last().map(PathBuf::as_path) != Some(path) {
            paths.push(path.to_path_buf());
        }
    }
}

/// Walks `config.root` and builds the occurrence index in one pass.
///
/// Only a failure to read the root itself is fatal; unreadable entries
/// deeper in the tree and files that fail to decode contribute nothing
/// and the walk continues.
pub fn scan_tree(config: &ScanConfig) -> Result<KeyIndex, walkdir::Error> {
    let mut index = KeyIndex::new();
    let walker = WalkDir::new(&config.root)
        .into_iter()
        // prune before descending, nothing under skip_dir is ever visited
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != config.skip_dir);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err),
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() || !config.is_source_file(entry.file_name()) {
            continue;
        }
        let path = entry.into_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => record_occurrences(&mut index, &path, extract_keys(&content)),
            // best effort: an unreadable or non-UTF-8 file yields no keys
            Err(err) => log::debug!("skipping {}: {err}", path.display()),
        }
    }

    Ok(index)
}
