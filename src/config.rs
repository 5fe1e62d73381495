use std::ffi::OsStr;
use std::path::PathBuf;

const REPORT_PATH: &str = "KEYDUP_REPORT_PATH";

/// Everything the scan depends on, resolved once at startup.
#[derive(Debug)]
pub struct ScanConfig {
    /// Directory the walk starts from.
    pub root: PathBuf,
    /// Suffix a file name must carry to be scanned.
    pub extension: &'static str,
    /// Directory name pruned from the walk before descending into it.
    pub skip_dir: &'static str,
    /// Optional target for the JSON rendition of the report.
    pub report_path: Option<PathBuf>,
}

impl ScanConfig {
    /// Scans the working directory for `.dart` files, skipping `.git`.
    pub fn from_env() -> std::io::Result<Self> {
        Ok(ScanConfig {
            root: std::env::current_dir()?,
            extension: ".dart",
            skip_dir: ".git",
            report_path: std::env::var_os(REPORT_PATH).map(PathBuf::from),
        })
    }

    /// Suffix match on the file name, so `foo.dart` passes and
    /// `foo.dart.orig` does not.
    pub fn is_source_file(&self, name: &OsStr) -> bool {
        name.to_str()
            .map(|name| name.ends_with(self.extension))
            .unwrap_or_default()
    }
}
