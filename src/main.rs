mod config;
mod fmtlogger;
mod report;
mod scanner;

use std::{error::Error, process};

use crate::config::ScanConfig;

fn main() {
    // setup logging
    fmtlogger::default();

    if let Err(err) = _main() {
        log::error!("error raised: {err}");
        // early exit with status 1
        process::exit(1);
    }
}

fn _main() -> Result<(), Box<dyn Error>> {
    let config = ScanConfig::from_env()?;

    let start = std::time::Instant::now();
    let index = scanner::scan_tree(&config)?;
    log::debug!(
        "scanned `{}`, {} distinct keys in {:?}",
        config.root.display(),
        index.len(),
        start.elapsed()
    );

    let duplicates = report::duplicates(index);
    report::print_report(&duplicates);

    if let Some(report_path) = &config.report_path {
        report::write_json(report_path, &duplicates)?;
    }

    Ok(())
}
