use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};

const CLICOLOR_FORCE: &str = "CLICOLOR_FORCE";

/// Minimal stderr logger implementing [`Log`]. Stdout stays reserved
/// for the duplicate report itself.
struct Logger {
    /// Global logging level when using this type
    level: LevelFilter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level().to_level_filter() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = if record.target().is_empty() {
                record.module_path().unwrap_or_default()
            } else {
                record.target()
            };

            const BLUE: &str = "\x1B[34m";
            const RED: &str = "\x1B[31m";
            const YELLOW: &str = "\x1B[33m";
            const WHITE: &str = "\x1B[37m";
            const RESET: &str = "\x1B[0m";

            let color = match record.level() {
                Level::Error => RED,
                Level::Warn => YELLOW,
                Level::Info => WHITE,
                Level::Debug => BLUE,
                Level::Trace => "",
            };

            let supports_color =
                atty::is(atty::Stream::Stderr) || std::env::var(CLICOLOR_FORCE).is_ok();
            let mut log = format!("[{}][{target}]: {}", record.level(), record.args());
            if supports_color {
                log = format!("{}{}{}", color, log, RESET);
            }
            eprintln!("{}", log);
        }
    }

    fn flush(&self) {}
}

/// Installs the logger; level comes from `RUST_LOG`, defaulting to
/// `info` so per-file skips (debug) stay quiet.
pub fn default() {
    static LOGGER: OnceLock<Logger> = OnceLock::new();
    let logger = LOGGER.get_or_init(|| Logger {
        level: std::env::var("RUST_LOG")
            .ok()
            .map(|level| match level.as_str() {
                "error" => LevelFilter::Error,
                "warn" => LevelFilter::Warn,
                "debug" => LevelFilter::Debug,
                "trace" => LevelFilter::Trace,
                _ => LevelFilter::Info,
            })
            .unwrap_or(LevelFilter::Info),
    });
    log::set_max_level(logger.level);
    if let Err(err) = log::set_boxed_logger(Box::new(logger)) {
        eprintln!("attaching logger failed! shouldn't be possible: {:?}", err);
    }
}
