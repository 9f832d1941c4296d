//! FILENAME: app/src/logging.rs
//! PURPOSE: Minimal stderr logger behind the `log` facade.
//! CONTEXT: The libraries only ever talk to the facade; the front-end owns
//! the sink. Level comes from the APP_LOG environment variable
//! (error|warn|info|debug|trace), defaulting to warn.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the logger. Safe to call once at startup.
pub fn init() {
    let level = match std::env::var("APP_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("warn") => LevelFilter::Warn,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
