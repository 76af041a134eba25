//! Console Logger
//!
//! A `log` backend for browser apps. Records are formatted as
//! `HH:MM:SS.mmm LEVEL target message` and routed to the matching
//! `console.*` method on wasm32, or to stderr everywhere else.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Leveled logger writing to the browser console
#[derive(Debug)]
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Calling this twice returns the `SetLoggerError` from the second call;
/// the first level stays in effect.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(())
}

/// Format a record as a single console line
pub fn format_record(record: &Record) -> String {
    let now = chrono::Utc::now().format("%H:%M:%S%.3f");
    format!(
        "{} {:<5} {} {}",
        now,
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}
