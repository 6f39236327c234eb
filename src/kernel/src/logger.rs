//! Kernel logger.
//!
//! Implements the `log::Log` trait to route log messages to the serial port,
//! keeping the VGA screen free for the console.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::serial_println;

/// Default maximum level: chatty in debug builds, quiet in release.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

/// Global logger instance
static LOGGER: SerialLogger = SerialLogger;

/// Writes `[LEVEL] target: message` lines to COM1.
struct SerialLogger;

impl log::Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            serial_println!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the serial logger.
///
/// # Arguments
/// * `max_level` - The maximum log level to emit.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(max_level);
    Ok(())
}
