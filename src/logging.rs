#![cfg(feature = "std")]

//! Stderr logger for the binaries.
//!
//! `BROADSIDE_LOG` takes a level name (`debug`) or a verbosity digit
//! (`0` off up to `5` trace). Records from other crates only get through at
//! `warn` and above.

use std::env;
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable read by [`init_logging`].
pub const LOG_ENV: &str = "BROADSIDE_LOG";

const CRATE_TARGET: &str = "broadside";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && (metadata.target().starts_with(CRATE_TARGET) || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = io::stderr().lock();
        let _ = writeln!(out, "{:<5} [{}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a `BROADSIDE_LOG` value. Unset or unrecognised gives `warn`,
/// which keeps the board readable during play.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    let Some(value) = value.map(str::trim) else {
        return LevelFilter::Warn;
    };
    match value.parse::<u8>() {
        Ok(0) => LevelFilter::Off,
        Ok(1) => LevelFilter::Error,
        Ok(2) => LevelFilter::Warn,
        Ok(3) => LevelFilter::Info,
        Ok(4) => LevelFilter::Debug,
        Ok(_) => LevelFilter::Trace,
        Err(_) => value.parse().unwrap_or(LevelFilter::Warn),
    }
}

/// Install the stderr logger. A second call keeps the first logger.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
