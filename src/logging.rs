//! Logging to stderr, off unless asked for.
//!
//! The level is read once from the `BITMAP_LOG` environment variable
//! (`off`, `info` or `debug`) and can be changed with [`set_level`].

use std::{
    fmt::Arguments,
    io::Write,
    str::FromStr,
    sync::{
        LazyLock,
        atomic::{AtomicU8, Ordering},
    },
};

use crate::error::ParseLogLevelError;

/// The environment variable the initial log level is read from
pub const LOG_ENV: &str = "BITMAP_LOG";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Off = 0,
    Info = 1,
    Debug = 2,
}

impl LogLevel {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Off,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "off" | "0" => Ok(LogLevel::Off),
            "info" | "1" => Ok(LogLevel::Info),
            "debug" | "2" => Ok(LogLevel::Debug),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

static LEVEL: LazyLock<AtomicU8> = LazyLock::new(|| {
    let level: LogLevel = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();
    AtomicU8::new(level as u8)
});

/// Sets the most verbose level that still gets logged
pub fn set_level(level: LogLevel) {
    LEVEL.store(level as u8, Ordering::Release);
}

/// Returns the current log level
pub fn level() -> LogLevel {
    LogLevel::from_u8(LEVEL.load(Ordering::Acquire))
}

/// Returns whether or not messages of `level` are logged
pub fn enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= self::level()
}

#[doc(hidden)]
pub fn _write_log(level: LogLevel, args: Arguments) {
    if !enabled(level) {
        return;
    }

    // nowhere to report a failing stderr to
    let _ = std::io::stderr().lock().write_fmt(args);
}

/// Generic log something attributing it to Bitmap
#[macro_export]
macro_rules! generic_log {
    ($level: expr, $($arg: tt)*) => {{
        $crate::logging::_write_log($level, format_args!("[ \x1b[97mBitmap\x1b[0m ] {}\n", format_args!($($arg)*)));
    }};
}

/// Log information about an event that isn't a debug event
#[macro_export]
macro_rules! log {
    ($($arg: tt)*) => ($crate::generic_log!($crate::logging::LogLevel::Info, "[  \x1b[32mInfo\x1b[0m  ]\x1b[90m:\x1b[0m {}", format_args!($($arg)*)));
}

/// Log debug information
#[macro_export]
macro_rules! dlog {
    ($($arg: tt)*) => ($crate::generic_log!($crate::logging::LogLevel::Debug, "[  \x1b[91mDebug\x1b[0m  ]\x1b[90m:\x1b[0m {}", format_args!($($arg)*)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_levels() {
        assert_eq!("off".parse(), Ok(LogLevel::Off));
        assert_eq!(" Info ".parse(), Ok(LogLevel::Info));
        assert_eq!("DEBUG".parse(), Ok(LogLevel::Debug));
        assert_eq!("2".parse(), Ok(LogLevel::Debug));
        assert_eq!(
            "loud".parse::<LogLevel>(),
            Err(ParseLogLevelError("loud".to_string()))
        );
    }

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Off < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert_eq!(LogLevel::from_u8(LogLevel::Info as u8), LogLevel::Info);
    }

    #[test]
    fn set_level_changes_what_is_logged() {
        set_level(LogLevel::Debug);
        assert_eq!(level(), LogLevel::Debug);
        assert!(enabled(LogLevel::Info));
        assert!(enabled(LogLevel::Debug));
        crate::log!("logging at {:?}", level());

        set_level(LogLevel::Info);
        assert_eq!(level(), LogLevel::Info);
        assert!(enabled(LogLevel::Info));
        assert!(!enabled(LogLevel::Debug));

        set_level(LogLevel::Off);
        assert_eq!(level(), LogLevel::Off);
        assert!(!enabled(LogLevel::Info));
        assert!(!enabled(LogLevel::Off));
        crate::dlog!("not written");
    }
}
