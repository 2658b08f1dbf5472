//! Internal logging system for the PR3D engine
//!
//! This module provides:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR logs
//! - `engine_err!` / `engine_bail!` helpers that log and build a `Pr3dError`

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use pr3d_engine::pr3d::log::{Logger, LogEntry};
///
/// struct FileLogger;
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "pr3d::Camera", "pr3d::Render")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame detail (ignored movement, skipped draws)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

/// Colored console logger installed until `Engine::set_logger` replaces it
///
/// Lines look like `HH:MM:SS.mmm LEVEL source: message`, with ` @ file:line`
/// appended when the entry carries a location. WARN and ERROR go to stderr,
/// everything else to stdout.
pub struct DefaultLogger;

impl DefaultLogger {
    fn label(severity: LogSeverity) -> ColoredString {
        match severity {
            LogSeverity::Trace => "TRACE".dimmed(),
            LogSeverity::Debug => "DEBUG".blue(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow().bold(),
            LogSeverity::Error => "ERROR".red().bold(),
        }
    }

    fn format(entry: &LogEntry) -> String {
        let time: DateTime<Local> = entry.timestamp.into();
        let mut line = format!(
            "{} {} {}: {}",
            time.format("%H:%M:%S%.3f").to_string().dimmed(),
            Self::label(entry.severity),
            entry.source.as_str().bright_blue(),
            entry.message,
        );
        if let (Some(file), Some(number)) = (entry.file, entry.line) {
            let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
            line.push_str(&format!(" @ {}:{}", file, number));
        }
        line
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = Self::format(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::pr3d::Engine::log(
            $crate::pr3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::pr3d::Engine::log(
            $crate::pr3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::pr3d::Engine::log(
            $crate::pr3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::pr3d::Engine::log(
            $crate::pr3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::pr3d::Engine::log_detailed(
            $crate::pr3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and evaluate to a `Pr3dError` value.
///
/// The one-argument-list form builds `Pr3dError::BackendError`. Prefix a variant
/// name and `;` to pick another message-carrying variant:
///
/// ```ignore
/// let e = engine_err!("pr3d::Camera", InvalidParameter; "fov {} out of range", fov);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident; $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::pr3d::Pr3dError::$variant(message)
    }};
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::pr3d::Pr3dError::BackendError(message)
    }};
}

/// Log an ERROR and return `Err(..)` from the enclosing function.
///
/// Accepts the same forms as [`engine_err!`].
#[macro_export]
macro_rules! engine_bail {
    ($($arg:tt)*) => {
        return Err($crate::engine_err!($($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
