//! Log level definitions

use super::style::Style;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    /// Catch-all level, also used as a threshold that silences every other level
    None = 6,
}

impl LogLevel {
    /// Every level, in ascending order
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::None,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::None => "NONE",
        }
    }

    /// Label printed in the infix; the catch-all level has none
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::None => "",
            other => other.to_str(),
        }
    }

    /// Designated presentation color of the level
    pub fn style(&self) -> Style {
        match self {
            LogLevel::Trace => Style::new().color(Color::BrightBlack),
            LogLevel::Debug => Style::new().color(Color::Magenta),
            LogLevel::Info => Style::new().color(Color::Cyan),
            LogLevel::Warn => Style::new().color(Color::Yellow),
            LogLevel::Error => Style::new().color(Color::Red),
            LogLevel::Fatal => Style::new().background(Color::Red),
            LogLevel::None => Style::new().color(Color::White),
        }
    }

    /// Output channel the level is written through, `None` when unmapped
    pub fn method(&self) -> Option<LogMethod> {
        match self {
            LogLevel::Trace => Some(LogMethod::Trace),
            LogLevel::Debug => Some(LogMethod::Debug),
            LogLevel::Info => Some(LogMethod::Info),
            LogLevel::Warn => Some(LogMethod::Warn),
            LogLevel::Error | LogLevel::Fatal => Some(LogMethod::Error),
            LogLevel::None => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "NONE" | "OFF" => Ok(LogLevel::None),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Named output channel a level is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogMethod {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Generic channel for levels without a dedicated method
    Log,
}

impl LogMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogMethod::Trace => "trace",
            LogMethod::Debug => "debug",
            LogMethod::Info => "info",
            LogMethod::Warn => "warn",
            LogMethod::Error => "error",
            LogMethod::Log => "log",
        }
    }

    /// Whether the console backend sends this channel to its error stream
    ///
    /// `trace` is diagnostic output and shares the error stream with `warn`
    /// and `error`.
    pub fn is_error_stream(&self) -> bool {
        matches!(self, LogMethod::Trace | LogMethod::Warn | LogMethod::Error)
    }
}

impl fmt::Display for LogMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
