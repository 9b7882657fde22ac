//! Logging macros taking any number of values.
//!
//! Each argument is converted with `Value::from`, so strings, numbers,
//! options, vectors and `Value`s can be mixed freely. The macros evaluate to
//! the `Result` returned by [`Logger::write`](crate::Logger::write).
//!
//! # Examples
//!
//! ```
//! use rust_format_logger::prelude::*;
//! use rust_format_logger::info;
//!
//! let logger = Logger::builder().stdout(std::io::sink()).build();
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "listening on", port).unwrap();
//!
//! let tags = vec!["api", "v2"];
//! info!(logger, "routes", tags, Value::map([("ok", true)])).unwrap();
//! ```

/// Log values at the given level.
///
/// # Examples
///
/// ```
/// # use rust_format_logger::prelude::*;
/// # let logger = Logger::builder().stdout(std::io::sink()).stderr(std::io::sink()).build();
/// use rust_format_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code:", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $logger.write($level, &[$($crate::Value::from($value)),*])
    };
}

/// Log trace-level values.
///
/// # Examples
///
/// ```
/// # use rust_format_logger::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Trace).stderr(std::io::sink()).build();
/// use rust_format_logger::trace;
/// trace!(logger, "Entering function: calculate()").unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace $(, $value)*)
    };
}

/// Log debug-level values.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $value)*)
    };
}

/// Log info-level values.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $value)*)
    };
}

/// Log warning-level values.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $value)*)
    };
}

/// Log error-level values.
///
/// # Examples
///
/// ```
/// # use rust_format_logger::prelude::*;
/// # let logger = Logger::builder().stderr(std::io::sink()).build();
/// use rust_format_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// error!(logger, "failed to load", Value::error(&err)).unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $value)*)
    };
}

/// Log fatal-level values.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Fatal $(, $value)*)
    };
}
