//! # Rust Format Logger
//!
//! A leveled logging facade with per-level formats. Values of any shape are
//! rendered into one line per write and sent to either a console backend
//! (two output streams) or a structured backend built on `tracing`.
//!
//! ## Features
//!
//! - **Per-level formats**: timestamp, colored label and message style for
//!   every level, synthesized from a shared default unless overridden
//! - **Value inspection**: non-string values are printed structurally with a
//!   configurable depth
//! - **Two backends**: console streams or `tracing` events, chosen once
//! - **Thread safe**: a built logger is read-only and can be shared freely
//!
//! ```
//! use rust_format_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .min_level(LogLevel::Debug)
//!     .stdout(std::io::sink())
//!     .build();
//! logger.info(&["hello".into(), 42.into()]).unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{Backend, ConsoleAppender, StructuredAppender, StructuredOptions};
    pub use crate::core::{
        Appender, Effect, FormatOptions, FormatRegistry, LevelFormat, LevelOptions, LogLevel,
        LogMethod, Logger, LoggerBuilder, LoggerError, RenderOptions, Result, Setting, Style,
        TimestampFormat, TimestampOptions, Value,
    };
}

pub use appenders::{Backend, ConsoleAppender, StructuredAppender, StructuredOptions};
pub use core::{
    Appender, Effect, FormatOptions, FormatRegistry, InspectOptions, LevelFormat, LevelOptions,
    LogLevel, LogMethod, Logger, LoggerBuilder, LoggerError, RenderOptions, Result, Setting,
    Style, TimestampFormat, TimestampOptions, Value,
};
