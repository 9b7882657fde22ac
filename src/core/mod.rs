//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod format_map;
pub mod inspect;
pub mod level_format;
pub mod log_level;
pub mod logger;
pub mod render;
pub mod setting;
pub mod style;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use format_map::{FormatOptions, FormatRegistry, LABEL_WIDTH};
pub use inspect::{inspect, stringify, InspectOptions, Value, MAX_LIST_ITEMS};
pub use level_format::{LevelFormat, LevelOptions};
pub use log_level::{LogLevel, LogMethod};
pub use logger::{Logger, LoggerBuilder};
pub use render::{preprocess, render, render_at, stringify_values, RenderOptions, DEFAULT_JOIN};
pub use setting::Setting;
pub use style::{color_supported, Effect, Style};
pub use timestamp::{LevelTimestamp, TimestampFormat, TimestampFormatter, TimestampOptions};
