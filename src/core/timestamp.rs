//! Timestamp formatting utilities
//!
//! `TimestampFormat` picks how an instant is printed; `TimestampOptions` is the
//! user-facing override and `LevelTimestamp` the resolved segment a level
//! format prepends to each line.

use super::style::Style;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::sync::Arc;

const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Function turning the formatted instant into the printed segment
pub type TimestampFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Timestamp pattern options
///
/// # Examples
///
/// ```
/// use rust_format_logger::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::DateTime.format(&instant), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `"%d/%b/%Y:%H:%M:%S %z"`
    Custom(String),
}

impl TimestampFormat {
    /// Format a UTC instant
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::DateTime => datetime.format(DATE_TIME_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => format_custom(datetime, format_str),
        }
    }

    /// Format an instant in the local time zone
    ///
    /// Numeric formats are zone independent and print the same as [`format`](Self::format).
    #[must_use]
    pub fn format_local(&self, datetime: &DateTime<Utc>) -> String {
        let local = datetime.with_timezone(&Local);
        match self {
            TimestampFormat::DateTime => local.format(DATE_TIME_PATTERN).to_string(),
            TimestampFormat::Iso8601 => local.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => local.to_rfc3339(),
            TimestampFormat::Unix | TimestampFormat::UnixMillis => self.format(datetime),
            TimestampFormat::Custom(format_str) => format_custom(&local, format_str),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }

    /// Whether every specifier of a custom pattern is understood by chrono
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(format_str) => {
                !StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }
}

/// Format with a user pattern, falling back to `DateTime` if chrono rejects it
fn format_custom<Tz>(datetime: &DateTime<Tz>, format_str: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    match write!(out, "{}", datetime.format(format_str)) {
        Ok(()) => out,
        Err(_) => datetime.format(DATE_TIME_PATTERN).to_string(),
    }
}

/// Timestamp override for a level format
///
/// Unset fields fall back to: the `DateTime` pattern, local time, no color and
/// a formatter appending `" - "`.
#[derive(Clone, Default)]
pub struct TimestampOptions {
    pub pattern: Option<TimestampFormat>,
    pub utc: bool,
    pub color: Option<Style>,
    pub formatter: Option<TimestampFormatter>,
}

impl TimestampOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: TimestampFormat) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Set a strftime-compatible pattern
    #[must_use]
    pub fn with_custom_pattern(mut self, format_str: &str) -> Self {
        self.pattern = Some(TimestampFormat::Custom(format_str.to_string()));
        self
    }

    #[must_use]
    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Style) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }
}

impl fmt::Debug for TimestampOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimestampOptions")
            .field("pattern", &self.pattern)
            .field("utc", &self.utc)
            .field("color", &self.color)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Resolved timestamp segment of a level format
#[derive(Clone)]
pub struct LevelTimestamp {
    pattern: TimestampFormat,
    utc: bool,
    color: Style,
    formatter: Option<TimestampFormatter>,
}

impl LevelTimestamp {
    /// Resolve `options`; a pattern chrono cannot parse becomes `DateTime`
    pub fn new(options: &TimestampOptions) -> Self {
        let pattern = options
            .pattern
            .clone()
            .filter(TimestampFormat::is_valid)
            .unwrap_or_default();
        Self {
            pattern,
            utc: options.utc,
            color: options.color.clone().unwrap_or_default(),
            formatter: options.formatter.clone(),
        }
    }

    pub fn pattern(&self) -> &TimestampFormat {
        &self.pattern
    }

    pub fn utc(&self) -> bool {
        self.utc
    }

    pub fn color(&self) -> &Style {
        &self.color
    }

    /// Render the segment for `now`, separator included
    pub fn render(&self, now: &DateTime<Utc>, stylize: bool) -> String {
        let instant = if self.utc {
            self.pattern.format(now)
        } else {
            self.pattern.format_local(now)
        };
        let segment = match &self.formatter {
            Some(formatter) => formatter(&instant),
            None => format!("{} - ", instant),
        };
        self.color.apply(&segment, stylize)
    }
}

impl fmt::Debug for LevelTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelTimestamp")
            .field("pattern", &self.pattern)
            .field("utc", &self.utc)
            .field("color", &self.color)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
