//! Per-level format rules
//!
//! `LevelOptions` is what callers configure; `LevelFormat` is the resolved,
//! immutable rule that turns a message body into a finished line.

use super::inspect::{needs_escape, push_escaped};
use super::setting::Setting;
use super::style::Style;
use super::timestamp::{LevelTimestamp, TimestampOptions};
use chrono::{DateTime, Utc};

/// Format override for one level
///
/// # Examples
///
/// ```
/// use rust_format_logger::core::{LevelOptions, TimestampOptions};
///
/// let quiet = LevelOptions::new().without_timestamp().with_infix("> ");
/// let utc = LevelOptions::new().with_timestamp(TimestampOptions::new().with_utc(true));
/// assert!(quiet.timestamp.is_disabled());
/// assert!(utc.timestamp.as_set().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LevelOptions {
    pub timestamp: Setting<TimestampOptions>,
    pub infix: Option<String>,
    pub message: Option<Style>,
}

impl LevelOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: TimestampOptions) -> Self {
        self.timestamp = Setting::Set(timestamp);
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = Setting::Disabled;
        self
    }

    #[must_use]
    pub fn with_infix(mut self, infix: impl Into<String>) -> Self {
        self.infix = Some(infix.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, style: Style) -> Self {
        self.message = Some(style);
        self
    }
}

/// Resolved format rule for one level
#[derive(Debug, Clone)]
pub struct LevelFormat {
    timestamp: Option<LevelTimestamp>,
    infix: String,
    message: Option<Style>,
    stylize: bool,
}

impl LevelFormat {
    /// Build a rule from options taken as they are
    ///
    /// An inherited timestamp resolves to the built-in timestamp options.
    pub fn new(options: &LevelOptions, stylize: bool) -> Self {
        let timestamp = match &options.timestamp {
            Setting::Disabled => None,
            Setting::Set(timestamp) => Some(LevelTimestamp::new(timestamp)),
            Setting::Inherit => Some(LevelTimestamp::new(&TimestampOptions::default())),
        };
        Self {
            timestamp,
            infix: options.infix.clone().unwrap_or_default(),
            message: options.message.clone(),
            stylize,
        }
    }

    pub fn timestamp(&self) -> Option<&LevelTimestamp> {
        self.timestamp.as_ref()
    }

    pub fn infix(&self) -> &str {
        &self.infix
    }

    pub fn message(&self) -> Option<&Style> {
        self.message.as_ref()
    }

    pub fn stylize(&self) -> bool {
        self.stylize
    }

    /// Compose the line for `content` at the current time
    pub fn run(&self, content: &str) -> String {
        self.run_at(content, &Utc::now())
    }

    /// Compose the line for `content` as if written at `now`
    ///
    /// Control characters anywhere in the line are escaped; only SGR styling
    /// sequences (`ESC [ ... m`) are kept.
    pub fn run_at(&self, content: &str, now: &DateTime<Utc>) -> String {
        let body = match &self.message {
            Some(style) => style.apply(content, self.stylize),
            None => content.to_string(),
        };

        let mut line = match &self.timestamp {
            Some(timestamp) => timestamp.render(now, self.stylize),
            None => String::new(),
        };
        line.reserve(self.infix.len() + body.len());
        line.push_str(&self.infix);
        line.push_str(&body);
        sanitize(&line)
    }
}

/// Escape control characters so one write always yields one line
fn sanitize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        if let Some(len) = sgr_len(rest) {
            out.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if needs_escape(c) => push_escaped(&mut out, c),
            c => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Length of the SGR sequence starting `text`, if there is one
fn sgr_len(text: &str) -> Option<usize> {
    let params = text.strip_prefix("\x1b[")?;
    let end = params.find(|c: char| !(c.is_ascii_digit() || c == ';'))?;
    params[end..].starts_with('m').then_some(2 + end + 1)
}
