//! Construction of the per-level format table
//!
//! Every level gets exactly one rule. A level with an explicit override uses
//! it as given; the others are synthesized from the default options plus the
//! level's own color and label.

use super::level_format::{LevelFormat, LevelOptions};
use super::log_level::LogLevel;
use super::setting::Setting;
use super::style::color_supported;
use super::timestamp::TimestampOptions;
use std::collections::BTreeMap;

/// Width the level label is padded to inside the infix
pub const LABEL_WIDTH: usize = 5;

/// Optional format override for each level
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub trace: Option<LevelOptions>,
    pub debug: Option<LevelOptions>,
    pub info: Option<LevelOptions>,
    pub warn: Option<LevelOptions>,
    pub error: Option<LevelOptions>,
    pub fatal: Option<LevelOptions>,
    /// Override for the catch-all level, also the default when none is given
    pub none: Option<LevelOptions>,
}

impl FormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override for `level`
    #[must_use]
    pub fn with(mut self, level: LogLevel, options: LevelOptions) -> Self {
        *self.slot_mut(level) = Some(options);
        self
    }

    pub fn get(&self, level: LogLevel) -> Option<&LevelOptions> {
        match level {
            LogLevel::Trace => self.trace.as_ref(),
            LogLevel::Debug => self.debug.as_ref(),
            LogLevel::Info => self.info.as_ref(),
            LogLevel::Warn => self.warn.as_ref(),
            LogLevel::Error => self.error.as_ref(),
            LogLevel::Fatal => self.fatal.as_ref(),
            LogLevel::None => self.none.as_ref(),
        }
    }

    fn slot_mut(&mut self, level: LogLevel) -> &mut Option<LevelOptions> {
        match level {
            LogLevel::Trace => &mut self.trace,
            LogLevel::Debug => &mut self.debug,
            LogLevel::Info => &mut self.info,
            LogLevel::Warn => &mut self.warn,
            LogLevel::Error => &mut self.error,
            LogLevel::Fatal => &mut self.fatal,
            LogLevel::None => &mut self.none,
        }
    }
}

/// Fully populated, read-only mapping from level to format rule
///
/// # Examples
///
/// ```
/// use rust_format_logger::core::{FormatOptions, FormatRegistry, LevelOptions, LogLevel};
///
/// let defaults = LevelOptions::new().without_timestamp();
/// let formats = FormatRegistry::build_with_styling(&FormatOptions::new(), Some(&defaults), false);
/// assert_eq!(formats.get(LogLevel::Warn).run("low disk"), "WARN  - low disk");
/// assert_eq!(formats.get(LogLevel::None).run("bare"), "bare");
/// ```
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    levels: BTreeMap<LogLevel, LevelFormat>,
    none: LevelFormat,
}

impl FormatRegistry {
    /// Build the table, styling labels when the environment supports color
    pub fn build(overrides: &FormatOptions, default: Option<&LevelOptions>) -> Self {
        Self::build_with_styling(overrides, default, color_supported())
    }

    /// Build the table with an explicit styling flag
    pub fn build_with_styling(
        overrides: &FormatOptions,
        default: Option<&LevelOptions>,
        stylize: bool,
    ) -> Self {
        // Resolved once, before any level is visited.
        let empty = LevelOptions::default();
        let defaults = default.or(overrides.none.as_ref()).unwrap_or(&empty);

        let levels = LogLevel::ALL
            .into_iter()
            .filter(|level| *level != LogLevel::None)
            .map(|level| {
                let format = Self::ensure_level(overrides.get(level), defaults, level, stylize);
                (level, format)
            })
            .collect();
        let none = Self::ensure_level(overrides.none.as_ref(), defaults, LogLevel::None, stylize);

        Self { levels, none }
    }

    fn ensure_level(
        options: Option<&LevelOptions>,
        defaults: &LevelOptions,
        level: LogLevel,
        stylize: bool,
    ) -> LevelFormat {
        if let Some(options) = options {
            let resolved = LevelOptions {
                timestamp: options.timestamp.or_inherit(&defaults.timestamp),
                ..options.clone()
            };
            return LevelFormat::new(&resolved, stylize);
        }

        let color = level.style();
        let timestamp = match &defaults.timestamp {
            Setting::Disabled => Setting::Disabled,
            Setting::Set(timestamp) => Setting::Set(TimestampOptions {
                color: Some(color.clone()),
                ..timestamp.clone()
            }),
            Setting::Inherit => Setting::Set(TimestampOptions {
                color: Some(color.clone()),
                ..TimestampOptions::default()
            }),
        };
        let label = level.label();
        let infix = if label.is_empty() {
            String::new()
        } else {
            format!(
                "{} - ",
                color.apply(&format!("{:<width$}", label, width = LABEL_WIDTH), stylize)
            )
        };

        LevelFormat::new(
            &LevelOptions {
                timestamp,
                infix: Some(infix),
                message: defaults.message.clone(),
            },
            stylize,
        )
    }

    /// Rule for `level`, the catch-all rule if none is registered
    pub fn get(&self, level: LogLevel) -> &LevelFormat {
        self.levels.get(&level).unwrap_or(&self.none)
    }

    /// All rules in level order, the catch-all last
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &LevelFormat)> {
        self.levels
            .iter()
            .map(|(level, format)| (*level, format))
            .chain(std::iter::once((LogLevel::None, &self.none)))
    }

    pub fn len(&self) -> usize {
        self.levels.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
