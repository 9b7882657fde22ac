//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    format_map::{FormatOptions, FormatRegistry},
    inspect::{InspectOptions, Value},
    level_format::LevelOptions,
    log_level::{LogLevel, LogMethod},
    render::{render, RenderOptions, DEFAULT_JOIN},
    style::color_supported,
};
use crate::appenders::{Backend, ConsoleAppender, Stream, StructuredAppender, StructuredOptions};
use std::fmt;
use std::io::{self, Write};

/// Leveled logger writing formatted lines to a single backend
///
/// The format table and the backend are fixed when the logger is built; a
/// logger is only read afterwards, so it can be shared across threads.
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
    console: Backend,
    formats: FormatRegistry,
    render: RenderOptions,
}

impl Logger {
    /// Logger with every option at its default
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_format_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .join(", ")
    ///     .depth(2)
    ///     .build();
    /// assert_eq!(logger.join(), ", ");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Whether the environment supports colored output
    pub fn stylize() -> bool {
        color_supported()
    }

    /// Write `values` at `level`
    ///
    /// Levels below the minimum are dropped without touching the backend.
    /// Otherwise the values are rendered with the level's format and handed to
    /// the backend exactly once; a backend failure is returned as is.
    pub fn write(&self, level: LogLevel, values: &[Value]) -> Result<()> {
        if level < self.level {
            return Ok(());
        }

        let method = level.method().unwrap_or(LogMethod::Log);
        let format = self.formats.get(level);
        let line = render(format, values, &self.render);
        self.console.append(method, &line)
    }

    /// Whether a write at `level` reaches the backend
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    #[inline]
    pub fn trace(&self, values: &[Value]) -> Result<()> {
        self.write(LogLevel::Trace, values)
    }

    #[inline]
    pub fn debug(&self, values: &[Value]) -> Result<()> {
        self.write(LogLevel::Debug, values)
    }

    #[inline]
    pub fn info(&self, values: &[Value]) -> Result<()> {
        self.write(LogLevel::Info, values)
    }

    #[inline]
    pub fn warn(&self, values: &[Value]) -> Result<()> {
        self.write(LogLevel::Warn, values)
    }

    #[inline]
    pub fn error(&self, values: &[Value]) -> Result<()> {
        self.write(LogLevel::Error, values)
    }

    #[inline]
    pub fn fatal(&self, values: &[Value]) -> Result<()> {
        self.write(LogLevel::Fatal, values)
    }

    pub fn flush(&self) -> Result<()> {
        self.console.flush()
    }

    /// Minimum level written
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The backend lines are written to
    pub fn console(&self) -> &Backend {
        &self.console
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn join(&self) -> &str {
        &self.render.join
    }

    pub fn depth(&self) -> usize {
        self.render.inspect.depth
    }

    /// Whether lines and inspected values are styled
    pub fn colors(&self) -> bool {
        self.render.inspect.colors
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Building never fails: every unset option falls back to its default.
///
/// # Example
/// ```
/// use rust_format_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .default_format(LevelOptions::new().without_timestamp())
///     .level_format(LogLevel::Error, LevelOptions::new().with_infix("!! "))
///     .stdout(std::io::sink())
///     .stderr(std::io::sink())
///     .build();
/// assert!(!logger.console().is_structured());
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    format: FormatOptions,
    default_format: Option<LevelOptions>,
    join: Option<String>,
    depth: usize,
    colors: Option<bool>,
    stdout: Option<Stream>,
    stderr: Option<Stream>,
    structured: Option<StructuredOptions>,
    handle_errors: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            format: FormatOptions::default(),
            default_format: None,
            join: None,
            depth: 0,
            colors: None,
            stdout: None,
            stderr: None,
            structured: None,
            handle_errors: true,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Replace all per-level format overrides
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    /// Override the format of a single level
    #[must_use = "builder methods return a new value"]
    pub fn level_format(mut self, level: LogLevel, options: LevelOptions) -> Self {
        self.format = self.format.with(level, options);
        self
    }

    /// Options that levels without an override are built from
    ///
    /// Defaults to the `LogLevel::None` override when not set.
    #[must_use = "builder methods return a new value"]
    pub fn default_format(mut self, options: LevelOptions) -> Self {
        self.default_format = Some(options);
        self
    }

    /// Separator placed between logged values
    #[must_use = "builder methods return a new value"]
    pub fn join(mut self, join: impl Into<String>) -> Self {
        self.join = Some(join.into());
        self
    }

    /// Container levels expanded when inspecting values
    #[must_use = "builder methods return a new value"]
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Force styling on or off instead of detecting terminal support
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    /// Output stream of the console backend
    #[must_use = "builder methods return a new value"]
    pub fn stdout<W: Write + Send + 'static>(mut self, stream: W) -> Self {
        self.stdout = Some(Box::new(stream));
        self
    }

    /// Error stream of the console backend
    #[must_use = "builder methods return a new value"]
    pub fn stderr<W: Write + Send + 'static>(mut self, stream: W) -> Self {
        self.stderr = Some(Box::new(stream));
        self
    }

    /// Use the structured backend instead of the console
    ///
    /// Any options value selects it, including `StructuredOptions::default()`.
    #[must_use = "builder methods return a new value"]
    pub fn structured(mut self, options: StructuredOptions) -> Self {
        self.structured = Some(options);
        self
    }

    /// Report panics through the structured backend (default: true)
    #[must_use = "builder methods return a new value"]
    pub fn handle_errors(mut self, enabled: bool) -> Self {
        self.handle_errors = enabled;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let colors = self.colors.unwrap_or_else(color_supported);

        let console = match self.structured {
            Some(options) => Backend::Structured(StructuredAppender::new(options, self.handle_errors)),
            None => Backend::Console(ConsoleAppender::with_boxed_streams(
                self.stdout.unwrap_or_else(|| Box::new(io::stdout())),
                self.stderr.unwrap_or_else(|| Box::new(io::stderr())),
            )),
        };
        let formats =
            FormatRegistry::build_with_styling(&self.format, self.default_format.as_ref(), colors);

        Logger {
            level: self.min_level,
            console,
            formats,
            render: RenderOptions {
                join: self.join.unwrap_or_else(|| DEFAULT_JOIN.to_string()),
                inspect: InspectOptions::new(self.depth, colors),
            },
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("min_level", &self.min_level)
            .field("format", &self.format)
            .field("default_format", &self.default_format)
            .field("join", &self.join)
            .field("depth", &self.depth)
            .field("colors", &self.colors)
            .field("structured", &self.structured)
            .field("handle_errors", &self.handle_errors)
            .finish_non_exhaustive()
    }
}
