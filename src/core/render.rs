//! Rendering of logged values into a finished line
//!
//! The three steps are kept apart: [`stringify_values`] turns each value into
//! text, [`preprocess`] joins the pieces, and [`LevelFormat::run`] composes the
//! line around the joined body.

use super::inspect::{stringify, InspectOptions, Value};
use super::level_format::LevelFormat;
use chrono::{DateTime, Utc};

/// Join separator used when none is configured
pub const DEFAULT_JOIN: &str = " ";

/// How values are turned into a message body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub join: String,
    pub inspect: InspectOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            join: DEFAULT_JOIN.to_string(),
            inspect: InspectOptions::default(),
        }
    }
}

/// Stringify every value, strings unchanged and anything else inspected
pub fn stringify_values(values: &[Value], options: &InspectOptions) -> Vec<String> {
    values.iter().map(|value| stringify(value, options)).collect()
}

/// Build the message body for `values`
pub fn preprocess(values: &[Value], options: &RenderOptions) -> String {
    stringify_values(values, &options.inspect).join(&options.join)
}

/// Render `values` with `rule` at the current time
pub fn render(rule: &LevelFormat, values: &[Value], options: &RenderOptions) -> String {
    rule.run(&preprocess(values, options))
}

/// Render `values` with `rule` as if written at `now`
pub fn render_at(
    rule: &LevelFormat,
    values: &[Value],
    options: &RenderOptions,
    now: &DateTime<Utc>,
) -> String {
    rule.run_at(&preprocess(values, options), now)
}
