//! Values accepted by the logger and their structural rendering
//!
//! Strings handed to the logger are printed as they are. Everything else goes
//! through [`inspect`], which prints a compact, single-line representation:
//! nested strings are quoted, containers nested deeper than the configured
//! depth collapse to `[Array]` / `[Object]`, and long lists are truncated.
//! `Value` owns its children, so a value tree can never contain a cycle.

use super::error::Result;
use super::style::{Effect, Style};
use colored::Color;
use serde::Serialize;
use std::fmt;

/// Maximum number of list items printed before the remainder is summarized
pub const MAX_LIST_ITEMS: usize = 100;

/// A value passed to the logger
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, printed verbatim at the top level and quoted when nested
    Str(String),
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    List(Vec<Value>),
    /// Ordered key/value pairs
    Map(Vec<(String, Value)>),
    /// Pre-rendered text, printed verbatim at every depth
    Raw(String),
}

impl Value {
    /// Build a map value from key/value pairs, keeping their order
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Capture a value through its `Debug` representation
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Value::Raw(format!("{:?}", value))
    }

    /// Capture an error together with its source chain
    pub fn error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut text = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        Value::Raw(text)
    }

    /// Convert any `Serialize` value into its structural form
    pub fn try_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Like [`try_serialize`](Self::try_serialize), printing serializer failures in place
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::try_serialize(value)
            .unwrap_or_else(|e| Value::Raw(format!("[Unserializable: {}]", e)))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::UInt(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Options controlling [`inspect`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectOptions {
    /// Number of container levels below the top one that are expanded
    pub depth: usize,
    /// Emit ANSI colors
    pub colors: bool,
}

impl InspectOptions {
    pub fn new(depth: usize, colors: bool) -> Self {
        Self { depth, colors }
    }
}

/// Stringify one logged value: strings unchanged, anything else inspected
pub fn stringify(value: &Value, options: &InspectOptions) -> String {
    match value {
        Value::Str(text) => text.clone(),
        other => inspect(other, options),
    }
}

/// Render a structural, single-line representation of `value`
///
/// # Examples
///
/// ```
/// use rust_format_logger::core::{inspect, InspectOptions, Value};
///
/// let value = Value::map([("id", Value::from(7)), ("tags", Value::from(vec!["a"]))]);
/// assert_eq!(inspect(&value, &InspectOptions::new(0, false)), "{ id: 7, tags: [Array] }");
/// assert_eq!(inspect(&value, &InspectOptions::new(1, false)), "{ id: 7, tags: [ 'a' ] }");
/// ```
pub fn inspect(value: &Value, options: &InspectOptions) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, options);
    out
}

fn write_value(out: &mut String, value: &Value, level: usize, options: &InspectOptions) {
    match value {
        Value::Str(text) => out.push_str(&paint(&quote(text), Kind::String, options)),
        Value::Undefined => out.push_str(&paint("undefined", Kind::Undefined, options)),
        Value::Null => out.push_str(&paint("null", Kind::Null, options)),
        Value::Bool(b) => out.push_str(&paint(&b.to_string(), Kind::Number, options)),
        Value::Int(i) => out.push_str(&paint(&i.to_string(), Kind::Number, options)),
        Value::UInt(u) => out.push_str(&paint(&u.to_string(), Kind::Number, options)),
        Value::Float(f) => out.push_str(&paint(&format_float(*f), Kind::Number, options)),
        Value::Raw(text) => out.push_str(text),
        Value::List(items) => {
            if items.is_empty() {
                out.push_str("[]");
            } else if level > options.depth {
                out.push_str(&paint("[Array]", Kind::Special, options));
            } else {
                out.push_str("[ ");
                for (idx, item) in items.iter().take(MAX_LIST_ITEMS).enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    write_value(out, item, level + 1, options);
                }
                if items.len() > MAX_LIST_ITEMS {
                    let remaining = items.len() - MAX_LIST_ITEMS;
                    let plural = if remaining == 1 { "" } else { "s" };
                    out.push_str(&format!(", ... {} more item{}", remaining, plural));
                }
                out.push_str(" ]");
            }
        }
        Value::Map(entries) => {
            if entries.is_empty() {
                out.push_str("{}");
            } else if level > options.depth {
                out.push_str(&paint("[Object]", Kind::Special, options));
            } else {
                out.push_str("{ ");
                for (idx, (key, item)) in entries.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    if is_identifier(key) {
                        out.push_str(key);
                    } else {
                        out.push_str(&paint(&quote(key), Kind::String, options));
                    }
                    out.push_str(": ");
                    write_value(out, item, level + 1, options);
                }
                out.push_str(" }");
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Number,
    String,
    Null,
    Undefined,
    Special,
}

fn paint(text: &str, kind: Kind, options: &InspectOptions) -> String {
    if !options.colors {
        return text.to_string();
    }
    let style = match kind {
        Kind::Number => Style::new().color(Color::Yellow),
        Kind::String => Style::new().color(Color::Green),
        Kind::Null => Style::new().effect(Effect::Bold),
        Kind::Undefined => Style::new().color(Color::BrightBlack),
        Kind::Special => Style::new().color(Color::Cyan),
    };
    style.apply(text, true)
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if value != 0.0 && !(1e-6..1e21).contains(&value.abs()) {
        // `1e+21`, `1.5e-7`
        let exponential = format!("{:e}", value);
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponential,
        }
    } else {
        value.to_string()
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Quote a nested string, preferring single quotes
fn quote(text: &str) -> String {
    let quote = if !text.contains('\'') {
        '\''
    } else if !text.contains('"') {
        '"'
    } else if !text.contains('`') && !text.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if needs_escape(c) => push_escaped(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Control characters and Unicode line or paragraph separators
pub(crate) fn needs_escape(c: char) -> bool {
    c.is_control() || c == '\u{2028}' || c == '\u{2029}'
}

/// Push `c` as `\xNN`, or `\uNNNN` beyond Latin-1
pub(crate) fn push_escaped(out: &mut String, c: char) {
    let code = c as u32;
    if code <= 0xff {
        out.push_str(&format!("\\x{:02X}", code));
    } else {
        out.push_str(&format!("\\u{:04X}", code));
    }
}
