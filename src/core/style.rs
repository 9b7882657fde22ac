//! ANSI styles for level labels, timestamps and inspected values
//!
//! Colors come from the `colored` palette, but whether escape codes are emitted
//! is decided by the caller through an explicit flag instead of global state.
//! This keeps rendering deterministic for a given configuration.

use colored::Color;

/// Text effect applied in addition to colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Bold,
    Dimmed,
    Italic,
    Underline,
    Inverse,
    Hidden,
    Strikethrough,
}

impl Effect {
    fn codes(&self) -> (&'static str, &'static str) {
        match self {
            Effect::Bold => ("1", "22"),
            Effect::Dimmed => ("2", "22"),
            Effect::Italic => ("3", "23"),
            Effect::Underline => ("4", "24"),
            Effect::Inverse => ("7", "27"),
            Effect::Hidden => ("8", "28"),
            Effect::Strikethrough => ("9", "29"),
        }
    }
}

/// A combination of text color, background color and effects
///
/// # Examples
///
/// ```
/// use rust_format_logger::core::{Effect, Style};
/// use colored::Color;
///
/// let style = Style::new().color(Color::Cyan).effect(Effect::Bold);
/// assert_eq!(style.apply("INFO", false), "INFO");
/// assert_eq!(style.apply("INFO", true), "\x1b[1m\x1b[36mINFO\x1b[39m\x1b[22m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    text: Option<Color>,
    background: Option<Color>,
    effects: Vec<Effect>,
}

impl Style {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text (foreground) color
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.text = Some(color);
        self
    }

    /// Set the background color
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Add an effect
    #[must_use]
    pub fn effect(mut self, effect: Effect) -> Self {
        if !self.effects.contains(&effect) {
            self.effects.push(effect);
        }
        self
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Whether applying this style never changes its input
    pub fn is_plain(&self) -> bool {
        self.text.is_none() && self.background.is_none() && self.effects.is_empty()
    }

    /// Wrap `text` in this style's escape codes when `enabled` is set
    ///
    /// Close codes already present in `text` re-open the matching layer, so a
    /// styled fragment inside a styled message does not end the outer style.
    pub fn apply(&self, text: &str, enabled: bool) -> String {
        if !enabled || self.is_plain() {
            return text.to_string();
        }

        let layers = self.layers();
        let mut body = text.to_string();
        for (open, close) in &layers {
            if body.contains(close.as_str()) {
                body = body.replace(close.as_str(), &format!("{}{}", close, open));
            }
        }

        let mut out = String::with_capacity(body.len() + layers.len() * 10);
        for (open, _) in &layers {
            out.push_str(open);
        }
        out.push_str(&body);
        for (_, close) in layers.iter().rev() {
            out.push_str(close);
        }
        out
    }

    fn layers(&self) -> Vec<(String, String)> {
        let mut layers: Vec<(String, String)> = self
            .effects
            .iter()
            .map(|effect| {
                let (open, close) = effect.codes();
                (escape(open), escape(close))
            })
            .collect();
        if let Some(background) = self.background {
            layers.push((escape(&background.to_bg_str()), escape("49")));
        }
        if let Some(text) = self.text {
            layers.push((escape(&text.to_fg_str()), escape("39")));
        }
        layers
    }
}

/// Whether the execution environment supports colored output
///
/// Follows `colored`'s detection: `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`
/// and whether stdout is a terminal.
pub fn color_supported() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

fn escape(code: &str) -> String {
    format!("\x1b[{}m", code)
}
