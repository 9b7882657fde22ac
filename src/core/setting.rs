//! Three-state option used by format overrides

/// A field that can be left to inheritance, set, or explicitly turned off
///
/// `Disabled` is distinct from `Inherit`: a disabled field stays disabled even
/// when the value it would inherit from is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Setting<T> {
    #[default]
    Inherit,
    Set(T),
    Disabled,
}

impl<T> Setting<T> {
    pub fn is_inherit(&self) -> bool {
        matches!(self, Setting::Inherit)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Setting::Disabled)
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Setting::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Resolve `Inherit` against `parent`, keeping `Set` and `Disabled` as they are
    pub fn or_inherit(&self, parent: &Setting<T>) -> Setting<T>
    where
        T: Clone,
    {
        match self {
            Setting::Inherit => parent.clone(),
            other => other.clone(),
        }
    }
}

impl<T> From<Option<T>> for Setting<T> {
    /// `Some` sets the value, `None` disables it
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Setting::Set(value),
            None => Setting::Disabled,
        }
    }
}
