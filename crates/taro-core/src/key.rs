//! Key bindings used by key schemes to recognize their keys.
//!
//! A [`Binding`] names an action and lists the [`KeyCombination`]s that
//! trigger it. Schemes keep their bindings in a public `*Keys` struct so hosts
//! can remap or disable individual actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombination {
    /// The key itself.
    pub code: KeyCode,
    /// Required modifiers. Extra held modifiers do not prevent a match.
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    /// The bare key.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// The key with Ctrl held.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Whether `event` presses (or repeats) this key with at least the
    /// required modifiers. Releases never match.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.kind != KeyEventKind::Release
            && self.code == event.code
            && event.modifiers.contains(self.modifiers)
    }
}

impl From<KeyCode> for KeyCombination {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// An action, the keys that trigger it, and whether it is currently live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Any of these triggers the binding.
    pub keys: Vec<KeyCombination>,
    /// Short label for the action, e.g. `"Next item"`.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

impl Binding {
    /// A binding triggered by a single key combination.
    pub fn new(key: impl Into<KeyCombination>, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key.into()], description)
    }

    /// A binding triggered by any of `keys`.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` triggers this binding.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled && self.keys.iter().any(|combo| combo.matches(event))
    }

    /// Enable or disable the binding.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
