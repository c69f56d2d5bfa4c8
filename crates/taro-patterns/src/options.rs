//! Construction-time configuration shared by every list pattern.

/// Configuration options for a [`Pattern`](crate::pattern::Pattern).
///
/// All fields have sensible defaults (see [`Default`] impl). Use struct
/// update syntax to override only the options you need:
///
/// # Example
///
/// ```rust,ignore
/// use taro_patterns::{Listbox, PatternOptions};
///
/// let opts = PatternOptions {
///     multiple: true,
///     rtl: true,
///     ..PatternOptions::default()
/// };
/// let listbox = Listbox::with_options(host, &ids, opts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternOptions {
    /// Start disabled (default: false).
    pub disabled: bool,
    /// Force an orientation. `None` keeps the pattern's default: vertical for
    /// listbox and menu, horizontal for tab-list.
    pub horizontal: Option<bool>,
    /// Right-to-left text direction (default: false).
    pub rtl: bool,
    /// Allow more than one selected item (default: false).
    pub multiple: bool,
}

impl PatternOptions {
    /// The orientation to use given the pattern's default.
    pub fn resolve_horizontal(&self, default: bool) -> bool {
        self.horizontal.unwrap_or(default)
    }
}
