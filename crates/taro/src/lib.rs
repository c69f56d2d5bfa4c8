//! **taro** -- Headless, composable accessible widget patterns.
//!
//! This is the umbrella crate that re-exports everything you need to build
//! listboxes, menus, and tab-lists from a single dependency:
//!
//! ```toml
//! [dependencies]
//! taro = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`taro_core`] are available at the crate root
//!   ([`HasActiveDescendant`], [`HasSelectedDescendant`], [`KeySchemes`],
//!   [`SequentialIds`], [`PatternError`], etc.).
//! * The [`patterns`] module re-exports everything from [`taro_patterns`]
//!   (listbox, menu, tab-list, and their items).
//! * [`crossterm`] is re-exported so hosts can build key events without
//!   depending on it directly.
//!
//! # Quick start
//!
//! A host owns the items and focus; the pattern does the rest.
//!
//! ```
//! use taro::crossterm::event::KeyCode;
//! use taro::patterns::{Listbox, OptionItem};
//! use taro::testing::{key, TestHost};
//! use taro::{
//!     HasActiveDescendant, HasId, HasKeySchemes, HasLifecycle, HasSelectedDescendant,
//!     SequentialIds,
//! };
//!
//! let ids = SequentialIds::shared();
//! let mut options: Vec<_> = ["Tea", "Coffee", "Juice"]
//!     .into_iter()
//!     .map(|label| OptionItem::with_value(&ids, label))
//!     .collect();
//! for option in &mut options {
//!     option.setup();
//! }
//!
//! let mut listbox = Listbox::new(TestHost::new(options), &ids);
//! listbox.setup();
//! listbox.activate_first();
//! listbox.handle_key(&key(KeyCode::Down)).unwrap();
//! listbox.handle_key(&key(KeyCode::Char(' '))).unwrap();
//!
//! assert_eq!(listbox.active_descendant().unwrap().value(), &"Coffee");
//! assert_eq!(listbox.selected_ids(), vec!["cc1"]);
//! assert_eq!(listbox.id(), "cc3");
//! ```

pub use taro_core::*;
pub mod patterns {
    pub use taro_patterns::*;
}

// Re-export for hosts that translate their own input into key events
pub use crossterm;
