//! Core capabilities for the **taro** widget pattern library.
//!
//! `taro-core` provides the behavior that every accessible list-like widget
//! shares, with no opinion about how it is rendered. A host (the adapter for
//! some UI environment) owns the items and delivers input; the core tracks
//! which item is active, which are selected, and what each key press means.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`behavior`] traits | One orthogonal capability each: disabled, selected, id, lifecycle, orientation, text direction, focus, items |
//! | [`HasActiveDescendant`] | Identity-based cursor with circular next/previous/first/last |
//! | [`HasSelectedDescendant`] | Single or multiple selection over the cursor |
//! | [`KeyScheme`] / [`KeySchemes`] | Ordered, swappable key handling |
//! | [`ListNavigation`] / [`ListSelection`] | The built-in arrow-key and space-bar schemes |
//! | [`IdGenerator`] / [`UniqueId`] | Injected id generation, assigned once during setup |
//! | [`PatternError`] | Everything that can go wrong |
//!
//! # Identity, not position
//!
//! The active descendant is stored as an id. The host's collection is
//! re-read on every call, so items can be inserted, removed, or replaced
//! between any two operations without leaving a stale index behind.
//!
//! # Quick example
//!
//! ```
//! use taro_core::testing::{key, TestItem, TestWidget};
//! use taro_core::{HasActiveDescendant, HasKeySchemes, HasSelectedDescendant};
//! use crossterm::event::KeyCode;
//!
//! let mut listbox = TestWidget::new(vec![
//!     TestItem::new("apple"),
//!     TestItem::new("banana").with_disabled(true),
//!     TestItem::new("cherry"),
//! ])
//! .with_navigation()
//! .with_selection();
//!
//! listbox.activate_first();
//! listbox.handle_key(&key(KeyCode::Down)).unwrap(); // skips the disabled banana
//! listbox.handle_key(&key(KeyCode::Char(' '))).unwrap();
//! assert_eq!(listbox.selected_ids(), vec!["cherry"]);
//! ```

pub mod active;
pub mod behavior;
pub mod error;
pub mod id;
pub mod key;
pub mod scheme;
pub mod schemes;
pub mod selected;
pub mod testing;

pub use active::{Direction, HasActiveDescendant};
pub use behavior::{
    AffectedByRtl, CanBeDisabled, CanBeFocused, CanBeSelected, Descendant, HasId, HasItems,
    HasLifecycle, HasOrientation,
};
pub use error::PatternError;
pub use id::{IdGenerator, IdSource, SequentialIds, UniqueId};
pub use key::{Binding, KeyCombination};
pub use scheme::{HasKeySchemes, KeyScheme, KeySchemes};
pub use schemes::{ListLike, ListNavigation, ListNavigationKeys, ListSelection, ListSelectionKeys};
pub use selected::HasSelectedDescendant;
