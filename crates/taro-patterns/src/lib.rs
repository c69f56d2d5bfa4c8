//! Ready-made widget patterns for **taro**.
//!
//! Every pattern is a [`Pattern<H, K>`](pattern::Pattern) wrapping a host `H`,
//! so it implements all of the `taro-core` capability traits at once. The
//! patterns differ only in their defaults.
//!
//! # Patterns
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`listbox`] | Vertical list with arrow navigation and space selection |
//! | [`menu`] | Vertical list of commands with arrow navigation |
//! | [`tablist`] | Horizontal listbox for switching panels |
//!
//! # Items
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`option`] | Selectable listbox entry |
//! | [`menu_item`] | Menu entry |
//! | [`tab`] | Selectable tab |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pattern`] | The generic composer and the [`PatternKind`](pattern::PatternKind) seam |
//! | [`options`] | [`PatternOptions`](options::PatternOptions) for construction-time configuration |

pub mod listbox;
pub mod menu;
pub mod menu_item;
pub mod option;
pub mod options;
pub mod pattern;
pub mod tab;
pub mod tablist;

pub use listbox::{listbox_key_schemes, Listbox, ListboxKind};
pub use menu::{Menu, MenuKind};
pub use menu_item::MenuItem;
pub use option::OptionItem;
pub use options::PatternOptions;
pub use pattern::{ListHost, Pattern, PatternKind};
pub use tab::Tab;
pub use tablist::{TabList, TabListKind};
