//! Built-in key schemes for list-like widgets.
//!
//! | Scheme | Keys | Action |
//! |--------|------|--------|
//! | [`ListNavigation`] | arrow keys | move the active descendant, honoring orientation and text direction |
//! | [`ListSelection`] | space | toggle the active descendant's selection |

pub mod navigation;
pub mod selection;

pub use navigation::{ListLike, ListNavigation, ListNavigationKeys};
pub use selection::{ListSelection, ListSelectionKeys};
