//! A vertical list of selectable options.
//!
//! Arrow keys move the active option and skip disabled ones; space toggles
//! the active option's selection. Set `multiple` to keep earlier selections
//! when a new option is selected.

use crate::pattern::{Pattern, PatternKind};
use taro_core::{CanBeSelected, HasItems, KeySchemes, ListNavigation, ListSelection};

/// Marker for the listbox pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListboxKind;

/// A listbox over host `H`.
pub type Listbox<H> = Pattern<H, ListboxKind>;

/// Navigation followed by selection, the schemes shared by listbox and
/// tab-list.
pub fn listbox_key_schemes<H, K>() -> KeySchemes<Pattern<H, K>>
where
    H: HasItems,
    H::Item: CanBeSelected,
{
    KeySchemes::new()
        .with(ListNavigation::default())
        .with(ListSelection::default())
}

impl<H> PatternKind<H> for ListboxKind
where
    H: HasItems,
    H::Item: CanBeSelected,
{
    const NAME: &'static str = "listbox";

    fn key_schemes() -> KeySchemes<Listbox<H>> {
        listbox_key_schemes()
    }
}
