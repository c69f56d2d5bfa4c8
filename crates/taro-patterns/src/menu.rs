//! A vertical list of commands.
//!
//! Menus navigate like a listbox but have no selection, so the items only
//! need an id and a disabled flag.

use crate::pattern::{Pattern, PatternKind};
use taro_core::{HasItems, KeySchemes, ListNavigation};

/// Marker for the menu pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuKind;

/// A menu over host `H`.
pub type Menu<H> = Pattern<H, MenuKind>;

impl<H: HasItems> PatternKind<H> for MenuKind {
    const NAME: &'static str = "menu";

    fn key_schemes() -> KeySchemes<Menu<H>> {
        KeySchemes::new().with(ListNavigation::default())
    }
}
