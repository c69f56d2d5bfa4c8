//! A horizontal row of tabs.
//!
//! A tab-list is a listbox laid out horizontally: left and right move the
//! active tab (mirrored in right-to-left layouts) and space selects it.

use crate::listbox::listbox_key_schemes;
use crate::pattern::{Pattern, PatternKind};
use taro_core::{CanBeSelected, HasItems, KeySchemes};

/// Marker for the tab-list pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabListKind;

/// A tab-list over host `H`.
pub type TabList<H> = Pattern<H, TabListKind>;

impl<H> PatternKind<H> for TabListKind
where
    H: HasItems,
    H::Item: CanBeSelected,
{
    const NAME: &'static str = "tablist";
    const HORIZONTAL: bool = true;

    fn key_schemes() -> KeySchemes<TabList<H>> {
        listbox_key_schemes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PatternOptions;
    use crate::tab::Tab;
    use crossterm::event::KeyCode;
    use taro_core::testing::{key, TestHost};
    use taro_core::{
        HasActiveDescendant, HasKeySchemes, HasLifecycle, HasOrientation, HasSelectedDescendant,
        IdSource, SequentialIds,
    };

    fn tabs(ids: &IdSource) -> TestHost<Tab<&'static str>> {
        let mut items = vec![
            Tab::with_value(ids, "General"),
            Tab::with_value(ids, "Advanced"),
            Tab::with_value(ids, "About"),
        ];
        for tab in &mut items {
            tab.setup();
        }
        TestHost::new(items)
    }

    #[test]
    fn defaults_to_horizontal() {
        let ids = SequentialIds::shared();
        let tablist = TabList::new(tabs(&ids), &ids);
        assert!(tablist.is_horizontal());
        assert_eq!(tablist.kind_name(), "tablist");
        assert_eq!(
            tablist.key_schemes().names(),
            vec!["ListNavigation", "ListSelection"]
        );
    }

    #[test]
    fn options_can_force_vertical() {
        let ids = SequentialIds::shared();
        let opts = PatternOptions {
            horizontal: Some(false),
            ..PatternOptions::default()
        };
        let tablist = TabList::with_options(tabs(&ids), &ids, opts);
        assert!(!tablist.is_horizontal());
    }

    #[test]
    fn left_and_right_move_between_tabs() {
        let ids = SequentialIds::shared();
        let mut tablist = TabList::new(tabs(&ids), &ids);
        tablist.activate_first();

        tablist.handle_key(&key(KeyCode::Right)).unwrap();
        assert_eq!(tablist.active_descendant().unwrap().value(), &"Advanced");
        tablist.handle_key(&key(KeyCode::Left)).unwrap();
        tablist.handle_key(&key(KeyCode::Left)).unwrap();
        assert_eq!(tablist.active_descendant().unwrap().value(), &"About");
        assert!(!tablist.handle_key(&key(KeyCode::Down)).unwrap());
    }

    #[test]
    fn rtl_left_moves_forward() {
        let ids = SequentialIds::shared();
        let mut tablist = TabList::new(tabs(&ids), &ids).with_rtl(true);
        tablist.activate_first();
        tablist.handle_key(&key(KeyCode::Left)).unwrap();
        assert_eq!(tablist.active_descendant_id(), "cc1");
        tablist.handle_key(&key(KeyCode::Right)).unwrap();
        assert_eq!(tablist.active_descendant_id(), "cc0");
    }

    #[test]
    fn space_selects_one_tab_at_a_time() {
        let ids = SequentialIds::shared();
        let mut tablist = TabList::new(tabs(&ids), &ids);
        tablist.activate_first();
        tablist.handle_key(&key(KeyCode::Char(' '))).unwrap();
        tablist.handle_key(&key(KeyCode::Right)).unwrap();
        tablist.handle_key(&key(KeyCode::Char(' '))).unwrap();
        assert_eq!(tablist.selected_ids(), vec!["cc1"]);
    }
}
