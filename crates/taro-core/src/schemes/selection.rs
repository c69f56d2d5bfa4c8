//! Space-bar selection toggling.

use crate::behavior::CanBeSelected;
use crate::error::PatternError;
use crate::key::{Binding, KeyCombination};
use crate::scheme::KeyScheme;
use crate::selected::HasSelectedDescendant;
use crossterm::event::{KeyCode, KeyEvent};

/// Configurable key bindings for [`ListSelection`].
#[derive(Debug, Clone)]
pub struct ListSelectionKeys {
    /// Toggle the active item's selection. Default: Space
    pub toggle: Binding,
}

impl Default for ListSelectionKeys {
    fn default() -> Self {
        Self {
            toggle: Binding::new(KeyCombination::new(KeyCode::Char(' ')), "Toggle selection"),
        }
    }
}

/// Toggles the selection of the active descendant.
///
/// Fails with [`PatternError::NoActiveItem`] when the toggle key arrives and
/// nothing is active.
#[derive(Debug, Clone, Default)]
pub struct ListSelection {
    keys: ListSelectionKeys,
}

impl ListSelection {
    /// Create the scheme with custom bindings.
    pub fn with_keys(keys: ListSelectionKeys) -> Self {
        Self { keys }
    }

    /// The bindings in use.
    pub fn keys(&self) -> &ListSelectionKeys {
        &self.keys
    }
}

impl<W> KeyScheme<W> for ListSelection
where
    W: HasSelectedDescendant + ?Sized,
    W::Item: CanBeSelected,
{
    fn handle_key(&self, widget: &mut W, event: &KeyEvent) -> Result<bool, PatternError> {
        if !self.keys.toggle.matches(event) {
            return Ok(false);
        }
        widget.toggle_active_selection()?;
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "ListSelection"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::active::HasActiveDescendant;
    use crate::scheme::HasKeySchemes;
    use crate::testing::{key, TestItem, TestWidget};
    use crossterm::event::KeyEventKind;

    fn widget() -> TestWidget {
        TestWidget::new(vec![
            TestItem::new("a").with_selected(true),
            TestItem::new("b"),
        ])
        .with_navigation()
        .with_selection()
    }

    #[test]
    fn space_toggles_active_item() {
        let mut w = widget();
        w.activate_index(1).unwrap();
        assert!(w.handle_key(&key(KeyCode::Char(' '))).unwrap());
        assert_eq!(w.selected_ids(), vec!["b"]);
    }

    #[test]
    fn space_twice_restores_selection() {
        let mut w = widget();
        w.activate_index(0).unwrap();
        let before = w.selected_ids();
        w.handle_key(&key(KeyCode::Char(' '))).unwrap();
        assert!(w.selected_ids().is_empty());
        w.handle_key(&key(KeyCode::Char(' '))).unwrap();
        assert_eq!(w.selected_ids(), before);
    }

    #[test]
    fn press_and_release_toggle_once() {
        let mut w = TestWidget::new(vec![TestItem::new("a")])
            .with_navigation()
            .with_selection();
        w.activate_first();
        let press = key(KeyCode::Char(' '));
        let mut release = key(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;

        assert!(w.handle_key(&press).unwrap());
        assert!(!w.handle_key(&release).unwrap());
        assert_eq!(w.selected_ids(), vec!["a"]);
    }

    #[test]
    fn other_keys_pass_through() {
        let mut w = widget();
        w.activate_index(1).unwrap();
        assert!(!w.handle_key(&key(KeyCode::Enter)).unwrap());
        assert!(!w.handle_key(&key(KeyCode::Char('x'))).unwrap());
        assert_eq!(w.selected_ids(), vec!["a"]);
    }

    #[test]
    fn navigation_claims_arrows_first() {
        let mut w = widget();
        w.activate_index(0).unwrap();
        assert!(w.handle_key(&key(KeyCode::Down)).unwrap());
        assert_eq!(w.active_descendant_id(), "b");
        assert_eq!(w.selected_ids(), vec!["a"]);
    }

    #[test]
    fn space_without_active_item_is_an_error() {
        let mut w = widget();
        assert_eq!(
            w.handle_key(&key(KeyCode::Char(' '))),
            Err(PatternError::NoActiveItem)
        );
    }
}
