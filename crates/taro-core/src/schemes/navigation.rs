//! Arrow-key navigation through a list-like widget.

use crate::active::{Direction, HasActiveDescendant};
use crate::behavior::{AffectedByRtl, HasOrientation};
use crate::error::PatternError;
use crate::key::{Binding, KeyCombination};
use crate::scheme::KeyScheme;
use crossterm::event::{KeyCode, KeyEvent};

/// A list-like control with arrow-key navigation, such as a listbox or menu.
pub trait ListLike: HasActiveDescendant + HasOrientation + AffectedByRtl {}

impl<T: HasActiveDescendant + HasOrientation + AffectedByRtl + ?Sized> ListLike for T {}

/// Configurable key bindings for [`ListNavigation`].
///
/// ```ignore
/// use taro_core::key::{Binding, KeyCombination};
/// use taro_core::schemes::{ListNavigation, ListNavigationKeys};
/// use crossterm::event::KeyCode;
///
/// let mut keys = ListNavigationKeys::default();
/// keys.down.keys.push(KeyCombination::new(KeyCode::Char('j')));
/// keys.up.keys.push(KeyCombination::new(KeyCode::Char('k')));
/// let scheme = ListNavigation::with_keys(keys);
/// ```
#[derive(Debug, Clone)]
pub struct ListNavigationKeys {
    /// Previous item in a vertical list. Default: Up
    pub up: Binding,
    /// Next item in a vertical list. Default: Down
    pub down: Binding,
    /// Previous item in a horizontal LTR list, next item in an RTL list. Default: Left
    pub left: Binding,
    /// Next item in a horizontal LTR list, previous item in an RTL list. Default: Right
    pub right: Binding,
}

impl Default for ListNavigationKeys {
    fn default() -> Self {
        Self {
            up: Binding::new(KeyCombination::new(KeyCode::Up), "Previous item"),
            down: Binding::new(KeyCombination::new(KeyCode::Down), "Next item"),
            left: Binding::new(KeyCombination::new(KeyCode::Left), "Previous item"),
            right: Binding::new(KeyCombination::new(KeyCode::Right), "Next item"),
        }
    }
}

/// Moves the active descendant with the arrow keys.
///
/// | Key | Vertical LTR | Vertical RTL | Horizontal LTR | Horizontal RTL |
/// |-----|--------------|--------------|----------------|----------------|
/// | Down | next | next | - | - |
/// | Up | previous | previous | - | - |
/// | Right | - | previous | next | previous |
/// | Left | - | next | previous | next |
///
/// `-` means the key is left for the next scheme.
#[derive(Debug, Clone, Default)]
pub struct ListNavigation {
    keys: ListNavigationKeys,
}

impl ListNavigation {
    /// Create the scheme with custom bindings.
    pub fn with_keys(keys: ListNavigationKeys) -> Self {
        Self { keys }
    }

    /// The bindings in use.
    pub fn keys(&self) -> &ListNavigationKeys {
        &self.keys
    }

    /// Which way `event` moves the cursor for the given layout, if at all.
    pub fn direction(&self, event: &KeyEvent, horizontal: bool, rtl: bool) -> Option<Direction> {
        let keys = &self.keys;
        if keys.down.matches(event) {
            (!horizontal).then_some(Direction::Forward)
        } else if keys.up.matches(event) {
            (!horizontal).then_some(Direction::Backward)
        } else if keys.right.matches(event) {
            if rtl {
                Some(Direction::Backward)
            } else {
                horizontal.then_some(Direction::Forward)
            }
        } else if keys.left.matches(event) {
            if rtl {
                Some(Direction::Forward)
            } else {
                horizontal.then_some(Direction::Backward)
            }
        } else {
            None
        }
    }
}

impl<W: ListLike + ?Sized> KeyScheme<W> for ListNavigation {
    fn handle_key(&self, widget: &mut W, event: &KeyEvent) -> Result<bool, PatternError> {
        match self.direction(event, widget.is_horizontal(), widget.is_rtl()) {
            Some(Direction::Forward) => widget.activate_next(),
            Some(Direction::Backward) => widget.activate_previous(),
            None => return Ok(false),
        }
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "ListNavigation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::HasKeySchemes;
    use crate::testing::{key, TestItem, TestWidget};
    use crossterm::event::KeyEventKind;

    fn widget(horizontal: bool, rtl: bool) -> TestWidget {
        let mut w = TestWidget::new(vec![
            TestItem::new("a"),
            TestItem::new("b"),
            TestItem::new("c"),
        ])
        .with_navigation();
        w.horizontal = horizontal;
        w.rtl = rtl;
        w.activate_index(1).unwrap();
        w
    }

    fn press(w: &mut TestWidget, code: KeyCode) -> bool {
        w.handle_key(&key(code)).unwrap()
    }

    #[test]
    fn vertical_up_down() {
        let mut w = widget(false, false);
        assert!(press(&mut w, KeyCode::Down));
        assert_eq!(w.active_descendant_id(), "c");
        assert!(press(&mut w, KeyCode::Up));
        assert_eq!(w.active_descendant_id(), "b");
    }

    #[test]
    fn arrow_release_does_not_move_again() {
        let mut w = widget(false, false);
        let mut release = key(KeyCode::Down);
        release.kind = KeyEventKind::Release;
        assert!(press(&mut w, KeyCode::Down));
        assert!(!w.handle_key(&release).unwrap());
        assert_eq!(w.active_descendant_id(), "c");
        assert_eq!(ListNavigation::default().direction(&release, false, false), None);
    }

    #[test]
    fn vertical_ignores_left_right() {
        let mut w = widget(false, false);
        assert!(!press(&mut w, KeyCode::Left));
        assert!(!press(&mut w, KeyCode::Right));
        assert_eq!(w.active_descendant_id(), "b");
    }

    #[test]
    fn horizontal_ltr_left_right() {
        let mut w = widget(true, false);
        assert!(press(&mut w, KeyCode::Right));
        assert_eq!(w.active_descendant_id(), "c");
        assert!(press(&mut w, KeyCode::Left));
        assert_eq!(w.active_descendant_id(), "b");
    }

    #[test]
    fn horizontal_ignores_up_down() {
        let mut w = widget(true, false);
        assert!(!press(&mut w, KeyCode::Up));
        assert!(!press(&mut w, KeyCode::Down));
        assert_eq!(w.active_descendant_id(), "b");
    }

    #[test]
    fn horizontal_rtl_swaps_left_right() {
        let mut w = widget(true, true);
        assert!(press(&mut w, KeyCode::Left));
        assert_eq!(w.active_descendant_id(), "c");
        assert!(press(&mut w, KeyCode::Right));
        assert_eq!(w.active_descendant_id(), "b");
        assert!(press(&mut w, KeyCode::Right));
        assert_eq!(w.active_descendant_id(), "a");
    }

    #[test]
    fn vertical_rtl_still_maps_left_right() {
        let mut w = widget(false, true);
        assert!(press(&mut w, KeyCode::Left));
        assert_eq!(w.active_descendant_id(), "c");
        assert!(press(&mut w, KeyCode::Down));
        assert_eq!(w.active_descendant_id(), "a");
    }

    #[test]
    fn unmapped_keys_pass_through() {
        let mut w = widget(false, false);
        for code in [KeyCode::Home, KeyCode::End, KeyCode::Char('a'), KeyCode::Enter] {
            assert!(!press(&mut w, code));
        }
        assert_eq!(w.active_descendant_id(), "b");
    }

    #[test]
    fn custom_bindings() {
        let mut keys = ListNavigationKeys::default();
        keys.down.keys.push(KeyCombination::new(KeyCode::Char('j')));
        let scheme = ListNavigation::with_keys(keys);
        assert_eq!(
            scheme.direction(&key(KeyCode::Char('j')), false, false),
            Some(Direction::Forward)
        );
        assert_eq!(scheme.direction(&key(KeyCode::Char('k')), false, false), None);
    }
}
