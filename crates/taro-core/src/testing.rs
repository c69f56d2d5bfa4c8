//! Headless fixtures for exercising capabilities and key schemes.
//!
//! Nothing here needs a real host environment. [`TestHost`] stands in for an
//! adapter that owns items and focus, [`TestWidget`] is a ready-made list-like
//! control with every core capability, and [`key`] builds key events.
//!
//! # Example
//!
//! ```
//! use taro_core::active::HasActiveDescendant;
//! use taro_core::scheme::HasKeySchemes;
//! use taro_core::testing::{key, TestItem, TestWidget};
//! use crossterm::event::KeyCode;
//!
//! let mut w = TestWidget::new(vec![TestItem::new("a"), TestItem::new("b")]).with_navigation();
//! w.activate_first();
//! w.handle_key(&key(KeyCode::Down)).unwrap();
//! assert_eq!(w.active_descendant_id(), "b");
//! ```

use crate::active::HasActiveDescendant;
use crate::behavior::{
    AffectedByRtl, CanBeDisabled, CanBeFocused, CanBeSelected, Descendant, HasId, HasItems,
    HasLifecycle, HasOrientation,
};
use crate::scheme::{HasKeySchemes, KeySchemes};
use crate::schemes::{ListNavigation, ListSelection};
use crate::selected::HasSelectedDescendant;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// Build a key press event with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// A plain selectable item with a fixed id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    /// Fixed id, never reassigned.
    pub id: String,
    /// Disabled flag.
    pub disabled: bool,
    /// Selected flag.
    pub selected: bool,
}

impl TestItem {
    /// An enabled, unselected item.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            selected: false,
        }
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the selected flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl HasId for TestItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CanBeDisabled for TestItem {
    fn disabled(&self) -> bool {
        self.disabled
    }
    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

impl CanBeSelected for TestItem {
    fn selected(&self) -> bool {
        self.selected
    }
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// A host that owns a plain `Vec` of items and records focus and lifecycle
/// calls.
#[derive(Debug, Clone)]
pub struct TestHost<I = TestItem> {
    /// The host's collection. Tests may mutate it freely between calls.
    pub items: Vec<I>,
    /// Set by `focus`, cleared by `blur`.
    pub focused: bool,
    /// Reported tab-order position.
    pub tab_index: i32,
    /// Number of `setup` calls received.
    pub setup_calls: usize,
    /// Number of `teardown` calls received.
    pub teardown_calls: usize,
}

impl<I> TestHost<I> {
    /// An unfocused host with tab index 0 owning `items`.
    pub fn new(items: Vec<I>) -> Self {
        Self {
            items,
            focused: false,
            tab_index: 0,
            setup_calls: 0,
            teardown_calls: 0,
        }
    }
}

impl<I: Descendant> HasItems for TestHost<I> {
    type Item = I;

    fn items(&self) -> &[I] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut [I] {
        &mut self.items
    }
}

impl<I> CanBeFocused for TestHost<I> {
    fn is_focused(&self) -> bool {
        self.focused
    }
    fn tab_index(&self) -> i32 {
        self.tab_index
    }
    fn focus(&mut self) {
        self.focused = true;
    }
    fn blur(&mut self) {
        self.focused = false;
    }
}

impl<I> HasLifecycle for TestHost<I> {
    fn setup(&mut self) {
        self.setup_calls += 1;
    }
    fn teardown(&mut self) {
        self.teardown_calls += 1;
    }
}

/// A list-like control implementing every core capability over a `Vec` of
/// [`TestItem`]s.
///
/// Starts vertical, LTR, single-select, with no key schemes.
pub struct TestWidget {
    /// The widget's collection.
    pub items: Vec<TestItem>,
    /// Stored active id, `""` when nothing is active.
    pub active: String,
    /// Multiple-selection flag.
    pub multiple: bool,
    /// Orientation flag.
    pub horizontal: bool,
    /// Text-direction flag.
    pub rtl: bool,
    /// Key schemes tried by `handle_key`.
    pub schemes: KeySchemes<TestWidget>,
}

impl TestWidget {
    /// A widget over `items` with nothing active.
    pub fn new(items: Vec<TestItem>) -> Self {
        Self {
            items,
            active: String::new(),
            multiple: false,
            horizontal: false,
            rtl: false,
            schemes: KeySchemes::new(),
        }
    }

    /// Append [`ListNavigation`] to the key schemes.
    pub fn with_navigation(mut self) -> Self {
        self.schemes = self.schemes.with(ListNavigation::default());
        self
    }

    /// Append [`ListSelection`] to the key schemes.
    pub fn with_selection(mut self) -> Self {
        self.schemes = self.schemes.with(ListSelection::default());
        self
    }
}

impl HasItems for TestWidget {
    type Item = TestItem;

    fn items(&self) -> &[TestItem] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut [TestItem] {
        &mut self.items
    }
}

impl HasActiveDescendant for TestWidget {
    fn active_descendant_id(&self) -> &str {
        &self.active
    }

    fn set_active_descendant_id(&mut self, id: String) {
        self.active = id;
    }
}

impl HasSelectedDescendant for TestWidget {
    fn multiple(&self) -> bool {
        self.multiple
    }

    fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
    }
}

impl HasOrientation for TestWidget {
    fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
    }
}

impl AffectedByRtl for TestWidget {
    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }
}

impl HasKeySchemes for TestWidget {
    fn key_schemes(&self) -> KeySchemes<Self> {
        self.schemes.clone()
    }
}
