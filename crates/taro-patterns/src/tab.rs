//! A single tab inside a tab-list.

use taro_core::{CanBeDisabled, CanBeSelected, HasId, HasLifecycle, IdSource, UniqueId};

/// A tab carrying a host value `T`, such as its title or the panel it shows.
///
/// The selected tab is the one whose panel is visible.
#[derive(Debug)]
pub struct Tab<T = ()> {
    uid: UniqueId,
    disabled: bool,
    selected: bool,
    value: T,
}

impl Tab {
    /// An enabled, unselected tab with no value.
    pub fn new(ids: &IdSource) -> Self {
        Self::with_value(ids, ())
    }
}

impl<T> Tab<T> {
    /// An enabled, unselected tab carrying `value`.
    pub fn with_value(ids: &IdSource, value: T) -> Self {
        Self {
            uid: UniqueId::new(ids),
            disabled: false,
            selected: false,
            value,
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

    /// The host value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the host value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> HasId for Tab<T> {
    fn id(&self) -> &str {
        self.uid.get()
    }
}

impl<T> HasLifecycle for Tab<T> {
    fn setup(&mut self) {
        self.uid.assign();
    }
}

impl<T> CanBeDisabled for Tab<T> {
    fn disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

impl<T> CanBeSelected for Tab<T> {
    fn selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
