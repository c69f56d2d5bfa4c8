//! A selectable item inside a listbox.

use taro_core::{CanBeDisabled, CanBeSelected, HasId, HasLifecycle, IdSource, UniqueId};

/// A listbox option carrying a host value `T`, such as its label.
///
/// The id is drawn when [`setup`](HasLifecycle::setup) first runs; until then
/// it is empty and the option cannot be told apart from other unset options.
#[derive(Debug)]
pub struct OptionItem<T = ()> {
    uid: UniqueId,
    disabled: bool,
    selected: bool,
    value: T,
}

impl OptionItem {
    /// An enabled, unselected option with no value.
    pub fn new(ids: &IdSource) -> Self {
        Self::with_value(ids, ())
    }
}

impl<T> OptionItem<T> {
    /// An enabled, unselected option carrying `value`.
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

impl<T> HasId for OptionItem<T> {
    fn id(&self) -> &str {
        self.uid.get()
    }
}

impl<T> HasLifecycle for OptionItem<T> {
    fn setup(&mut self) {
        self.uid.assign();
    }
}

impl<T> CanBeDisabled for OptionItem<T> {
    fn disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

impl<T> CanBeSelected for OptionItem<T> {
    fn selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
