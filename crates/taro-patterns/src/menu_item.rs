//! A command inside a menu.

use taro_core::{CanBeDisabled, HasId, HasLifecycle, IdSource, UniqueId};

/// A menu entry carrying a host value `T`, typically the command it runs.
///
/// Menu items cannot be selected; activating one is the host's cue to run it.
#[derive(Debug)]
pub struct MenuItem<T = ()> {
    uid: UniqueId,
    disabled: bool,
    value: T,
}

impl MenuItem {
    /// An enabled item with no value.
    pub fn new(ids: &IdSource) -> Self {
        Self::with_value(ids, ())
    }
}

impl<T> MenuItem<T> {
    /// An enabled item carrying `value`.
    pub fn with_value(ids: &IdSource, value: T) -> Self {
        Self {
            uid: UniqueId::new(ids),
            disabled: false,
            value,
        }
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
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

impl<T> HasId for MenuItem<T> {
    fn id(&self) -> &str {
        self.uid.get()
    }
}

impl<T> HasLifecycle for MenuItem<T> {
    fn setup(&mut self) {
        self.uid.assign();
    }
}

impl<T> CanBeDisabled for MenuItem<T> {
    fn disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
