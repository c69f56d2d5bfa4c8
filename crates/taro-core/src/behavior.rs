//! Capability traits that patterns are composed from.
//!
//! Each trait contributes exactly one field or hook pair. A pattern type
//! implements the set it needs; the descendant engines in
//! [`active`](crate::active) and [`selected`](crate::selected) are built on
//! top of these.

/// A control that has a unique id.
pub trait HasId {
    /// The control's id. Empty until assigned.
    fn id(&self) -> &str;
}

/// A control that can be disabled.
pub trait CanBeDisabled {
    /// Whether the control is disabled.
    fn disabled(&self) -> bool;
    /// Enable or disable the control.
    fn set_disabled(&mut self, disabled: bool);
}

/// A control that can be selected, such as an option or a tab.
pub trait CanBeSelected {
    /// Whether the control is selected.
    fn selected(&self) -> bool;
    /// Select or deselect the control.
    fn set_selected(&mut self, selected: bool);
}

/// Setup and teardown hooks.
///
/// Both hooks default to doing nothing. Composed types override them and
/// call through to the wrapped type's hook after their own work, so every
/// layer of a pattern gets a chance to run.
pub trait HasLifecycle {
    /// Acquire external resources and initialize deferred state.
    fn setup(&mut self) {}

    /// Release external resources. State fields are left untouched.
    fn teardown(&mut self) {}
}

/// A control that can be laid out horizontally or vertically.
pub trait HasOrientation {
    /// `true` for horizontal, `false` for vertical.
    fn is_horizontal(&self) -> bool;
    /// Set the orientation.
    fn set_horizontal(&mut self, horizontal: bool);
}

/// A control whose interaction depends on the locale text direction.
pub trait AffectedByRtl {
    /// `true` when the text direction is right-to-left.
    fn is_rtl(&self) -> bool;
    /// Set the text direction.
    fn set_rtl(&mut self, rtl: bool);
}

/// A control that can take keyboard focus.
///
/// Focus lives in the host environment, so these are always supplied by the
/// host rather than implemented by the core.
pub trait CanBeFocused {
    /// Whether the control currently has focus.
    fn is_focused(&self) -> bool;
    /// The control's position in the tab order.
    fn tab_index(&self) -> i32;
    /// Move focus to the control.
    fn focus(&mut self);
    /// Remove focus from the control.
    fn blur(&mut self);
}

/// An item that can live in a list-like control: it has an id and can be
/// disabled.
///
/// Implemented automatically for every type with both capabilities.
pub trait Descendant: HasId + CanBeDisabled {}

impl<T: HasId + CanBeDisabled + ?Sized> Descendant for T {}

/// A control that owns an ordered collection of items.
///
/// The collection is fetched anew for every operation and may change between
/// any two calls. Implementations must not assume callers cache it.
pub trait HasItems {
    /// The item type.
    type Item: Descendant;

    /// The current items in order.
    fn items(&self) -> &[Self::Item];

    /// Mutable access to the current items. Used to flip per-item flags,
    /// never to change membership.
    fn items_mut(&mut self) -> &mut [Self::Item];
}
