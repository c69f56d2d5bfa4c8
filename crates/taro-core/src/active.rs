//! Active-descendant cursor over a list-like control's items.
//!
//! The cursor is an item id, never an index or a reference. The collection
//! may be replaced between any two calls, so the position is recomputed from
//! the id on every access.

use crate::behavior::{CanBeDisabled, Descendant, HasId, HasItems};
use crate::error::PatternError;

/// Direction of a circular scan through the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the collection.
    Forward,
    /// Towards the start of the collection.
    Backward,
}

/// A control with a single logically focused item, such as a listbox or menu.
///
/// Implementors supply storage for the active id; every algorithm is provided.
pub trait HasActiveDescendant: HasItems {
    /// The active item's id, or `""` when nothing is active.
    fn active_descendant_id(&self) -> &str;

    /// Overwrite the stored active id. Prefer [`activate`](Self::activate),
    /// which honors disabled items.
    fn set_active_descendant_id(&mut self, id: String);

    /// Position of the active item in the current collection.
    ///
    /// Returns `None` when nothing is active or the active id names no
    /// current item. With duplicate ids the first match wins, so later
    /// duplicates can be stepped over by navigation but never stay active.
    fn active_index(&self) -> Option<usize> {
        let id = self.active_descendant_id();
        if id.is_empty() {
            return None;
        }
        self.items().iter().position(|item| item.id() == id)
    }

    /// The active item.
    fn active_descendant(&self) -> Result<&Self::Item, PatternError> {
        self.active_index()
            .and_then(|index| self.items().get(index))
            .ok_or(PatternError::NoActiveItem)
    }

    /// Make `item` the active descendant. No-op if the item is disabled.
    fn activate<D>(&mut self, item: &D)
    where
        D: HasId + CanBeDisabled + ?Sized,
    {
        if item.disabled() {
            tracing::trace!("ignoring activation of disabled item {}", item.id());
            return;
        }
        self.set_active_descendant_id(item.id().to_owned());
    }

    /// Activate the item at `index`.
    fn activate_index(&mut self, index: usize) -> Result<(), PatternError> {
        let items = self.items();
        let Some(item) = items.get(index) else {
            return Err(PatternError::IndexOutOfBounds {
                index,
                len: items.len(),
            });
        };
        if item.disabled() {
            tracing::trace!("ignoring activation of disabled item {}", item.id());
            return Ok(());
        }
        let id = item.id().to_owned();
        self.set_active_descendant_id(id);
        Ok(())
    }

    /// Activate the item with the given id.
    fn activate_id(&mut self, id: &str) -> Result<(), PatternError> {
        match self.items().iter().position(|item| item.id() == id) {
            Some(index) => self.activate_index(index),
            None => Err(PatternError::UnknownItem(id.to_owned())),
        }
    }

    /// Clear the cursor so that nothing is active.
    fn clear_active(&mut self) {
        self.set_active_descendant_id(String::new());
    }

    /// Activate the next enabled item, wrapping past the end.
    fn activate_next(&mut self) {
        let start = self.active_index();
        self.activate_closest(start, Direction::Forward);
    }

    /// Activate the previous enabled item, wrapping past the start.
    fn activate_previous(&mut self) {
        let start = self.active_index();
        self.activate_closest(start, Direction::Backward);
    }

    /// Activate the first enabled item.
    fn activate_first(&mut self) {
        self.activate_closest(None, Direction::Forward);
    }

    /// Activate the last enabled item.
    fn activate_last(&mut self) {
        self.activate_closest(None, Direction::Backward);
    }

    /// Activate the closest enabled item from `start` in `direction`.
    ///
    /// The scan is circular and visits each other position at most once.
    /// `None` seeds it from just outside the collection (one before the first
    /// item going forward, one after the last going backward), so every item
    /// is a candidate. When no candidate is enabled the cursor stays put.
    fn activate_closest(&mut self, start: Option<usize>, direction: Direction) {
        if let Some(index) = closest_enabled(self.items(), start, direction) {
            let id = self.items()[index].id().to_owned();
            self.set_active_descendant_id(id);
        }
    }
}

/// Index of the first enabled item reached from `start` in `direction`.
///
/// Items sharing the start item's id are skipped, since activating one of
/// them would resolve straight back to the start.
pub fn closest_enabled<D: Descendant>(
    items: &[D],
    start: Option<usize>,
    direction: Direction,
) -> Option<usize> {
    let len = items.len();
    if len == 0 {
        return None;
    }
    // A stale start index from a shrunk collection is treated as absent.
    let start = start.filter(|&s| s < len);
    let (origin, span) = match (start, direction) {
        (Some(s), _) => (s, len - 1),
        (None, Direction::Forward) => (len - 1, len),
        (None, Direction::Backward) => (0, len),
    };
    let current = start.map(|s| items[s].id());
    (1..=span)
        .map(|step| match direction {
            Direction::Forward => (origin + step) % len,
            Direction::Backward => (origin + len - step) % len,
        })
        .find(|&i| !items[i].disabled() && Some(items[i].id()) != current)
}
