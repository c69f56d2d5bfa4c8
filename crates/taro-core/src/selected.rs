//! Single and multiple selection layered on the active-descendant cursor.

use crate::active::HasActiveDescendant;
use crate::behavior::{CanBeSelected, HasId};
use crate::error::PatternError;

/// A control with one or more selected items, such as a listbox.
///
/// Items are addressed by id. Selection state lives on the items themselves;
/// the control only stores whether several may be selected at once.
pub trait HasSelectedDescendant: HasActiveDescendant
where
    Self::Item: CanBeSelected,
{
    /// Whether more than one item may be selected.
    fn multiple(&self) -> bool;

    /// Allow or forbid selecting more than one item.
    fn set_multiple(&mut self, multiple: bool);

    /// Select the item with the given id.
    ///
    /// In single-selection mode every other item is deselected first. An
    /// unknown id is an error and leaves the selection untouched.
    fn select(&mut self, id: &str) -> Result<(), PatternError> {
        let index = position_of(self.items(), id)?;
        if !self.multiple() {
            for item in self.items_mut() {
                item.set_selected(false);
            }
        }
        self.items_mut()[index].set_selected(true);
        Ok(())
    }

    /// Deselect the item with the given id. Deselecting twice is harmless.
    fn deselect(&mut self, id: &str) -> Result<(), PatternError> {
        let index = position_of(self.items(), id)?;
        self.items_mut()[index].set_selected(false);
        Ok(())
    }

    /// Flip the selection of the active item.
    fn toggle_active_selection(&mut self) -> Result<(), PatternError> {
        let active = self.active_descendant()?;
        let (id, selected) = (active.id().to_owned(), active.selected());
        if selected {
            self.deselect(&id)
        } else {
            self.select(&id)
        }
    }

    /// Ids of the selected items, in collection order.
    fn selected_ids(&self) -> Vec<String> {
        self.items()
            .iter()
            .filter(|item| item.selected())
            .map(|item| item.id().to_owned())
            .collect()
    }
}

fn position_of<I: HasId>(items: &[I], id: &str) -> Result<usize, PatternError> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| PatternError::UnknownItem(id.to_owned()))
}
