//! Ordered, swappable keyboard handling.
//!
//! A widget owns a [`KeySchemes`] list. When a key arrives, each
//! [`KeyScheme`] is offered the event in declared order until one reports it
//! handled:
//!
//! ```ignore
//! let schemes = KeySchemes::new()
//!     .with(ListNavigation::default())
//!     .with(ListSelection::default());
//!
//! // Down arrow is claimed by navigation; selection never sees it.
//! let handled = listbox.handle_key(&event)?;
//! ```
//!
//! Order is significant: navigation comes before selection by convention.

use crate::error::PatternError;
use crossterm::event::{KeyEvent, KeyEventKind};
use std::sync::Arc;

/// A stateless strategy mapping key events to actions on a widget.
///
/// Any `Fn(&mut W, &KeyEvent) -> Result<bool, PatternError>` closure is a key
/// scheme too, which is the quickest way to bind extra keys.
pub trait KeyScheme<W: ?Sized>: Send + Sync {
    /// Handle a key press.
    ///
    /// Returns `Ok(true)` if the event mapped to an action, `Ok(false)` to let
    /// the next scheme try.
    fn handle_key(&self, widget: &mut W, event: &KeyEvent) -> Result<bool, PatternError>;

    /// A name for diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<W: ?Sized, F> KeyScheme<W> for F
where
    F: Fn(&mut W, &KeyEvent) -> Result<bool, PatternError> + Send + Sync,
{
    fn handle_key(&self, widget: &mut W, event: &KeyEvent) -> Result<bool, PatternError> {
        self(widget, event)
    }
}

/// An ordered, cheaply cloneable list of key schemes.
///
/// Clones share the same schemes, so several widgets can use one list.
pub struct KeySchemes<W: ?Sized> {
    schemes: Arc<[Arc<dyn KeyScheme<W>>]>,
}

impl<W: ?Sized> KeySchemes<W> {
    /// An empty list. Every event passes through.
    pub fn new() -> Self {
        Self {
            schemes: Arc::from(Vec::new()),
        }
    }

    /// Append a scheme to the end of the list.
    pub fn with<S>(self, scheme: S) -> Self
    where
        S: KeyScheme<W> + 'static,
    {
        let mut schemes: Vec<Arc<dyn KeyScheme<W>>> = self.schemes.iter().cloned().collect();
        schemes.push(Arc::new(scheme));
        Self {
            schemes: schemes.into(),
        }
    }

    /// Number of schemes.
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Scheme names in dispatch order.
    pub fn names(&self) -> Vec<&'static str> {
        self.schemes.iter().map(|s| s.name()).collect()
    }

    /// Offer `event` to each scheme in order, stopping at the first that
    /// handles it.
    ///
    /// Returns `Ok(false)` if no scheme handled the event. Key releases are
    /// never offered to the schemes. A scheme error stops dispatch and is
    /// returned as is.
    pub fn dispatch(&self, widget: &mut W, event: &KeyEvent) -> Result<bool, PatternError> {
        if event.kind == KeyEventKind::Release {
            tracing::trace!("{:?} release ignored", event.code);
            return Ok(false);
        }
        for scheme in self.schemes.iter() {
            if scheme.handle_key(widget, event)? {
                tracing::debug!("{:?} handled by {}", event.code, scheme.name());
                return Ok(true);
            }
        }
        tracing::trace!("{:?} not handled", event.code);
        Ok(false)
    }
}

impl<W: ?Sized> Clone for KeySchemes<W> {
    fn clone(&self) -> Self {
        Self {
            schemes: Arc::clone(&self.schemes),
        }
    }
}

impl<W: ?Sized> Default for KeySchemes<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ?Sized> std::fmt::Debug for KeySchemes<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// A control that dispatches raw key input through its key schemes.
pub trait HasKeySchemes {
    /// The schemes to try, in order.
    fn key_schemes(&self) -> KeySchemes<Self>;

    /// Dispatch a key event. See [`KeySchemes::dispatch`].
    fn handle_key(&mut self, event: &KeyEvent) -> Result<bool, PatternError> {
        self.key_schemes().dispatch(self, event)
    }
}
