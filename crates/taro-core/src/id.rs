//! Unique id generation and assignment.
//!
//! Ids come from an [`IdGenerator`] injected when a pattern is built. The
//! default [`SequentialIds`] hands out `cc0`, `cc1`, ... from an atomic
//! counter. Uniqueness is scoped to one generator, so a host shares a single
//! [`IdSource`] across every widget and item it creates.

use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Produces ids that are unique for the lifetime of the generator.
pub trait IdGenerator: Send + Sync {
    /// Return a fresh id.
    fn next_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// A shared handle to an id generator.
pub type IdSource = Arc<dyn IdGenerator>;

/// Monotonic `prefix + N` ids backed by an atomic counter.
///
/// # Example
///
/// ```
/// use taro_core::id::{IdGenerator, SequentialIds};
///
/// let ids = SequentialIds::new();
/// assert_eq!(ids.next_id(), "cc0");
/// assert_eq!(ids.next_id(), "cc1");
/// ```
#[derive(Debug)]
pub struct SequentialIds {
    prefix: Cow<'static, str>,
    next: AtomicU64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    /// Create a generator producing `cc0`, `cc1`, ...
    pub fn new() -> Self {
        Self::with_prefix("cc")
    }

    /// Create a generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }

    /// Create a default generator wrapped as a shareable [`IdSource`].
    pub fn shared() -> IdSource {
        Arc::new(Self::new())
    }

    /// The number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

/// The unique-id capability: an id slot filled once, during setup.
///
/// Patterns embed this and call [`assign`](UniqueId::assign) from their
/// `setup` hook before delegating to the wrapped host.
pub struct UniqueId {
    id: String,
    source: IdSource,
}

impl UniqueId {
    /// Create an unassigned id slot drawing from `source`.
    pub fn new(source: &IdSource) -> Self {
        Self {
            id: String::new(),
            source: Arc::clone(source),
        }
    }

    /// Assign an id if none has been assigned yet.
    ///
    /// Returns `true` when a new id was drawn. Repeated calls keep the first
    /// id.
    pub fn assign(&mut self) -> bool {
        if self.is_assigned() {
            return false;
        }
        self.id = self.source.next_id();
        tracing::debug!("assigned id {}", self.id);
        true
    }

    /// Whether an id has been assigned.
    pub fn is_assigned(&self) -> bool {
        !self.id.is_empty()
    }

    /// The assigned id, or `""` before setup.
    pub fn get(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Debug for UniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueId").field("id", &self.id).finish()
    }
}
