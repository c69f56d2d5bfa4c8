/// Errors produced by descendant and selection operations.
///
/// Every failure is local to the single operation that raised it. Nothing here
/// is transient, so callers should report rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// An index did not address an item in the current collection.
    #[error("index {index} is out of bounds for a collection of {len} items")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },

    /// The widget has no active descendant, or its active id no longer
    /// names an item in the collection.
    #[error("no active item")]
    NoActiveItem,

    /// No item in the current collection carries the given id.
    #[error("no item with id `{0}`")]
    UnknownItem(String),
}
