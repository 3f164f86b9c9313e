use thiserror::Error;

/// A programmatic selection value did not match the selection mode.
///
/// Returned before any state is touched; the previous selection is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelectionValueError {
    /// A single value was written while multiple selection is enabled.
    #[error("value must be a list when multiple selection is enabled")]
    NotAList,
    /// A list was written while only a single value can be selected.
    #[error("expected a single value, got a list of {len}")]
    NotAScalar {
        /// Length of the rejected list.
        len: usize,
    },
}
