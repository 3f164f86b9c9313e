use crate::navigator::ActiveItemChanged;
use crate::selection::SelectionChanged;
use std::hash::Hash;

/// Something the host may want to react to, queued in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<V: Eq + Hash> {
    /// The active item moved or was cleared.
    ActiveItemChanged(ActiveItemChanged<V>),
    /// The selection set changed through a user gesture or a registry change.
    SelectionChanged(SelectionChanged<V>),
    /// The user asked to expand the active node.
    ExpandRequested {
        /// Index of the node.
        index: usize,
        /// Value of the node.
        value: V,
    },
    /// The user asked to collapse the active node.
    CollapseRequested {
        /// Index of the node.
        index: usize,
        /// Value of the node.
        value: V,
    },
    /// Focus is leaving the widget.
    TabOut,
}
