//! Orientation, direction and event types used by the navigator.

/// Which arrow keys move the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Up/Down move; Left/Right are left to the host.
    #[default]
    Vertical,
    /// Left/Right move; Up/Down are ignored.
    Horizontal,
    /// All four arrows move.
    Both,
}

impl Orientation {
    /// Whether Up/Down arrows navigate.
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical | Orientation::Both)
    }

    /// Whether Left/Right arrows navigate.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal | Orientation::Both)
    }
}

/// Reading direction for horizontal navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextDirection {
    /// Right arrow moves forward.
    #[default]
    Ltr,
    /// Left arrow moves forward.
    Rtl,
}

/// A raw arrow key, before orientation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// Emitted whenever the active item changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveItemChanged<V> {
    /// Index that was active before the change.
    pub previous_index: Option<usize>,
    /// Index that is active now, `None` when focus was cleared.
    pub new_index: Option<usize>,
    /// Value of the newly active item.
    pub value: Option<V>,
}
