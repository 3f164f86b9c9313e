//! Selection modes, values and events.

use std::collections::HashSet;
use std::hash::Hash;

/// How many items can be selected and how modifiers combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectionMode {
    /// Navigation only, nothing is ever selected.
    #[default]
    None,
    /// At most one selected item.
    Single,
    /// Checkbox style: items are toggled individually.
    MultipleToggle,
    /// Keyboard style: selection follows focus, shift extends a range.
    MultipleRange,
}

impl SelectionMode {
    /// Whether more than one item may be selected.
    pub fn is_multiple(self) -> bool {
        matches!(self, SelectionMode::MultipleToggle | SelectionMode::MultipleRange)
    }
}

/// Modifier keys held while a command was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift was held.
    pub shift: bool,
    /// Ctrl (or the platform's toggle modifier) was held.
    pub ctrl: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    /// Shift only.
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    /// Ctrl only.
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}

/// What caused a selection update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The active item moved (arrow, page, home/end, typeahead).
    Navigation,
    /// The item was explicitly confirmed (click, space, enter).
    Confirm,
}

/// A programmatic selection value, as a form layer would write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue<V> {
    /// Nothing selected.
    Empty,
    /// One value; valid for single selection.
    Single(V),
    /// Several values; required for multiple selection.
    Multiple(Vec<V>),
}

/// Emitted whenever the selection set changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged<V: Eq + Hash> {
    /// The complete selection after the change.
    pub selected: HashSet<V>,
}

impl<V: Eq + Hash> SelectionChanged<V> {
    /// The selected value when exactly one item is selected.
    pub fn single(&self) -> Option<&V> {
        if self.selected.len() == 1 {
            self.selected.iter().next()
        } else {
            None
        }
    }
}
