//! Construction options for the tree selection widget.

use crate::navigator::{Orientation, TextDirection, DEFAULT_TYPEAHEAD_TIMEOUT};
use crate::selection::SelectionMode;
use std::time::Duration;

/// Options fixed when a [`Model`](super::Model) is created.
///
/// Built with `with_*` methods over [`Options::default`]. With the `serde`
/// feature enabled options can be loaded from a config file; missing fields
/// take their defaults.
///
/// ```rust
/// use bubbletea_keynav::selection::SelectionMode;
/// use bubbletea_keynav::tree_selection::Options;
///
/// let opts = Options::default().with_selection_mode(SelectionMode::MultipleToggle);
/// assert!(!opts.auto_select);
/// assert!(!opts.no_unselect_last);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Which arrows move the active item.
    pub orientation: Orientation,
    /// Reading direction for horizontal arrows.
    pub direction: TextDirection,
    /// Continue from the other end when navigation runs off either end.
    pub wrap: bool,
    /// Selection mode.
    pub selection_mode: SelectionMode,
    /// Forbid user gestures from deselecting the only selected item.
    pub no_unselect_last: bool,
    /// Select the active item as navigation moves.
    pub auto_select: bool,
    /// Typeahead reset delay; `None` disables typeahead.
    pub typeahead_timeout: Option<Duration>,
    /// Clear the active item when the widget loses focus.
    pub reset_active_on_blur: bool,
    /// In vertical orientation, Left/Right collapse and expand nodes.
    pub reserve_horizontal_for_tree: bool,
    /// Tab index while the widget is enabled and not empty.
    pub tab_index: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            wrap: false,
            selection_mode: SelectionMode::None,
            no_unselect_last: true,
            auto_select: true,
            typeahead_timeout: Some(DEFAULT_TYPEAHEAD_TIMEOUT),
            reset_active_on_blur: true,
            reserve_horizontal_for_tree: true,
            tab_index: 0,
        }
    }
}

impl Options {
    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the reading direction.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Enables or disables wrapping.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Sets the selection mode.
    ///
    /// `MultipleToggle` behaves like a list of checkboxes, so it also turns
    /// `auto_select` and `no_unselect_last` off. Call their setters afterwards
    /// to turn them back on.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        if mode == SelectionMode::MultipleToggle {
            self.auto_select = false;
            self.no_unselect_last = false;
        }
        self
    }

    /// Sets the deselect-last guard.
    pub fn with_no_unselect_last(mut self, guard: bool) -> Self {
        self.no_unselect_last = guard;
        self
    }

    /// Sets whether selection follows navigation.
    pub fn with_auto_select(mut self, auto_select: bool) -> Self {
        self.auto_select = auto_select;
        self
    }

    /// Sets the typeahead reset delay, or disables typeahead with `None`.
    pub fn with_typeahead_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.typeahead_timeout = timeout;
        self
    }

    /// Sets whether blur clears the active item.
    pub fn with_reset_active_on_blur(mut self, reset: bool) -> Self {
        self.reset_active_on_blur = reset;
        self
    }

    /// Sets whether Left/Right are reserved for expand/collapse.
    pub fn with_tree_keys(mut self, reserve: bool) -> Self {
        self.reserve_horizontal_for_tree = reserve;
        self
    }

    /// Sets the resting tab index.
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }
}
