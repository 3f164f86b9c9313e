//! Focusable items and a ready-to-use default item.
//!
//! The navigator and selection coordinator never own items. They work on
//! whatever slice the host hands them and only talk to items through the
//! [`Focusable`] capability set: disabled state, a typeahead label, an
//! identity value, an optional rendered height, and the styling hooks that
//! fire when an item becomes active, inactive, selected or deselected.
//!
//! ```rust
//! use bubbletea_keynav::item::{DefaultItem, Focusable};
//!
//! let mut item = DefaultItem::new("alpha", "Alpha");
//! assert_eq!(item.label(), "Alpha");
//! item.set_active_styles();
//! assert!(item.is_active());
//! ```

use lipgloss_extras::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Capability set every navigable item must provide.
pub trait Focusable {
    /// Identity of the item. Selection and active-item tracking are keyed by
    /// this value, so it must stay stable while the item is in the registry.
    type Value: Clone + Eq + Hash + Debug;

    /// The identity value of this item.
    fn value(&self) -> Self::Value;

    /// Text matched by typeahead.
    fn label(&self) -> String;

    /// Disabled items are skipped by navigation and range selection.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Rendered height in rows, if known. Used to derive the page size.
    fn height(&self) -> Option<u16> {
        None
    }

    /// Called when the item becomes the active item.
    fn set_active_styles(&mut self) {}

    /// Called when the item stops being the active item.
    fn set_inactive_styles(&mut self) {}

    /// Called whenever the item's selection state is (re)applied.
    fn set_selected(&mut self, _selected: bool) {}
}

/// Styles used by [`DefaultItem::view`].
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Plain item.
    pub normal: Style,
    /// Item holding logical focus.
    pub active: Style,
    /// Selected item.
    pub selected: Style,
    /// Disabled item.
    pub disabled: Style,
    /// Marker rendered in front of selected items.
    pub selected_marker: String,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        Self {
            normal: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            active: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            selected: Style::new().foreground(AdaptiveColor {
                Light: "#AD58B4",
                Dark: "#AD58B4",
            }),
            disabled: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#4D4D4D",
                })
                .faint(true),
            selected_marker: "✓ ".to_string(),
        }
    }
}

/// A simple string item: value, label, disabled flag, and the visual state
/// recorded by the styling hooks.
#[derive(Debug, Clone)]
pub struct DefaultItem {
    /// Identity value.
    pub value: String,
    /// Display label, also used for typeahead.
    pub label: String,
    /// Whether navigation should skip this item.
    pub disabled: bool,
    /// Rendered height in rows.
    pub height: Option<u16>,
    active: bool,
    selected: bool,
}

impl DefaultItem {
    /// Creates an enabled item.
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            disabled: false,
            height: Some(1),
            active: false,
            selected: false,
        }
    }

    /// Marks the item disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets the rendered height.
    pub fn with_height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    /// Whether the active styling is currently applied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the selected styling is currently applied.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Renders the label, truncated to `width` columns (0 means unlimited).
    pub fn view(&self, styles: &DefaultItemStyles, width: usize) -> String {
        let mut text = String::new();
        if self.selected {
            text.push_str(&styles.selected_marker);
        } else {
            text.push_str(&" ".repeat(styles.selected_marker.width()));
        }
        text.push_str(&self.label);
        let text = truncate(&text, width);

        let style = if self.disabled {
            &styles.disabled
        } else if self.active {
            &styles.active
        } else if self.selected {
            &styles.selected
        } else {
            &styles.normal
        };
        style.render(&text)
    }
}

impl std::fmt::Display for DefaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Focusable for DefaultItem {
    type Value = String;

    fn value(&self) -> String {
        self.value.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn height(&self) -> Option<u16> {
        self.height
    }

    fn set_active_styles(&mut self) {
        self.active = true;
    }

    fn set_inactive_styles(&mut self) {
        self.active = false;
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

fn truncate(s: &str, width: usize) -> String {
    if width == 0 || s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styling_hooks_record_state() {
        let mut item = DefaultItem::new("a", "Alpha");
        assert!(!item.is_active());
        item.set_active_styles();
        assert!(item.is_active());
        item.set_inactive_styles();
        assert!(!item.is_active());
        item.set_selected(true);
        assert!(item.is_selected());
    }

    #[test]
    fn test_truncate_respects_width() {
        assert_eq!(truncate("abcdef", 0), "abcdef");
        assert_eq!(truncate("abcdef", 6), "abcdef");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn test_view_contains_label() {
        let item = DefaultItem::new("a", "Alpha");
        assert!(item.view(&DefaultItemStyles::default(), 0).contains("Alpha"));
    }
}
