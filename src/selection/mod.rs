//! Selection state layered on top of active-item navigation.
//!
//! The [`Coordinator`] decides, for each confirmed active item, which items'
//! selection state changes. The decision is made by [`Gesture::decide`], a
//! small table over `{mode, auto_select, trigger, shift, ctrl}`, and then
//! applied atomically; a change event is produced only when the resulting
//! set differs from the previous one.
//!
//! The deselect-last guard (`no_unselect_last`) stops a user gesture from
//! emptying a one-element selection. Programmatic writes (`write_value`,
//! `clear`) are not subject to it.
//!
//! ```rust
//! use bubbletea_keynav::item::DefaultItem;
//! use bubbletea_keynav::selection::{Coordinator, Modifiers, SelectionMode};
//!
//! let mut items = vec![
//!     DefaultItem::new("a", "A"),
//!     DefaultItem::new("b", "B"),
//!     DefaultItem::new("c", "C"),
//!     DefaultItem::new("d", "D"),
//! ];
//! let mut selection = Coordinator::new(SelectionMode::MultipleRange, true, true);
//! selection.confirm_at(&mut items, 0, Modifiers::NONE);
//! let change = selection.confirm_at(&mut items, 3, Modifiers::SHIFT).unwrap();
//! assert_eq!(change.selected.len(), 4);
//! ```

mod error;
mod model;
mod types;

pub use error::InvalidSelectionValueError;
pub use model::{Coordinator, Gesture};
pub use types::{Modifiers, SelectionChanged, SelectionMode, SelectionValue, Trigger};
