//! A focusable tree or list widget with keyboard navigation and selection.
//!
//! [`Model`] owns its items and wires the pieces of this crate together:
//!
//! | Input                       | Handled by |
//! |-----------------------------|------------|
//! | arrows, home/end, pgup/pgdn | [`Navigator`](crate::navigator::Navigator), then the selection rules |
//! | printable characters        | typeahead |
//! | space / enter               | [`Coordinator::confirm_at`](crate::selection::Coordinator::confirm_at) |
//! | left / right (vertical)     | [`Event::ExpandRequested`] / [`Event::CollapseRequested`] |
//! | tab / shift+tab             | [`FocusEscape`](crate::focus_escape::FocusEscape) |
//!
//! The widget does not know about tree structure. Expanding a node is the
//! host's job: react to the request event, then call [`Model::set_items`]
//! with the new visible rows. Active item and selection follow their values
//! across the change.
//!
//! ```rust
//! use bubbletea_keynav::item::DefaultItem;
//! use bubbletea_keynav::tree_selection::{Event, Model, Options};
//! use bubbletea_keynav::Component;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut tree = Model::new(vec![DefaultItem::new("src", "src/")], Options::default());
//! tree.focus();
//! tree.drain_events();
//!
//! tree.update(Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE }));
//! for event in tree.drain_events() {
//!     if let Event::ExpandRequested { value, .. } = event {
//!         let mut rows = vec![DefaultItem::new(&value, "src/")];
//!         rows.push(DefaultItem::new("src/lib.rs", "  lib.rs"));
//!         tree.set_items(rows);
//!     }
//! }
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.active_index(), Some(0));
//! ```

mod events;
mod model;
mod options;

pub use events::Event;
pub use model::Model;
pub use options::Options;
