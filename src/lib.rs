#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-keynav/")]

//! # bubbletea-keynav
//!
//! Accessible keyboard navigation and selection for composite terminal
//! widgets (lists, trees, menus) built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate separates *behaviour* from *rendering*. Items only need to
//! implement [`Focusable`]; the crate decides which item is active, which
//! items are selected, and when styling hooks fire.
//!
//! - [`navigator::Navigator`] tracks the active item and moves it for arrow,
//!   paging, home/end and typeahead input, skipping disabled items.
//! - [`selection::Coordinator`] turns navigation plus shift/ctrl into
//!   single, toggle and range selection, with an optional guard that keeps the
//!   last selected item selected.
//! - [`command::CommandKeyMap`] maps key presses to [`command::Command`]s
//!   according to orientation and text direction.
//! - [`focus_escape::FocusEscape`] lets Tab leave the widget.
//! - [`tree_selection::Model`] combines all of the above into a ready-made
//!   widget with an event queue.
//!
//! ## Focus Management
//!
//! Widgets implement the [`Component`] trait:
//!
//! ```rust
//! use bubbletea_keynav::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut tree = TreeSelection::new(vec![DefaultItem::new("a", "A")], TreeSelectionOptions::default());
//! handle_focus(&mut tree);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_keynav::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     menu: TreeSelection<DefaultItem>,
//!     styles: DefaultItemStyles,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items = vec![
//!             DefaultItem::new("new", "New file"),
//!             DefaultItem::new("open", "Open…"),
//!             DefaultItem::new("quit", "Quit"),
//!         ];
//!         let options = TreeSelectionOptions::default().with_selection_mode(SelectionMode::Single);
//!         let mut menu = TreeSelection::new(items, options);
//!         let cmd = menu.focus();
//!         (Self { menu, styles: DefaultItemStyles::default() }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         let cmd = self.menu.update(msg);
//!         for event in self.menu.drain_events() {
//!             if let TreeSelectionEvent::SelectionChanged(change) = event {
//!                 let _chosen = change.single().cloned();
//!             }
//!         }
//!         cmd
//!     }
//!
//!     fn view(&self) -> String {
//!         self.menu.view(&self.styles)
//!     }
//! }
//! ```

pub mod command;
pub mod focus_escape;
pub mod item;
pub mod key;
pub mod navigator;
pub mod selection;
pub mod tree_selection;

use bubbletea_rs::Cmd;

/// Core trait for components that take keyboard focus.
///
/// - `focus()` marks the component focused and may return a command.
/// - `blur()` clears the focused state and any focus-related state.
/// - `focused()` reports the current state.
///
/// ```rust
/// use bubbletea_keynav::prelude::*;
///
/// let mut tree = TreeSelection::new(vec![DefaultItem::new("a", "A")], TreeSelectionOptions::default());
/// assert!(!tree.focused());
///
/// tree.focus();
/// assert!(tree.focused());
/// assert_eq!(tree.active_index(), Some(0));
///
/// tree.blur();
/// assert!(!tree.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use command::{Command, CommandKeyMap, CommandMsg};
pub use focus_escape::{FocusEscape, RestoreTabIndexMsg};
pub use item::{DefaultItem, DefaultItemStyles, Focusable};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use navigator::{
    ActiveItemChanged, Arrow, Navigator, Orientation, TextDirection, TypeaheadTimeoutMsg,
};
pub use selection::{
    Coordinator as SelectionCoordinator, InvalidSelectionValueError, Modifiers, SelectionChanged,
    SelectionMode, SelectionValue,
};
pub use tree_selection::{
    Event as TreeSelectionEvent, Model as TreeSelection, Options as TreeSelectionOptions,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_keynav::prelude::*;
///
/// let options = TreeSelectionOptions::default().with_selection_mode(SelectionMode::MultipleRange);
/// let tree = TreeSelection::new(vec![DefaultItem::new("a", "A")], options);
/// assert_eq!(tree.len(), 1);
/// ```
pub mod prelude {
    pub use crate::command::{Command, CommandKeyMap, CommandMsg};
    pub use crate::item::{DefaultItem, DefaultItemStyles, Focusable};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::navigator::{ActiveItemChanged, Navigator, Orientation, TextDirection};
    pub use crate::selection::{
        Coordinator as SelectionCoordinator, InvalidSelectionValueError, Modifiers,
        SelectionChanged, SelectionMode, SelectionValue,
    };
    pub use crate::tree_selection::{
        Event as TreeSelectionEvent, Model as TreeSelection, Options as TreeSelectionOptions,
    };
    pub use crate::Component;
}
