//! The navigation command vocabulary and the key map that produces it.
//!
//! Widgets never look at raw keys directly. A [`CommandKeyMap`] turns each
//! `KeyMsg` into a [`CommandMsg`] (a [`Command`] plus the [`Modifiers`] held),
//! taking orientation and text direction into account. Hosts that drive a
//! widget from something other than the keyboard can send `CommandMsg`s
//! themselves.
//!
//! ```rust
//! use bubbletea_keynav::command::{Command, CommandKeyMap};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let keymap = CommandKeyMap::default();
//! let msg = keymap
//!     .command_for(&KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::SHIFT })
//!     .unwrap();
//! assert_eq!(msg.command, Command::MoveNext);
//! assert!(msg.modifiers.shift);
//! ```

use crate::key::{self, KeyMap};
use crate::navigator::{Orientation, TextDirection};
use crate::selection::Modifiers;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A navigation or selection request, independent of the key that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate the next enabled item.
    MoveNext,
    /// Activate the previous enabled item.
    MovePrevious,
    /// Activate the first enabled item.
    MoveFirst,
    /// Activate the last enabled item.
    MoveLast,
    /// Move forward one page.
    MoveNextPage,
    /// Move backward one page.
    MovePreviousPage,
    /// Append a character to the typeahead buffer.
    Typeahead(char),
    /// Confirm the active item (space, enter or click).
    ConfirmSelection {
        /// Shift was held.
        shift: bool,
        /// Ctrl was held.
        ctrl: bool,
    },
    /// Expand the active tree node.
    ExpandNode,
    /// Collapse the active tree node.
    CollapseNode,
    /// Give focus back to the surrounding page.
    TabOut,
}

/// A command together with the modifiers held when it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandMsg {
    /// What to do.
    pub command: Command,
    /// Modifiers that shape the selection effect.
    pub modifiers: Modifiers,
}

impl CommandMsg {
    /// A command issued without modifiers.
    pub fn new(command: Command) -> Self {
        Self {
            command,
            modifiers: Modifiers::NONE,
        }
    }

    /// A command issued with modifiers held.
    pub fn with_modifiers(command: Command, modifiers: Modifiers) -> Self {
        Self { command, modifiers }
    }
}

/// Key bindings for navigation and selection.
///
/// Arrow bindings are raw; which command an arrow produces depends on
/// `orientation`, `direction` and `reserve_horizontal_for_tree`.
#[derive(Debug, Clone)]
pub struct CommandKeyMap {
    /// Up arrow.
    pub up: key::Binding,
    /// Down arrow.
    pub down: key::Binding,
    /// Left arrow.
    pub left: key::Binding,
    /// Right arrow.
    pub right: key::Binding,
    /// Jump to the first item.
    pub first: key::Binding,
    /// Jump to the last item.
    pub last: key::Binding,
    /// Next page.
    pub next_page: key::Binding,
    /// Previous page.
    pub prev_page: key::Binding,
    /// Confirm the active item.
    pub confirm: key::Binding,
    /// Leave the widget.
    pub tab_out: key::Binding,
    /// Which arrows navigate.
    pub orientation: Orientation,
    /// Reading direction for horizontal arrows.
    pub direction: TextDirection,
    /// In vertical orientation, map Left/Right to collapse/expand.
    pub reserve_horizontal_for_tree: bool,
    /// Whether printable characters start typeahead.
    pub typeahead: bool,
}

impl Default for CommandKeyMap {
    fn default() -> Self {
        Self {
            up: key::new_binding(vec![key::with_keys_str(&["up"]), key::with_help("↑", "previous")]),
            down: key::new_binding(vec![key::with_keys_str(&["down"]), key::with_help("↓", "next")]),
            left: key::new_binding(vec![key::with_keys_str(&["left"]), key::with_help("←", "left")]),
            right: key::new_binding(vec![
                key::with_keys_str(&["right"]),
                key::with_help("→", "right"),
            ]),
            first: key::new_binding(vec![key::with_keys_str(&["home"]), key::with_help("home", "first")]),
            last: key::new_binding(vec![key::with_keys_str(&["end"]), key::with_help("end", "last")]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown"]),
                key::with_help("pgdn", "next page"),
            ]),
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup"]),
                key::with_help("pgup", "prev page"),
            ]),
            confirm: key::new_binding(vec![
                key::with_keys_str(&["space", "enter"]),
                key::with_help("space/enter", "select"),
            ]),
            tab_out: key::new_binding(vec![
                key::with_keys_str(&["tab", "shift+tab"]),
                key::with_help("tab", "leave"),
            ]),
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            reserve_horizontal_for_tree: false,
            typeahead: true,
        }
    }
}

impl CommandKeyMap {
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

    /// Reserves Left/Right for expand/collapse in vertical orientation.
    pub fn with_tree_keys(mut self, reserve: bool) -> Self {
        self.reserve_horizontal_for_tree = reserve;
        self
    }

    /// Enables or disables typeahead characters.
    pub fn with_typeahead(mut self, enabled: bool) -> Self {
        self.typeahead = enabled;
        self
    }

    /// Maps a key press to a command. Returns `None` for keys this map does
    /// not handle, including any key held with alt.
    pub fn command_for(&self, msg: &KeyMsg) -> Option<CommandMsg> {
        if msg.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }
        let ctrl = msg.modifiers.contains(KeyModifiers::CONTROL);
        // Shift on a character key is already part of the character.
        let shift = msg.modifiers.contains(KeyModifiers::SHIFT)
            && !matches!(msg.key, KeyCode::Char(c) if c != ' ');
        let modifiers = Modifiers { shift, ctrl };

        let bare = KeyMsg {
            key: msg.key,
            modifiers: KeyModifiers::NONE,
        };
        let command = if self.confirm.matches(&bare) {
            Command::ConfirmSelection { shift, ctrl }
        } else if self.tab_out.matches(&bare) {
            Command::TabOut
        } else if self.first.matches(&bare) {
            Command::MoveFirst
        } else if self.last.matches(&bare) {
            Command::MoveLast
        } else if self.next_page.matches(&bare) {
            Command::MoveNextPage
        } else if self.prev_page.matches(&bare) {
            Command::MovePreviousPage
        } else if self.up.matches(&bare) {
            self.vertical(false)?
        } else if self.down.matches(&bare) {
            self.vertical(true)?
        } else if self.left.matches(&bare) {
            self.horizontal(false)?
        } else if self.right.matches(&bare) {
            self.horizontal(true)?
        } else {
            match msg.key {
                KeyCode::Char(c) if self.typeahead && !ctrl && !c.is_control() => {
                    return Some(CommandMsg::new(Command::Typeahead(c)));
                }
                _ => return None,
            }
        };

        log::trace!("key {:?} -> {:?} {:?}", msg.key, command, modifiers);
        Some(CommandMsg::with_modifiers(command, modifiers))
    }

    fn vertical(&self, down: bool) -> Option<Command> {
        if !self.orientation.is_vertical() {
            return None;
        }
        Some(if down {
            Command::MoveNext
        } else {
            Command::MovePrevious
        })
    }

    fn horizontal(&self, right: bool) -> Option<Command> {
        let forward = right == (self.direction == TextDirection::Ltr);
        if self.orientation.is_horizontal() {
            return Some(if forward {
                Command::MoveNext
            } else {
                Command::MovePrevious
            });
        }
        if self.reserve_horizontal_for_tree {
            return Some(if forward {
                Command::ExpandNode
            } else {
                Command::CollapseNode
            });
        }
        None
    }
}

impl KeyMap for CommandKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        let mut bindings = Vec::new();
        if self.orientation.is_vertical() {
            bindings.extend([&self.up, &self.down]);
        }
        if self.orientation.is_horizontal() || self.reserve_horizontal_for_tree {
            bindings.extend([&self.left, &self.right]);
        }
        bindings.push(&self.confirm);
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            self.short_help(),
            vec![&self.first, &self.last, &self.next_page, &self.prev_page],
            vec![&self.tab_out],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<CommandMsg> {
        CommandKeyMap::default().command_for(&KeyMsg {
            key: code,
            modifiers,
        })
    }

    fn command(keymap: &CommandKeyMap, code: KeyCode) -> Option<Command> {
        keymap
            .command_for(&KeyMsg {
                key: code,
                modifiers: KeyModifiers::NONE,
            })
            .map(|m| m.command)
    }

    #[test]
    fn test_vertical_arrows() {
        let keymap = CommandKeyMap::default();
        assert_eq!(command(&keymap, KeyCode::Down), Some(Command::MoveNext));
        assert_eq!(command(&keymap, KeyCode::Up), Some(Command::MovePrevious));
        assert_eq!(command(&keymap, KeyCode::Left), None);
        assert_eq!(command(&keymap, KeyCode::Right), None);
    }

    #[test]
    fn test_horizontal_arrows_honour_direction() {
        let ltr = CommandKeyMap::default().with_orientation(Orientation::Horizontal);
        assert_eq!(command(&ltr, KeyCode::Right), Some(Command::MoveNext));
        assert_eq!(command(&ltr, KeyCode::Up), None);

        let rtl = ltr.with_direction(TextDirection::Rtl);
        assert_eq!(command(&rtl, KeyCode::Right), Some(Command::MovePrevious));
        assert_eq!(command(&rtl, KeyCode::Left), Some(Command::MoveNext));
    }

    #[test]
    fn test_tree_keys_in_vertical_orientation() {
        let keymap = CommandKeyMap::default().with_tree_keys(true);
        assert_eq!(command(&keymap, KeyCode::Right), Some(Command::ExpandNode));
        assert_eq!(command(&keymap, KeyCode::Left), Some(Command::CollapseNode));

        let both = keymap.with_orientation(Orientation::Both);
        assert_eq!(command(&both, KeyCode::Right), Some(Command::MoveNext));
    }

    #[test]
    fn test_paging_and_jumps() {
        let keymap = CommandKeyMap::default();
        assert_eq!(command(&keymap, KeyCode::Home), Some(Command::MoveFirst));
        assert_eq!(command(&keymap, KeyCode::End), Some(Command::MoveLast));
        assert_eq!(command(&keymap, KeyCode::PageDown), Some(Command::MoveNextPage));
        assert_eq!(command(&keymap, KeyCode::PageUp), Some(Command::MovePreviousPage));
    }

    #[test]
    fn test_modifiers_are_carried() {
        let msg = press(KeyCode::Down, KeyModifiers::SHIFT | KeyModifiers::CONTROL).unwrap();
        assert_eq!(msg.command, Command::MoveNext);
        assert_eq!(
            msg.modifiers,
            Modifiers {
                shift: true,
                ctrl: true
            }
        );

        let msg = press(KeyCode::Char(' '), KeyModifiers::CONTROL).unwrap();
        assert_eq!(
            msg.command,
            Command::ConfirmSelection {
                shift: false,
                ctrl: true
            }
        );
    }

    #[test]
    fn test_typeahead_characters() {
        let msg = press(KeyCode::Char('B'), KeyModifiers::SHIFT).unwrap();
        assert_eq!(msg.command, Command::Typeahead('B'));
        assert_eq!(msg.modifiers, Modifiers::NONE);

        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::CONTROL), None);
        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::ALT), None);

        let off = CommandKeyMap::default().with_typeahead(false);
        assert_eq!(command(&off, KeyCode::Char('a')), None);
    }

    #[test]
    fn test_space_confirms_rather_than_typeahead() {
        let msg = press(KeyCode::Char(' '), KeyModifiers::NONE).unwrap();
        assert_eq!(
            msg.command,
            Command::ConfirmSelection {
                shift: false,
                ctrl: false
            }
        );
        let msg = press(KeyCode::Enter, KeyModifiers::SHIFT).unwrap();
        assert_eq!(
            msg.command,
            Command::ConfirmSelection {
                shift: true,
                ctrl: false
            }
        );
    }

    #[test]
    fn test_tab_and_backtab_leave() {
        assert_eq!(
            press(KeyCode::Tab, KeyModifiers::NONE).map(|m| m.command),
            Some(Command::TabOut)
        );
        assert_eq!(
            press(KeyCode::BackTab, KeyModifiers::SHIFT).map(|m| m.command),
            Some(Command::TabOut)
        );
    }

    #[test]
    fn test_help_lists_active_arrows() {
        let keymap = CommandKeyMap::default();
        assert_eq!(keymap.short_help().len(), 3);
        let tree = CommandKeyMap::default().with_tree_keys(true);
        assert_eq!(tree.short_help().len(), 5);
        assert_eq!(tree.full_help().len(), 3);
    }
}
