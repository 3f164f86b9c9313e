use super::events::Event;
use super::options::Options;
use crate::command::{Command, CommandKeyMap, CommandMsg};
use crate::focus_escape::{FocusEscape, RestoreTabIndexMsg};
use crate::item::{DefaultItem, DefaultItemStyles, Focusable};
use crate::navigator::{ActiveItemChanged, Navigator, TypeaheadTimeoutMsg};
use crate::selection::{
    Coordinator, InvalidSelectionValueError, Modifiers, SelectionChanged, SelectionValue,
};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::collections::{HashSet, VecDeque};

/// A focusable tree or list that owns its items and combines navigation,
/// selection, typeahead and tab-out handling.
///
/// Input arrives through [`Model::update`] (key presses, commands and the
/// widget's own tick messages) or [`Model::click`]. State changes are queued
/// as [`Event`]s and collected with [`Model::drain_events`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_keynav::item::DefaultItem;
/// use bubbletea_keynav::selection::SelectionMode;
/// use bubbletea_keynav::tree_selection::{Event, Model, Options};
/// use bubbletea_keynav::Component;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let items = vec![DefaultItem::new("a", "Apple"), DefaultItem::new("b", "Banana")];
/// let mut tree = Model::new(items, Options::default().with_selection_mode(SelectionMode::Single));
/// tree.focus();
/// tree.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }));
///
/// assert_eq!(tree.active_index(), Some(1));
/// assert!(tree.is_selected(&"b".to_string()));
/// assert!(tree
///     .drain_events()
///     .iter()
///     .any(|e| matches!(e, Event::SelectionChanged(_))));
/// ```
#[derive(Debug)]
pub struct Model<I: Focusable> {
    items: Vec<I>,
    options: Options,
    navigator: Navigator<I::Value>,
    selection: Coordinator<I::Value>,
    focus_escape: FocusEscape,
    /// Key bindings; replace individual bindings to remap keys.
    pub keymap: CommandKeyMap,
    events: VecDeque<Event<I::Value>>,
    focused: bool,
    disabled: bool,
    destroyed: bool,
    height: u16,
    width: usize,
}

impl<I: Focusable> Model<I> {
    /// Creates a widget over `items`.
    pub fn new(items: Vec<I>, options: Options) -> Self {
        let navigator = Navigator::new()
            .with_orientation(options.orientation)
            .with_direction(options.direction)
            .with_wrap(options.wrap)
            .with_typeahead(options.typeahead_timeout);
        let selection = Coordinator::new(
            options.selection_mode,
            options.no_unselect_last,
            options.auto_select,
        );
        let keymap = CommandKeyMap::default()
            .with_orientation(options.orientation)
            .with_direction(options.direction)
            .with_tree_keys(options.reserve_horizontal_for_tree)
            .with_typeahead(options.typeahead_timeout.is_some());

        let mut model = Self {
            items,
            focus_escape: FocusEscape::new(options.tab_index),
            options,
            navigator,
            selection,
            keymap,
            events: VecDeque::new(),
            focused: false,
            disabled: false,
            destroyed: false,
            height: 0,
            width: 0,
        };
        model.selection.sync_styles(&mut model.items);
        model
    }

    /// The options the widget was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The current registry snapshot.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the active item.
    pub fn active_index(&self) -> Option<usize> {
        self.navigator.active_index()
    }

    /// The active item.
    pub fn active_item(&self) -> Option<&I> {
        self.active_index().and_then(|i| self.items.get(i))
    }

    /// The selection set.
    pub fn selected_values(&self) -> &HashSet<I::Value> {
        self.selection.selected()
    }

    /// Whether `value` is selected.
    pub fn is_selected(&self, value: &I::Value) -> bool {
        self.selection.is_selected(value)
    }

    /// Current typeahead buffer.
    pub fn typeahead_buffer(&self) -> &str {
        self.navigator.typeahead_buffer()
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.navigator.page_size()
    }

    /// Tab index the host should give the widget: `-1` while disabled, empty,
    /// destroyed or escaping, the configured tab index otherwise.
    pub fn tab_index(&self) -> i32 {
        if self.disabled || self.destroyed || self.items.is_empty() {
            -1
        } else {
            self.focus_escape.tab_index()
        }
    }

    /// Changes the resting tab index.
    pub fn set_tab_index(&mut self, tab_index: i32) {
        self.focus_escape.set_user_tab_index(tab_index);
    }

    /// Whether input is currently ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the widget. A disabled widget ignores input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether [`Model::destroy`] has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event<I::Value>> {
        self.events.drain(..).collect()
    }

    // -------------------------------------------------------------------------
    // Registry changes
    // -------------------------------------------------------------------------

    /// Replaces every item.
    pub fn set_items(&mut self, items: Vec<I>) {
        if self.destroyed {
            return;
        }
        self.items = items;
        self.registry_changed();
    }

    /// Appends an item.
    pub fn push_item(&mut self, item: I) {
        if self.destroyed {
            return;
        }
        self.items.push(item);
        self.registry_changed();
    }

    /// Removes and returns the item at `index`.
    pub fn remove_item(&mut self, index: usize) -> Option<I> {
        if self.destroyed || index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.registry_changed();
        Some(item)
    }

    fn registry_changed(&mut self) {
        log::debug!("registry changed: {} items", self.items.len());
        if let Some(change) = self.navigator.reconcile(&mut self.items) {
            self.events.push_back(Event::ActiveItemChanged(change));
        }
        if let Some(change) = self.selection.reconcile(&mut self.items) {
            self.events.push_back(Event::SelectionChanged(change));
        }
        if self.height > 0 {
            self.navigator.update_page_size(self.height, &self.items);
        }
    }

    /// Sets the rendered size. The height drives the page size.
    pub fn resize(&mut self, width: usize, height: u16) {
        self.width = width;
        self.height = height;
        if height > 0 {
            self.navigator.update_page_size(height, &self.items);
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handles key presses (while focused), [`CommandMsg`]s, and the
    /// widget's own typeahead and tab-index ticks.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.focused {
                return None;
            }
            let command = self.keymap.command_for(key_msg)?;
            return self.handle(command);
        }
        if let Some(command) = msg.downcast_ref::<CommandMsg>() {
            return self.handle(*command);
        }
        if let Some(tick) = msg.downcast_ref::<TypeaheadTimeoutMsg>() {
            self.navigator.handle_typeahead_timeout(tick);
            return None;
        }
        if msg.downcast_ref::<RestoreTabIndexMsg>().is_some() {
            self.focus_escape.update(&msg);
        }
        None
    }

    /// Executes one command.
    pub fn handle(&mut self, msg: CommandMsg) -> Option<Cmd> {
        if self.destroyed || self.disabled {
            return None;
        }
        let modifiers = msg.modifiers;
        let change = match msg.command {
            Command::MoveNext => self.navigator.next(&mut self.items),
            Command::MovePrevious => self.navigator.previous(&mut self.items),
            Command::MoveFirst => self.navigator.first(&mut self.items),
            Command::MoveLast => self.navigator.last(&mut self.items),
            Command::MoveNextPage => self.navigator.next_page(&mut self.items),
            Command::MovePreviousPage => self.navigator.previous_page(&mut self.items),
            Command::Typeahead(ch) => {
                let (change, cmd) = self.navigator.typeahead(&mut self.items, ch);
                self.navigated(change, Modifiers::NONE);
                return cmd;
            }
            Command::ConfirmSelection { shift, ctrl } => {
                self.confirm_active(Modifiers { shift, ctrl });
                return None;
            }
            Command::ExpandNode | Command::CollapseNode => {
                self.request_node(msg.command);
                return None;
            }
            Command::TabOut => {
                self.events.push_back(Event::TabOut);
                return Some(self.focus_escape.escape());
            }
        };
        self.navigated(change, modifiers);
        None
    }

    fn navigated(&mut self, change: Option<ActiveItemChanged<I::Value>>, modifiers: Modifiers) {
        let Some(change) = change else {
            return;
        };
        let index = change.new_index;
        let previous = change.previous_index;
        self.events.push_back(Event::ActiveItemChanged(change));
        if let Some(index) = index {
            if let Some(sel) = self
                .selection
                .navigated_to(&mut self.items, index, previous, modifiers)
            {
                self.events.push_back(Event::SelectionChanged(sel));
            }
        }
    }

    fn confirm_active(&mut self, modifiers: Modifiers) {
        let Some(index) = self.navigator.active_index() else {
            return;
        };
        if let Some(sel) = self.selection.confirm_at(&mut self.items, index, modifiers) {
            self.events.push_back(Event::SelectionChanged(sel));
        }
    }

    /// Anchors the next range at the active item when no gesture has set
    /// an anchor yet.
    fn seed_anchor(&mut self) {
        if self.selection.anchor().is_none() {
            let value = self.active_item().map(Focusable::value);
            self.selection.set_anchor(value);
        }
    }

    fn request_node(&mut self, command: Command) {
        let Some(index) = self.navigator.active_index() else {
            return;
        };
        let Some(value) = self.items.get(index).map(Focusable::value) else {
            return;
        };
        let event = if command == Command::ExpandNode {
            Event::ExpandRequested { index, value }
        } else {
            Event::CollapseRequested { index, value }
        };
        self.events.push_back(event);
    }

    /// Pointer selection of the item at `index`.
    ///
    /// Without modifiers the item also becomes the active item before the
    /// selection rules apply. Clicks on disabled or missing items are
    /// ignored.
    pub fn click(&mut self, index: usize, modifiers: Modifiers) {
        if self.destroyed || self.disabled {
            return;
        }
        match self.items.get(index) {
            Some(item) if !item.is_disabled() => {}
            _ => return,
        }
        if modifiers == Modifiers::NONE {
            if let Some(change) = self.navigator.set_active(&mut self.items, index) {
                self.events.push_back(Event::ActiveItemChanged(change));
            }
        } else {
            self.seed_anchor();
        }
        if let Some(sel) = self.selection.confirm_at(&mut self.items, index, modifiers) {
            self.events.push_back(Event::SelectionChanged(sel));
        }
    }

    // -------------------------------------------------------------------------
    // Programmatic selection
    // -------------------------------------------------------------------------

    /// Replaces the selection. Nothing is queued; the change, if any, is
    /// returned to the caller.
    pub fn write_value(
        &mut self,
        value: SelectionValue<I::Value>,
    ) -> Result<Option<SelectionChanged<I::Value>>, InvalidSelectionValueError> {
        if self.destroyed {
            return Ok(None);
        }
        self.selection.write_value(&mut self.items, value)
    }

    /// Empties the selection, ignoring the deselect-last guard.
    pub fn clear_selection(&mut self) -> Option<SelectionChanged<I::Value>> {
        if self.destroyed {
            return None;
        }
        self.selection.clear(&mut self.items)
    }

    /// Releases the widget: pending ticks become stale, queued events are
    /// dropped, and every later call is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.focused = false;
        self.navigator.cancel_typeahead();
        self.focus_escape.cancel();
        self.events.clear();
        log::debug!("tree selection destroyed");
    }

    #[cfg(test)]
    pub(crate) fn pending_typeahead_reset(&self) -> Option<TypeaheadTimeoutMsg> {
        self.navigator.typeahead_state().map(|t| t.pending_timeout())
    }

    #[cfg(test)]
    pub(crate) fn pending_restore(&self) -> RestoreTabIndexMsg {
        self.focus_escape.pending_restore()
    }
}

impl<I: Focusable> Component for Model<I> {
    /// Focuses the widget, activating the first enabled item if nothing is
    /// active yet. A disabled widget cannot take focus.
    fn focus(&mut self) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }
        if self.disabled {
            return None;
        }
        self.focused = true;
        if self.navigator.active_index().is_none() {
            if let Some(change) = self.navigator.first(&mut self.items) {
                self.events.push_back(Event::ActiveItemChanged(change));
            }
        }
        self.seed_anchor();
        None
    }

    /// Blurs the widget, clearing the active item if configured to.
    fn blur(&mut self) {
        if self.destroyed {
            return;
        }
        self.focused = false;
        self.navigator.cancel_typeahead();
        if self.options.reset_active_on_blur {
            if let Some(change) = self.navigator.clear_active(&mut self.items) {
                self.events.push_back(Event::ActiveItemChanged(change));
            }
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl Model<DefaultItem> {
    /// Renders one line per item.
    pub fn view(&self, styles: &DefaultItemStyles) -> String {
        self.items
            .iter()
            .map(|item| item.view(styles, self.width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
