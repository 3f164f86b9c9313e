use super::error::InvalidSelectionValueError;
use super::types::{Modifiers, SelectionChanged, SelectionMode, SelectionValue, Trigger};
use crate::item::Focusable;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// The selection effect of one gesture, decided before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Selection is left alone.
    Ignore,
    /// Clear the set and select only the item.
    Replace,
    /// Select the contiguous run between the anchor and the item. With
    /// `extend` the run is added to the set instead of replacing it.
    Range {
        /// Keep selected items outside the run.
        extend: bool,
    },
    /// Flip the item's membership, subject to the deselect-last guard.
    Toggle,
}

impl Gesture {
    /// The decision table. Every selection update goes through here.
    ///
    /// | mode      | trigger    | shift | ctrl | auto_select | gesture |
    /// |-----------|------------|-------|------|-------------|---------|
    /// | `None`    | any        | any   | any  | any         | `Ignore` |
    /// | multiple  | any        | yes   | any  | any         | `Range { extend: ctrl }` |
    /// | any       | navigation | no    | yes  | any         | `Ignore` |
    /// | any       | confirm    | no    | yes  | any         | `Toggle` |
    /// | any       | any        | no    | no   | yes         | `Replace` |
    /// | any       | confirm    | no    | no   | no          | `Toggle` |
    /// | any       | navigation | no    | no   | no          | `Ignore` |
    ///
    /// Shift in single mode behaves as if it were not held.
    pub fn decide(
        mode: SelectionMode,
        auto_select: bool,
        trigger: Trigger,
        modifiers: Modifiers,
    ) -> Gesture {
        let shift = modifiers.shift && mode.is_multiple();
        match (mode, trigger, shift, modifiers.ctrl) {
            (SelectionMode::None, ..) => Gesture::Ignore,
            (_, _, true, ctrl) => Gesture::Range { extend: ctrl },
            (_, Trigger::Navigation, false, true) => Gesture::Ignore,
            (_, Trigger::Confirm, false, true) => Gesture::Toggle,
            (_, _, false, false) if auto_select => Gesture::Replace,
            (_, Trigger::Confirm, false, false) => Gesture::Toggle,
            (_, Trigger::Navigation, false, false) => Gesture::Ignore,
        }
    }
}

/// Owns the selection set and turns confirmed active items plus modifier
/// state into selection changes.
///
/// Selection is keyed by item value, never by index, so it survives the
/// registry being reordered or rebuilt. The range anchor is stored the same
/// way and looked up again each time a range is computed.
#[derive(Debug, Clone)]
pub struct Coordinator<V: Eq + Hash> {
    mode: SelectionMode,
    no_unselect_last: bool,
    auto_select: bool,
    selected: HashSet<V>,
    anchor: Option<V>,
}

impl<V: Clone + Eq + Hash + Debug> Coordinator<V> {
    /// Creates an empty coordinator.
    pub fn new(mode: SelectionMode, no_unselect_last: bool, auto_select: bool) -> Self {
        Self {
            mode,
            no_unselect_last,
            auto_select,
            selected: HashSet::new(),
            anchor: None,
        }
    }

    /// The selection mode fixed at construction.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether selection follows plain navigation.
    pub fn auto_select(&self) -> bool {
        self.auto_select
    }

    /// Whether the deselect-last guard is on.
    pub fn no_unselect_last(&self) -> bool {
        self.no_unselect_last
    }

    /// The current selection set.
    pub fn selected(&self) -> &HashSet<V> {
        &self.selected
    }

    /// Whether `value` is selected.
    pub fn is_selected(&self, value: &V) -> bool {
        self.selected.contains(value)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Value the next shift gesture is measured from.
    pub fn anchor(&self) -> Option<&V> {
        self.anchor.as_ref()
    }

    /// Moves the range anchor.
    pub fn set_anchor(&mut self, value: Option<V>) {
        self.anchor = value;
    }

    /// False iff the guard is on and `value` is the only selected member.
    pub fn can_deselect(&self, value: &V) -> bool {
        !(self.no_unselect_last && self.selected.len() == 1 && self.selected.contains(value))
    }

    /// Applies the decision table for an explicit confirm (click, space,
    /// enter) on the item at `index`.
    pub fn confirm_at<I>(
        &mut self,
        items: &mut [I],
        index: usize,
        modifiers: Modifiers,
    ) -> Option<SelectionChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        self.apply(items, index, None, Trigger::Confirm, modifiers)
    }

    /// Applies the decision table after keyboard navigation landed on
    /// `index`. `previous` is the index navigation started from; it seeds the
    /// range anchor when none has been set yet.
    pub fn navigated_to<I>(
        &mut self,
        items: &mut [I],
        index: usize,
        previous: Option<usize>,
        modifiers: Modifiers,
    ) -> Option<SelectionChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        self.apply(items, index, previous, Trigger::Navigation, modifiers)
    }

    fn apply<I>(
        &mut self,
        items: &mut [I],
        index: usize,
        previous: Option<usize>,
        trigger: Trigger,
        modifiers: Modifiers,
    ) -> Option<SelectionChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let value = items.get(index)?.value();
        let gesture = Gesture::decide(self.mode, self.auto_select, trigger, modifiers);
        log::trace!("selection gesture {:?} on {:?}", gesture, value);

        let next = match gesture {
            Gesture::Range { extend } => {
                if self.anchor.is_none() {
                    self.anchor = previous
                        .and_then(|i| items.get(i))
                        .map(Focusable::value)
                        .or(Some(value));
                }
                self.range(items, index, extend)
            }
            other => {
                self.anchor = Some(value.clone());
                match other {
                    Gesture::Replace => Some(HashSet::from([value])),
                    Gesture::Toggle => self.toggled(value),
                    _ => None,
                }
            }
        }?;

        self.commit(items, next)
    }

    fn range<I>(&self, items: &[I], index: usize, extend: bool) -> Option<HashSet<V>>
    where
        I: Focusable<Value = V>,
    {
        let anchor = self
            .anchor
            .as_ref()
            .and_then(|a| items.iter().position(|item| &item.value() == a))
            .unwrap_or(index);
        let (from, to) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };

        let run = items[from..=to]
            .iter()
            .filter(|item| !item.is_disabled())
            .map(Focusable::value);

        let mut next = if extend {
            self.selected.clone()
        } else {
            HashSet::new()
        };
        next.extend(run);
        Some(next)
    }

    fn toggled(&self, value: V) -> Option<HashSet<V>> {
        let mut next = self.selected.clone();
        if next.contains(&value) {
            if !self.can_deselect(&value) {
                log::debug!("refusing to deselect last selected value {:?}", value);
                return None;
            }
            next.remove(&value);
        } else {
            if !self.mode.is_multiple() {
                next.clear();
            }
            next.insert(value);
        }
        Some(next)
    }

    fn commit<I>(&mut self, items: &mut [I], next: HashSet<V>) -> Option<SelectionChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        if next == self.selected {
            return None;
        }
        self.selected = next;
        self.sync_styles(items);
        log::debug!("selection changed: {} selected", self.selected.len());
        Some(SelectionChanged {
            selected: self.selected.clone(),
        })
    }

    /// Re-applies selected styling to every item.
    pub fn sync_styles<I>(&self, items: &mut [I])
    where
        I: Focusable<Value = V>,
    {
        for item in items.iter_mut() {
            let selected = self.selected.contains(&item.value());
            item.set_selected(selected);
        }
    }

    /// Drops selected values that are no longer in the registry and
    /// re-applies styling to the items that remain.
    pub fn reconcile<I>(&mut self, items: &mut [I]) -> Option<SelectionChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let present: HashSet<V> = items.iter().map(Focusable::value).collect();
        if self.anchor.as_ref().is_some_and(|a| !present.contains(a)) {
            self.anchor = None;
        }
        let before = self.selected.len();
        self.selected.retain(|v| present.contains(v));
        self.sync_styles(items);

        if self.selected.len() == before {
            return None;
        }
        log::debug!(
            "registry change dropped {} selected values",
            before - self.selected.len()
        );
        Some(SelectionChanged {
            selected: self.selected.clone(),
        })
    }

    /// Replaces the selection with a programmatic value. Values not present
    /// in the registry are ignored. Bypasses the deselect-last guard.
    ///
    /// The shape is validated before anything changes. In `None` mode every
    /// value is accepted and ignored.
    pub fn write_value<I>(
        &mut self,
        items: &mut [I],
        value: SelectionValue<V>,
    ) -> Result<Option<SelectionChanged<V>>, InvalidSelectionValueError>
    where
        I: Focusable<Value = V>,
    {
        if self.mode == SelectionMode::None {
            return Ok(None);
        }
        let values = match (self.mode.is_multiple(), value) {
            (_, SelectionValue::Empty) => Vec::new(),
            (true, SelectionValue::Multiple(values)) => values,
            (true, SelectionValue::Single(_)) => return Err(InvalidSelectionValueError::NotAList),
            (false, SelectionValue::Single(v)) => vec![v],
            (false, SelectionValue::Multiple(values)) => {
                return Err(InvalidSelectionValueError::NotAScalar { len: values.len() })
            }
        };

        let present: HashSet<V> = items.iter().map(Focusable::value).collect();
        let next: HashSet<V> = values.into_iter().filter(|v| present.contains(v)).collect();
        Ok(self.commit(items, next))
    }

    /// Empties the selection. Bypasses the deselect-last guard.
    pub fn clear<I>(&mut self, items: &mut [I]) -> Option<SelectionChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        self.commit(items, HashSet::new())
    }
}
