use super::typeahead::{Typeahead, TypeaheadTimeoutMsg};
use super::types::{ActiveItemChanged, Arrow, Orientation, TextDirection};
use crate::item::Focusable;
use bubbletea_rs::Cmd;
use std::time::Duration;

/// Tracks the active item of a collection and moves it in response to
/// navigation commands.
///
/// The navigator does not own items. Each operation takes the current
/// registry snapshot as a slice; the active item is remembered both by index
/// and by value so it can be found again after the registry changes (see
/// [`Navigator::reconcile`]).
///
/// Every operation returns `Some(ActiveItemChanged)` when it moved the active
/// item and `None` when it was a no-op. Nothing here panics or errors on an
/// empty registry or out-of-range input.
#[derive(Debug, Clone)]
pub struct Navigator<V> {
    orientation: Orientation,
    direction: TextDirection,
    wrap: bool,
    skip_disabled: bool,
    page_size: usize,
    active: Option<usize>,
    previous_active: Option<usize>,
    active_value: Option<V>,
    typeahead: Option<Typeahead>,
}

impl<V> Default for Navigator<V> {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            direction: TextDirection::default(),
            wrap: false,
            skip_disabled: true,
            page_size: 1,
            active: None,
            previous_active: None,
            active_value: None,
            typeahead: None,
        }
    }
}

impl<V: Clone + PartialEq> Navigator<V> {
    /// Creates a vertical, non-wrapping navigator without typeahead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation used by [`Navigator::arrow`].
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the reading direction for horizontal arrows.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Enables or disables wrapping at either end.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Whether disabled items can be landed on by [`Navigator::set_active`].
    pub fn with_skip_disabled(mut self, skip: bool) -> Self {
        self.skip_disabled = skip;
        self
    }

    /// Sets the page size used by the paging commands (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Enables typeahead with the given idle timeout, or disables it.
    pub fn with_typeahead(mut self, timeout: Option<Duration>) -> Self {
        self.typeahead = timeout.map(Typeahead::new);
        self
    }

    /// Configured orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether navigation wraps.
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the active item.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Index that was active before the last change.
    pub fn previous_active_index(&self) -> Option<usize> {
        self.previous_active
    }

    /// Value of the active item.
    pub fn active_value(&self) -> Option<&V> {
        self.active_value.as_ref()
    }

    /// Current typeahead buffer, empty when typeahead is off or idle.
    pub fn typeahead_buffer(&self) -> &str {
        self.typeahead.as_ref().map(|t| t.buffer()).unwrap_or("")
    }

    // -------------------------------------------------------------------------
    // Direct positioning
    // -------------------------------------------------------------------------

    /// Makes `index` the active item.
    ///
    /// No-op when `index` is out of bounds, already active, or disabled while
    /// skip-disabled is on. Moves the active styling from the old item to the
    /// new one.
    pub fn set_active<I>(&mut self, items: &mut [I], index: usize) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let target = items.get(index)?;
        if self.skip_disabled && target.is_disabled() {
            return None;
        }
        if self.active == Some(index) {
            return None;
        }

        let previous = self.active;
        if let Some(old) = previous.and_then(|i| items.get_mut(i)) {
            old.set_inactive_styles();
        }
        let item = &mut items[index];
        item.set_active_styles();
        let value = item.value();

        self.previous_active = previous;
        self.active = Some(index);
        self.active_value = Some(value.clone());
        log::debug!("active item {:?} -> {}", previous, index);

        Some(ActiveItemChanged {
            previous_index: previous,
            new_index: Some(index),
            value: Some(value),
        })
    }

    /// Clears the active item, removing its active styling.
    pub fn clear_active<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let previous = self.active.take()?;
        if let Some(old) = items.get_mut(previous) {
            old.set_inactive_styles();
        }
        self.previous_active = Some(previous);
        self.active_value = None;
        log::debug!("active item {} cleared", previous);

        Some(ActiveItemChanged {
            previous_index: Some(previous),
            new_index: None,
            value: None,
        })
    }

    /// Moves the active index after a registry change without emitting an
    /// event or touching styles.
    pub fn update_active_index(&mut self, index: Option<usize>, value: Option<V>) {
        self.active = index;
        self.active_value = value;
    }

    // -------------------------------------------------------------------------
    // Relative movement
    // -------------------------------------------------------------------------

    /// Moves one item forward.
    pub fn next<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        self.step(items, true)
    }

    /// Moves one item backward.
    pub fn previous<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        self.step(items, false)
    }

    /// Activates the first enabled item.
    pub fn first<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let index = scan(items, 0, true)?;
        self.set_active(items, index)
    }

    /// Activates the last enabled item.
    pub fn last<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let index = scan(items, items.len().checked_sub(1)?, false)?;
        self.set_active(items, index)
    }

    /// Moves forward by one page, landing on the next enabled item at or
    /// after the target. Overshooting the end activates the last item.
    pub fn next_page<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let Some(active) = self.active else {
            return self.first(items);
        };
        let target = active + self.page_size;
        if target >= items.len() {
            return self.last(items);
        }
        match scan(items, target, true) {
            Some(index) => self.set_active(items, index),
            None => self.last(items),
        }
    }

    /// Moves backward by one page, landing on the nearest enabled item at or
    /// before the target. Overshooting the start activates the first item.
    pub fn previous_page<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let Some(active) = self.active else {
            return self.last(items);
        };
        let Some(target) = active.checked_sub(self.page_size).filter(|t| *t > 0) else {
            return self.first(items);
        };
        match scan(items, target, false) {
            Some(index) => self.set_active(items, index),
            None => self.first(items),
        }
    }

    /// Applies an arrow key according to orientation and text direction.
    /// Arrows orthogonal to the orientation are accepted and ignored.
    pub fn arrow<I>(&mut self, items: &mut [I], arrow: Arrow) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        match arrow {
            Arrow::Up if self.orientation.is_vertical() => self.previous(items),
            Arrow::Down if self.orientation.is_vertical() => self.next(items),
            Arrow::Left | Arrow::Right if self.orientation.is_horizontal() => {
                let forward = (arrow == Arrow::Right) == (self.direction == TextDirection::Ltr);
                self.step(items, forward)
            }
            _ => None,
        }
    }

    fn step<I>(&mut self, items: &mut [I], forward: bool) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let len = items.len();
        if len == 0 {
            return None;
        }

        let index = match self.active {
            // Nothing active yet: start from the matching end.
            None if forward => scan(items, 0, true),
            None if self.wrap => scan(items, len - 1, false),
            None => None,
            Some(active) if self.wrap => (1..len)
                .map(|i| {
                    if forward {
                        (active + i) % len
                    } else {
                        (active + len - i) % len
                    }
                })
                .find(|&i| !items[i].is_disabled()),
            Some(active) => {
                let start = if forward {
                    active + 1
                } else {
                    active.checked_sub(1)?
                };
                if start >= len {
                    return None;
                }
                scan(items, start, forward)
            }
        }?;

        self.set_active(items, index)
    }

    // -------------------------------------------------------------------------
    // Typeahead
    // -------------------------------------------------------------------------

    /// Adds `ch` to the typeahead buffer and activates the next item whose
    /// label starts with the buffer.
    ///
    /// The scan starts just after the active item and wraps, so pressing the
    /// same letter repeatedly cycles through matches. Returns the change (if
    /// any) and the command that resets the buffer once typing pauses. Both
    /// are `None` when typeahead is disabled.
    pub fn typeahead<I>(
        &mut self,
        items: &mut [I],
        ch: char,
    ) -> (Option<ActiveItemChanged<V>>, Option<Cmd>)
    where
        I: Focusable<Value = V>,
    {
        let Some(typeahead) = self.typeahead.as_mut() else {
            return (None, None);
        };
        let cmd = typeahead.push(ch);
        let needle = typeahead.buffer().to_string();

        let start = self.active.map(|i| i + 1).unwrap_or(0);
        let found = find_label(items, start, &needle).or_else(|| {
            // "aaa" cycles through items starting with "a"
            let mut chars = needle.chars();
            let first = chars.next()?;
            if needle.len() > first.len_utf8() && chars.all(|c| c == first) {
                find_label(items, start, &first.to_string())
            } else {
                None
            }
        });

        let change = found.and_then(|index| self.set_active(items, index));
        (change, Some(cmd))
    }

    /// Handles a typeahead reset tick. Stale ticks are ignored.
    pub fn handle_typeahead_timeout(&mut self, msg: &TypeaheadTimeoutMsg) -> bool {
        self.typeahead
            .as_mut()
            .map(|t| t.handle_timeout(msg))
            .unwrap_or(false)
    }

    /// Clears the typeahead buffer and invalidates its pending reset.
    pub fn cancel_typeahead(&mut self) {
        if let Some(t) = self.typeahead.as_mut() {
            t.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn typeahead_state(&self) -> Option<&Typeahead> {
        self.typeahead.as_ref()
    }

    // -------------------------------------------------------------------------
    // Registry changes
    // -------------------------------------------------------------------------

    /// Recomputes the page size as `container_height / first_item_height`.
    /// Leaves it unchanged when the registry is empty or the first item does
    /// not report a height.
    pub fn update_page_size<I>(&mut self, container_height: u16, items: &[I])
    where
        I: Focusable<Value = V>,
    {
        if let Some(h) = items.first().and_then(|item| item.height()).filter(|h| *h > 0) {
            self.page_size = usize::from(container_height / h).max(1);
        }
    }

    /// Re-locates the active item by value after the registry changed.
    ///
    /// Returns an event only when the active item disappeared; a pure index
    /// shift is silent.
    pub fn reconcile<I>(&mut self, items: &mut [I]) -> Option<ActiveItemChanged<V>>
    where
        I: Focusable<Value = V>,
    {
        let value = self.active_value.clone()?;
        match items.iter().position(|item| item.value() == value) {
            Some(index) => {
                self.active = Some(index);
                items[index].set_active_styles();
                None
            }
            None => {
                let previous = self.active.take();
                self.active_value = None;
                self.previous_active = None;
                log::debug!("active item {:?} left the registry", previous);
                Some(ActiveItemChanged {
                    previous_index: previous,
                    new_index: None,
                    value: None,
                })
            }
        }
    }
}

/// Cyclic search from `start` for an enabled item whose label starts with
/// `needle` (already lowercase).
fn find_label<I: Focusable>(items: &[I], start: usize, needle: &str) -> Option<usize> {
    let len = items.len();
    (0..len).map(|i| (start + i) % len).find(|&i| {
        let item = &items[i];
        !item.is_disabled() && item.label().trim().to_lowercase().starts_with(needle)
    })
}

/// First enabled index starting at `start` (inclusive) moving in one direction.
fn scan<I: Focusable>(items: &[I], start: usize, forward: bool) -> Option<usize> {
    if forward {
        (start..items.len()).find(|&i| !items[i].is_disabled())
    } else {
        (0..=start.min(items.len().checked_sub(1)?))
            .rev()
            .find(|&i| !items[i].is_disabled())
    }
}
