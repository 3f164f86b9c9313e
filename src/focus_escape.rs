//! Tab-out handling for composite widgets.
//!
//! While a widget is focused its items are reachable with the arrow keys, so
//! Tab must leave the widget instead of walking through the items. The widget
//! drops its tab index to `-1` for one tick and then restores it. Each escape
//! bumps the tag, so a restore scheduled by an earlier escape is ignored and
//! only the latest one applies.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Delay before the tab index is restored; fires on the next tick.
const RESTORE_DELAY: Duration = Duration::from_nanos(1);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Sent one tick after an escape to restore the tab index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreTabIndexMsg {
    /// Escape handler that scheduled the restore.
    pub id: i64,
    tag: i64,
}

/// Holds a widget's tab index and restores it after a tab-out.
#[derive(Debug, Clone)]
pub struct FocusEscape {
    id: i64,
    tag: i64,
    tab_index: i32,
    user_tab_index: i32,
}

impl Default for FocusEscape {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FocusEscape {
    /// Creates a handler whose resting tab index is `user_tab_index`.
    pub fn new(user_tab_index: i32) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            tab_index: user_tab_index,
            user_tab_index,
        }
    }

    /// Unique id of this handler.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current tab index.
    pub fn tab_index(&self) -> i32 {
        self.tab_index
    }

    /// Tab index restored after an escape.
    pub fn user_tab_index(&self) -> i32 {
        self.user_tab_index
    }

    /// Whether an escape is waiting for its restore.
    pub fn escaping(&self) -> bool {
        self.tab_index == -1 && self.user_tab_index != -1
    }

    /// Changes the resting tab index. Applied immediately unless an escape
    /// is pending, in which case the restore picks it up.
    pub fn set_user_tab_index(&mut self, index: i32) {
        let escaping = self.escaping();
        self.user_tab_index = index;
        if !escaping {
            self.tab_index = index;
        }
    }

    /// Overrides the current tab index without touching the resting one.
    pub fn set_tab_index(&mut self, index: i32) {
        self.tab_index = index;
    }

    /// Drops the tab index to `-1` and schedules its restore. Any restore
    /// scheduled by an earlier escape becomes stale.
    pub fn escape(&mut self) -> Cmd {
        self.tab_index = -1;
        self.tag += 1;
        log::debug!("focus escape {} tag={}", self.id, self.tag);

        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(RESTORE_DELAY, move |_| {
            Box::new(RestoreTabIndexMsg { id, tag }) as Msg
        })
    }

    /// Invalidates any pending restore.
    pub fn cancel(&mut self) {
        self.tag += 1;
    }

    /// Handles a restore tick. Returns true if the tab index was restored.
    pub fn handle_restore(&mut self, msg: &RestoreTabIndexMsg) -> bool {
        if msg.id != self.id || msg.tag != self.tag {
            log::trace!("focus escape {} ignoring stale restore tag={}", self.id, msg.tag);
            return false;
        }
        self.tab_index = self.user_tab_index;
        true
    }

    /// Message-based entry point: handles [`RestoreTabIndexMsg`]s addressed
    /// to this handler.
    pub fn update(&mut self, msg: &Msg) -> bool {
        msg.downcast_ref::<RestoreTabIndexMsg>()
            .is_some_and(|m| self.handle_restore(m))
    }

    #[cfg(test)]
    pub(crate) fn pending_restore(&self) -> RestoreTabIndexMsg {
        RestoreTabIndexMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}
