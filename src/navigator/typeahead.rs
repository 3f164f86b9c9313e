//! Typeahead buffer with a self-cancelling reset timer.
//!
//! Every keystroke bumps the buffer's tag and schedules a reset tick carrying
//! that tag. When a tick arrives whose tag is not the current one it is
//! discarded, so only the reset scheduled by the most recent keystroke can
//! clear the buffer.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Default idle time after which the buffer resets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Sent when a typeahead burst has been idle for the configured timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeaheadTimeoutMsg {
    /// Buffer that scheduled the reset.
    pub id: i64,
    tag: i64,
}

/// Accumulates characters typed within one burst.
#[derive(Debug, Clone)]
pub struct Typeahead {
    id: i64,
    tag: i64,
    timeout: Duration,
    buffer: String,
}

impl Typeahead {
    /// Creates an empty buffer that resets after `timeout` of inactivity.
    pub fn new(timeout: Duration) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            timeout,
            buffer: String::new(),
        }
    }

    /// Unique id of this buffer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Idle time after which the buffer resets.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The lowercase characters accumulated so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends a character and returns the command that resets the buffer
    /// once the burst goes idle. Any reset scheduled earlier becomes stale.
    pub fn push(&mut self, ch: char) -> Cmd {
        self.buffer.extend(ch.to_lowercase());
        self.tag += 1;
        log::trace!("typeahead {} buffer={:?} tag={}", self.id, self.buffer, self.tag);

        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.timeout, move |_| {
            Box::new(TypeaheadTimeoutMsg { id, tag }) as Msg
        })
    }

    /// Clears the buffer and invalidates any pending reset.
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.tag += 1;
    }

    /// Handles a reset tick. Returns true if the buffer was cleared.
    pub fn handle_timeout(&mut self, msg: &TypeaheadTimeoutMsg) -> bool {
        if msg.id != self.id || msg.tag != self.tag {
            log::trace!("typeahead {} ignoring stale reset tag={}", self.id, msg.tag);
            return false;
        }
        self.buffer.clear();
        true
    }

    /// Builds the reset message the current burst is waiting for.
    #[cfg(test)]
    pub(crate) fn pending_timeout(&self) -> TypeaheadTimeoutMsg {
        TypeaheadTimeoutMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
