//! Active-item navigation over a live collection of focusable items.
//!
//! The [`Navigator`] owns a single piece of state, the active index, and
//! knows how to move it: one step at a time, by page, to either end, or by
//! typeahead. It honours orientation (arrows orthogonal to it do nothing),
//! wrap policy, and disabled items (never landed on).
//!
//! ## Behavior summary
//!
//! | Operation | Empty registry | All disabled | End reached, `wrap` | End reached, no wrap |
//! |-----------|----------------|--------------|---------------------|----------------------|
//! | `next` / `previous` | no-op | no-op | continues at the other end | no-op |
//! | `first` / `last` | no-op | no-op | n/a | n/a |
//! | `next_page` / `previous_page` | no-op | no-op | clamps to last/first | clamps to last/first |
//! | `typeahead` | no-op | no-op | always cyclic | always cyclic |
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_keynav::item::DefaultItem;
//! use bubbletea_keynav::navigator::Navigator;
//!
//! let mut items = vec![
//!     DefaultItem::new("a", "Alpha"),
//!     DefaultItem::new("b", "Beta").disabled(),
//!     DefaultItem::new("g", "Gamma"),
//! ];
//! let mut nav = Navigator::new().with_wrap(true);
//!
//! nav.set_active(&mut items, 0);
//! nav.next(&mut items);
//! assert_eq!(nav.active_index(), Some(2)); // Beta is skipped
//! nav.next(&mut items);
//! assert_eq!(nav.active_index(), Some(0)); // wrapped
//! ```

mod model;
mod typeahead;
mod types;

pub use model::Navigator;
pub use typeahead::{Typeahead, TypeaheadTimeoutMsg, DEFAULT_TIMEOUT as DEFAULT_TYPEAHEAD_TIMEOUT};
pub use types::{ActiveItemChanged, Arrow, Orientation, TextDirection};

#[cfg(test)]
mod tests;
