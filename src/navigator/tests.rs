//! Tests for the navigator.

use super::*;
use crate::item::{DefaultItem, Focusable};
use proptest::prelude::*;

fn items(spec: &[(&str, bool)]) -> Vec<DefaultItem> {
    spec.iter()
        .map(|(label, disabled)| {
            let item = DefaultItem::new(&label.to_lowercase(), label);
            if *disabled {
                item.disabled()
            } else {
                item
            }
        })
        .collect()
}

fn plain(labels: &[&str]) -> Vec<DefaultItem> {
    labels.iter().map(|l| DefaultItem::new(l, l)).collect()
}

fn nav() -> Navigator<String> {
    Navigator::new()
}

#[test]
fn test_next_skips_disabled_and_wraps() {
    let mut list = items(&[("Alpha", false), ("Beta", true), ("Gamma", false)]);
    let mut n = nav().with_wrap(true);
    n.set_active(&mut list, 0);

    let change = n.next(&mut list).expect("moved");
    assert_eq!(change.previous_index, Some(0));
    assert_eq!(change.new_index, Some(2));
    assert_eq!(change.value.as_deref(), Some("gamma"));

    n.next(&mut list);
    assert_eq!(n.active_index(), Some(0));
}

#[test]
fn test_no_wrap_clamps_at_both_ends() {
    let mut list = plain(&["a", "b", "c"]);
    let mut n = nav();
    n.set_active(&mut list, 2);
    assert!(n.next(&mut list).is_none());
    assert_eq!(n.active_index(), Some(2));

    n.set_active(&mut list, 0);
    assert!(n.previous(&mut list).is_none());
    assert_eq!(n.active_index(), Some(0));
}

#[test]
fn test_no_wrap_stops_before_trailing_disabled_run() {
    let mut list = items(&[("a", false), ("b", false), ("c", true), ("d", true)]);
    let mut n = nav();
    n.set_active(&mut list, 1);
    assert!(n.next(&mut list).is_none());
    assert_eq!(n.active_index(), Some(1));
}

#[test]
fn test_all_disabled_is_a_no_op() {
    let mut list = items(&[("a", true), ("b", true)]);
    let mut n = nav().with_wrap(true);
    for _ in 0..5 {
        assert!(n.next(&mut list).is_none());
        assert!(n.previous(&mut list).is_none());
    }
    assert!(n.first(&mut list).is_none());
    assert!(n.last(&mut list).is_none());
    assert!(n.next_page(&mut list).is_none());
    assert_eq!(n.active_index(), None);
}

#[test]
fn test_empty_registry_is_a_no_op() {
    let mut list: Vec<DefaultItem> = Vec::new();
    let mut n = nav().with_wrap(true).with_typeahead(Some(DEFAULT_TYPEAHEAD_TIMEOUT));
    assert!(n.next(&mut list).is_none());
    assert!(n.previous(&mut list).is_none());
    assert!(n.first(&mut list).is_none());
    assert!(n.last(&mut list).is_none());
    assert!(n.next_page(&mut list).is_none());
    assert!(n.previous_page(&mut list).is_none());
    assert!(n.set_active(&mut list, 0).is_none());
    assert!(n.typeahead(&mut list, 'a').0.is_none());
    assert_eq!(n.active_index(), None);
}

#[test]
fn test_set_active_rejects_invalid_targets() {
    let mut list = items(&[("a", false), ("b", true)]);
    let mut n = nav();
    assert!(n.set_active(&mut list, 9).is_none());
    assert!(n.set_active(&mut list, 1).is_none());
    assert!(n.set_active(&mut list, 0).is_some());
    // already active
    assert!(n.set_active(&mut list, 0).is_none());
}

#[test]
fn test_set_active_can_land_on_disabled_when_not_skipping() {
    let mut list = items(&[("a", false), ("b", true)]);
    let mut n = nav().with_skip_disabled(false);
    assert!(n.set_active(&mut list, 1).is_some());
}

#[test]
fn test_active_styling_follows_active_item() {
    let mut list = plain(&["a", "b", "c"]);
    let mut n = nav();
    n.set_active(&mut list, 0);
    assert!(list[0].is_active());
    n.next(&mut list);
    assert!(!list[0].is_active());
    assert!(list[1].is_active());
    n.clear_active(&mut list);
    assert!(!list[1].is_active());
    assert_eq!(n.active_index(), None);
    assert_eq!(n.previous_active_index(), Some(1));
}

#[test]
fn test_first_navigation_without_active_item() {
    let mut list = items(&[("a", true), ("b", false), ("c", false), ("d", true)]);
    let mut n = nav();
    assert!(n.previous(&mut list).is_none());
    n.next(&mut list);
    assert_eq!(n.active_index(), Some(1));

    let mut n = nav().with_wrap(true);
    n.previous(&mut list);
    assert_eq!(n.active_index(), Some(2));
}

#[test]
fn test_first_and_last_skip_disabled() {
    let mut list = items(&[("a", true), ("b", false), ("c", false), ("d", true)]);
    let mut n = nav();
    n.last(&mut list);
    assert_eq!(n.active_index(), Some(2));
    n.first(&mut list);
    assert_eq!(n.active_index(), Some(1));
}

#[test]
fn test_paging_moves_by_page_size_and_clamps() {
    let mut list = plain(&["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    let mut n = nav().with_page_size(3);
    n.set_active(&mut list, 0);

    n.next_page(&mut list);
    assert_eq!(n.active_index(), Some(3));
    n.next_page(&mut list);
    assert_eq!(n.active_index(), Some(6));
    n.next_page(&mut list);
    assert_eq!(n.active_index(), Some(9));
    assert!(n.next_page(&mut list).is_none());

    n.previous_page(&mut list);
    assert_eq!(n.active_index(), Some(6));
    n.set_active(&mut list, 2);
    n.previous_page(&mut list);
    assert_eq!(n.active_index(), Some(0));
}

#[test]
fn test_paging_normalizes_disabled_landing() {
    let mut list = items(&[
        ("0", false),
        ("1", true),
        ("2", true),
        ("3", false),
        ("4", false),
        ("5", false),
    ]);
    let mut n = nav().with_page_size(2);
    n.set_active(&mut list, 0);
    n.next_page(&mut list);
    assert_eq!(n.active_index(), Some(3));

    n.set_active(&mut list, 4);
    n.previous_page(&mut list);
    assert_eq!(n.active_index(), Some(0));
}

#[test]
fn test_page_size_has_minimum_of_one() {
    let n = nav().with_page_size(0);
    assert_eq!(n.page_size(), 1);
}

#[test]
fn test_update_page_size_from_item_height() {
    let mut list = plain(&["a", "b"]);
    list[0].height = Some(2);
    let mut n = nav();
    n.update_page_size(11, &list);
    assert_eq!(n.page_size(), 5);

    n.update_page_size(1, &list);
    assert_eq!(n.page_size(), 1);

    list[0].height = None;
    n.update_page_size(40, &list);
    assert_eq!(n.page_size(), 1);
}

#[test]
fn test_vertical_orientation_ignores_horizontal_arrows() {
    let mut list = plain(&["a", "b", "c"]);
    let mut n = nav().with_orientation(Orientation::Vertical);
    n.set_active(&mut list, 1);
    assert!(n.arrow(&mut list, Arrow::Left).is_none());
    assert!(n.arrow(&mut list, Arrow::Right).is_none());
    assert_eq!(n.active_index(), Some(1));
    n.arrow(&mut list, Arrow::Down);
    assert_eq!(n.active_index(), Some(2));
    n.arrow(&mut list, Arrow::Up);
    assert_eq!(n.active_index(), Some(1));
}

#[test]
fn test_horizontal_orientation_and_rtl() {
    let mut list = plain(&["a", "b", "c"]);
    let mut n = nav().with_orientation(Orientation::Horizontal);
    n.set_active(&mut list, 1);
    assert!(n.arrow(&mut list, Arrow::Down).is_none());
    n.arrow(&mut list, Arrow::Right);
    assert_eq!(n.active_index(), Some(2));

    let mut n = nav()
        .with_orientation(Orientation::Horizontal)
        .with_direction(TextDirection::Rtl);
    n.set_active(&mut list, 1);
    n.arrow(&mut list, Arrow::Right);
    assert_eq!(n.active_index(), Some(0));
}

#[test]
fn test_both_orientation_accepts_all_arrows() {
    let mut list = plain(&["a", "b", "c"]);
    let mut n = nav().with_orientation(Orientation::Both);
    n.set_active(&mut list, 0);
    n.arrow(&mut list, Arrow::Right);
    n.arrow(&mut list, Arrow::Down);
    assert_eq!(n.active_index(), Some(2));
    n.arrow(&mut list, Arrow::Left);
    assert_eq!(n.active_index(), Some(1));
}

#[test]
fn test_typeahead_matches_buffer_prefix() {
    let mut list = plain(&["Apple", "Banana", "Avocado", "Abacus"]);
    let mut n = nav().with_typeahead(Some(DEFAULT_TYPEAHEAD_TIMEOUT));

    let (change, cmd) = n.typeahead(&mut list, 'a');
    assert!(cmd.is_some());
    assert_eq!(change.and_then(|c| c.new_index), Some(0));

    n.typeahead(&mut list, 'B');
    assert_eq!(n.typeahead_buffer(), "ab");
    assert_eq!(n.active_index(), Some(3));
}

#[test]
fn test_typeahead_repeated_letter_cycles() {
    let mut list = plain(&["Apple", "Banana", "Avocado", "Abacus"]);
    let mut n = nav().with_typeahead(Some(DEFAULT_TYPEAHEAD_TIMEOUT));
    n.typeahead(&mut list, 'a');
    assert_eq!(n.active_index(), Some(0));
    n.typeahead(&mut list, 'a');
    assert_eq!(n.active_index(), Some(2));
    n.typeahead(&mut list, 'a');
    assert_eq!(n.active_index(), Some(3));
    n.typeahead(&mut list, 'a');
    assert_eq!(n.active_index(), Some(0));
}

#[test]
fn test_typeahead_unmatched_leaves_state() {
    let mut list = items(&[("Alpha", false), ("Zulu", true)]);
    let mut n = nav().with_typeahead(Some(DEFAULT_TYPEAHEAD_TIMEOUT));
    n.set_active(&mut list, 0);
    assert!(n.typeahead(&mut list, 'q').0.is_none());
    assert_eq!(n.active_index(), Some(0));

    // disabled items never match
    let pending = n.typeahead_state().map(|t| t.pending_timeout()).expect("typeahead on");
    assert!(n.handle_typeahead_timeout(&pending));
    assert!(n.typeahead(&mut list, 'z').0.is_none());
    assert_eq!(n.active_index(), Some(0));
}

#[test]
fn test_typeahead_timeout_resets_buffer() {
    let mut list = plain(&["Apple", "Banana"]);
    let mut n = nav().with_typeahead(Some(DEFAULT_TYPEAHEAD_TIMEOUT));
    n.typeahead(&mut list, 'a');
    let stale = n.typeahead_state().map(|t| t.pending_timeout()).expect("typeahead on");
    n.typeahead(&mut list, 'p');
    assert!(!n.handle_typeahead_timeout(&stale));
    assert_eq!(n.typeahead_buffer(), "ap");

    let current = n.typeahead_state().map(|t| t.pending_timeout()).expect("typeahead on");
    assert!(n.handle_typeahead_timeout(&current));
    assert_eq!(n.typeahead_buffer(), "");

    n.typeahead(&mut list, 'b');
    assert_eq!(n.active_index(), Some(1));
}

#[test]
fn test_typeahead_disabled_returns_nothing() {
    let mut list = plain(&["Apple"]);
    let mut n = nav();
    let (change, cmd) = n.typeahead(&mut list, 'a');
    assert!(change.is_none());
    assert!(cmd.is_none());
}

#[test]
fn test_reconcile_relocates_active_by_value() {
    let mut list = plain(&["a", "b", "c"]);
    let mut n = nav();
    n.set_active(&mut list, 1);

    let mut reordered = plain(&["c", "b", "a"]);
    reordered.insert(0, DefaultItem::new("z", "z"));
    assert!(n.reconcile(&mut reordered).is_none());
    assert_eq!(n.active_index(), Some(2));
    assert!(reordered[2].is_active());

    let mut without = plain(&["a", "c"]);
    let change = n.reconcile(&mut without).expect("active item removed");
    assert_eq!(change.previous_index, Some(2));
    assert_eq!(change.new_index, None);
    assert_eq!(n.active_index(), None);
}

fn registry() -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(any::<bool>(), 1..=24)
}

fn build(disabled: &[bool]) -> Vec<DefaultItem> {
    disabled
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let item = DefaultItem::new(&i.to_string(), &format!("item {i}"));
            if *d {
                item.disabled()
            } else {
                item
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn wrapping_next_cycles_back_to_start(disabled in registry(), seed in any::<usize>()) {
        let mut list = build(&disabled);
        let enabled: Vec<usize> = (0..list.len()).filter(|i| !disabled[*i]).collect();
        prop_assume!(!enabled.is_empty());

        let start = enabled[seed % enabled.len()];
        let mut n = nav().with_wrap(true);
        n.set_active(&mut list, start);
        for _ in 0..enabled.len() {
            n.next(&mut list);
        }
        prop_assert_eq!(n.active_index(), Some(start));
    }

    #[test]
    fn navigation_never_lands_on_disabled(
        disabled in registry(),
        wrap in any::<bool>(),
        moves in proptest::collection::vec(0u8..6, 0..40),
    ) {
        let mut list = build(&disabled);
        let mut n = nav().with_wrap(wrap).with_page_size(3);
        for m in moves {
            match m {
                0 => { n.next(&mut list); }
                1 => { n.previous(&mut list); }
                2 => { n.first(&mut list); }
                3 => { n.last(&mut list); }
                4 => { n.next_page(&mut list); }
                _ => { n.previous_page(&mut list); }
            }
            if let Some(i) = n.active_index() {
                prop_assert!(!list[i].is_disabled());
            }
        }
        if disabled.iter().all(|d| *d) {
            prop_assert_eq!(n.active_index(), None);
        }
    }
}
