//! Lightbox / gallery navigation tests.
//!
//! Covers:
//! - Wraparound: n steps of next() or prev() return to the start index
//! - Single-item lists never move the cursor
//! - Open/close lifecycle and empty-list behavior

use halcyon::models::gallery::{next_index, prev_index, Lightbox};

#[test]
fn test_next_wraps_after_full_cycle() {
    for len in [1usize, 2, 3, 7] {
        for start in 0..len {
            let items: Vec<usize> = (0..len).collect();
            let mut lightbox = Lightbox::closed();
            lightbox.open(items, start);
            for _ in 0..len {
                lightbox.next();
            }
            assert_eq!(lightbox.index(), Some(start), "len={len} start={start}");
        }
    }
}

#[test]
fn test_prev_wraps_after_full_cycle() {
    for len in [1usize, 2, 3, 7] {
        for start in 0..len {
            let items: Vec<usize> = (0..len).collect();
            let mut lightbox = Lightbox::closed();
            lightbox.open(items, start);
            for _ in 0..len {
                lightbox.prev();
            }
            assert_eq!(lightbox.index(), Some(start), "len={len} start={start}");
        }
    }
}

#[test]
fn test_single_item_navigation_is_noop() {
    let mut lightbox = Lightbox::closed();
    lightbox.open(vec!["only"], 0);
    lightbox.next();
    assert_eq!(lightbox.index(), Some(0));
    lightbox.prev();
    assert_eq!(lightbox.index(), Some(0));
}

#[test]
fn test_prev_from_zero_wraps_to_last() {
    let mut lightbox = Lightbox::closed();
    lightbox.open(vec![10, 20, 30], 0);
    lightbox.prev();
    assert_eq!(lightbox.index(), Some(2));
    assert_eq!(lightbox.current(), Some(&30));
}

#[test]
fn test_open_replaces_context_and_close_clears() {
    let mut lightbox = Lightbox::closed();
    assert!(!lightbox.is_open());

    lightbox.open(vec!["a", "b"], 1);
    assert!(lightbox.is_open());
    assert_eq!(lightbox.current(), Some(&"b"));

    lightbox.open(vec!["x", "y", "z"], 0);
    assert_eq!(lightbox.len(), 3);
    assert_eq!(lightbox.current(), Some(&"x"));

    lightbox.close();
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.index(), None);
}

#[test]
fn test_open_empty_list_stays_closed() {
    let mut lightbox: Lightbox<&str> = Lightbox::closed();
    lightbox.open(Vec::new(), 0);
    assert!(!lightbox.is_open());
    // Navigation on a closed lightbox is a no-op, not a panic.
    lightbox.next();
    lightbox.prev();
    assert_eq!(lightbox.index(), None);
}

#[test]
fn test_open_clamps_out_of_range_index() {
    let mut lightbox = Lightbox::closed();
    lightbox.open(vec![1, 2, 3], 99);
    assert_eq!(lightbox.index(), Some(2));
}

#[test]
fn test_index_stays_in_bounds_while_navigating() {
    let mut lightbox = Lightbox::closed();
    lightbox.open(vec![0, 1, 2, 3, 4], 3);
    for _ in 0..13 {
        lightbox.next();
        let index = lightbox.index().expect("open");
        assert!(index < lightbox.len());
    }
}

#[test]
fn test_pure_index_helpers() {
    assert_eq!(next_index(2, 3), 0);
    assert_eq!(prev_index(0, 3), 2);
    // Empty lists leave the index untouched.
    assert_eq!(next_index(5, 0), 5);
    assert_eq!(prev_index(5, 0), 5);
}
