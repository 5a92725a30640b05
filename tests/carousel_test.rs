//! Carousel view-model tests.
//!
//! Covers:
//! - Wraparound parity with the lightbox rule
//! - Direct jump semantics (no wraparound, out-of-range ignored)
//! - Translation offset as a pure function of the index

use halcyon::models::carousel::Carousel;

#[test]
fn test_starts_at_zero() {
    let carousel = Carousel::new(5);
    assert_eq!(carousel.current(), 0);
    assert_eq!(carousel.offset_percent(), 0);
}

#[test]
fn test_next_and_prev_wrap() {
    let mut carousel = Carousel::new(3);
    carousel.next();
    carousel.next();
    carousel.next();
    assert_eq!(carousel.current(), 0);

    carousel.prev();
    assert_eq!(carousel.current(), 2);
}

#[test]
fn test_full_cycle_returns_to_start() {
    for len in [1usize, 2, 4, 6] {
        let mut carousel = Carousel::new(len);
        carousel.jump(len / 2);
        let start = carousel.current();
        for _ in 0..len {
            carousel.next();
        }
        assert_eq!(carousel.current(), start, "len={len}");
    }
}

#[test]
fn test_single_slide_never_moves() {
    let mut carousel = Carousel::new(1);
    carousel.next();
    assert_eq!(carousel.current(), 0);
    carousel.prev();
    assert_eq!(carousel.current(), 0);
}

#[test]
fn test_jump_is_direct_set() {
    let mut carousel = Carousel::new(4);
    carousel.jump(3);
    assert_eq!(carousel.current(), 3);
    carousel.jump(1);
    assert_eq!(carousel.current(), 1);
}

#[test]
fn test_jump_out_of_range_is_ignored() {
    let mut carousel = Carousel::new(4);
    carousel.jump(2);
    carousel.jump(4);
    assert_eq!(carousel.current(), 2);
    carousel.jump(99);
    assert_eq!(carousel.current(), 2);
}

#[test]
fn test_offset_tracks_index() {
    let mut carousel = Carousel::new(5);
    assert_eq!(carousel.offset_percent(), 0);
    carousel.next();
    assert_eq!(carousel.offset_percent(), -100);
    carousel.jump(4);
    assert_eq!(carousel.offset_percent(), -400);
    carousel.next();
    assert_eq!(carousel.offset_percent(), 0);
}

#[test]
fn test_empty_carousel_is_inert() {
    let mut carousel = Carousel::new(0);
    carousel.next();
    carousel.prev();
    carousel.jump(0);
    assert_eq!(carousel.current(), 0);
    assert!(carousel.is_empty());
}
