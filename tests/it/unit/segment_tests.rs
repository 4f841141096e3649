//! Unit tests for the row-segment split used by the renderer.

use spangrid::types::{Item, Segment};

#[test]
fn test_span_wrapping_one_row_boundary() {
    // start 5, size 10, 8 columns: cells 5-7 on row 0, cells 8-14 on row 1.
    let segments = Item::new(5, 10).segments();
    assert_eq!(
        segments,
        vec![
            Segment { row: 0, col: 5, len: 3, first: true, last: false },
            Segment { row: 1, col: 0, len: 7, first: false, last: true },
        ]
    );
}

#[test]
fn test_single_row_span_is_one_segment() {
    let segments = Item::new(9, 4).segments();
    assert_eq!(
        segments,
        vec![Segment { row: 1, col: 1, len: 4, first: true, last: true }]
    );
}

#[test]
fn test_span_covering_exact_rows() {
    let segments = Item::new(8, 16).segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], Segment { row: 1, col: 0, len: 8, first: true, last: false });
    assert_eq!(segments[1], Segment { row: 2, col: 0, len: 8, first: false, last: true });
}

#[test]
fn test_span_across_three_rows() {
    insta::assert_debug_snapshot!(Item::new(6, 12).segments(), @r"
    [
        Segment {
            row: 0,
            col: 6,
            len: 2,
            first: true,
            last: false,
        },
        Segment {
            row: 1,
            col: 0,
            len: 8,
            first: false,
            last: false,
        },
        Segment {
            row: 2,
            col: 0,
            len: 2,
            first: false,
            last: true,
        },
    ]
    ");
}

#[test]
fn test_negative_start_wraps_consistently() {
    // Permissive data: a span pushed before the grid still splits into
    // well-formed segments (row -1).
    let segments = Item::new(-2, 4).segments();
    assert_eq!(
        segments,
        vec![
            Segment { row: -1, col: 6, len: 2, first: true, last: false },
            Segment { row: 0, col: 0, len: 2, first: false, last: true },
        ]
    );
}

#[test]
fn test_non_positive_size_has_no_segments() {
    assert!(Item::new(5, 0).segments().is_empty());
}
