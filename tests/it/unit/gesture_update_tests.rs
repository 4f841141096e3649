//! Unit tests for the gesture-update arithmetic.

use spangrid::input::{plan_update, Gesture};
use spangrid::types::Item;

fn items() -> Vec<Item> {
    vec![Item::new(5, 10), Item::new(20, 15)]
}

#[test]
fn test_move_start_follows_hover_minus_offset() {
    let gesture = Gesture::Move { index: 1, grab_offset: 2 };
    for hovered in [21, 25, 30, 40] {
        let (index, item) = plan_update(&items(), gesture, hovered).expect("update");
        assert_eq!(index, 1);
        assert_eq!(item.start, hovered - 2);
        assert_eq!(item.size, 15, "size is invariant under move");
    }
}

#[test]
fn test_move_emits_nothing_when_start_unchanged() {
    let gesture = Gesture::Move { index: 0, grab_offset: 3 };
    // Hovering cell 8 with offset 3 resolves to the current start of 5.
    assert_eq!(plan_update(&items(), gesture, 8), None);
}

#[test]
fn test_move_is_unclamped() {
    let gesture = Gesture::Move { index: 0, grab_offset: 3 };
    let (_, item) = plan_update(&items(), gesture, 0).expect("update");
    assert_eq!(item, Item::new(-3, 10));
}

#[test]
fn test_resize_start_holds_end_fixed() {
    let gesture = Gesture::ResizeStart { index: 0 };
    let (index, item) = plan_update(&items(), gesture, 2).expect("update");
    assert_eq!(index, 0);
    assert_eq!(item, Item::new(2, 13));
    assert_eq!(item.end(), items()[0].end());
}

#[test]
fn test_resize_start_never_shrinks_below_one_cell() {
    let gesture = Gesture::ResizeStart { index: 0 };
    // End cell of item 0 is 14; hovering it (or past it) is rejected.
    assert_eq!(plan_update(&items(), gesture, 14), None);
    assert_eq!(plan_update(&items(), gesture, 20), None);
    // One cell short of the end is still allowed.
    let (_, item) = plan_update(&items(), gesture, 13).expect("update");
    assert_eq!(item, Item::new(13, 2));
}

#[test]
fn test_resize_end_holds_start_fixed() {
    let gesture = Gesture::ResizeEnd { index: 1 };
    let (index, item) = plan_update(&items(), gesture, 40).expect("update");
    assert_eq!(index, 1);
    assert_eq!(item, Item::new(20, 21));
}

#[test]
fn test_resize_end_never_shrinks_below_one_cell() {
    let gesture = Gesture::ResizeEnd { index: 1 };
    assert_eq!(plan_update(&items(), gesture, 20), None);
    assert_eq!(plan_update(&items(), gesture, 3), None);
    let (_, item) = plan_update(&items(), gesture, 21).expect("update");
    assert_eq!(item, Item::new(20, 2));
}

#[test]
fn test_idle_and_create_emit_nothing() {
    assert_eq!(plan_update(&items(), Gesture::Idle, 10), None);
    let create = Gesture::Create { anchor: 2, current: 4 };
    assert_eq!(plan_update(&items(), create, 10), None);
}

#[test]
fn test_out_of_range_index_is_a_no_op() {
    let gesture = Gesture::Move { index: 9, grab_offset: 0 };
    assert_eq!(plan_update(&items(), gesture, 10), None);
}
