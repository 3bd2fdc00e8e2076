// Host-side tests for label hover and selection.

use landing_core::*;

const A: LabelId = LabelId(0);
const B: LabelId = LabelId(1);

#[test]
fn starts_idle() {
    let s = SelectionState::new(4);
    assert_eq!(s.selected(), None);
    for i in 0..4 {
        assert_eq!(s.visual(LabelId(i)), LabelVisual::Idle);
    }
}

#[test]
fn click_selects_and_reclick_clears() {
    let mut s = SelectionState::new(4);
    s.apply(LabelEvent::Click(A));
    assert_eq!(s.selected(), Some(A));
    s.apply(LabelEvent::Click(A));
    assert_eq!(s.selected(), None);
}

#[test]
fn clicking_another_label_moves_selection() {
    let mut s = SelectionState::new(4);
    s.apply(LabelEvent::Click(A));
    s.apply(LabelEvent::Click(B));
    assert_eq!(s.selected(), Some(B));
    assert!(!s.is_selected(A));
}

#[test]
fn at_most_one_label_selected() {
    let mut s = SelectionState::new(4);
    let clicks = [0, 1, 1, 3, 2, 2, 2, 0, 3];
    for c in clicks {
        s.apply(LabelEvent::Click(LabelId(c)));
        let n = (0..4).filter(|&i| s.is_selected(LabelId(i))).count();
        assert!(n <= 1);
    }
}

#[test]
fn hover_enter_and_leave() {
    let mut s = SelectionState::new(4);
    s.apply(LabelEvent::Enter(B));
    assert!(s.is_hovered(B));
    assert_eq!(s.visual(B), LabelVisual::Hovered);
    s.apply(LabelEvent::Leave(B));
    assert!(!s.is_hovered(B));
    assert_eq!(s.visual(B), LabelVisual::Idle);
}

#[test]
fn selected_wins_over_hovered() {
    let mut s = SelectionState::new(4);
    s.apply(LabelEvent::Enter(A));
    s.apply(LabelEvent::Click(A));
    assert_eq!(s.visual(A), LabelVisual::Selected);
    // leaving keeps the selection
    s.apply(LabelEvent::Leave(A));
    assert_eq!(s.visual(A), LabelVisual::Selected);
    s.apply(LabelEvent::Enter(A));
    s.apply(LabelEvent::Click(A));
    assert_eq!(s.visual(A), LabelVisual::Hovered);
}

#[test]
fn unknown_labels_are_ignored() {
    let mut s = SelectionState::new(2);
    s.apply(LabelEvent::Click(LabelId(7)));
    s.apply(LabelEvent::Enter(LabelId(7)));
    assert_eq!(s.selected(), None);
    assert!(!s.is_hovered(LabelId(7)));
}

#[test]
fn visual_colors() {
    assert_eq!(LabelVisual::Selected.hex(), 0x800080);
    assert_eq!(LabelVisual::Hovered.hex(), 0x888888);
    assert_eq!(LabelVisual::Idle.hex(), 0xffffff);
    let white = LabelVisual::Idle.color();
    assert!((white - glam::Vec3::ONE).length() < 1e-6);
    let purple = LabelVisual::Selected.color();
    assert!(purple.x > 0.0 && purple.x == purple.z && purple.y == 0.0);
}

#[test]
fn srgb_conversion_endpoints() {
    assert_eq!(srgb_hex_to_linear(0x000000), glam::Vec3::ZERO);
    let mid = srgb_hex_to_linear(0x808080).x;
    // sRGB 0.5 is about 0.214 linear
    assert!((mid - 0.2158).abs() < 1e-3);
}
