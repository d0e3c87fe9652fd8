//! End-to-end editing scenarios driven through `EditorState`.

use seatmap_core::{SeatDto, SeatStatus, SeatStatusUpdate};
use seatmap_designer::{
    snap, EditorMode, EditorState, Gesture, GestureOutcome, ItemId, LayoutConfig, Point, Size,
};

fn editor() -> EditorState {
    EditorState::with_canvas_size(LayoutConfig::default(), EditorMode::Edit, 800.0, 600.0)
}

fn one_seat_at(x: f64, y: f64) -> EditorState {
    let mut state = editor();
    state
        .hydrate(&[SeatDto {
            id: "s1".into(),
            name: "1번".into(),
            status: SeatStatus::Available,
            position: format!("{},{},40,40", x, y),
        }])
        .unwrap();
    state
}

#[test]
fn test_add_and_save() {
    let mut state = editor();
    state.hydrate(&[]).unwrap();

    let first = state.add_seat().unwrap();
    let center = state.canvas.viewport().screen_center_in_content();
    let expected = Point::new(snap(center.x, 40.0), snap(center.y, 40.0));
    {
        let item = state.canvas.get_item(&first).unwrap();
        assert_eq!(item.label, "1번");
        assert_eq!(item.pos, expected);
    }
    assert_eq!(state.items().count(), 1);

    let second = state.add_seat().unwrap();
    let labels: Vec<_> = state.items().map(|i| i.label.clone()).collect();
    assert_eq!(labels, ["1번", "2번"]);

    // Deleting "1번" frees the number; the next seat takes it again.
    state.canvas.selection_manager.select(first);
    state.delete_selected().unwrap();
    let third = state.add_seat().unwrap();
    assert_eq!(state.canvas.get_item(&third).unwrap().label, "1번");
    assert_eq!(state.canvas.get_item(&second).unwrap().label, "2번");

    let batch = state.seat_updates();
    assert_eq!(batch.len(), 2);
    assert!(batch.iter().all(|u| u.id.starts_with("new_")));
    assert!(batch.iter().all(|u| u.status == SeatStatus::Available));
}

#[test]
fn test_drag_cancel() {
    let mut state = one_seat_at(40.0, 40.0);
    let id = ItemId::new("s1");
    assert_eq!(state.canvas.viewport().scale(), 1.0);

    state.handle_gesture(Gesture::Tap(Point::new(60.0, 60.0)));
    assert_eq!(
        state.handle_gesture(Gesture::DragStart(Point::new(60.0, 60.0))),
        GestureOutcome::DragStarted(id.clone())
    );
    state.handle_gesture(Gesture::DragMove(Point::new(100.0, 0.0)));
    assert_eq!(
        state.handle_gesture(Gesture::DragCancel),
        GestureOutcome::Cancelled
    );

    assert_eq!(state.canvas.get_item(&id).unwrap().pos, Point::new(40.0, 40.0));
    assert!(!state.is_modified());
}

#[test]
fn test_drag_without_cancel_commits() {
    let mut state = one_seat_at(40.0, 40.0);
    let id = ItemId::new("s1");
    state.handle_gesture(Gesture::DragStart(Point::new(60.0, 60.0)));
    state.handle_gesture(Gesture::DragMove(Point::new(100.0, 0.0)));
    state.handle_gesture(Gesture::DragEnd);

    // 40 + 100 = 140 snaps to 160.
    assert_eq!(state.canvas.get_item(&id).unwrap().pos, Point::new(160.0, 40.0));
    assert!(state.is_modified());
    assert_eq!(state.seat_updates()[0].position, "160,40,40,40");
}

#[test]
fn test_status_overlay_isolation() {
    let mut state = one_seat_at(40.0, 40.0);
    let id = ItemId::new("s1");
    state.handle_gesture(Gesture::DragStart(Point::new(60.0, 60.0)));
    state.handle_gesture(Gesture::DragMove(Point::new(37.0, 12.0)));
    let preview = state.display_rect(&id);

    let changed = state.apply_status_updates(&[SeatStatusUpdate::new("s1", SeatStatus::Occupied)]);
    assert_eq!(changed, 1);

    let item = state.canvas.get_item(&id).unwrap();
    assert_eq!(item.pos, Point::new(40.0, 40.0));
    assert_eq!(item.size, Size::square(40.0));
    assert_eq!(state.display_rect(&id), preview);
    assert_eq!(state.overlay.status_of(&id), Some(SeatStatus::Occupied));
    assert_eq!(
        state.handle_gesture(Gesture::DragMove(Point::new(1.0, 0.0))),
        GestureOutcome::PreviewUpdated(id.clone())
    );
}

#[test]
fn test_resize_from_handle_then_save() {
    let mut state = one_seat_at(80.0, 80.0);
    let id = ItemId::new("s1");
    state.handle_gesture(Gesture::Tap(Point::new(100.0, 100.0)));

    // NW handle of the selected seat sits on its top-left corner.
    assert!(matches!(
        state.handle_gesture(Gesture::DragStart(Point::new(80.0, 80.0))),
        GestureOutcome::ResizeStarted(_, seatmap_designer::ResizeHandle::NorthWest)
    ));
    state.handle_gesture(Gesture::DragMove(Point::new(-41.0, -78.0)));
    state.handle_gesture(Gesture::DragEnd);

    let item = state.canvas.get_item(&id).unwrap();
    assert_eq!(item.pos, Point::new(40.0, 0.0));
    assert_eq!(item.size, Size::new(80.0, 120.0));
    assert_eq!(state.seat_updates()[0].position, "40,0,80,120");
}

#[test]
fn test_view_mode_browsing() {
    let mut state = one_seat_at(40.0, 40.0);
    state.set_mode(EditorMode::View);

    // Dragging a seat in view mode pans instead of moving it.
    state.handle_gesture(Gesture::DragStart(Point::new(60.0, 60.0)));
    state.handle_gesture(Gesture::DragMove(Point::new(25.0, 0.0)));
    state.handle_gesture(Gesture::DragEnd);
    assert_eq!(
        state.canvas.get_item(&ItemId::new("s1")).unwrap().pos,
        Point::new(40.0, 40.0)
    );
    assert_eq!(state.canvas.viewport().translate(), Point::new(25.0, 0.0));

    // Double tap just selects.
    assert_eq!(
        state.handle_gesture(Gesture::DoubleTap(Point::new(85.0, 60.0))),
        GestureOutcome::SelectionChanged(Some(ItemId::new("s1")))
    );
    assert!(state.draft().is_none());
}

#[test]
fn test_selected_seat_drags_when_zoomed_out() {
    let mut state = one_seat_at(40.0, 40.0);
    let id = ItemId::new("s1");
    state.canvas.viewport_mut().set_scale(0.5);

    // The seat covers screen (20,20)..(40,40).
    assert_eq!(
        state.handle_gesture(Gesture::Tap(Point::new(30.0, 30.0))),
        GestureOutcome::SelectionChanged(Some(id.clone()))
    );
    assert_eq!(
        state.handle_gesture(Gesture::DragStart(Point::new(30.0, 30.0))),
        GestureOutcome::DragStarted(id.clone())
    );
    state.handle_gesture(Gesture::DragMove(Point::new(20.0, 0.0)));
    state.handle_gesture(Gesture::DragEnd);
    assert_eq!(state.canvas.get_item(&id).unwrap().pos, Point::new(80.0, 40.0));
}
