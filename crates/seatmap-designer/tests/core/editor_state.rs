use seatmap_core::{LayoutError, SeatDto, SeatStatus, SeatStatusUpdate};
use seatmap_designer::{
    EditorMode, EditorState, Gesture, GestureOutcome, InteractionState, ItemId, ItemKind,
    LayoutConfig, Point, Rect, Size,
};

fn editor() -> EditorState {
    EditorState::with_canvas_size(LayoutConfig::default(), EditorMode::Edit, 800.0, 600.0)
}

fn rows() -> Vec<SeatDto> {
    vec![
        SeatDto {
            id: "1".into(),
            name: "1번".into(),
            status: SeatStatus::Occupied,
            position: "40,40,40,40".into(),
        },
        SeatDto {
            id: "2".into(),
            name: "WALL_1".into(),
            status: SeatStatus::Unavailable,
            position: "200,40,160,40".into(),
        },
    ]
}

#[test]
fn test_hydrate_resets_everything() {
    let mut state = editor();
    state.add_seat().unwrap();
    assert!(state.is_modified());

    assert_eq!(state.hydrate(&rows()).unwrap(), 2);
    assert!(!state.is_modified());
    assert!(state.selected_item().is_none());
    assert_eq!(
        state.overlay.status_of(&ItemId::new("1")),
        Some(SeatStatus::Occupied)
    );
    // Walls never carry overlay status.
    assert_eq!(state.overlay.status_of(&ItemId::new("2")), None);
}

#[test]
fn test_add_seat_at_viewport_center() {
    let mut state = editor();
    state.canvas.viewport_mut().set_translate(Point::new(-50.0, 0.0));
    let id = state.add_seat().unwrap();

    // Screen center (400,300) is content (450,300); snapped to (440,320).
    let item = state.canvas.get_item(&id).unwrap();
    assert_eq!(item.pos, Point::new(440.0, 320.0));
    assert_eq!(item.size, Size::square(40.0));
    assert_eq!(item.kind(), ItemKind::Normal);
    assert!(id.is_local());
    assert_eq!(state.selected_item().map(|i| i.id()), Some(&id));
}

#[test]
fn test_wall_numbers_reuse_gaps() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    assert_eq!(state.next_wall_label(), "2");
    let a = state.add_wall().unwrap();
    let b = state.add_wall().unwrap();
    assert_eq!(state.canvas.get_item(&a).unwrap().label, "2");
    assert_eq!(state.canvas.get_item(&b).unwrap().label, "3");

    state.canvas.selection_manager.select(a);
    state.delete_selected().unwrap();
    assert_eq!(state.next_wall_label(), "2");
    // Seat numbering is independent of walls.
    assert_eq!(state.next_seat_label(), "2번");
}

#[test]
fn test_copy_offsets_by_one_cell() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    state.canvas.selection_manager.select(ItemId::new("1"));

    let copy = state.copy_selected().unwrap();
    let item = state.canvas.get_item(&copy).unwrap();
    assert_eq!(item.pos, Point::new(80.0, 80.0));
    assert_eq!(item.label, "2번");
    assert_ne!(copy, ItemId::new("1"));
    assert_eq!(state.selected_item().map(|i| i.id()), Some(&copy));
}

#[test]
fn test_nothing_selected_errors() {
    let mut state = editor();
    assert_eq!(state.delete_selected().unwrap_err(), LayoutError::NothingSelected);
    assert_eq!(state.copy_selected().unwrap_err(), LayoutError::NothingSelected);
    assert_eq!(state.begin_edit_selected().unwrap_err(), LayoutError::NothingSelected);
}

#[test]
fn test_delete_prunes_overlay_and_clears_selection() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    state.canvas.selection_manager.select(ItemId::new("1"));
    let removed = state.delete_selected().unwrap();
    assert_eq!(removed.id(), &ItemId::new("1"));
    assert!(state.overlay.is_empty());
    assert!(state.selected_item().is_none());
    assert_eq!(state.seat_updates().len(), 1);
}

#[test]
fn test_double_tap_edit_and_confirm() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    assert_eq!(
        state.handle_gesture(Gesture::DoubleTap(Point::new(60.0, 60.0))),
        GestureOutcome::EditRequested(ItemId::new("1"))
    );

    let draft = state.draft_mut().unwrap();
    draft.set_label("VIP");
    assert!(!draft.set_width_text("2x"));
    assert!(draft.set_width_text("3"));
    assert!(draft.set_height_text("0"));

    assert_eq!(state.confirm_edit().unwrap(), ItemId::new("1"));
    let item = state.canvas.get_item(&ItemId::new("1")).unwrap();
    assert_eq!(item.label, "VIP");
    assert_eq!(item.size, Size::new(120.0, 40.0));
    assert!(state.draft().is_none());
    assert_eq!(state.interaction_state(), &InteractionState::Idle);
    assert!(state.is_modified());
}

#[test]
fn test_tap_cancels_edit() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    state.canvas.selection_manager.select(ItemId::new("1"));
    state.begin_edit_selected().unwrap();
    state.draft_mut().unwrap().set_label("changed");

    assert_eq!(
        state.handle_gesture(Gesture::Tap(Point::new(700.0, 500.0))),
        GestureOutcome::Cancelled
    );
    assert!(state.draft().is_none());
    assert_eq!(state.canvas.get_item(&ItemId::new("1")).unwrap().label, "1번");
    assert!(!state.is_modified());
}

#[test]
fn test_locked_item_refuses_size_edit() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    state.canvas.selection_manager.select(ItemId::new("1"));
    assert!(state.toggle_lock_selected().unwrap());
    state.begin_edit_selected().unwrap();
    state.draft_mut().unwrap().set_width_text("4");
    assert!(matches!(
        state.confirm_edit(),
        Err(LayoutError::ItemLocked { .. })
    ));
    assert!(state.draft().is_some());
    assert!(state.cancel_edit());
}

#[test]
fn test_view_mode_refuses_editing() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    state.set_mode(EditorMode::View);
    state.canvas.selection_manager.select(ItemId::new("1"));
    assert!(matches!(
        state.begin_edit_selected(),
        Err(LayoutError::InvalidState { .. })
    ));
}

#[test]
fn test_display_rect_follows_drag_preview() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    let id = ItemId::new("1");
    state.handle_gesture(Gesture::DragStart(Point::new(50.0, 50.0)));
    state.handle_gesture(Gesture::DragMove(Point::new(15.0, 0.0)));

    assert_eq!(state.display_rect(&id), Some(Rect::new(55.0, 40.0, 40.0, 40.0)));
    assert_eq!(
        state.display_rect(&ItemId::new("2")),
        Some(Rect::new(200.0, 40.0, 160.0, 40.0))
    );
    state.handle_gesture(Gesture::DragEnd);
    assert_eq!(state.display_rect(&id), Some(Rect::new(40.0, 40.0, 40.0, 40.0)));
}

#[test]
fn test_status_updates_counted() {
    let mut state = editor();
    state.hydrate(&rows()).unwrap();
    let changed = state.apply_status_updates(&[
        SeatStatusUpdate::new("1", SeatStatus::Occupied),
        SeatStatusUpdate::new("1", SeatStatus::Available),
    ]);
    assert_eq!(changed, 1);
    let rendered = state.rendered_items();
    assert_eq!(rendered[0].status, Some(SeatStatus::Available));
    assert_eq!(rendered[1].status, None);
}

#[test]
fn test_fit_all_items_and_rotation() {
    let mut state = editor();
    state.fit_all_items();
    assert_eq!(state.canvas.viewport().scale(), 1.0);

    state.hydrate(&rows()).unwrap();
    state.fit_all_items();
    let vp = state.canvas.viewport();
    assert!((vp.scale() - 2.25).abs() < 1e-9);

    state.canvas.selection_manager.select(ItemId::new("2"));
    state.set_selected_rotation(Some(-90.0)).unwrap();
    assert_eq!(state.selected_item().unwrap().rotation, Some(270.0));
}

#[test]
fn test_unrecognized_seat_status_survives_save() {
    let mut state = editor();
    let json = r#"[{"id":"m","name":"7번","status":"MAINTENANCE","position":"80,80,40,40"}]"#;
    let rows: Vec<SeatDto> = serde_json::from_str(json).unwrap();
    state.hydrate(&rows).unwrap();

    let rendered = state.rendered_items();
    assert_eq!(
        rendered[0].status,
        Some(SeatStatus::Other("MAINTENANCE".to_string()))
    );

    let updates = state.seat_updates();
    let wire = serde_json::to_value(&updates).unwrap();
    assert_eq!(wire[0]["status"], "MAINTENANCE");
    assert_eq!(wire[0]["position"], "80,80,40,40");
}
