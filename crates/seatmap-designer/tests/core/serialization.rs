use seatmap_core::{SeatDto, SeatStatus};
use seatmap_designer::serialization::{item_from_dto, legacy_label};
use seatmap_designer::{
    decode_position, encode_position, items_from_dtos, to_seat_updates, ItemId, ItemKind,
    LayoutConfig, LayoutItem, Point, Rect, Size, StatusOverlay,
};

fn dto(id: &str, name: &str, position: &str) -> SeatDto {
    SeatDto {
        id: id.to_string(),
        name: name.to_string(),
        status: SeatStatus::Available,
        position: position.to_string(),
    }
}

#[test]
fn test_position_round_trip() {
    let item = LayoutItem::new(
        ItemId::new("5"),
        "5번",
        ItemKind::Normal,
        Point::new(120.0, 80.0),
        Size::new(40.0, 40.0),
    );
    let text = encode_position(&item);
    assert_eq!(text, "120,80,40,40");
    let rect = decode_position(&text, &LayoutConfig::default());
    assert_eq!(rect.pos(), item.pos);
    assert_eq!(rect.size(), item.size);
}

#[test]
fn test_two_field_position_gets_default_size() {
    let rect = decode_position("50,60", &LayoutConfig::default());
    assert_eq!(rect.pos(), Point::new(50.0, 60.0));
    assert_eq!(rect.size(), Size::new(40.0, 40.0));
}

#[test]
fn test_empty_position_uses_fallback() {
    let rect = decode_position("", &LayoutConfig::default());
    assert_eq!(rect, Rect::new(100.0, 100.0, 40.0, 40.0));
}

#[test]
fn test_fallback_follows_config() {
    let config = LayoutConfig {
        cell_size: 20.0,
        fallback_position: Point::new(0.0, 0.0),
        ..LayoutConfig::default()
    };
    assert_eq!(decode_position("x,y", &config), Rect::new(0.0, 0.0, 20.0, 20.0));
}

#[test]
fn test_legacy_row_migrates_once() {
    let item = item_from_dto(&dto("8", "WALL_2", "0,0,200,40"), &LayoutConfig::default());
    assert_eq!(item.kind(), ItemKind::Wall);
    assert_eq!(item.label, "2");
    assert_eq!(legacy_label(&item), "WALL_2");

    let item = item_from_dto(&dto("9", "PREMIUM_A1", "0,0,40,40"), &LayoutConfig::default());
    assert_eq!(item.kind(), ItemKind::Premium);
    assert!(item.is_seat());
    assert_eq!(item.label, "A1");
}

#[test]
fn test_save_batch_is_full_replace() {
    let dtos = vec![
        dto("1", "1번", "0,0,40,40"),
        dto("2", "LABEL_입구", "40,0,80,40"),
        dto("3", "WINDOW_3번", "120,0,40,40"),
    ];
    let layout = items_from_dtos(&dtos, &LayoutConfig::default());
    let updates = to_seat_updates(&layout.items, &StatusOverlay::new());

    let names: Vec<_> = updates.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["1번", "LABEL_입구", "WINDOW_3번"]);
    let positions: Vec<_> = updates.iter().map(|u| u.position.as_str()).collect();
    assert_eq!(positions, ["0,0,40,40", "40,0,80,40", "120,0,40,40"]);
    assert_eq!(updates[1].status, SeatStatus::Unavailable);
}

#[test]
fn test_seat_update_wire_format() {
    let item = LayoutItem::new(
        ItemId::new("new_abc"),
        "1번",
        ItemKind::Normal,
        Point::new(80.0, 40.0),
        Size::square(40.0),
    );
    let updates = to_seat_updates([&item], &StatusOverlay::new());
    let json = serde_json::to_value(&updates[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "new_abc",
            "name": "1번",
            "status": "AVAILABLE",
            "position": "80,40,40,40"
        })
    );
}
