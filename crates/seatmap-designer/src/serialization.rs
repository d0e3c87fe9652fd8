//! Conversion between layout items and backend seat rows.
//!
//! The backend stores geometry as one `"x,y,w,h"` string in content-space
//! units and has no type column. Walls, labels and seat variants are told
//! apart by a prefix on the name (`WALL_3`, `LABEL_Entrance`, ...). That
//! convention lives only in this module: on the way in the prefix becomes an
//! [`ItemKind`] and is stripped from the label, on the way out it is put
//! back.
//!
//! Decoding never fails. Rows written by older clients may have short or
//! empty position strings; they load at a fallback point with a one-cell
//! size instead of aborting the whole layout.

use std::collections::HashSet;

use tracing::warn;

use seatmap_core::{SeatDto, SeatStatus, SeatStatusUpdate, SeatUpdate};

use crate::canvas::LayoutConfig;
use crate::geometry::{Point, Rect, Size};
use crate::model::{ItemId, ItemKind, LayoutItem};
use crate::status_overlay::StatusOverlay;

const LEGACY_PREFIXES: [(&str, ItemKind); 4] = [
    ("WALL_", ItemKind::Wall),
    ("LABEL_", ItemKind::Label),
    ("WINDOW_", ItemKind::Window),
    ("PREMIUM_", ItemKind::Premium),
];

/// Items decoded from a seat list, plus the statuses the server sent with
/// them.
#[derive(Debug, Clone, Default)]
pub struct HydratedLayout {
    pub items: Vec<LayoutItem>,
    pub statuses: Vec<SeatStatusUpdate>,
}

/// Formats a coordinate without a trailing `.0` for whole numbers.
pub fn format_number(value: f64) -> String {
    // Avoid "-0".
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Encodes an item's geometry as `"x,y,w,h"`.
pub fn encode_position(item: &LayoutItem) -> String {
    format!(
        "{},{},{},{}",
        format_number(item.pos.x),
        format_number(item.pos.y),
        format_number(item.size.width),
        format_number(item.size.height)
    )
}

/// Decodes a position string leniently.
///
/// Fewer than two usable numbers put the item at the fallback point; fewer
/// than four give it a one-cell size. A field that is not a finite number
/// counts as missing. Sizes are raised to at least one cell.
pub fn decode_position(text: &str, config: &LayoutConfig) -> Rect {
    let fields: Vec<Option<f64>> = text
        .split(',')
        .map(|f| f.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect();
    let field = |i: usize| fields.get(i).copied().flatten();
    let cell = config.cell_size;

    let pos = match (field(0), field(1)) {
        (Some(x), Some(y)) => Point::new(x, y),
        _ => config.fallback_position,
    };
    let size = match (field(2), field(3)) {
        (Some(w), Some(h)) => Size::new(w, h).floored(cell),
        _ => Size::square(cell),
    };
    Rect::from_pos_size(pos, size)
}

/// Splits a stored name into its kind and display label.
pub fn kind_from_legacy_label(name: &str) -> (ItemKind, String) {
    for (prefix, kind) in LEGACY_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            return (kind, rest.to_string());
        }
    }
    (ItemKind::Normal, name.to_string())
}

/// The name to store for an item, with its kind prefix re-applied.
pub fn legacy_label(item: &LayoutItem) -> String {
    LEGACY_PREFIXES
        .iter()
        .find(|(_, kind)| *kind == item.kind())
        .map(|(prefix, _)| format!("{}{}", prefix, item.label))
        .unwrap_or_else(|| item.label.clone())
}

/// Converts one seat row into an item.
pub fn item_from_dto(dto: &SeatDto, config: &LayoutConfig) -> LayoutItem {
    let (kind, label) = kind_from_legacy_label(&dto.name);
    let rect = decode_position(&dto.position, config);
    if fields_missing(&dto.position) {
        warn!(
            "Seat {} has incomplete position {:?}; using defaults",
            dto.id, dto.position
        );
    }
    LayoutItem::new(ItemId::new(dto.id.as_str()), label, kind, rect.pos(), rect.size())
}

/// Hydrates a whole seat list. Rows repeating an earlier id are skipped.
pub fn items_from_dtos(dtos: &[SeatDto], config: &LayoutConfig) -> HydratedLayout {
    let mut seen = HashSet::new();
    let mut layout = HydratedLayout::default();
    for dto in dtos {
        if !seen.insert(dto.id.as_str()) {
            warn!("Skipping duplicate seat id {}", dto.id);
            continue;
        }
        let item = item_from_dto(dto, config);
        if item.is_seat() {
            layout
                .statuses
                .push(SeatStatusUpdate::new(dto.id.as_str(), dto.status.clone()));
        }
        layout.items.push(item);
    }
    layout
}

/// Builds the full-replace batch for one save.
///
/// Seats carry their overlay status, or `AVAILABLE` if none is known. Walls
/// and labels are always sent as `UNAVAILABLE`.
pub fn to_seat_updates<'a, I>(items: I, overlay: &StatusOverlay) -> Vec<SeatUpdate>
where
    I: IntoIterator<Item = &'a LayoutItem>,
{
    items
        .into_iter()
        .map(|item| {
            let status = if item.is_seat() {
                overlay.status_of(item.id()).unwrap_or(SeatStatus::Available)
            } else {
                SeatStatus::Unavailable
            };
            SeatUpdate {
                id: item.id().to_string(),
                name: legacy_label(item),
                status,
                position: encode_position(item),
            }
        })
        .collect()
}

fn fields_missing(text: &str) -> bool {
    text.split(',')
        .filter(|f| f.trim().parse::<f64>().is_ok_and(f64::is_finite))
        .count()
        < 4
}
