//! Shared constants for the seat layout editor.

/// Edge length of one grid cell in content-space units.
pub const GRID_CELL_SIZE: f64 = 40.0;

/// Position given to items whose stored position string is unusable.
pub const FALLBACK_POSITION_X: f64 = 100.0;
pub const FALLBACK_POSITION_Y: f64 = 100.0;

/// Zoom limits for the layout viewport.
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;

/// Multiplicative step used by discrete zoom in/out actions.
pub const ZOOM_STEP: f64 = 1.2;

/// Padding fraction per edge used when fitting a layout into view.
pub const VIEW_PADDING: f64 = 0.05;

/// Copies are offset by this many grid cells on both axes.
pub const COPY_OFFSET_CELLS: f64 = 1.0;

/// Touch radius around a resize handle, in screen pixels.
pub const HANDLE_TOUCH_RADIUS: f64 = 16.0;

/// Prefix of ids generated for items that have not been saved yet.
pub const LOCAL_ID_PREFIX: &str = "new_";

/// Suffix of generated seat labels ("1번", "2번", ...).
pub const SEAT_LABEL_SUFFIX: &str = "번";

/// Default canvas size used before the host reports the real one.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1080.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1920.0;
