//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between content coordinates (item geometry) and screen
//! coordinates (what the user touches). Both axes point the same way in both
//! spaces, so the mapping is a uniform scale plus a translation:
//!
//! ```text
//! screen  = content * scale + translate
//! content = (screen - translate) / scale
//! ```
//!
//! Every hit test and every rendered position goes through these two
//! functions.

use std::fmt;

use seatmap_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_SCALE, MIN_SCALE, VIEW_PADDING, ZOOM_STEP,
};

use crate::geometry::{Point, Rect, Size};

/// Represents the viewport transformation state (scale and translation).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    translate: Point,
    min_scale: f64,
    max_scale: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport at scale 1.0 with the content origin at the
    /// top-left corner of the canvas.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            scale: 1.0,
            translate: Point::ZERO,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            canvas_width,
            canvas_height,
        }
    }

    /// Replaces the scale limits. The current scale is re-clamped.
    ///
    /// Inverted or non-positive limits are ignored.
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        if min_scale > 0.0 && min_scale <= max_scale {
            self.min_scale = min_scale;
            self.max_scale = max_scale;
            self.scale = self.scale.clamp(min_scale, max_scale);
        }
        self
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Sets the canvas dimensions (called when the host lays out the view).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the scale, clamped to the configured limits.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
    }

    /// Screen-space offset of the content origin.
    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn set_translate(&mut self, translate: Point) {
        self.translate = translate;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, delta: Point) {
        self.translate += delta;
    }

    /// Converts content coordinates to screen coordinates.
    pub fn to_screen(&self, content: Point) -> Point {
        content * self.scale + self.translate
    }

    /// Converts screen coordinates to content coordinates.
    pub fn to_content(&self, screen: Point) -> Point {
        (screen - self.translate) / self.scale
    }

    /// Converts a content rectangle to its on-screen rectangle.
    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        let origin = self.to_screen(rect.pos());
        Rect::new(
            origin.x,
            origin.y,
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }

    /// The content point currently under the middle of the canvas.
    pub fn screen_center_in_content(&self) -> Point {
        self.to_content(Point::new(
            self.canvas_width / 2.0,
            self.canvas_height / 2.0,
        ))
    }

    /// Scales by `factor` around a screen-space point.
    ///
    /// The content point under `centroid` stays under it as long as the new
    /// scale is not clamped.
    pub fn zoom_about(&mut self, centroid: Point, factor: f64) {
        self.apply_transform_gesture(centroid, Point::ZERO, factor);
    }

    /// Applies one frame of a two-finger gesture.
    ///
    /// ```text
    /// translate' = (translate - centroid) * (new_scale / old_scale) + centroid + pan
    /// ```
    ///
    /// `zoom` is the incremental scale factor for this frame and `pan` the
    /// centroid movement since the last frame, both in screen space.
    pub fn apply_transform_gesture(&mut self, centroid: Point, pan: Point, zoom: f64) {
        let old_scale = self.scale;
        if zoom.is_finite() && zoom > 0.0 {
            self.set_scale(old_scale * zoom);
        }
        let ratio = self.scale / old_scale;
        self.translate = (self.translate - centroid) * ratio + centroid + pan;
    }

    /// Zooms in one step around the canvas center.
    pub fn zoom_in(&mut self) {
        self.zoom_about(self.canvas_center(), ZOOM_STEP);
    }

    /// Zooms out one step around the canvas center.
    pub fn zoom_out(&mut self) {
        self.zoom_about(self.canvas_center(), 1.0 / ZOOM_STEP);
    }

    /// Fits the given content rectangle into the canvas with padding.
    ///
    /// `padding` is the fraction of the canvas reserved on each edge
    /// (0.0 - 0.5). The content is centered; the scale respects the limits,
    /// so a very large layout may still overflow. Empty rectangles are
    /// ignored.
    pub fn fit_to_bounds(&mut self, bounds: &Rect, padding: f64) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding.clamp(0.0, 0.45) * 2.0);
        let scale_x = (self.canvas_width * padding_factor) / bounds.width;
        let scale_y = (self.canvas_height * padding_factor) / bounds.height;
        self.set_scale(scale_x.min(scale_y));

        // Center of the bounds lands on the center of the canvas.
        self.translate = self.canvas_center() - bounds.center() * self.scale;
    }

    /// Fits with the default padding.
    pub fn fit_to_view(&mut self, bounds: &Rect) {
        self.fit_to_bounds(bounds, VIEW_PADDING);
    }

    /// Back to scale 1.0 with no translation.
    pub fn reset(&mut self) {
        self.scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
        self.translate = Point::ZERO;
    }

    fn canvas_center(&self) -> Point {
        Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(scale: {:.2}, translate: {}, canvas: {:.0}x{:.0})",
            self.scale, self.translate, self.canvas_width, self.canvas_height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_forward_and_inverse() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale(2.0);
        vp.set_translate(Point::new(10.0, -20.0));

        let screen = vp.to_screen(Point::new(100.0, 50.0));
        assert_eq!(screen, Point::new(210.0, 80.0));
        assert!(approx(vp.to_content(screen), Point::new(100.0, 50.0)));
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut vp = Viewport::default();
        vp.set_scale(10.0);
        assert_eq!(vp.scale(), MAX_SCALE);
        vp.set_scale(0.0);
        assert_eq!(vp.scale(), MIN_SCALE);
        vp.set_scale(f64::NAN);
        assert_eq!(vp.scale(), MIN_SCALE);
    }

    #[test]
    fn test_pinch_keeps_centroid_fixed() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_translate(Point::new(30.0, 40.0));
        let centroid = Point::new(300.0, 200.0);
        let under = vp.to_content(centroid);

        vp.apply_transform_gesture(centroid, Point::ZERO, 1.5);
        assert_eq!(vp.scale(), 1.5);
        assert!(approx(vp.to_screen(under), centroid));
    }

    #[test]
    fn test_pinch_with_pan() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.apply_transform_gesture(Point::new(100.0, 100.0), Point::new(5.0, -5.0), 1.0);
        assert_eq!(vp.translate(), Point::new(5.0, -5.0));
    }

    #[test]
    fn test_clamped_zoom_does_not_jump() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale(MAX_SCALE);
        let before = vp.translate();
        vp.zoom_about(Point::new(400.0, 300.0), 2.0);
        assert_eq!(vp.scale(), MAX_SCALE);
        assert_eq!(vp.translate(), before);
    }

    #[test]
    fn test_screen_center_in_content() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale(2.0);
        vp.set_translate(Point::new(-200.0, 100.0));
        assert!(approx(
            vp.screen_center_in_content(),
            Point::new(300.0, 100.0)
        ));
    }

    #[test]
    fn test_fit_to_bounds_centers_content() {
        let mut vp = Viewport::new(1000.0, 1000.0);
        let bounds = Rect::new(0.0, 0.0, 400.0, 200.0);
        vp.fit_to_bounds(&bounds, 0.05);

        assert!((vp.scale() - 2.25).abs() < 1e-9);
        assert!(approx(vp.to_screen(bounds.center()), Point::new(500.0, 500.0)));
    }

    #[test]
    fn test_fit_ignores_empty_bounds() {
        let mut vp = Viewport::new(1000.0, 1000.0);
        vp.fit_to_bounds(&Rect::new(5.0, 5.0, 0.0, 10.0), 0.05);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translate(), Point::ZERO);
    }

    #[test]
    fn test_zoom_steps_and_reset() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.zoom_in();
        assert!((vp.scale() - ZOOM_STEP).abs() < 1e-9);
        vp.zoom_out();
        assert!((vp.scale() - 1.0).abs() < 1e-9);
        vp.pan_by(Point::new(3.0, 4.0));
        vp.reset();
        assert_eq!(vp.translate(), Point::ZERO);
        assert!(vp.to_string().starts_with("Viewport(scale: 1.00"));
    }
}
