//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between screen coordinates (pixels) and scene
//! coordinates (document space). Manages zoom and pan with the invariant
//! that zooming is always anchored at a point: the scene point under the
//! anchor stays visually fixed. Never touches document data.

use seatkit_core::constants::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use seatkit_core::geometry::Point;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f64,
    offset: Point,
    view_width: f64,
    view_height: f64,
    zoom_armed: bool,
    pan_anchor: Option<Point>,
}

impl Viewport {
    /// Creates a new viewport with initial view dimensions, at 1:1 scale
    /// with no offset.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            scale: 1.0,
            offset: Point::ORIGIN,
            view_width,
            view_height,
            zoom_armed: false,
            pan_anchor: None,
        }
    }

    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// Sets the view dimensions (typically called when the window resizes).
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Gets the current zoom scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom scale, clamped to the documented range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Zooms in one step, anchored at the viewport's visual centre.
    pub fn zoom_in(&mut self) {
        let center = Point::new(self.view_width / 2.0, self.view_height / 2.0);
        self.zoom_about(center, self.scale * ZOOM_STEP);
    }

    /// Zooms out one step, anchored at the viewport's visual centre.
    pub fn zoom_out(&mut self) {
        let center = Point::new(self.view_width / 2.0, self.view_height / 2.0);
        self.zoom_about(center, self.scale / ZOOM_STEP);
    }

    /// Zooms to `new_scale` keeping the screen point `anchor` visually
    /// fixed. The scale is clamped; the offset is recomputed as
    /// `anchor - (anchor - offset) * (new / old)`.
    pub fn zoom_about(&mut self, anchor: Point, new_scale: f64) {
        let new_scale = new_scale.clamp(MIN_SCALE, MAX_SCALE);
        let ratio = new_scale / self.scale;
        self.offset = Point::new(
            anchor.x - (anchor.x - self.offset.x) * ratio,
            anchor.y - (anchor.y - self.offset.y) * ratio,
        );
        self.scale = new_scale;
    }

    /// Whether wheel events currently zoom (instead of scrolling the page).
    pub fn zoom_armed(&self) -> bool {
        self.zoom_armed
    }

    pub fn arm_zoom(&mut self) {
        self.zoom_armed = true;
    }

    pub fn disarm_zoom(&mut self) {
        self.zoom_armed = false;
    }

    /// Handles a wheel gesture at a screen cursor position. A negative
    /// delta (scroll up) zooms in. Returns `false` without touching the
    /// transform when zoom is not armed, so the host page keeps scrolling.
    pub fn wheel_zoom(&mut self, cursor: Point, delta: f64) -> bool {
        if !self.zoom_armed {
            return false;
        }
        let new_scale = if delta < 0.0 {
            self.scale * ZOOM_STEP
        } else {
            self.scale / ZOOM_STEP
        };
        self.zoom_about(cursor, new_scale);
        true
    }

    /// Begins a pan drag, capturing the pointer position.
    pub fn begin_pan(&mut self, screen: Point) {
        self.pan_anchor = Some(screen);
    }

    /// Translates the offset by the pointer delta since the last event.
    pub fn pan_move(&mut self, screen: Point) {
        if let Some(anchor) = self.pan_anchor {
            self.offset = Point::new(
                self.offset.x + (screen.x - anchor.x),
                self.offset.y + (screen.y - anchor.y),
            );
            self.pan_anchor = Some(screen);
        }
    }

    /// Ends the pan drag. No inertia.
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Resets to 1:1 scale and zero offset.
    pub fn reset_transform(&mut self) {
        self.scale = 1.0;
        self.offset = Point::ORIGIN;
    }

    /// Converts screen coordinates to scene coordinates.
    ///
    /// ```text
    /// scene = (screen - offset) / scale
    /// ```
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Converts scene coordinates to screen coordinates.
    ///
    /// ```text
    /// screen = scene * scale + offset
    /// ```
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point::new(
            scene.x * self.scale + self.offset.x,
            scene.y * self.scale + self.offset.y,
        )
    }

    /// The render transform as a 2D affine matrix `[a b c d e f]`.
    pub fn transform_matrix(&self) -> [f64; 6] {
        [
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.offset.x,
            self.offset.y,
        ]
    }

    /// The render transform as an SVG transform attribute value.
    pub fn svg_transform(&self) -> String {
        format!(
            "translate({} {}) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
