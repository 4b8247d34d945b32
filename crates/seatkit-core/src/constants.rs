//! Editor-wide tolerances and limits.
//!
//! These are the documented interaction constants of the layout engine.
//! All distances are in scene units unless the name says otherwise.

/// Minimum viewport zoom scale.
pub const MIN_SCALE: f64 = 0.2;

/// Maximum viewport zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// Multiplicative zoom step for one zoom-in/zoom-out increment.
pub const ZOOM_STEP: f64 = 1.2;

/// Distance from the first vertex within which a draw-tool click closes
/// the in-progress zone outline.
pub const CLOSE_TOLERANCE: f64 = 15.0;

/// Marquee drags smaller than this (in screen pixels, both axes) are
/// treated as a click that clears the selection.
pub const MARQUEE_MIN_PX: f64 = 5.0;

/// Hit radius of a seat marker.
pub const SEAT_HIT_RADIUS: f64 = 8.0;

/// Tolerance applied to zone boundary hit-testing.
pub const ZONE_HIT_TOLERANCE: f64 = 3.0;

/// Rotation increment applied by the bulk rotate operation, in degrees.
pub const ROTATE_STEP_DEG: f64 = 15.0;

/// Minimum spacing accepted by the seat-grid generator.
pub const MIN_SEAT_SPACING: f64 = 5.0;

/// Maximum rows/columns accepted by the seat-grid generator.
pub const MAX_GRID_DIM: u32 = 100;
