//! # SeatKit Core
//!
//! Core types, errors, and geometry primitives for SeatKit.
//! Provides the fundamental abstractions the layout engine builds on:
//! scene-space points and rectangles, polygon predicates, the editor's
//! documented tolerances, and the shared error taxonomy.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{DocumentError, Error, PersistenceError, Result, ValidationError};
pub use geometry::{point_in_polygon, rotate_point, segment_distance, Point, Rect};
