//! Procedural seat-grid generation.
//!
//! Given a validated configuration, produces a rows x columns grid of seats
//! to merge into a target zone. Validation collects every offending field
//! and is surfaced as form-level errors; it never panics. Generation is
//! deterministic apart from the freshly assigned seat ids.

use seatkit_core::constants::{MAX_GRID_DIM, MIN_SEAT_SPACING};
use seatkit_core::error::ValidationError;
use seatkit_core::geometry::Point;
use tracing::debug;

use crate::document::{Seat, Zone};

/// How row labels advance from row to row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabelKind {
    /// Letter labels: `A`, `B`, ... advancing spreadsheet-style past `Z`.
    Alpha,
    /// Integer labels: `1`, `2`, ...
    Numeric,
}

/// Configuration for one grid generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatGridConfig {
    pub rows: u32,
    pub cols: u32,
    pub row_label_kind: RowLabelKind,
    pub start_row: String,
    pub start_col: u32,
    pub h_spacing: f64,
    pub v_spacing: f64,
    pub seat_type: String,
}

impl Default for SeatGridConfig {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            row_label_kind: RowLabelKind::Alpha,
            start_row: "A".to_string(),
            start_col: 1,
            h_spacing: 35.0,
            v_spacing: 35.0,
            seat_type: "standard".to_string(),
        }
    }
}

impl SeatGridConfig {
    /// Validates the configuration, collecting every offending field.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.rows < 1 || self.rows > MAX_GRID_DIM {
            errors.push(ValidationError::OutOfRange {
                field: "rows",
                value: self.rows as f64,
                min: 1.0,
                max: MAX_GRID_DIM as f64,
            });
        }
        if self.cols < 1 || self.cols > MAX_GRID_DIM {
            errors.push(ValidationError::OutOfRange {
                field: "cols",
                value: self.cols as f64,
                min: 1.0,
                max: MAX_GRID_DIM as f64,
            });
        }

        match self.row_label_kind {
            RowLabelKind::Alpha => {
                let mut chars = self.start_row.chars();
                let valid = matches!(
                    (chars.next(), chars.next()),
                    (Some(c), None) if c.is_ascii_alphabetic()
                );
                if !valid {
                    errors.push(ValidationError::Invalid {
                        field: "start_row",
                        reason: "must be a single letter A-Z".to_string(),
                    });
                }
            }
            RowLabelKind::Numeric => {
                if self.start_row.is_empty()
                    || !self.start_row.chars().all(|c| c.is_ascii_digit())
                {
                    errors.push(ValidationError::Invalid {
                        field: "start_row",
                        reason: "must be digits".to_string(),
                    });
                }
            }
        }

        if self.start_col < 1 {
            errors.push(ValidationError::OutOfRange {
                field: "start_col",
                value: self.start_col as f64,
                min: 1.0,
                max: f64::MAX,
            });
        }
        if self.h_spacing < MIN_SEAT_SPACING {
            errors.push(ValidationError::OutOfRange {
                field: "h_spacing",
                value: self.h_spacing,
                min: MIN_SEAT_SPACING,
                max: f64::MAX,
            });
        }
        if self.v_spacing < MIN_SEAT_SPACING {
            errors.push(ValidationError::OutOfRange {
                field: "v_spacing",
                value: self.v_spacing,
                min: MIN_SEAT_SPACING,
                max: f64::MAX,
            });
        }
        if self.seat_type.trim().is_empty() {
            errors.push(ValidationError::Empty { field: "seat_type" });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Generates the seat grid anchored at `origin`, row-major: seat
    /// `(row, col)` lands at `origin + (col * h_spacing, row * v_spacing)`
    /// with row label `start_row` advanced by `row` and seat number
    /// `start_col + col`.
    pub fn generate(&self, origin: Point) -> Result<Vec<Seat>, Vec<ValidationError>> {
        self.validate()?;

        let mut seats = Vec::with_capacity((self.rows * self.cols) as usize);
        for row in 0..self.rows {
            let row_label = match self.row_label_kind {
                RowLabelKind::Alpha => advance_alpha(&self.start_row, row),
                RowLabelKind::Numeric => advance_numeric(&self.start_row, row),
            };
            for col in 0..self.cols {
                let seat_number = (self.start_col + col).to_string();
                let coordinates = origin.offset(
                    col as f64 * self.h_spacing,
                    row as f64 * self.v_spacing,
                );
                seats.push(Seat::new(
                    row_label.clone(),
                    seat_number,
                    coordinates,
                    self.seat_type.clone(),
                ));
            }
        }
        Ok(seats)
    }
}

/// Generates seats into a zone: the grid is anchored at the zone's local
/// origin (its boundary bounding-box minimum; the scene origin for an
/// empty boundary) and the new seats are appended. No dedup against
/// existing seats happens; repeated generation overlaps.
pub fn generate_into_zone(
    zone: &mut Zone,
    config: &SeatGridConfig,
) -> Result<usize, Vec<ValidationError>> {
    let origin = zone
        .boundary
        .bounds()
        .map(|b| b.min())
        .unwrap_or(Point::ORIGIN);
    let seats = config.generate(origin)?;
    let count = seats.len();
    if !zone.seats.is_empty() {
        debug!(
            zone = %zone.id,
            existing = zone.seats.len(),
            appending = count,
            "appending generated seats to a zone that already has seats"
        );
    }
    zone.seats.extend(seats);
    Ok(count)
}

/// Advances a letter row label by `by` rows, spreadsheet-style
/// (`Z` -> `AA`). Only single-letter starts are validated; the arithmetic
/// works in the case alphabet of the input.
fn advance_alpha(start: &str, by: u32) -> String {
    let lowercase = start.chars().next().map(|c| c.is_ascii_lowercase()).unwrap_or(false);
    let base = if lowercase { b'a' } else { b'A' };

    // Bijective base-26 index of the start label.
    let mut index: u64 = 0;
    for c in start.chars() {
        let v = (c.to_ascii_uppercase() as u8).saturating_sub(b'A') as u64;
        index = index * 26 + v + 1;
    }
    index += by as u64;

    // Back to bijective base-26 digits.
    let mut label = Vec::new();
    while index > 0 {
        index -= 1;
        label.push(base + (index % 26) as u8);
        index /= 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_else(|_| start.to_string())
}

/// Advances a numeric row label by ordinary integer addition.
fn advance_numeric(start: &str, by: u32) -> String {
    let n: u64 = start.parse().unwrap_or(0);
    (n + by as u64).to_string()
}
