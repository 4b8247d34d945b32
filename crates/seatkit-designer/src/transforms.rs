//! Bulk transform engine: align, distribute, rotate, delete.
//!
//! The coordinate math is pure (`points in -> points out`); the `_selected`
//! wrappers apply it to the seats referenced by the selection. Transforms
//! run only on seat-kind selections of two or more members and never read
//! or write viewport state.

use seatkit_core::constants::ROTATE_STEP_DEG;
use seatkit_core::geometry::{rotate_point, Point};
use uuid::Uuid;

use crate::document::SeatMapDocument;
use crate::selection::{SelectionKind, SelectionState};

/// Alignment edges/axes for the align operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

/// Distribution axis for the distribute operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The centroid of a point set. `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Aligns every point's relevant axis to the reference coordinate
/// (min, mean, or max across the set); the other axis is untouched.
pub fn align(points: &[Point], alignment: Alignment) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let n = points.len() as f64;
    let reference = match alignment {
        Alignment::Left => points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min),
        Alignment::Right => points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max),
        Alignment::CenterHorizontal => points.iter().map(|p| p.x).sum::<f64>() / n,
        Alignment::Top => points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min),
        Alignment::Bottom => points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max),
        Alignment::CenterVertical => points.iter().map(|p| p.y).sum::<f64>() / n,
    };
    points
        .iter()
        .map(|p| match alignment {
            Alignment::Left | Alignment::CenterHorizontal | Alignment::Right => {
                Point::new(reference, p.y)
            }
            Alignment::Top | Alignment::CenterVertical | Alignment::Bottom => {
                Point::new(p.x, reference)
            }
        })
        .collect()
}

/// Spaces the points evenly along one axis: sorted by that axis, the first
/// and last keep their positions and the interior points land at equal
/// intervals of `(last - first) / (count - 1)`. The result is returned in
/// the input order.
pub fn distribute(points: &[Point], axis: Axis) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let value = |p: &Point| match axis {
        Axis::Horizontal => p.x,
        Axis::Vertical => p.y,
    };

    // Rank each input index by its axis value; stable, so ties keep input order.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        value(&points[a])
            .partial_cmp(&value(&points[b]))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let first = value(&points[order[0]]);
    let last = value(&points[order[n - 1]]);
    let interval = (last - first) / (n - 1) as f64;

    let mut out = points.to_vec();
    for (rank, &idx) in order.iter().enumerate() {
        let v = first + rank as f64 * interval;
        match axis {
            Axis::Horizontal => out[idx].x = v,
            Axis::Vertical => out[idx].y = v,
        }
    }
    out
}

/// Rotates every point by `angle_deg` about the set's centroid.
pub fn rotate(points: &[Point], angle_deg: f64) -> Vec<Point> {
    match centroid(points) {
        Some(c) => points.iter().map(|p| rotate_point(*p, c, angle_deg)).collect(),
        None => Vec::new(),
    }
}

/// Collects the selected seats in document order.
fn selected_seats(doc: &SeatMapDocument, sel: &SelectionState) -> Vec<(Uuid, Point)> {
    let mut seats = Vec::with_capacity(sel.len());
    for zone in &doc.zones {
        for seat in &zone.seats {
            if sel.contains(seat.id) {
                seats.push((seat.id, seat.coordinates));
            }
        }
    }
    seats
}

fn write_back(doc: &mut SeatMapDocument, ids: &[(Uuid, Point)], coords: &[Point]) {
    for ((id, _), p) in ids.iter().zip(coords) {
        if let Some(seat) = doc.seat_mut(*id) {
            seat.coordinates = *p;
        }
    }
}

/// Whether the selection is eligible for bulk transforms: seat-kind with
/// at least two members.
fn transformable(sel: &SelectionState) -> bool {
    sel.kind() == SelectionKind::Seat && sel.len() >= 2
}

/// Aligns the selected seats. Returns the number of seats written, zero
/// when the selection is not a multi-seat selection.
pub fn align_selected(
    doc: &mut SeatMapDocument,
    sel: &SelectionState,
    alignment: Alignment,
) -> usize {
    if !transformable(sel) {
        return 0;
    }
    let seats = selected_seats(doc, sel);
    let points: Vec<Point> = seats.iter().map(|(_, p)| *p).collect();
    let aligned = align(&points, alignment);
    write_back(doc, &seats, &aligned);
    seats.len()
}

/// Distributes the selected seats along one axis.
pub fn distribute_selected(doc: &mut SeatMapDocument, sel: &SelectionState, axis: Axis) -> usize {
    if !transformable(sel) {
        return 0;
    }
    let seats = selected_seats(doc, sel);
    let points: Vec<Point> = seats.iter().map(|(_, p)| *p).collect();
    let spaced = distribute(&points, axis);
    write_back(doc, &seats, &spaced);
    seats.len()
}

/// Rotates the selected seats by the standard increment about their centroid.
pub fn rotate_selected_step(doc: &mut SeatMapDocument, sel: &SelectionState) -> usize {
    rotate_selected(doc, sel, ROTATE_STEP_DEG)
}

/// Rotates the selected seats by `angle_deg` about their centroid.
pub fn rotate_selected(doc: &mut SeatMapDocument, sel: &SelectionState, angle_deg: f64) -> usize {
    if !transformable(sel) {
        return 0;
    }
    let seats = selected_seats(doc, sel);
    let points: Vec<Point> = seats.iter().map(|(_, p)| *p).collect();
    let rotated = rotate(&points, angle_deg);
    write_back(doc, &seats, &rotated);
    seats.len()
}

/// Removes every object referenced by the selection (seats and zones; a
/// bulk-delete that includes a zone destroys the zone and the seats it
/// owns), then clears the selection. Returns the number of removed objects.
pub fn delete_selected(doc: &mut SeatMapDocument, sel: &mut SelectionState) -> usize {
    let ids = sel.selected().clone();
    let removed_seats = doc.remove_seats(&ids);
    let removed_zones = doc.remove_zones(&ids);
    sel.clear();
    removed_seats + removed_zones
}
