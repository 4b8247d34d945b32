//! Wire-format documents for the load/save boundary.
//!
//! The engine consumes and produces one document shape: sections with
//! layout data (SVG-style path strings) and nested seats. Conversion to and
//! from the in-memory model is lossless for line-segment geometry; boundary
//! paths that fail to parse fall back to a placeholder rectangle, matching
//! the behavior for sections that ship with no layout data at all.

use seatkit_core::geometry::Point;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::document::{Seat, SeatMapDocument, Zone, ZoneStyleSet};
use crate::path::BoundaryPath;

/// Placeholder boundary used when a section arrives without usable layout
/// data: a rectangle at the scene origin.
const PLACEHOLDER_WIDTH: f64 = 200.0;
const PLACEHOLDER_HEIGHT: f64 = 150.0;

/// A point on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApiPoint {
    pub x: f64,
    pub y: f64,
}

/// A seat on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSeat {
    pub id: Uuid,
    pub row_label: String,
    pub seat_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<ApiPoint>,
    pub seat_type: String,
}

/// A section (zone) on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSection {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_data: Option<String>,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub seats: Vec<ApiSeat>,
}

/// The full document on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSeatMap {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sections: Vec<ApiSection>,
}

/// The placeholder rectangle boundary for sections without layout data.
pub fn placeholder_boundary() -> BoundaryPath {
    BoundaryPath::from_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(PLACEHOLDER_WIDTH, 0.0),
        Point::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT),
        Point::new(0.0, PLACEHOLDER_HEIGHT),
    ])
}

/// Converts an API document into design-time state.
pub fn document_from_api(api: ApiSeatMap) -> SeatMapDocument {
    let zones = api.sections.into_iter().map(zone_from_section).collect();
    SeatMapDocument {
        name: api.name,
        description: api.description,
        zones,
    }
}

fn zone_from_section(section: ApiSection) -> Zone {
    let boundary = match &section.layout_data {
        Some(data) => BoundaryPath::from_path_data(data).unwrap_or_else(|| {
            warn!(section = %section.id, "unparseable layout data, using placeholder boundary");
            placeholder_boundary()
        }),
        None => placeholder_boundary(),
    };
    Zone {
        id: section.id,
        name: section.name,
        capacity: section.capacity,
        boundary,
        style: ZoneStyleSet::default(),
        seats: section.seats.into_iter().map(seat_from_api).collect(),
    }
}

fn seat_from_api(seat: ApiSeat) -> Seat {
    Seat {
        id: seat.id,
        row_label: seat.row_label,
        seat_number: seat.seat_number,
        coordinates: seat
            .coordinates
            .map(|c| Point::new(c.x, c.y))
            .unwrap_or(Point::ORIGIN),
        seat_type: seat.seat_type,
    }
}

/// Converts design-time state into the API payload. The save is a single
/// atomic document; there are no partial or incremental saves.
pub fn payload_from_document(doc: &SeatMapDocument) -> ApiSeatMap {
    ApiSeatMap {
        name: doc.name.clone(),
        description: doc.description.clone(),
        sections: doc.zones.iter().map(section_from_zone).collect(),
    }
}

fn section_from_zone(zone: &Zone) -> ApiSection {
    ApiSection {
        id: zone.id,
        name: zone.name.clone(),
        layout_data: Some(zone.boundary.to_path_data()),
        capacity: zone.capacity,
        seats: zone.seats.iter().map(seat_to_api).collect(),
    }
}

fn seat_to_api(seat: &Seat) -> ApiSeat {
    ApiSeat {
        id: seat.id,
        row_label: seat.row_label.clone(),
        seat_number: seat.seat_number.clone(),
        coordinates: Some(ApiPoint {
            x: seat.coordinates.x,
            y: seat.coordinates.y,
        }),
        seat_type: seat.seat_type.clone(),
    }
}
