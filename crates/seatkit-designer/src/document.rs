//! The authoritative in-memory seat-map document.
//!
//! A document is a list of zones; each zone owns its boundary geometry and
//! its seats. The document exists only in editor memory until explicitly
//! saved; the wire shape lives in [`crate::serialization`].

use seatkit_core::geometry::Point;
use uuid::Uuid;

use crate::path::BoundaryPath;

/// Visual style of a zone in one interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStyle {
    pub fill: String,
    pub stroke: String,
}

impl ZoneStyle {
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
        }
    }
}

/// The default/hover/selected style triple of a zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStyleSet {
    pub default: ZoneStyle,
    pub hover: ZoneStyle,
    pub selected: ZoneStyle,
}

impl Default for ZoneStyleSet {
    fn default() -> Self {
        Self {
            default: ZoneStyle::new("#e8f0fe", "#4a6da7"),
            hover: ZoneStyle::new("#d2e3fc", "#4a6da7"),
            selected: ZoneStyle::new("#aecbfa", "#1a46a7"),
        }
    }
}

/// An individually addressable position within a zone.
///
/// Coordinates are in scene space, the same space as the owning zone's
/// boundary. The id is assigned at creation and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub id: Uuid,
    pub row_label: String,
    pub seat_number: String,
    pub coordinates: Point,
    pub seat_type: String,
}

impl Seat {
    pub fn new(
        row_label: impl Into<String>,
        seat_number: impl Into<String>,
        coordinates: Point,
        seat_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            row_label: row_label.into(),
            seat_number: seat_number.into(),
            coordinates,
            seat_type: seat_type.into(),
        }
    }
}

/// A named seating area defined by a closed boundary path.
///
/// `capacity` is advisory metadata for zone-level (non-seated) ticket
/// types; it is never reconciled with `seats.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: Uuid,
    pub name: String,
    pub capacity: u32,
    pub boundary: BoundaryPath,
    pub style: ZoneStyleSet,
    pub seats: Vec<Seat>,
}

impl Zone {
    pub fn new(name: impl Into<String>, boundary: BoundaryPath) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            capacity: 0,
            boundary,
            style: ZoneStyleSet::default(),
            seats: Vec::new(),
        }
    }

    pub fn seat(&self, id: Uuid) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub fn seat_mut(&mut self, id: Uuid) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == id)
    }
}

/// The root aggregate: a named document holding every zone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeatMapDocument {
    pub name: String,
    pub description: String,
    pub zones: Vec<Zone>,
}

impl SeatMapDocument {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            zones: Vec::new(),
        }
    }

    /// Appends a zone and returns its id.
    pub fn add_zone(&mut self, zone: Zone) -> Uuid {
        let id = zone.id;
        self.zones.push(zone);
        id
    }

    /// Removes a zone (and, structurally, every seat it owns).
    pub fn remove_zone(&mut self, id: Uuid) -> Option<Zone> {
        let idx = self.zones.iter().position(|z| z.id == id)?;
        Some(self.zones.remove(idx))
    }

    pub fn zone(&self, id: Uuid) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn zone_mut(&mut self, id: Uuid) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    pub fn seat(&self, id: Uuid) -> Option<&Seat> {
        self.zones.iter().find_map(|z| z.seat(id))
    }

    pub fn seat_mut(&mut self, id: Uuid) -> Option<&mut Seat> {
        self.zones.iter_mut().find_map(|z| z.seat_mut(id))
    }

    /// The zone owning the given seat.
    pub fn zone_of_seat(&self, seat_id: Uuid) -> Option<&Zone> {
        self.zones.iter().find(|z| z.seat(seat_id).is_some())
    }

    pub fn is_zone(&self, id: Uuid) -> bool {
        self.zones.iter().any(|z| z.id == id)
    }

    pub fn is_seat(&self, id: Uuid) -> bool {
        self.zones.iter().any(|z| z.seat(id).is_some())
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn seat_count(&self) -> usize {
        self.zones.iter().map(|z| z.seats.len()).sum()
    }

    /// Removes every seat whose id is in `ids`; returns how many were removed.
    pub fn remove_seats(&mut self, ids: &std::collections::HashSet<Uuid>) -> usize {
        let mut removed = 0;
        for zone in &mut self.zones {
            let before = zone.seats.len();
            zone.seats.retain(|s| !ids.contains(&s.id));
            removed += before - zone.seats.len();
        }
        removed
    }

    /// Removes every zone whose id is in `ids`; returns how many were removed.
    pub fn remove_zones(&mut self, ids: &std::collections::HashSet<Uuid>) -> usize {
        let before = self.zones.len();
        self.zones.retain(|z| !ids.contains(&z.id));
        before - self.zones.len()
    }
}
