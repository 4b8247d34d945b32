//! Properties/bulk-edit panel: a state machine over the selection.
//!
//! The panel holds no state of its own beyond form inputs, which reset
//! whenever the selection's identity set changes. Which editor applies is
//! purely a function of the selection kind and count; mixed and multi-zone
//! selections get informational placeholders.

use seatkit_core::error::ValidationError;
use uuid::Uuid;

use crate::document::SeatMapDocument;
use crate::selection::{SelectionKind, SelectionState};

/// Which editor the panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode {
    /// No selection: informational placeholder.
    None,
    /// Zones and seats both selected: ask the operator to narrow.
    Mixed,
    /// Exactly one zone: full zone editor (name, capacity, generator).
    SingleZone(Uuid),
    /// Two or more zones, no seats: placeholder (no bulk zone editing).
    MultiZone(usize),
    /// One or more seats, no zones: bulk seat editor plus renumbering.
    SeatBulk(Vec<Uuid>),
}

/// Derives the panel mode from the current selection. Seat ids come back
/// in document order, deterministically.
pub fn panel_mode(doc: &SeatMapDocument, sel: &SelectionState) -> PanelMode {
    match sel.kind() {
        SelectionKind::None => PanelMode::None,
        SelectionKind::Mixed => PanelMode::Mixed,
        SelectionKind::Zone => match sel.selected().iter().next() {
            Some(&id) if sel.len() == 1 => PanelMode::SingleZone(id),
            _ => PanelMode::MultiZone(sel.len()),
        },
        SelectionKind::Seat => {
            let mut ids = Vec::with_capacity(sel.len());
            for zone in &doc.zones {
                for seat in &zone.seats {
                    if sel.contains(seat.id) {
                        ids.push(seat.id);
                    }
                }
            }
            PanelMode::SeatBulk(ids)
        }
    }
}

/// Initial display value of a bulk-edited field: the common value when all
/// selected seats share it, otherwise a mixed-values placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedValue<T> {
    Uniform(T),
    Mixed,
}

/// Detects the shared value across an iterator of field values.
/// Returns `None` for an empty selection.
pub fn shared_value<T, I>(mut values: I) -> Option<SharedValue<T>>
where
    T: PartialEq,
    I: Iterator<Item = T>,
{
    let first = values.next()?;
    for v in values {
        if v != first {
            return Some(SharedValue::Mixed);
        }
    }
    Some(SharedValue::Uniform(first))
}

/// Form state for the single-zone editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneForm {
    pub name: String,
    pub capacity: u32,
}

/// Form state for the bulk seat editor. `*_input` fields hold pending
/// operator edits; a `None` input leaves that field alone on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatBulkForm {
    pub row_label: SharedValue<String>,
    pub seat_type: SharedValue<String>,
    pub row_label_input: Option<String>,
    pub seat_type_input: Option<String>,
}

/// The properties panel: derived mode plus the live form for it.
#[derive(Debug, Clone, Default)]
pub struct PropertiesPanel {
    mode: Option<PanelMode>,
    identity: Vec<Uuid>,
    zone_form: Option<ZoneForm>,
    seat_form: Option<SeatBulkForm>,
}

impl PropertiesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the panel from the selection. Forms are rebuilt from the
    /// document only when the selection's identity set changed; otherwise
    /// pending operator edits survive.
    pub fn sync(&mut self, doc: &SeatMapDocument, sel: &SelectionState) {
        let mut identity: Vec<Uuid> = sel.selected().iter().copied().collect();
        identity.sort();

        let mode = panel_mode(doc, sel);
        if identity == self.identity && self.mode.as_ref() == Some(&mode) {
            return;
        }
        self.identity = identity;
        self.zone_form = None;
        self.seat_form = None;

        match &mode {
            PanelMode::SingleZone(id) => {
                if let Some(zone) = doc.zone(*id) {
                    self.zone_form = Some(ZoneForm {
                        name: zone.name.clone(),
                        capacity: zone.capacity,
                    });
                }
            }
            PanelMode::SeatBulk(ids) => {
                let row_label =
                    shared_value(ids.iter().filter_map(|id| doc.seat(*id)).map(|s| s.row_label.clone()))
                        .unwrap_or(SharedValue::Mixed);
                let seat_type =
                    shared_value(ids.iter().filter_map(|id| doc.seat(*id)).map(|s| s.seat_type.clone()))
                        .unwrap_or(SharedValue::Mixed);
                self.seat_form = Some(SeatBulkForm {
                    row_label,
                    seat_type,
                    row_label_input: None,
                    seat_type_input: None,
                });
            }
            PanelMode::None | PanelMode::Mixed | PanelMode::MultiZone(_) => {}
        }
        self.mode = Some(mode);
    }

    pub fn mode(&self) -> &PanelMode {
        self.mode.as_ref().unwrap_or(&PanelMode::None)
    }

    pub fn zone_form(&self) -> Option<&ZoneForm> {
        self.zone_form.as_ref()
    }

    pub fn zone_form_mut(&mut self) -> Option<&mut ZoneForm> {
        self.zone_form.as_mut()
    }

    pub fn seat_form(&self) -> Option<&SeatBulkForm> {
        self.seat_form.as_ref()
    }

    pub fn seat_form_mut(&mut self) -> Option<&mut SeatBulkForm> {
        self.seat_form.as_mut()
    }

    /// Commits the zone form to the document. The zone name is required.
    pub fn commit_zone_form(&self, doc: &mut SeatMapDocument) -> Result<(), ValidationError> {
        let (PanelMode::SingleZone(id), Some(form)) = (self.mode(), &self.zone_form) else {
            return Ok(());
        };
        if form.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if let Some(zone) = doc.zone_mut(*id) {
            zone.name = form.name.clone();
            zone.capacity = form.capacity;
        }
        Ok(())
    }

    /// Commits pending bulk edits to every selected seat, unconditionally
    /// overwriting the edited fields. Returns the number of seats written.
    pub fn commit_seat_form(&self, doc: &mut SeatMapDocument) -> usize {
        let (PanelMode::SeatBulk(ids), Some(form)) = (self.mode(), &self.seat_form) else {
            return 0;
        };
        if form.row_label_input.is_none() && form.seat_type_input.is_none() {
            return 0;
        }
        let mut written = 0;
        for id in ids {
            if let Some(seat) = doc.seat_mut(*id) {
                if let Some(label) = &form.row_label_input {
                    seat.row_label = label.clone();
                }
                if let Some(seat_type) = &form.seat_type_input {
                    seat.seat_type = seat_type.clone();
                }
                written += 1;
            }
        }
        written
    }
}
