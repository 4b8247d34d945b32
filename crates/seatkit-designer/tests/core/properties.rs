use std::collections::HashSet;

use seatkit_designer::document::{Seat, SeatMapDocument, Zone};
use seatkit_designer::path::BoundaryPath;
use seatkit_designer::properties::{panel_mode, PanelMode, PropertiesPanel, SharedValue};
use seatkit_designer::selection::SelectionState;
use seatkit_designer::Point;
use uuid::Uuid;

fn seeded() -> (SeatMapDocument, Vec<Uuid>, Vec<Uuid>) {
    let mut doc = SeatMapDocument::new("Venue", "");

    let mut zone_a = Zone::new("Stalls", BoundaryPath::new());
    zone_a.capacity = 120;
    let s1 = Seat::new("A", "1", Point::new(0.0, 0.0), "standard");
    let s2 = Seat::new("A", "2", Point::new(35.0, 0.0), "vip");
    let seat_ids = vec![s1.id, s2.id];
    zone_a.seats.push(s1);
    zone_a.seats.push(s2);

    let zone_b = Zone::new("Balcony", BoundaryPath::new());
    let zone_ids = vec![zone_a.id, zone_b.id];
    doc.add_zone(zone_a);
    doc.add_zone(zone_b);
    (doc, zone_ids, seat_ids)
}

#[test]
fn test_panel_mode_matrix() {
    let (doc, zone_ids, seat_ids) = seeded();
    let mut sel = SelectionState::new();

    assert_eq!(panel_mode(&doc, &sel), PanelMode::None);

    sel.set_selection(HashSet::from([zone_ids[0]]), &doc);
    assert_eq!(panel_mode(&doc, &sel), PanelMode::SingleZone(zone_ids[0]));

    sel.set_selection(zone_ids.iter().copied().collect(), &doc);
    assert_eq!(panel_mode(&doc, &sel), PanelMode::MultiZone(2));

    sel.set_selection(seat_ids.iter().copied().collect(), &doc);
    assert_eq!(
        panel_mode(&doc, &sel),
        PanelMode::SeatBulk(seat_ids.clone())
    );

    sel.set_selection(HashSet::from([zone_ids[0], seat_ids[0]]), &doc);
    assert_eq!(panel_mode(&doc, &sel), PanelMode::Mixed);
}

#[test]
fn test_seat_form_shared_value_detection() {
    let (doc, _, seat_ids) = seeded();
    let mut sel = SelectionState::new();
    sel.set_selection(seat_ids.iter().copied().collect(), &doc);

    let mut panel = PropertiesPanel::new();
    panel.sync(&doc, &sel);

    let form = panel.seat_form().expect("seat bulk form");
    // Both seats share row A, but differ in seat type.
    assert_eq!(form.row_label, SharedValue::Uniform("A".to_string()));
    assert_eq!(form.seat_type, SharedValue::Mixed);
}

#[test]
fn test_seat_form_commit_overwrites_all() {
    let (mut doc, _, seat_ids) = seeded();
    let mut sel = SelectionState::new();
    sel.set_selection(seat_ids.iter().copied().collect(), &doc);

    let mut panel = PropertiesPanel::new();
    panel.sync(&doc, &sel);
    {
        let form = panel.seat_form_mut().expect("form");
        form.seat_type_input = Some("wheelchair".to_string());
    }
    assert_eq!(panel.commit_seat_form(&mut doc), 2);

    for id in &seat_ids {
        assert_eq!(doc.seat(*id).unwrap().seat_type, "wheelchair");
    }
    // The untouched field keeps its per-seat values.
    assert_eq!(doc.seat(seat_ids[0]).unwrap().row_label, "A");
}

#[test]
fn test_forms_reset_when_identity_changes() {
    let (doc, _, seat_ids) = seeded();
    let mut sel = SelectionState::new();
    sel.set_selection(seat_ids.iter().copied().collect(), &doc);

    let mut panel = PropertiesPanel::new();
    panel.sync(&doc, &sel);
    panel.seat_form_mut().unwrap().row_label_input = Some("Z".to_string());

    // Same identity set: pending edits survive.
    panel.sync(&doc, &sel);
    assert_eq!(
        panel.seat_form().unwrap().row_label_input,
        Some("Z".to_string())
    );

    // Narrowed selection: the form is rebuilt.
    sel.set_selection(HashSet::from([seat_ids[0]]), &doc);
    panel.sync(&doc, &sel);
    assert_eq!(panel.seat_form().unwrap().row_label_input, None);
}

#[test]
fn test_zone_form_commit_and_validation() {
    let (mut doc, zone_ids, _) = seeded();
    let mut sel = SelectionState::new();
    sel.set_selection(HashSet::from([zone_ids[0]]), &doc);

    let mut panel = PropertiesPanel::new();
    panel.sync(&doc, &sel);

    let form = panel.zone_form_mut().expect("zone form");
    assert_eq!(form.name, "Stalls");
    assert_eq!(form.capacity, 120);

    form.name = "  ".to_string();
    let err = panel.commit_zone_form(&mut doc).expect_err("name required");
    assert_eq!(err.field(), "name");
    assert_eq!(doc.zone(zone_ids[0]).unwrap().name, "Stalls");

    panel.zone_form_mut().unwrap().name = "Orchestra".to_string();
    panel.zone_form_mut().unwrap().capacity = 250;
    panel.commit_zone_form(&mut doc).expect("valid name");
    let zone = doc.zone(zone_ids[0]).unwrap();
    assert_eq!(zone.name, "Orchestra");
    assert_eq!(zone.capacity, 250);
}

#[test]
fn test_capacity_is_not_reconciled_with_seat_count() {
    let (doc, zone_ids, _) = seeded();
    // Two seats, advisory capacity 120: both are kept as-is.
    let zone = doc.zone(zone_ids[0]).unwrap();
    assert_eq!(zone.seats.len(), 2);
    assert_eq!(zone.capacity, 120);
}

#[test]
fn test_placeholder_modes_have_no_forms() {
    let (doc, zone_ids, seat_ids) = seeded();
    let mut sel = SelectionState::new();
    let mut panel = PropertiesPanel::new();

    sel.set_selection(HashSet::from([zone_ids[0], seat_ids[0]]), &doc);
    panel.sync(&doc, &sel);
    assert_eq!(panel.mode(), &PanelMode::Mixed);
    assert!(panel.zone_form().is_none());
    assert!(panel.seat_form().is_none());

    sel.set_selection(zone_ids.iter().copied().collect(), &doc);
    panel.sync(&doc, &sel);
    assert_eq!(panel.mode(), &PanelMode::MultiZone(2));
    assert!(panel.zone_form().is_none());
}
