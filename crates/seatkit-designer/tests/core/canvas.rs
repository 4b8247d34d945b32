use seatkit_designer::canvas::{Canvas, SceneEvent};
use seatkit_designer::document::{Seat, Zone};
use seatkit_designer::path::BoundaryPath;
use seatkit_designer::selection::{SelectionKind, ToolMode};
use seatkit_designer::Point;
use uuid::Uuid;

fn square_boundary() -> BoundaryPath {
    BoundaryPath::from_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ])
}

/// A canvas with one square zone holding two seats, at identity transform
/// so screen and scene coordinates coincide.
fn seeded_canvas() -> (Canvas, Uuid, Uuid, Uuid) {
    let mut canvas = Canvas::new();
    let mut zone = Zone::new("Stalls", square_boundary());
    let seat_a = Seat::new("A", "1", Point::new(20.0, 20.0), "standard");
    let seat_b = Seat::new("A", "2", Point::new(80.0, 80.0), "standard");
    let (a_id, b_id) = (seat_a.id, seat_b.id);
    zone.seats.push(seat_a);
    zone.seats.push(seat_b);
    let zone_id = canvas.document_mut().add_zone(zone);
    (canvas, zone_id, a_id, b_id)
}

#[test]
fn test_draw_tool_appends_and_closes() {
    let mut canvas = Canvas::new();
    canvas.set_tool(ToolMode::DrawZone);

    assert!(canvas.pointer_down(Point::new(0.0, 0.0), false).is_none());
    assert!(canvas.pointer_down(Point::new(100.0, 0.0), false).is_none());
    assert!(canvas.pointer_down(Point::new(100.0, 100.0), false).is_none());
    assert_eq!(canvas.draw_points().len(), 3);

    // Within the close tolerance of the first vertex.
    let event = canvas.pointer_down(Point::new(5.0, 5.0), false);
    let Some(SceneEvent::ZoneAdded(id)) = event else {
        panic!("expected ZoneAdded, got {:?}", event);
    };

    assert_eq!(canvas.document().zone_count(), 1);
    let zone = canvas.document().zone(id).expect("zone exists");
    assert_eq!(zone.name, "Khu vực 1");
    assert!(zone.seats.is_empty());
    assert_eq!(
        zone.boundary.to_polygon(),
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ]
    );

    // In-progress state cleared and tool reverted.
    assert!(canvas.draw_points().is_empty());
    assert_eq!(canvas.tool(), ToolMode::Select);
}

#[test]
fn test_draw_tool_closure_miss_keeps_drawing() {
    let mut canvas = Canvas::new();
    canvas.set_tool(ToolMode::DrawZone);
    canvas.pointer_down(Point::new(0.0, 0.0), false);
    canvas.pointer_down(Point::new(100.0, 0.0), false);

    // More than 15 scene units from the first point: appends instead.
    assert!(canvas.pointer_down(Point::new(50.0, 50.0), false).is_none());
    assert_eq!(canvas.draw_points().len(), 3);
    assert_eq!(canvas.document().zone_count(), 0);
}

#[test]
fn test_draw_zone_names_count_up() {
    let mut canvas = Canvas::new();
    for _ in 0..2 {
        canvas.set_tool(ToolMode::DrawZone);
        canvas.pointer_down(Point::new(0.0, 0.0), false);
        canvas.pointer_down(Point::new(50.0, 0.0), false);
        canvas.pointer_down(Point::new(50.0, 50.0), false);
        canvas.pointer_down(Point::new(0.0, 1.0), false);
    }
    let names: Vec<_> = canvas.document().zones.iter().map(|z| z.name.clone()).collect();
    assert_eq!(names, vec!["Khu vực 1", "Khu vực 2"]);
}

#[test]
fn test_tool_switch_discards_in_progress_outline() {
    let mut canvas = Canvas::new();
    canvas.set_tool(ToolMode::DrawZone);
    canvas.pointer_down(Point::new(0.0, 0.0), false);
    canvas.pointer_down(Point::new(100.0, 0.0), false);

    canvas.set_tool(ToolMode::Select);
    assert!(canvas.draw_points().is_empty());

    canvas.set_tool(ToolMode::DrawZone);
    assert!(canvas.draw_points().is_empty());
    assert_eq!(canvas.document().zone_count(), 0);
}

#[test]
fn test_draw_preview_follows_pointer() {
    let mut canvas = Canvas::new();
    canvas.set_tool(ToolMode::DrawZone);
    canvas.pointer_down(Point::new(0.0, 0.0), false);
    canvas.pointer_move(Point::new(42.0, 17.0));
    assert_eq!(canvas.preview_point(), Some(Point::new(42.0, 17.0)));
}

#[test]
fn test_click_selects_topmost_object() {
    let (mut canvas, zone_id, seat_a, _) = seeded_canvas();

    // Near the seat marker: the seat wins over the zone under it.
    canvas.pointer_down(Point::new(21.0, 20.0), false);
    canvas.pointer_up(Point::new(21.0, 20.0));
    assert!(canvas.selection().contains(seat_a));
    assert_eq!(canvas.selection().kind(), SelectionKind::Seat);

    // Inside the zone but away from seats: the zone.
    canvas.pointer_down(Point::new(50.0, 5.0), false);
    canvas.pointer_up(Point::new(50.0, 5.0));
    assert!(canvas.selection().contains(zone_id));
    assert_eq!(canvas.selection().kind(), SelectionKind::Zone);
    assert_eq!(canvas.selection().len(), 1);
}

#[test]
fn test_modifier_click_toggles_membership() {
    let (mut canvas, _, seat_a, seat_b) = seeded_canvas();

    canvas.pointer_down(Point::new(20.0, 20.0), false);
    canvas.pointer_up(Point::new(20.0, 20.0));
    canvas.pointer_down(Point::new(80.0, 80.0), true);
    assert!(canvas.selection().contains(seat_a));
    assert!(canvas.selection().contains(seat_b));
    assert_eq!(canvas.selection().kind(), SelectionKind::Seat);

    // Toggling an already-selected member removes it.
    canvas.pointer_down(Point::new(80.0, 80.0), true);
    assert!(canvas.selection().contains(seat_a));
    assert!(!canvas.selection().contains(seat_b));
}

#[test]
fn test_click_on_empty_canvas_clears_selection() {
    let (mut canvas, _, seat_a, _) = seeded_canvas();
    canvas.pointer_down(Point::new(20.0, 20.0), false);
    canvas.pointer_up(Point::new(20.0, 20.0));
    assert!(canvas.selection().contains(seat_a));

    canvas.pointer_down(Point::new(300.0, 300.0), false);
    let event = canvas.pointer_up(Point::new(300.0, 300.0));
    assert_eq!(event, Some(SceneEvent::SelectionCleared));
    assert!(canvas.selection().is_empty());
    assert_eq!(canvas.selection().kind(), SelectionKind::None);
}

#[test]
fn test_marquee_selects_any_overlap_and_replaces() {
    let (mut canvas, zone_id, seat_a, seat_b) = seeded_canvas();

    // Pre-select seat B; the marquee result replaces it.
    canvas.pointer_down(Point::new(80.0, 80.0), false);
    canvas.pointer_up(Point::new(80.0, 80.0));
    assert!(canvas.selection().contains(seat_b));

    canvas.pointer_down(Point::new(-10.0, -10.0), false);
    canvas.pointer_move(Point::new(30.0, 30.0));
    let event = canvas.pointer_up(Point::new(30.0, 30.0));
    assert_eq!(event, Some(SceneEvent::SelectionChanged));

    // Zone bounds and seat A overlap the rect; seat B does not.
    assert!(canvas.selection().contains(zone_id));
    assert!(canvas.selection().contains(seat_a));
    assert!(!canvas.selection().contains(seat_b));
    assert_eq!(canvas.selection().kind(), SelectionKind::Mixed);
}

#[test]
fn test_tiny_marquee_is_click_clear() {
    let (mut canvas, _, seat_a, _) = seeded_canvas();
    canvas.pointer_down(Point::new(20.0, 20.0), false);
    canvas.pointer_up(Point::new(20.0, 20.0));
    assert!(canvas.selection().contains(seat_a));

    // 3x3 px drag on empty canvas: under the 5x5 threshold.
    canvas.pointer_down(Point::new(200.0, 200.0), false);
    canvas.pointer_move(Point::new(203.0, 203.0));
    let event = canvas.pointer_up(Point::new(203.0, 203.0));
    assert_eq!(event, Some(SceneEvent::SelectionCleared));
    assert!(canvas.selection().is_empty());
}

#[test]
fn test_marquee_over_nothing_selects_nothing() {
    let (mut canvas, _, _, _) = seeded_canvas();
    canvas.pointer_down(Point::new(200.0, 200.0), false);
    canvas.pointer_move(Point::new(260.0, 260.0));
    let event = canvas.pointer_up(Point::new(260.0, 260.0));
    assert_eq!(event, Some(SceneEvent::SelectionChanged));
    assert!(canvas.selection().is_empty());
}

#[test]
fn test_drag_zone_rewrites_boundary_coordinates() {
    let (mut canvas, zone_id, _, _) = seeded_canvas();

    canvas.pointer_down(Point::new(50.0, 5.0), false);
    let event = canvas.pointer_move(Point::new(60.0, 10.0));
    assert_eq!(
        event,
        Some(SceneEvent::ZoneMoved {
            id: zone_id,
            dx: 10.0,
            dy: 5.0
        })
    );
    canvas.pointer_up(Point::new(60.0, 10.0));

    let zone = canvas.document().zone(zone_id).expect("zone");
    assert_eq!(
        zone.boundary.to_polygon(),
        vec![
            Point::new(10.0, 5.0),
            Point::new(110.0, 5.0),
            Point::new(110.0, 105.0),
            Point::new(10.0, 105.0),
        ]
    );
    // Seats travel with their zone.
    assert_eq!(zone.seats[0].coordinates, Point::new(30.0, 25.0));
    assert_eq!(zone.seats[1].coordinates, Point::new(90.0, 85.0));
}

#[test]
fn test_drag_seat_moves_only_that_seat() {
    let (mut canvas, zone_id, seat_a, seat_b) = seeded_canvas();

    canvas.pointer_down(Point::new(20.0, 20.0), false);
    let event = canvas.pointer_move(Point::new(25.0, 30.0));
    assert_eq!(
        event,
        Some(SceneEvent::SeatMoved {
            id: seat_a,
            dx: 5.0,
            dy: 10.0
        })
    );
    canvas.pointer_up(Point::new(25.0, 30.0));

    let doc = canvas.document();
    assert_eq!(doc.seat(seat_a).unwrap().coordinates, Point::new(25.0, 30.0));
    assert_eq!(doc.seat(seat_b).unwrap().coordinates, Point::new(80.0, 80.0));
    // The zone geometry is untouched.
    let zone = doc.zone(zone_id).unwrap();
    assert_eq!(zone.boundary.to_polygon()[0], Point::new(0.0, 0.0));
}

#[test]
fn test_pointer_events_respect_viewport_transform() {
    let (mut canvas, _, seat_a, _) = seeded_canvas();
    canvas.viewport_mut().set_scale(2.0);
    canvas.viewport_mut().set_offset(Point::new(100.0, 50.0));

    // Scene (20, 20) renders at screen (140, 90).
    canvas.pointer_down(Point::new(140.0, 90.0), false);
    canvas.pointer_up(Point::new(140.0, 90.0));
    assert!(canvas.selection().contains(seat_a));
}

#[test]
fn test_hit_test_prefers_later_zone() {
    let mut canvas = Canvas::new();
    let first = canvas.document_mut().add_zone(Zone::new("Lower", square_boundary()));
    let second = canvas.document_mut().add_zone(Zone::new("Upper", square_boundary()));

    let hit = canvas.hit_test(Point::new(50.0, 50.0));
    assert_eq!(hit, Some(second));
    assert_ne!(hit, Some(first));
}
