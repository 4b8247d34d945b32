//! Canvas: pointer routing, hit-testing, and the interactive tools.
//!
//! The canvas owns the document, the selection store, and the viewport, and
//! converts pointer events into scene mutations. Pointer handlers take
//! screen coordinates; everything past the viewport conversion happens in
//! scene space. Tool dispatch is an exhaustive match over [`ToolMode`], so
//! adding a tool is a compile-time-checked change.

use seatkit_core::constants::{
    CLOSE_TOLERANCE, MARQUEE_MIN_PX, SEAT_HIT_RADIUS, ZONE_HIT_TOLERANCE,
};
use seatkit_core::geometry::{Point, Rect};
use tracing::debug;
use uuid::Uuid;

use crate::document::{SeatMapDocument, Zone};
use crate::path::BoundaryPath;
use crate::selection::{SelectionState, ToolMode};
use crate::viewport::Viewport;

/// A scene mutation produced by a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// The draw tool closed an outline into a new zone.
    ZoneAdded(Uuid),
    /// A selected zone was dragged; its boundary (and seats) moved.
    ZoneMoved { id: Uuid, dx: f64, dy: f64 },
    /// A selected seat was dragged to new coordinates.
    SeatMoved { id: Uuid, dx: f64, dy: f64 },
    /// The selection set changed.
    SelectionChanged,
    /// The selection was cleared by a click on empty canvas.
    SelectionCleared,
}

/// In-progress zone outline under the draw tool.
#[derive(Debug, Clone, Default)]
struct DrawState {
    points: Vec<Point>,
    preview: Option<Point>,
}

/// Select-tool gesture in flight between pointer down and up.
#[derive(Debug, Clone)]
enum Gesture {
    Idle,
    DragObject { id: Uuid, last: Point },
    Marquee { start: Point, current: Point },
}

impl Default for Gesture {
    fn default() -> Self {
        Gesture::Idle
    }
}

/// Canvas state managing the scene and pointer-driven tools.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    document: SeatMapDocument,
    selection: SelectionState,
    viewport: Viewport,
    draw: DrawState,
    gesture: Gesture,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view_size(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            ..Self::default()
        }
    }

    pub fn document(&self) -> &SeatMapDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut SeatMapDocument {
        &mut self.document
    }

    /// Replaces the whole document, resetting selection and tool state.
    pub fn replace_document(&mut self, document: SeatMapDocument) {
        self.document = document;
        self.selection.clear();
        self.draw = DrawState::default();
        self.gesture = Gesture::Idle;
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Splits the canvas into its document and selection halves, for
    /// operations that mutate one while reading (or clearing) the other.
    pub fn parts_mut(&mut self) -> (&mut SeatMapDocument, &mut SelectionState) {
        (&mut self.document, &mut self.selection)
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tool(&self) -> ToolMode {
        self.selection.tool()
    }

    /// Switches tools. Discards any in-progress zone outline and clears the
    /// selection (defined behavior, not optional).
    pub fn set_tool(&mut self, tool: ToolMode) {
        if !self.draw.points.is_empty() {
            debug!(
                points = self.draw.points.len(),
                "discarding in-progress zone outline on tool switch"
            );
        }
        self.draw = DrawState::default();
        self.gesture = Gesture::Idle;
        self.selection.set_tool(tool);
    }

    /// The committed vertices of the outline being drawn, for preview.
    pub fn draw_points(&self) -> &[Point] {
        &self.draw.points
    }

    /// The pointer position the preview segment follows.
    pub fn preview_point(&self) -> Option<Point> {
        self.draw.preview
    }

    /// The marquee rectangle in screen space while one is being dragged.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match &self.gesture {
            Gesture::Marquee { start, current } => Some(Rect::from_points(*start, *current)),
            _ => None,
        }
    }

    /// Pointer press at screen coordinates.
    pub fn pointer_down(&mut self, screen: Point, modifier: bool) -> Option<SceneEvent> {
        let scene = self.viewport.screen_to_scene(screen);
        match self.selection.tool() {
            ToolMode::DrawZone => self.draw_click(scene),
            ToolMode::Select => match self.hit_test(scene) {
                Some(id) => {
                    if modifier {
                        self.selection.toggle(id, &self.document);
                        Some(SceneEvent::SelectionChanged)
                    } else {
                        let changed = !self.selection.contains(id) || self.selection.len() != 1;
                        if changed {
                            self.selection.select_only(id, &self.document);
                        }
                        self.gesture = Gesture::DragObject { id, last: scene };
                        changed.then_some(SceneEvent::SelectionChanged)
                    }
                }
                None => {
                    self.gesture = Gesture::Marquee {
                        start: screen,
                        current: screen,
                    };
                    None
                }
            },
        }
    }

    /// Pointer move at screen coordinates.
    pub fn pointer_move(&mut self, screen: Point) -> Option<SceneEvent> {
        let scene = self.viewport.screen_to_scene(screen);
        match self.selection.tool() {
            ToolMode::DrawZone => {
                if !self.draw.points.is_empty() {
                    self.draw.preview = Some(scene);
                }
                None
            }
            ToolMode::Select => match &mut self.gesture {
                Gesture::DragObject { id, last } => {
                    let (dx, dy) = (scene.x - last.x, scene.y - last.y);
                    if dx == 0.0 && dy == 0.0 {
                        return None;
                    }
                    let id = *id;
                    *last = scene;
                    self.move_object(id, dx, dy)
                }
                Gesture::Marquee { current, .. } => {
                    *current = screen;
                    None
                }
                Gesture::Idle => None,
            },
        }
    }

    /// Pointer release at screen coordinates.
    pub fn pointer_up(&mut self, screen: Point) -> Option<SceneEvent> {
        match self.selection.tool() {
            ToolMode::DrawZone => None,
            ToolMode::Select => match std::mem::take(&mut self.gesture) {
                Gesture::Idle | Gesture::DragObject { .. } => None,
                Gesture::Marquee { start, .. } => {
                    let rect = Rect::from_points(start, screen);
                    if rect.width() < MARQUEE_MIN_PX && rect.height() < MARQUEE_MIN_PX {
                        // Degenerate marquee: a click on empty canvas.
                        self.selection.clear();
                        return Some(SceneEvent::SelectionCleared);
                    }
                    let scene_rect = Rect::from_points(
                        self.viewport.screen_to_scene(start),
                        self.viewport.screen_to_scene(screen),
                    );
                    let ids = self.objects_in_rect(&scene_rect);
                    self.selection.set_selection(ids, &self.document);
                    Some(SceneEvent::SelectionChanged)
                }
            },
        }
    }

    /// One draw-tool click: closes the outline when it lands within the
    /// close tolerance of the first vertex, otherwise appends it.
    fn draw_click(&mut self, scene: Point) -> Option<SceneEvent> {
        if self.draw.points.len() >= 2
            && scene.distance_to(&self.draw.points[0]) <= CLOSE_TOLERANCE
        {
            let boundary = BoundaryPath::from_polygon(&self.draw.points);
            let name = format!("Khu vực {}", self.document.zone_count() + 1);
            let id = self.document.add_zone(Zone::new(name, boundary));
            debug!(zone = %id, "closed zone outline");
            self.draw = DrawState::default();
            self.selection.set_tool(ToolMode::Select);
            Some(SceneEvent::ZoneAdded(id))
        } else {
            self.draw.points.push(scene);
            None
        }
    }

    /// Topmost object at a scene point: seats above zones, later zones
    /// above earlier ones.
    pub fn hit_test(&self, scene: Point) -> Option<Uuid> {
        for zone in self.document.zones.iter().rev() {
            for seat in zone.seats.iter().rev() {
                if seat.coordinates.distance_to(&scene) <= SEAT_HIT_RADIUS {
                    return Some(seat.id);
                }
            }
        }
        for zone in self.document.zones.iter().rev() {
            if zone.boundary.contains(scene, ZONE_HIT_TOLERANCE) {
                return Some(zone.id);
            }
        }
        None
    }

    /// Every zone and seat whose rendered bounds intersect the rectangle
    /// (any-overlap, not containment).
    fn objects_in_rect(&self, rect: &Rect) -> std::collections::HashSet<Uuid> {
        let mut ids = std::collections::HashSet::new();
        for zone in &self.document.zones {
            if zone.boundary.intersects_rect(rect) {
                ids.insert(zone.id);
            }
            for seat in &zone.seats {
                let marker = Rect::new(
                    seat.coordinates.x,
                    seat.coordinates.y,
                    seat.coordinates.x,
                    seat.coordinates.y,
                )
                .expanded(SEAT_HIT_RADIUS);
                if marker.intersects(rect) {
                    ids.insert(seat.id);
                }
            }
        }
        ids
    }

    /// Repositions a dragged object. Zones translate their boundary path
    /// literally (the geometry stays the source of truth; no transform is
    /// accumulated) together with the seats they own; seats update only
    /// their coordinates.
    fn move_object(&mut self, id: Uuid, dx: f64, dy: f64) -> Option<SceneEvent> {
        if let Some(zone) = self.document.zone_mut(id) {
            zone.boundary.translate(dx, dy);
            for seat in &mut zone.seats {
                seat.coordinates = seat.coordinates.offset(dx, dy);
            }
            return Some(SceneEvent::ZoneMoved { id, dx, dy });
        }
        if let Some(seat) = self.document.seat_mut(id) {
            seat.coordinates = seat.coordinates.offset(dx, dy);
            return Some(SceneEvent::SeatMoved { id, dx, dy });
        }
        None
    }
}
