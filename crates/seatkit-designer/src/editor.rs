//! Editor state: the aggregate a UI shell drives.
//!
//! Owns the canvas (document + selection + viewport + tool state) and the
//! properties panel, tracks the dirty flag and current file path, and hosts
//! the load/save boundary. Save failures leave the in-memory document
//! untouched so the operator can retry without data loss; there is no
//! automatic retry anywhere.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

use crate::canvas::{Canvas, SceneEvent};
use crate::generator::SeatGridConfig;
use crate::properties::PropertiesPanel;
use crate::renumber::RenumberScheme;
use crate::selection::ToolMode;
use crate::serialization::{document_from_api, payload_from_document, ApiSeatMap};
use crate::transforms::{self, Alignment, Axis};
use seatkit_core::error::ValidationError;
use seatkit_core::geometry::Point;

/// Editor state for UI integration.
#[derive(Debug, Clone, Default)]
pub struct SeatMapEditor {
    pub canvas: Canvas,
    pub panel: PropertiesPanel,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl SeatMapEditor {
    /// Creates an editor over an empty, untitled document.
    pub fn new() -> Self {
        let mut editor = Self::default();
        editor.canvas.document_mut().name = "Untitled".to_string();
        editor
    }

    /// Clears everything back to an empty, untitled document.
    pub fn new_document(&mut self) {
        self.canvas
            .replace_document(crate::document::SeatMapDocument::new("Untitled", ""));
        self.panel = PropertiesPanel::new();
        self.current_file_path = None;
        self.is_modified = false;
    }

    /// Loads an already-fetched API document into the editor.
    pub fn load_document(&mut self, api: ApiSeatMap) {
        let doc = document_from_api(api);
        info!(zones = doc.zone_count(), seats = doc.seat_count(), "loaded document");
        self.canvas.replace_document(doc);
        self.panel = PropertiesPanel::new();
        self.current_file_path = None;
        self.is_modified = false;
    }

    /// The API payload for the current document, for the save boundary.
    pub fn to_payload(&self) -> ApiSeatMap {
        payload_from_document(self.canvas.document())
    }

    /// Loads a document from a JSON file.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read seat map document")?;
        let api: ApiSeatMap =
            serde_json::from_str(&content).context("Failed to parse seat map document")?;
        self.load_document(api);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Saves the document to a JSON file as one atomic write. On failure
    /// the in-memory document and the dirty flag are untouched.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_payload())
            .context("Failed to serialize seat map document")?;
        std::fs::write(path.as_ref(), json).context("Failed to write seat map document")?;

        info!(path = %path.as_ref().display(), "saved document");
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Display name for the title bar, starred while unsaved edits exist.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.canvas.document().name)
        } else {
            &self.canvas.document().name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Switches the active tool, discarding any in-progress outline.
    pub fn set_tool(&mut self, tool: ToolMode) {
        self.canvas.set_tool(tool);
        self.sync_panel();
    }

    /// Routes a pointer press through the canvas.
    pub fn pointer_down(&mut self, screen: Point, modifier: bool) -> Option<SceneEvent> {
        let event = self.canvas.pointer_down(screen, modifier);
        self.after_scene_event(event);
        event
    }

    /// Routes a pointer move through the canvas.
    pub fn pointer_move(&mut self, screen: Point) -> Option<SceneEvent> {
        let event = self.canvas.pointer_move(screen);
        self.after_scene_event(event);
        event
    }

    /// Routes a pointer release through the canvas.
    pub fn pointer_up(&mut self, screen: Point) -> Option<SceneEvent> {
        let event = self.canvas.pointer_up(screen);
        self.after_scene_event(event);
        event
    }

    fn after_scene_event(&mut self, event: Option<SceneEvent>) {
        match event {
            Some(SceneEvent::ZoneAdded(_))
            | Some(SceneEvent::ZoneMoved { .. })
            | Some(SceneEvent::SeatMoved { .. }) => self.is_modified = true,
            Some(SceneEvent::SelectionChanged) | Some(SceneEvent::SelectionCleared) | None => {}
        }
        self.sync_panel();
    }

    fn sync_panel(&mut self) {
        self.panel.sync(self.canvas.document(), self.canvas.selection());
    }

    /// Aligns the selected seats; no-op unless a multi-seat selection.
    pub fn align_selected(&mut self, alignment: Alignment) -> usize {
        let (doc, sel) = self.canvas.parts_mut();
        let n = transforms::align_selected(doc, sel, alignment);
        if n > 0 {
            self.is_modified = true;
        }
        n
    }

    /// Distributes the selected seats along one axis.
    pub fn distribute_selected(&mut self, axis: Axis) -> usize {
        let (doc, sel) = self.canvas.parts_mut();
        let n = transforms::distribute_selected(doc, sel, axis);
        if n > 0 {
            self.is_modified = true;
        }
        n
    }

    /// Rotates the selected seats by the standard 15-degree increment.
    pub fn rotate_selected(&mut self) -> usize {
        let (doc, sel) = self.canvas.parts_mut();
        let n = transforms::rotate_selected_step(doc, sel);
        if n > 0 {
            self.is_modified = true;
        }
        n
    }

    /// Deletes everything the selection references, then clears it.
    pub fn delete_selected(&mut self) -> usize {
        let (doc, sel) = self.canvas.parts_mut();
        let n = transforms::delete_selected(doc, sel);
        if n > 0 {
            self.is_modified = true;
        }
        self.sync_panel();
        n
    }

    /// Generates a seat grid into a zone. Field-tagged validation errors
    /// block generation and are returned for inline display.
    pub fn generate_seats(
        &mut self,
        zone_id: Uuid,
        config: &SeatGridConfig,
    ) -> std::result::Result<usize, Vec<ValidationError>> {
        let Some(zone) = self.canvas.document_mut().zone_mut(zone_id) else {
            return Ok(0);
        };
        let n = crate::generator::generate_into_zone(zone, config)?;
        if n > 0 {
            self.is_modified = true;
        }
        Ok(n)
    }

    /// Renumbers the selected seats left to right.
    pub fn renumber_selected(
        &mut self,
        scheme: &RenumberScheme,
    ) -> std::result::Result<usize, ValidationError> {
        let (doc, sel) = self.canvas.parts_mut();
        let n = crate::renumber::renumber_selected(doc, sel, scheme)?;
        if n > 0 {
            self.is_modified = true;
        }
        Ok(n)
    }

    /// Commits the zone form (name, capacity) to the document.
    pub fn commit_zone_form(&mut self) -> std::result::Result<(), ValidationError> {
        self.panel.commit_zone_form(self.canvas.document_mut())?;
        self.is_modified = true;
        Ok(())
    }

    /// Commits pending bulk seat edits to every selected seat.
    pub fn commit_seat_form(&mut self) -> usize {
        let n = self.panel.commit_seat_form(self.canvas.document_mut());
        if n > 0 {
            self.is_modified = true;
        }
        n
    }
}
