//! # SeatKit Designer
//!
//! The interactive layout, selection, and geometry engine for authoring
//! venue seat maps. An operator draws polygonal seating zones over a blank
//! canvas, populates each zone with individually positioned seats (by hand
//! or via procedural grid generation), and edits seat/zone metadata in bulk.
//!
//! ## Core Components
//!
//! ### Scene Model
//! - **Document**: Zones with boundary geometry plus seats with coordinates
//! - **Boundary paths**: Typed segment lists; geometry is always literal,
//!   never an accumulated transform
//! - **Selection**: Tool mode, selected ids, and the derived selection kind
//! - **Viewport**: Pan/zoom with cursor-anchored zooming
//!
//! ### Tooling
//! - **Canvas**: Pointer routing, zone drawing, marquee selection, dragging
//! - **Transforms**: Align, distribute, and rotate over selected seats
//! - **Generator**: Procedural seat grids (rows, columns, labels, spacing)
//! - **Renumbering**: Spatial left-to-right renumbering with a prefix scheme
//! - **Properties**: The panel state machine and bulk field editing
//!
//! ## Architecture
//!
//! ```text
//! SeatMapEditor (dirty tracking, file I/O, panel sync)
//!   └── Canvas (pointer routing, hit-testing)
//!         ├── SeatMapDocument (zones and seats)
//!         ├── SelectionState (tool mode, ids, kind)
//!         └── Viewport (pan/zoom)
//!
//! Operations (transforms, generator, renumber)
//!   └── pure coordinate functions applied through the document
//!
//! Wire (serialization)
//!   └── API document shape at the load/save boundary
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seatkit_designer::editor::SeatMapEditor;
//!
//! let mut editor = SeatMapEditor::new();
//! editor.load_from_file("arena.json")?;
//! ```

pub mod canvas;
pub mod document;
pub mod editor;
pub mod generator;
pub mod path;
pub mod properties;
pub mod renumber;
pub mod selection;
pub mod serialization;
pub mod transforms;
pub mod viewport;

pub use canvas::{Canvas, SceneEvent};
pub use document::{Seat, SeatMapDocument, Zone, ZoneStyle, ZoneStyleSet};
pub use editor::SeatMapEditor;
pub use generator::{RowLabelKind, SeatGridConfig};
pub use path::{BoundaryPath, PathSegment};
pub use properties::{PanelMode, PropertiesPanel, SharedValue};
pub use renumber::RenumberScheme;
pub use selection::{SelectionKind, SelectionState, ToolMode};
pub use serialization::{ApiSeat, ApiSeatMap, ApiSection};
pub use transforms::{Alignment, Axis};
pub use viewport::Viewport;

// Re-export the core geometry types used throughout the public API.
pub use seatkit_core::geometry::{Point, Rect};
