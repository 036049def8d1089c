//! sldview - single-line diagram rendering for electrical networks
//!
//! This library takes a graph of electrical nodes (buses, junctions,
//! transformer stations) and typed connections (lines, transformers,
//! breakers, disconnectors) and produces a schematic scene: status-styled
//! glyphs, pan/zoom viewport math, pointer hit-testing, and an optional SVG
//! export. It is a library for a host page to drive, not an executable.
//!
//! # Example
//!
//! ```rust
//! use sldview::{compose, render_scene_svg, DiagramColors, SceneOptions};
//!
//! let json = r#"{
//!   "nodes": [
//!     {"nodeId": "a", "type": "bus", "position": {"x": 0.0, "y": 0.0}, "status": "energized"},
//!     {"nodeId": "b", "type": "junction", "position": {"x": 100.0, "y": 0.0}, "status": "energized"}
//!   ],
//!   "connections": [
//!     {"id": 1, "sourceNodeId": "a", "targetNodeId": "b", "type": "line", "status": "closed"}
//!   ]
//! }"#;
//!
//! let graph = sldview::load_snapshot(json).unwrap();
//! let (scene, diagnostics) = compose(&graph, &SceneOptions::default());
//! assert!(diagnostics.is_empty());
//!
//! let svg = render_scene_svg(&scene, &DiagramColors::default(), false);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Pipeline
//!
//! snapshot fetch → [`compose`] (endpoint resolution, view-mode coloring,
//! region filtering) → glyph Scene → viewport transform → hit-testing and
//! selection events back to the host.

pub mod error;
pub mod graph;
pub mod scene;
pub mod svg;
pub mod types;
pub mod view;

pub use error::{Diagnostic, Endpoint, FetchError, GraphIntegrityError, LoadError};
pub use graph::{
    decode_snapshot, integrity_errors, load_snapshot, merge_status, validate, FetchTicket,
    SnapshotStore, StatusFeed,
};
pub use scene::{
    compose, ColorClass, DashPattern, Glyph, GlyphStyle, Label, Scene, SceneOptions, Shape,
    WorkZone,
};
pub use svg::{render_scene_svg, DiagramColors, SldTheme};
pub use types::*;
pub use view::{
    hit_test, HoverEvent, Interaction, SelectionEvent, Viewport, ViewportChanged, ViewportConfig,
    HIT_TOLERANCE_PX,
};
