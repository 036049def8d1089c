//! Diagram composer - turns a graph snapshot plus view inputs into an
//! ordered Scene.
//!
//! Every compose pass is a full recomputation; diagram sizes are tens to
//! low hundreds of elements, so there is no incremental diffing. Broken or
//! filtered-out connections are dropped and reported, never rendered with
//! fallback coordinates.

mod symbols;
mod types;

pub use symbols::{connection_glyph, node_glyph, status_color, ElementState, SymbolSizes};
pub use types::{ColorClass, DashPattern, Glyph, GlyphStyle, Label, Scene, Shape, WorkZone};

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::error::{Diagnostic, Endpoint, GraphIntegrityError};
use crate::types::{
    NetworkConnection, NetworkGraph, NetworkNode, Point, RegionFilter, ViewMode,
};

/// Gap between a symbol's bounding box and its label anchor
const LABEL_GAP: f64 = 6.0;

/// Inputs of one compose pass
#[derive(Debug, Clone, Default)]
pub struct SceneOptions {
    pub view_mode: ViewMode,
    pub region_filter: RegionFilter,
    pub show_labels: bool,
    pub work_zone: Option<WorkZone>,
}

/// Compose a Scene from a graph snapshot.
///
/// Layer order is fixed: connections, nodes, labels, overlays. Diagnostics
/// are returned next to the Scene; an integrity problem in one connection
/// never aborts the whole render.
pub fn compose(graph: &NetworkGraph, options: &SceneOptions) -> (Scene, Vec<Diagnostic>) {
    let mut scene = Scene::default();
    let mut diagnostics = Vec::new();

    // Index nodes by id; non-finite positions are reported and excluded so
    // nothing downstream renders at a bogus coordinate.
    let mut index: HashMap<&str, &NetworkNode> = HashMap::new();
    for node in &graph.nodes {
        if !node.position.is_finite() {
            diagnostics.push(Diagnostic::Integrity(
                GraphIntegrityError::NonFinitePosition {
                    node_id: node.node_id.clone(),
                },
            ));
            continue;
        }
        if index.insert(node.node_id.as_str(), node).is_some() {
            warn!("duplicate node id \"{}\", keeping the last one", node.node_id);
        }
    }

    let visible = |node: &NetworkNode| options.region_filter.allows(node.region.as_deref());

    // Connections layer
    for conn in &graph.connections {
        match resolve(conn, &index, &visible) {
            Ok((source, target)) => {
                let mut glyph = connection_glyph(
                    conn.id,
                    conn.kind,
                    conn.status,
                    source.position,
                    target.position,
                );
                if let Some(color) = connection_override(conn, source, &options.view_mode) {
                    recolor(&mut glyph, color);
                }
                scene.connections.push(glyph);
            }
            Err(diagnostic) => {
                warn!("dropping connection {}: {:?}", conn.id, diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }

    // Nodes layer (drawn above connections)
    for node in &graph.nodes {
        let node = match index.get(node.node_id.as_str()) {
            Some(n) if std::ptr::eq(*n, node) => node,
            _ => continue, // non-finite or shadowed duplicate
        };
        if !visible(node) {
            continue;
        }
        let mut glyph = node_glyph(&node.node_id, node.kind, node.status, node.position);
        if let Some(color) = node_override(node, &options.view_mode) {
            recolor(&mut glyph, color);
        }
        if options.show_labels {
            if let Some(text) = &node.label {
                let bounds = glyph.bounds();
                scene.labels.push(Label {
                    element: glyph.element.clone(),
                    anchor: Point::new(bounds.center().x, bounds.max.y + LABEL_GAP),
                    text: text.clone(),
                });
            }
        }
        scene.nodes.push(glyph);
    }

    // Overlay layer
    if let Some(zone) = &options.work_zone {
        scene.overlays.push(zone.clone());
    }

    (scene, diagnostics)
}

/// Resolve both endpoints of a connection, or say why it must be dropped
fn resolve<'a, F>(
    conn: &NetworkConnection,
    index: &HashMap<&str, &'a NetworkNode>,
    visible: &F,
) -> Result<(&'a NetworkNode, &'a NetworkNode), Diagnostic>
where
    F: Fn(&NetworkNode) -> bool,
{
    if conn.source_node_id == conn.target_node_id {
        return Err(Diagnostic::Integrity(GraphIntegrityError::SelfLoop {
            id: conn.id,
            node_id: conn.source_node_id.clone(),
        }));
    }
    let lookup = |endpoint: Endpoint, node_id: &String| {
        index.get(node_id.as_str()).copied().ok_or_else(|| {
            Diagnostic::Integrity(GraphIntegrityError::MissingEndpoint {
                id: conn.id,
                endpoint,
                node_id: node_id.clone(),
            })
        })
    };
    let source = lookup(Endpoint::Source, &conn.source_node_id)?;
    let target = lookup(Endpoint::Target, &conn.target_node_id)?;
    for node in [source, target] {
        if !visible(node) {
            return Err(Diagnostic::ExcludedByFilter {
                id: conn.id,
                node_id: node.node_id.clone(),
            });
        }
    }
    Ok((source, target))
}

/// Replace a glyph's status-derived color for this render pass only
fn recolor(glyph: &mut Glyph, color: ColorClass) {
    glyph.style.stroke = color;
    if glyph.style.fill.is_some() {
        glyph.style.fill = Some(color);
    }
    glyph.style.dash = DashPattern::Solid;
}

fn node_override(node: &NetworkNode, mode: &ViewMode) -> Option<ColorClass> {
    match mode {
        ViewMode::Status => None,
        ViewMode::Voltage => voltage_band(node.voltage_level.as_deref()?),
        ViewMode::Load(readings) => {
            load_band(*readings.nodes.get(node.node_id.as_str())?)
        }
    }
}

fn connection_override(
    conn: &NetworkConnection,
    source: &NetworkNode,
    mode: &ViewMode,
) -> Option<ColorClass> {
    match mode {
        ViewMode::Status => None,
        // A connection sits at its source node's voltage level
        ViewMode::Voltage => voltage_band(source.voltage_level.as_deref()?),
        ViewMode::Load(readings) => load_band(*readings.connections.get(&conn.id)?),
    }
}

// ============================================================================
// Band mapping
// ============================================================================

lazy_static! {
    static ref RE_KILOVOLT: Regex = Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*kv").unwrap();
}

/// Parse a voltage tag like "110kV" and band it: ≥100 kV high, ≥10 kV
/// medium, below that low. Unparseable tags yield no override.
pub fn voltage_band(tag: &str) -> Option<ColorClass> {
    let caps = RE_KILOVOLT.captures(tag)?;
    let kv: f64 = caps[1].parse().ok()?;
    Some(if kv >= 100.0 {
        ColorClass::VoltageHigh
    } else if kv >= 10.0 {
        ColorClass::VoltageMedium
    } else {
        ColorClass::VoltageLow
    })
}

/// Band a normalized load reading into low/medium/high
pub fn load_band(reading: f64) -> Option<ColorClass> {
    if !reading.is_finite() {
        return None;
    }
    Some(if reading < 0.5 {
        ColorClass::LoadLow
    } else if reading < 0.8 {
        ColorClass::LoadMedium
    } else {
        ColorClass::LoadHigh
    })
}
