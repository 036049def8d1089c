//! Type definitions for electrical network graphs.
//!
//! The wire shape mirrors the dashboard's network-graph endpoint: camelCase
//! field names, string-typed enums, one full snapshot per fetch.

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point in model-space units (abstract grid, not pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn around(center: Point, width: f64, height: f64) -> Self {
        Self {
            min: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            max: Point::new(center.x + width / 2.0, center.y + height / 2.0),
        }
    }

    pub fn expand_to(&mut self, other: Bounds) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

// ============================================================================
// Node types
// ============================================================================

/// Kind of a graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "camelCase")]
pub enum NodeKind {
    Bus,
    Junction,
    ConnectionPoint,
    Substation,
    Other,
}

impl NodeKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bus" => NodeKind::Bus,
            "junction" => NodeKind::Junction,
            "connectionpoint" | "connection_point" => NodeKind::ConnectionPoint,
            "substation" => NodeKind::Substation,
            _ => NodeKind::Other,
        }
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        NodeKind::from_str(&s)
    }
}

/// Operational status of a node.
///
/// Unknown wire values decode to `DeEnergized` (the neutral class) instead
/// of failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "camelCase")]
pub enum NodeStatus {
    Energized,
    DeEnergized,
    Fault,
    Maintenance,
}

impl NodeStatus {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "energized" => NodeStatus::Energized,
            "fault" => NodeStatus::Fault,
            "maintenance" => NodeStatus::Maintenance,
            _ => NodeStatus::DeEnergized,
        }
    }
}

impl From<String> for NodeStatus {
    fn from(s: String) -> Self {
        NodeStatus::from_str(&s)
    }
}

/// A vertex in the network graph
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkNode {
    pub node_id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Point,
    #[serde(default)]
    pub label: Option<String>,
    /// Voltage tag such as "110kV"; feeds the voltage view mode
    #[serde(default)]
    pub voltage_level: Option<String>,
    pub status: NodeStatus,
    /// Region tag used by the region filter
    #[serde(default)]
    pub region: Option<String>,
}

// ============================================================================
// Connection types
// ============================================================================

/// Opaque numeric connection key
pub type ConnectionId = u64;

/// Kind of a graph edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "camelCase")]
pub enum ConnectionKind {
    Line,
    Transformer,
    CircuitBreaker,
    Disconnector,
}

impl ConnectionKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "transformer" => ConnectionKind::Transformer,
            "circuitbreaker" | "circuit_breaker" | "breaker" => ConnectionKind::CircuitBreaker,
            "disconnector" => ConnectionKind::Disconnector,
            _ => ConnectionKind::Line,
        }
    }
}

impl From<String> for ConnectionKind {
    fn from(s: String) -> Self {
        ConnectionKind::from_str(&s)
    }
}

/// Switching status of a connection.
///
/// Unknown wire values decode to `Open` (the neutral class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "camelCase")]
pub enum ConnectionStatus {
    Closed,
    Open,
    Fault,
}

impl ConnectionStatus {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "closed" => ConnectionStatus::Closed,
            "fault" => ConnectionStatus::Fault,
            _ => ConnectionStatus::Open,
        }
    }
}

impl From<String> for ConnectionStatus {
    fn from(s: String) -> Self {
        ConnectionStatus::from_str(&s)
    }
}

/// An edge between two nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConnection {
    pub id: ConnectionId,
    pub source_node_id: String,
    pub target_node_id: String,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
    /// External equipment record for cross-navigation; never rendered
    #[serde(default)]
    pub equipment_id: Option<String>,
    pub status: ConnectionStatus,
}

// ============================================================================
// Graph snapshot
// ============================================================================

/// One immutable graph snapshot.
///
/// Snapshots are replaced wholesale on refresh; there are no partial or
/// incremental updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub connections: Vec<NetworkConnection>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Look up a node by id
    pub fn node(&self, node_id: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.node_id == node_id)
    }
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Element addressing
// ============================================================================

/// Identity of a rendered element, as carried by glyphs and events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    Node(String),
    Connection(ConnectionId),
}

/// Type of a rendered element, paired with [`ElementId`] in selection events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node(NodeKind),
    Connection(ConnectionKind),
}

// ============================================================================
// View inputs
// ============================================================================

/// Per-element load readings supplied by the host for the load view mode.
///
/// Values are normalized utilization in `0.0..=1.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReadings {
    pub nodes: std::collections::HashMap<String, f64>,
    pub connections: std::collections::HashMap<ConnectionId, f64>,
}

/// Coloring strategy for one render pass
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewMode {
    /// Status-driven coloring (the default)
    #[default]
    Status,
    /// Coloring by voltage band parsed from each node's voltage tag
    Voltage,
    /// Coloring by externally supplied load metric, banded low/medium/high
    Load(LoadReadings),
}

/// Which regions participate in a render pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    /// Whether a node with the given region tag passes the filter.
    /// Untagged nodes are visible under every filter.
    pub fn allows(&self, region: Option<&str>) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(wanted) => region.map(|r| r == wanted).unwrap_or(true),
        }
    }
}
