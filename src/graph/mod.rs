//! Graph snapshot loading, validation and replacement.
//!
//! The fetch itself belongs to the host (HTTP client, retry policy, caching
//! all live there). This module owns what happens to the bytes afterwards:
//! decoding, integrity checking, merging the optional live-status feed, and
//! the last-request-wins snapshot store.

use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Endpoint, FetchError, GraphIntegrityError, LoadError};
use crate::types::{ConnectionId, ConnectionStatus, NetworkGraph, NodeStatus};

// ============================================================================
// Decoding and validation
// ============================================================================

/// Decode a JSON snapshot without integrity checking
pub fn decode_snapshot(json: &str) -> Result<NetworkGraph, FetchError> {
    let graph: NetworkGraph = serde_json::from_str(json)?;
    debug!(
        "decoded snapshot: {} nodes, {} connections",
        graph.nodes.len(),
        graph.connections.len()
    );
    Ok(graph)
}

/// Collect every integrity violation in a snapshot.
///
/// Order is deterministic: node problems first, then connection problems in
/// connection order (self-loop before endpoint checks per connection).
pub fn integrity_errors(graph: &NetworkGraph) -> Vec<GraphIntegrityError> {
    let mut errors = Vec::new();

    let mut known: HashMap<&str, bool> = HashMap::new();
    for node in &graph.nodes {
        known.insert(node.node_id.as_str(), node.position.is_finite());
        if !node.position.is_finite() {
            errors.push(GraphIntegrityError::NonFinitePosition {
                node_id: node.node_id.clone(),
            });
        }
    }

    for conn in &graph.connections {
        if conn.source_node_id == conn.target_node_id {
            errors.push(GraphIntegrityError::SelfLoop {
                id: conn.id,
                node_id: conn.source_node_id.clone(),
            });
            continue;
        }
        for (endpoint, node_id) in [
            (Endpoint::Source, &conn.source_node_id),
            (Endpoint::Target, &conn.target_node_id),
        ] {
            if !known.contains_key(node_id.as_str()) {
                errors.push(GraphIntegrityError::MissingEndpoint {
                    id: conn.id,
                    endpoint,
                    node_id: node_id.clone(),
                });
            }
        }
    }

    errors
}

/// Check a snapshot, failing on the first integrity violation
pub fn validate(graph: &NetworkGraph) -> Result<(), GraphIntegrityError> {
    match integrity_errors(graph).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Strict loader: decode a JSON snapshot and reject it on any integrity
/// violation. The tolerant path is `compose`, which drops broken
/// connections and reports them as diagnostics instead.
pub fn load_snapshot(json: &str) -> Result<NetworkGraph, LoadError> {
    let graph = decode_snapshot(json)?;
    validate(&graph)?;
    Ok(graph)
}

// ============================================================================
// Live status feed
// ============================================================================

/// Optional per-element status feed, merged into a snapshot before
/// composition. Same id granularity as the snapshot itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFeed {
    #[serde(default)]
    pub nodes: HashMap<String, NodeStatus>,
    #[serde(default)]
    pub connections: HashMap<ConnectionId, ConnectionStatus>,
}

/// Apply a status feed onto a snapshot. Ids absent from the snapshot are
/// ignored; the feed never adds or removes elements.
pub fn merge_status(graph: &mut NetworkGraph, feed: &StatusFeed) {
    for node in &mut graph.nodes {
        if let Some(status) = feed.nodes.get(&node.node_id) {
            node.status = *status;
        }
    }
    for conn in &mut graph.connections {
        if let Some(status) = feed.connections.get(&conn.id) {
            conn.status = *status;
        }
    }
}

// ============================================================================
// Snapshot store
// ============================================================================

/// Ticket identifying one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Holds the latest good snapshot across refreshes.
///
/// Single-threaded by design: the host starts a fetch, gets a ticket, and
/// hands the result back when its request resolves. If a newer fetch
/// completed in the meantime the stale result is discarded
/// (last-request-wins), and a failed fetch keeps the previous snapshot on
/// screen.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    graph: Option<NetworkGraph>,
    next_ticket: u64,
    applied_ticket: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch attempt
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        FetchTicket(self.next_ticket)
    }

    /// Hand back the result of a fetch. Returns true if the snapshot was
    /// applied, false if it was discarded (stale ticket or failure).
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<NetworkGraph, LoadError>,
    ) -> bool {
        if ticket.0 <= self.applied_ticket {
            warn!("discarding stale snapshot (ticket {})", ticket.0);
            return false;
        }
        match result {
            Ok(graph) => {
                debug!(
                    "applying snapshot (ticket {}): {} nodes, {} connections",
                    ticket.0,
                    graph.nodes.len(),
                    graph.connections.len()
                );
                self.graph = Some(graph);
                self.applied_ticket = ticket.0;
                true
            }
            Err(err) => {
                // Keep the last good snapshot visible
                warn!("fetch failed (ticket {}): {}", ticket.0, err);
                false
            }
        }
    }

    /// The latest applied snapshot, if any fetch has succeeded yet
    pub fn graph(&self) -> Option<&NetworkGraph> {
        self.graph.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NetworkConnection, NetworkNode, Point};

    fn node(id: &str, x: f64, y: f64) -> NetworkNode {
        NetworkNode {
            node_id: id.to_string(),
            kind: crate::types::NodeKind::Junction,
            position: Point::new(x, y),
            label: None,
            voltage_level: None,
            status: NodeStatus::Energized,
            region: None,
        }
    }

    fn conn(id: ConnectionId, source: &str, target: &str) -> NetworkConnection {
        NetworkConnection {
            id,
            source_node_id: source.to_string(),
            target_node_id: target.to_string(),
            kind: crate::types::ConnectionKind::Line,
            equipment_id: None,
            status: ConnectionStatus::Closed,
        }
    }

    #[test]
    fn validate_accepts_well_formed_graph() {
        let graph = NetworkGraph {
            nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 0.0)],
            connections: vec![conn(1, "a", "b")],
        };
        assert!(validate(&graph).is_ok());
    }

    #[test]
    fn validate_rejects_dangling_endpoint() {
        let graph = NetworkGraph {
            nodes: vec![node("a", 0.0, 0.0)],
            connections: vec![conn(1, "a", "ghost")],
        };
        match validate(&graph) {
            Err(GraphIntegrityError::MissingEndpoint { id, node_id, .. }) => {
                assert_eq!(id, 1);
                assert_eq!(node_id, "ghost");
            }
            other => panic!("expected missing endpoint, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_self_loop() {
        let graph = NetworkGraph {
            nodes: vec![node("a", 0.0, 0.0)],
            connections: vec![conn(7, "a", "a")],
        };
        assert_eq!(
            validate(&graph),
            Err(GraphIntegrityError::SelfLoop {
                id: 7,
                node_id: "a".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_non_finite_position() {
        let graph = NetworkGraph {
            nodes: vec![node("a", f64::NAN, 0.0)],
            connections: vec![],
        };
        assert!(matches!(
            validate(&graph),
            Err(GraphIntegrityError::NonFinitePosition { .. })
        ));
    }

    #[test]
    fn merge_status_overrides_known_ids_only() {
        let mut graph = NetworkGraph {
            nodes: vec![node("a", 0.0, 0.0)],
            connections: vec![conn(1, "a", "b")],
        };
        let mut feed = StatusFeed::default();
        feed.nodes.insert("a".to_string(), NodeStatus::Fault);
        feed.nodes.insert("ghost".to_string(), NodeStatus::Fault);
        feed.connections.insert(1, ConnectionStatus::Open);
        merge_status(&mut graph, &feed);
        assert_eq!(graph.nodes[0].status, NodeStatus::Fault);
        assert_eq!(graph.connections[0].status, ConnectionStatus::Open);
    }
}
