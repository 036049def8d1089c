//! Error taxonomy for graph loading and scene composition.
//!
//! Integrity problems are never fatal to a whole render: the composer drops
//! the offending element and reports it as a [`Diagnostic`] next to the
//! Scene. Only `load_snapshot` (the strict entry point) turns them into
//! hard errors.

use thiserror::Error;

use crate::types::ConnectionId;

/// Which end of a connection a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// Transport or decode failure while loading a graph snapshot
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("snapshot decode failure: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A structural problem inside a graph snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphIntegrityError {
    /// A connection references a node id absent from the snapshot
    #[error("connection {id}: {endpoint} references unknown node \"{node_id}\"")]
    MissingEndpoint {
        id: ConnectionId,
        endpoint: Endpoint,
        node_id: String,
    },
    /// Source and target are the same node
    #[error("connection {id}: self-loop on node \"{node_id}\"")]
    SelfLoop { id: ConnectionId, node_id: String },
    /// A node carries a NaN or infinite coordinate
    #[error("node \"{node_id}\": non-finite position")]
    NonFinitePosition { node_id: String },
}

/// Failure of the strict snapshot loader
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Integrity(#[from] GraphIntegrityError),
}

/// Per-element report produced alongside a composed Scene.
///
/// Filter exclusions are deliberately distinct from integrity errors: a
/// connection whose endpoint was removed by the region filter is healthy
/// data, it just is not visible in this render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Integrity(GraphIntegrityError),
    /// Connection dropped because one endpoint's region is filtered out
    ExcludedByFilter {
        id: ConnectionId,
        node_id: String,
    },
}

impl Diagnostic {
    /// True for diagnostics that indicate broken data (not mere filtering)
    pub fn is_integrity(&self) -> bool {
        matches!(self, Diagnostic::Integrity(_))
    }
}
