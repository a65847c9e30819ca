//! Error types for dijk-core.

use thiserror::Error;

/// Result type alias for graph store operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Errors rejected synchronously at the graph store boundary.
///
/// None of these leave the graph mutated: validation happens before any
/// state change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Adding another auto-labeled node would exceed the A-Z label range.
    #[error("Maximum {max} nodes allowed")]
    CapacityExceeded {
        /// The node capacity that was hit.
        max: usize,
    },

    /// Edge weight must be strictly positive (and finite).
    #[error("Weight must be positive, got {weight}")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
    },

    /// Node label must be 1-3 characters.
    #[error("Invalid label '{label}': must be 1-3 characters")]
    InvalidLabel {
        /// The rejected label.
        label: String,
    },

    /// Another node already holds this label.
    #[error("Node '{label}' already exists")]
    DuplicateLabel {
        /// The colliding label.
        label: String,
    },

    /// No node with this label exists in the graph.
    #[error("No node labeled '{label}'")]
    UnknownNode {
        /// The label that was looked up.
        label: String,
    },
}

/// Errors from starting or driving the shortest-path engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A run was requested without a designated source node.
    #[error("No source node set")]
    NoSource,

    /// A run was requested on a graph with no nodes.
    #[error("Graph has no nodes")]
    EmptyGraph,
}

/// Errors from path reconstruction and report generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// Results were requested before the engine reached `Complete`.
    #[error("Algorithm has not been run to completion")]
    AlgorithmNotRun,

    /// A reconstructed path references an edge that does not exist.
    ///
    /// Indicates a broken invariant between `previous` links and the edge
    /// list; should never occur under correct operation.
    #[error("No edge matches path segment {from} -> {to}")]
    BrokenPath {
        /// Label of the segment's start node.
        from: String,
        /// Label of the segment's end node.
        to: String,
    },
}
