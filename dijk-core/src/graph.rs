//! Mutable graph store: nodes, weighted edges, and the designated source.
//!
//! Nodes live in a dense arena and are referred to by [`NodeId`] index
//! everywhere else (edges, `previous` links, the source designation), so no
//! back-reference ever owns a node. Nodes are only removed wholesale (clear
//! or undo-restore), which keeps indices stable for the lifetime of a graph
//! population.
//!
//! [`Graph::neighbors_of`] is the sole adjacency abstraction the engine
//! uses; the directed/undirected asymmetry of the store lives entirely in
//! that method.

use serde::Serialize;

use crate::error::{GraphError, GraphResult};

/// Maximum node count under auto-labeling (A-Z).
pub const MAX_NODES: usize = 26;

/// Maximum label length for manually renamed nodes.
pub const MAX_LABEL_LEN: usize = 3;

/// Stable identifier of a node: an index into the graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A graph node: display label, canvas position, and per-run scratch state.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Display label, 1-3 characters, unique within the graph.
    pub label: String,
    /// Canvas x position (presentation-owned, carried through undo).
    pub x: f64,
    /// Canvas y position.
    pub y: f64,
    /// Tentative/final distance from the source. `f64::INFINITY` = unreached.
    pub distance: f64,
    /// True once the engine has finalized this node's distance.
    pub visited: bool,
    /// Back-link for path reconstruction. Never keeps a node alive.
    pub previous: Option<NodeId>,
}

impl Node {
    fn new(x: f64, y: f64, label: String) -> Self {
        Self {
            label,
            x,
            y,
            distance: f64::INFINITY,
            visited: false,
            previous: None,
        }
    }

    /// Reset the per-run scratch fields to their defaults.
    pub fn reset_scratch(&mut self) {
        self.distance = f64::INFINITY;
        self.visited = false;
        self.previous = None;
    }
}

/// A weighted edge between two nodes.
///
/// Identity is structural; duplicate edges between the same pair are
/// permitted. The `directed` flag is kept in sync with the graph-wide
/// toggle by [`Graph::set_directedness`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Start endpoint (the only traversable end when directed).
    pub from: NodeId,
    /// End endpoint.
    pub to: NodeId,
    /// Strictly positive weight.
    pub weight: f64,
    /// Whether this edge is one-way.
    pub directed: bool,
}

/// The graph store: ordered node arena, edge list, and optional source.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) source: Option<NodeId>,
    directed: bool,
}

impl Graph {
    /// Create an empty graph. New edges default to directed, matching the
    /// editor's initial toggle state.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            source: None,
            directed: true,
        }
    }

    /// Add a node at the given position with the next sequential letter
    /// label (A, B, C, ...).
    ///
    /// Fails with [`GraphError::CapacityExceeded`] once all 26 auto labels
    /// are taken.
    pub fn add_node(&mut self, x: f64, y: f64) -> GraphResult<NodeId> {
        if self.nodes.len() >= MAX_NODES {
            return Err(GraphError::CapacityExceeded { max: MAX_NODES });
        }
        let label = char::from(b'A' + self.nodes.len() as u8).to_string();
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(x, y, label));
        Ok(id)
    }

    /// Add an edge. Self-loops are a silent no-op signaled as `Ok(None)`;
    /// a non-positive or non-finite weight fails with
    /// [`GraphError::InvalidWeight`].
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
        directed: bool,
    ) -> GraphResult<Option<usize>> {
        if !(weight > 0.0) || !weight.is_finite() {
            return Err(GraphError::InvalidWeight { weight });
        }
        if from == to {
            return Ok(None);
        }
        self.edges.push(Edge {
            from,
            to,
            weight,
            directed,
        });
        Ok(Some(self.edges.len() - 1))
    }

    /// Rename a node. The new label is trimmed and uppercased before
    /// validation (1-3 characters, unique among current nodes).
    pub fn rename_node(&mut self, node: NodeId, new_label: &str) -> GraphResult<()> {
        let label = new_label.trim().to_uppercase();
        if label.is_empty() || label.chars().count() > MAX_LABEL_LEN {
            return Err(GraphError::InvalidLabel { label });
        }
        if self
            .nodes
            .iter()
            .enumerate()
            .any(|(i, n)| n.label == label && i != node.index())
        {
            return Err(GraphError::DuplicateLabel { label });
        }
        self.nodes[node.index()].label = label;
        Ok(())
    }

    /// Designate the source node for shortest-path runs.
    pub fn set_source(&mut self, node: NodeId) {
        self.source = Some(node);
    }

    /// Move a node. Pure position update; no algorithm-state side effect.
    pub fn move_node(&mut self, node: NodeId, x: f64, y: f64) {
        let n = &mut self.nodes[node.index()];
        n.x = x;
        n.y = y;
    }

    /// Switch the graph-wide directedness and rewrite the directed flag of
    /// every existing edge to match. Weights and endpoints are untouched.
    pub fn set_directedness(&mut self, directed: bool) {
        self.directed = directed;
        for edge in &mut self.edges {
            edge.directed = directed;
        }
    }

    /// Empty the graph: no nodes, no edges, no source.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.source = None;
    }

    /// Reset every node's scratch fields (distance, visited, previous).
    pub fn reset_scratch(&mut self) {
        for node in &mut self.nodes {
            node.reset_scratch();
        }
    }

    /// Adjacency of `node`: for a directed edge, only `from == node`
    /// contributes; an undirected edge contributes the other endpoint
    /// whichever side matches.
    pub fn neighbors_of(&self, node: NodeId) -> Vec<(NodeId, f64)> {
        let mut neighbors = Vec::new();
        for edge in &self.edges {
            if edge.directed {
                if edge.from == node {
                    neighbors.push((edge.to, edge.weight));
                }
            } else if edge.from == node {
                neighbors.push((edge.to, edge.weight));
            } else if edge.to == node {
                neighbors.push((edge.from, edge.weight));
            }
        }
        neighbors
    }

    /// Look up a node by its exact label.
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.label == label).map(NodeId)
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// All nodes in insertion (label) order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The designated source node, if any.
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// Current graph-wide directedness toggle.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterator over node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub(crate) fn id_at(index: usize) -> NodeId {
        NodeId(index)
    }
}

// A derived Default would start undirected; delegate so every construction
// path gets the directed-by-default editor state.
impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
