//! Editing session: the command facade tying the graph store, undo history,
//! and engine together.
//!
//! This is the surface the command collaborator (REPL, script runner, or
//! any other front end) drives. Every undoable mutation pushes a history
//! snapshot before it runs; rejected operations discard their snapshot so
//! undo stays a strict inverse of the last successful mutation. The
//! directedness toggle and algorithm reset are deliberately not snapshotted
//! (toggling back is its own inverse, and reset only touches scratch
//! state).
//!
//! [`Session::render_state`] is the complete view handed to any render
//! collaborator after every mutation or step; it carries no geometry.

use serde::Serialize;

use crate::engine::{Engine, EngineState, StepOutcome};
use crate::error::{EngineError, GraphError, GraphResult, ReportError};
use crate::graph::{Graph, NodeId};
use crate::history::History;
use crate::report::Report;

/// Result of completing a two-click edge creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// The edge was created.
    Created,
    /// Both endpoints were the same node; silently ignored.
    SelfLoop,
    /// No first endpoint was armed; nothing happened.
    NotArmed,
}

/// Render view of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    /// Node id.
    pub id: NodeId,
    /// Display label.
    pub label: String,
    /// Canvas x position.
    pub x: f64,
    /// Canvas y position.
    pub y: f64,
    /// Whether the engine has finalized this node.
    pub visited: bool,
    /// Whether this node is the designated source.
    pub is_source: bool,
    /// Finite distance from the source, `None` while unreached.
    pub distance: Option<f64>,
}

/// Render view of one edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    /// Start endpoint.
    pub from: NodeId,
    /// End endpoint.
    pub to: NodeId,
    /// Edge weight.
    pub weight: f64,
    /// Whether the edge is one-way.
    pub directed: bool,
    /// Whether this edge lies on the shortest-path tree found so far.
    pub on_shortest_path: bool,
}

/// Complete render state after a mutation or step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    /// All nodes in label order.
    pub nodes: Vec<NodeView>,
    /// All edges in insertion order.
    pub edges: Vec<EdgeView>,
    /// The armed edge-creation selection, if any.
    pub armed: Option<NodeId>,
}

/// An interactive editing and solving session.
#[derive(Debug, Default)]
pub struct Session {
    graph: Graph,
    history: History,
    engine: Engine,
    armed: Option<NodeId>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Current engine state.
    pub fn engine_state(&self) -> EngineState {
        self.engine.state()
    }

    /// Resolve a label to a node id, as a typed error for command layers.
    pub fn node_by_label(&self, label: &str) -> GraphResult<NodeId> {
        let upper = label.trim().to_uppercase();
        self.graph
            .find_by_label(&upper)
            .ok_or(GraphError::UnknownNode { label: upper })
    }

    /// Add a node at (x, y). Undoable.
    pub fn add_node(&mut self, x: f64, y: f64) -> GraphResult<NodeId> {
        self.history.snapshot(&self.graph);
        match self.graph.add_node(x, y) {
            Ok(id) => Ok(id),
            Err(err) => {
                self.history.discard_last();
                Err(err)
            }
        }
    }

    /// Arm the first endpoint of a two-click edge creation.
    pub fn begin_add_edge(&mut self, node: NodeId) {
        self.armed = Some(node);
    }

    /// The currently armed edge-creation selection.
    pub fn armed(&self) -> Option<NodeId> {
        self.armed
    }

    /// Disarm any pending edge-creation selection (mode change).
    pub fn cancel_add_edge(&mut self) {
        self.armed = None;
    }

    /// Complete a two-click edge creation toward `to` with `weight`,
    /// using the graph's current directedness. Disarms the selection
    /// either way. Undoable when an edge is actually created.
    pub fn complete_add_edge(&mut self, to: NodeId, weight: f64) -> GraphResult<EdgeOutcome> {
        let Some(from) = self.armed.take() else {
            return Ok(EdgeOutcome::NotArmed);
        };
        if from == to {
            return Ok(EdgeOutcome::SelfLoop);
        }
        self.history.snapshot(&self.graph);
        let directed = self.graph.is_directed();
        match self.graph.add_edge(from, to, weight, directed) {
            Ok(Some(_)) => Ok(EdgeOutcome::Created),
            // from != to was checked above; the store cannot report a
            // self-loop here, but keep the arm disarmed and the history
            // clean if it ever does.
            Ok(None) => {
                self.history.discard_last();
                Ok(EdgeOutcome::SelfLoop)
            }
            Err(err) => {
                self.history.discard_last();
                Err(err)
            }
        }
    }

    /// Convenience for command layers: arm `from` and complete toward `to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> GraphResult<EdgeOutcome> {
        self.begin_add_edge(from);
        self.complete_add_edge(to, weight)
    }

    /// Designate the source node. Undoable.
    pub fn set_source(&mut self, node: NodeId) {
        self.history.snapshot(&self.graph);
        self.graph.set_source(node);
    }

    /// Move a node to (x, y). Undoable.
    pub fn move_node(&mut self, node: NodeId, x: f64, y: f64) {
        self.history.snapshot(&self.graph);
        self.graph.move_node(node, x, y);
    }

    /// Rename a node. Undoable.
    pub fn rename_node(&mut self, node: NodeId, new_label: &str) -> GraphResult<()> {
        self.history.snapshot(&self.graph);
        match self.graph.rename_node(node, new_label) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.history.discard_last();
                Err(err)
            }
        }
    }

    /// Switch graph-wide directedness, rewriting every edge's flag.
    /// Not snapshotted: toggling back is its own inverse.
    pub fn set_directedness(&mut self, directed: bool) {
        self.graph.set_directedness(directed);
    }

    /// Empty the graph. Undoable (clearing is itself reversible).
    pub fn clear(&mut self) {
        self.history.snapshot(&self.graph);
        self.graph.clear();
        self.engine.reset(&mut self.graph);
        self.armed = None;
    }

    /// Start a shortest-path run. Resets prior results first.
    pub fn run(&mut self) -> Result<(), EngineError> {
        self.engine.start(&mut self.graph)
    }

    /// Advance the run by one frontier pop.
    pub fn step(&mut self) -> StepOutcome {
        self.engine.step(&mut self.graph)
    }

    /// Drive a started run to completion without animation.
    pub fn run_to_completion(&mut self) {
        self.engine.run_to_completion(&mut self.graph);
    }

    /// Clear algorithm results but keep the graph.
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.graph);
    }

    /// Undo the most recent mutating operation. Returns false when there is
    /// nothing to undo. Any partial run state is discarded.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.graph) {
            return false;
        }
        self.engine.reset(&mut self.graph);
        self.armed = None;
        true
    }

    /// Build the post-run report.
    pub fn report(&self) -> Result<Report, ReportError> {
        Report::build(&self.graph, self.engine.state())
    }

    /// Full view for render collaborators: every node, every edge with its
    /// shortest-path-tree membership, and the armed selection.
    pub fn render_state(&self) -> RenderState {
        let source = self.graph.source();
        let nodes = self
            .graph
            .node_ids()
            .map(|id| {
                let n = self.graph.node(id);
                NodeView {
                    id,
                    label: n.label.clone(),
                    x: n.x,
                    y: n.y,
                    visited: n.visited,
                    is_source: source == Some(id),
                    distance: n.distance.is_finite().then_some(n.distance),
                }
            })
            .collect();
        let edges = self
            .graph
            .edges()
            .iter()
            .map(|e| {
                let forward =
                    self.graph.node(e.to).previous == Some(e.from) && self.graph.node(e.to).visited;
                let backward = !e.directed
                    && self.graph.node(e.from).previous == Some(e.to)
                    && self.graph.node(e.from).visited;
                EdgeView {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                    directed: e.directed,
                    on_shortest_path: forward || backward,
                }
            })
            .collect();
        RenderState {
            nodes,
            edges,
            armed: self.armed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_session() -> Session {
        let mut s = Session::new();
        let a = s.add_node(0.0, 0.0).unwrap();
        let b = s.add_node(1.0, 0.0).unwrap();
        let c = s.add_node(2.0, 0.0).unwrap();
        s.add_edge(a, b, 1.0).unwrap();
        s.add_edge(a, c, 4.0).unwrap();
        s.add_edge(b, c, 2.0).unwrap();
        s.set_source(a);
        s
    }

    #[test]
    fn test_undo_is_strict_inverse_of_add_node() {
        let mut s = Session::new();
        s.add_node(0.0, 0.0).unwrap();
        s.add_node(1.0, 1.0).unwrap();
        assert!(s.undo());
        assert_eq!(s.graph().node_count(), 1);
        assert_eq!(s.graph().nodes()[0].label, "A");
    }

    #[test]
    fn test_undo_empty_history_signals_false() {
        let mut s = Session::new();
        assert!(!s.undo());
    }

    #[test]
    fn test_rejected_op_leaves_history_consistent() {
        let mut s = Session::new();
        let a = s.add_node(0.0, 0.0).unwrap();
        s.add_node(1.0, 0.0).unwrap();

        // Rejected rename must not consume or add an undo entry.
        assert!(s.rename_node(a, "B").is_err());
        assert!(s.undo());
        assert_eq!(s.graph().node_count(), 1);
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut s = abc_session();
        s.clear();
        assert_eq!(s.graph().node_count(), 0);
        assert!(s.undo());
        assert_eq!(s.graph().node_count(), 3);
        assert_eq!(s.graph().edge_count(), 3);
        assert!(s.graph().source().is_some());
    }

    #[test]
    fn test_self_loop_edge_is_silent_noop() {
        let mut s = Session::new();
        let a = s.add_node(0.0, 0.0).unwrap();
        assert_eq!(s.add_edge(a, a, 2.0), Ok(EdgeOutcome::SelfLoop));
        assert_eq!(s.graph().edge_count(), 0);
        // Nothing to undo beyond the node add itself
        assert!(s.undo());
        assert_eq!(s.graph().node_count(), 0);
        assert!(!s.undo());
    }

    #[test]
    fn test_edge_arming_flow() {
        let mut s = Session::new();
        let a = s.add_node(0.0, 0.0).unwrap();
        let b = s.add_node(1.0, 0.0).unwrap();

        assert_eq!(s.complete_add_edge(b, 1.0).unwrap(), EdgeOutcome::NotArmed);

        s.begin_add_edge(a);
        assert_eq!(s.render_state().armed, Some(a));
        assert_eq!(s.complete_add_edge(b, 1.0).unwrap(), EdgeOutcome::Created);
        assert_eq!(s.render_state().armed, None);

        s.begin_add_edge(a);
        s.cancel_add_edge();
        assert_eq!(s.armed(), None);
    }

    #[test]
    fn test_edge_uses_current_directedness() {
        let mut s = Session::new();
        let a = s.add_node(0.0, 0.0).unwrap();
        let b = s.add_node(1.0, 0.0).unwrap();
        s.set_directedness(false);
        s.add_edge(a, b, 1.0).unwrap();
        assert!(!s.graph().edges()[0].directed);
    }

    #[test]
    fn test_run_and_report() {
        let mut s = abc_session();
        assert!(s.report().is_err());

        s.run().unwrap();
        s.run_to_completion();
        let report = s.report().unwrap();
        assert_eq!(report.source, "A");
        assert_eq!(report.destinations[1].distance, Some(3.0));
    }

    #[test]
    fn test_run_requires_source() {
        let mut s = Session::new();
        s.add_node(0.0, 0.0).unwrap();
        assert_eq!(s.run(), Err(EngineError::NoSource));
    }

    #[test]
    fn test_render_state_marks_shortest_path_edges() {
        let mut s = abc_session();
        s.run().unwrap();
        s.run_to_completion();

        let state = s.render_state();
        let on_path: Vec<bool> = state.edges.iter().map(|e| e.on_shortest_path).collect();
        // A->B and B->C carry the tree; the direct A->C edge does not.
        assert_eq!(on_path, vec![true, false, true]);

        let source_view = &state.nodes[0];
        assert!(source_view.is_source);
        assert!(source_view.visited);
        assert_eq!(source_view.distance, Some(0.0));
    }

    #[test]
    fn test_render_state_symmetric_check_when_undirected() {
        // Undirected edge stored as C->B; the tree traverses B->C, so the
        // symmetric check must still mark it.
        let mut s = Session::new();
        let a = s.add_node(0.0, 0.0).unwrap();
        let b = s.add_node(1.0, 0.0).unwrap();
        let c = s.add_node(2.0, 0.0).unwrap();
        s.set_directedness(false);
        s.add_edge(a, b, 1.0).unwrap();
        s.add_edge(c, b, 2.0).unwrap();
        s.set_source(a);
        s.run().unwrap();
        s.run_to_completion();

        let state = s.render_state();
        assert!(state.edges[1].on_shortest_path);
    }

    #[test]
    fn test_reset_keeps_graph_clears_results() {
        let mut s = abc_session();
        s.run().unwrap();
        s.run_to_completion();
        s.reset();

        assert_eq!(s.engine_state(), EngineState::Idle);
        assert_eq!(s.graph().node_count(), 3);
        assert!(s.graph().nodes().iter().all(|n| n.distance.is_infinite()));
    }

    #[test]
    fn test_directedness_toggle_roundtrip_not_undoable() {
        let mut s = abc_session();
        s.set_directedness(false);
        s.set_directedness(true);
        assert!(s.graph().edges().iter().all(|e| e.directed));

        // Undo rolls back the last snapshotted op (set_source), not the
        // toggles.
        assert!(s.undo());
        assert!(s.graph().source().is_none());
    }

    #[test]
    fn test_new_session_defaults_to_directed() {
        let mut s = Session::new();
        let a = s.add_node(0.0, 0.0).unwrap();
        let b = s.add_node(1.0, 0.0).unwrap();
        s.add_edge(a, b, 1.0).unwrap();

        assert!(s.graph().is_directed());
        assert!(s.graph().edges()[0].directed);
        // Directed semantics: nothing traverses back out of B.
        assert!(s.graph().neighbors_of(b).is_empty());

        s.set_source(a);
        s.run().unwrap();
        s.run_to_completion();
        assert!(s.report().unwrap().directed);
    }

    #[test]
    fn test_node_by_label_uppercases() {
        let s = abc_session();
        assert!(s.node_by_label("a").is_ok());
        assert!(matches!(
            s.node_by_label("zz"),
            Err(GraphError::UnknownNode { .. })
        ));
    }
}
