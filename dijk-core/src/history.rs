//! Undo history: full-snapshot capture and restore of graph state.
//!
//! Each entry is an immutable deep copy of the editable state (node
//! positions and labels, index-encoded edges, source index). Full snapshots
//! are a deliberate design choice at this scale (at most 26 nodes); a cap of
//! 20 entries bounds memory, evicting the oldest first.
//!
//! Snapshot pairing is caller discipline: the session layer pushes a
//! snapshot before every mutating operation it forwards to the store.

use crate::graph::Graph;

/// Maximum number of retained undo entries.
pub const MAX_HISTORY: usize = 20;

/// An immutable deep copy of editable graph state.
///
/// Edges and the source are encoded by node index so the snapshot shares no
/// storage with the live graph.
#[derive(Debug, Clone)]
struct Snapshot {
    nodes: Vec<(f64, f64, String)>,
    edges: Vec<(usize, usize, f64, bool)>,
    source: Option<usize>,
}

impl Snapshot {
    fn capture(graph: &Graph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .iter()
                .map(|n| (n.x, n.y, n.label.clone()))
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| (e.from.index(), e.to.index(), e.weight, e.directed))
                .collect(),
            source: graph.source().map(|id| id.index()),
        }
    }
}

/// Bounded stack of graph snapshots for undo.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a deep copy of the current graph state, evicting the oldest
    /// entry beyond [`MAX_HISTORY`].
    pub fn snapshot(&mut self, graph: &Graph) {
        self.entries.push(Snapshot::capture(graph));
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
    }

    /// Restore the most recent snapshot into `graph`, resetting all
    /// algorithm scratch fields. Returns false (and leaves the graph
    /// untouched) when there is nothing to undo.
    pub fn undo(&mut self, graph: &mut Graph) -> bool {
        let Some(state) = self.entries.pop() else {
            return false;
        };

        graph.clear();
        for (x, y, label) in &state.nodes {
            // Restored graphs never exceed capacity: they were captured
            // from a graph that satisfied it.
            let id = graph
                .add_node(*x, *y)
                .expect("snapshot within node capacity");
            graph.node_mut(id).label = label.clone();
        }
        for (from, to, weight, directed) in &state.edges {
            graph
                .add_edge(Graph::id_at(*from), Graph::id_at(*to), *weight, *directed)
                .expect("snapshot edge weight already validated");
        }
        if let Some(idx) = state.source {
            graph.set_source(Graph::id_at(idx));
        }
        graph.reset_scratch();
        true
    }

    /// Drop the most recently pushed snapshot.
    ///
    /// Used by the session when an operation is rejected after its paired
    /// snapshot was taken, so undo stays a strict inverse of the last
    /// *successful* mutation.
    pub(crate) fn discard_last(&mut self) {
        self.entries.pop();
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_graph() -> Graph {
        let mut g = Graph::new();
        let a = g.add_node(10.0, 20.0).unwrap();
        let b = g.add_node(30.0, 40.0).unwrap();
        g.add_edge(a, b, 2.5, true).unwrap();
        g.set_source(a);
        g
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut g = populated_graph();
        let mut history = History::new();
        assert!(!history.undo(&mut g));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_undo_restores_exact_state() {
        let mut g = populated_graph();
        let mut history = History::new();

        history.snapshot(&g);
        let c = g.add_node(50.0, 60.0).unwrap();
        g.add_edge(c, Graph::id_at(0), 9.0, true).unwrap();
        g.rename_node(Graph::id_at(1), "XY").unwrap();
        g.set_source(c);

        assert!(history.undo(&mut g));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.nodes()[0].label, "A");
        assert_eq!(g.nodes()[1].label, "B");
        assert_eq!(g.nodes()[1].x, 30.0);
        assert_eq!(g.edges()[0].weight, 2.5);
        assert!(g.edges()[0].directed);
        assert_eq!(g.source(), Some(Graph::id_at(0)));
    }

    #[test]
    fn test_undo_resets_scratch_fields() {
        let mut g = populated_graph();
        let mut history = History::new();
        history.snapshot(&g);

        // Simulate a completed run, then a mutation
        g.node_mut(Graph::id_at(0)).distance = 0.0;
        g.node_mut(Graph::id_at(0)).visited = true;
        g.node_mut(Graph::id_at(1)).distance = 2.5;
        g.node_mut(Graph::id_at(1)).previous = Some(Graph::id_at(0));

        assert!(history.undo(&mut g));
        for node in g.nodes() {
            assert!(node.distance.is_infinite());
            assert!(!node.visited);
            assert!(node.previous.is_none());
        }
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut g = Graph::new();
        let mut history = History::new();

        // First snapshot: empty graph. Then 25 more with growing node count.
        for _ in 0..=MAX_HISTORY + 4 {
            history.snapshot(&g);
            g.add_node(0.0, 0.0).unwrap();
        }
        assert_eq!(history.len(), MAX_HISTORY);

        // Unwind everything; the oldest surviving snapshot has 5 nodes.
        while history.undo(&mut g) {}
        assert_eq!(g.node_count(), 5);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut g = populated_graph();
        let mut history = History::new();
        history.snapshot(&g);

        // Mutate deeply after the snapshot
        g.rename_node(Graph::id_at(0), "ZZ").unwrap();
        g.move_node(Graph::id_at(0), -1.0, -1.0);

        assert!(history.undo(&mut g));
        assert_eq!(g.nodes()[0].label, "A");
        assert_eq!(g.nodes()[0].x, 10.0);
    }

    #[test]
    fn test_discard_last() {
        let g = populated_graph();
        let mut history = History::new();
        history.snapshot(&g);
        history.snapshot(&g);
        history.discard_last();
        assert_eq!(history.len(), 1);
    }
}
