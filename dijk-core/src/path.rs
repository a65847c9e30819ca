//! Path reconstruction from `previous` links and per-edge cost breakdowns.

use serde::Serialize;
use tracing::error;

use crate::error::ReportError;
use crate::graph::{Graph, NodeId};

/// One hop of a reconstructed path: the edge taken and its weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    /// Label of the hop's start node.
    pub from: String,
    /// Label of the hop's end node.
    pub to: String,
    /// Weight of the matching edge.
    pub weight: f64,
}

/// Reconstruct the shortest path from the source to `node` by walking
/// `previous` links back and reversing.
///
/// Returns `None` when the node is unreached (distance is infinite). The
/// source itself yields a length-1 path.
pub fn path_to(graph: &Graph, node: NodeId) -> Option<Vec<NodeId>> {
    if graph.node(node).distance.is_infinite() {
        return None;
    }
    let mut path = Vec::new();
    let mut current = Some(node);
    while let Some(id) = current {
        path.push(id);
        current = graph.node(id).previous;
    }
    path.reverse();
    Some(path)
}

/// Path labels in order, for display.
pub fn path_labels(graph: &Graph, path: &[NodeId]) -> Vec<String> {
    path.iter().map(|id| graph.node(*id).label.clone()).collect()
}

/// For each consecutive pair in `path`, find the matching edge and report
/// its weight.
///
/// A directed edge must match from->to exactly; an undirected edge matches
/// either orientation. A missing edge means the `previous` links and the
/// edge list disagree -- an internal-consistency failure reported as
/// [`ReportError::BrokenPath`] and logged, never a user-facing error.
pub fn cost_breakdown(graph: &Graph, path: &[NodeId]) -> Result<Vec<PathStep>, ReportError> {
    let mut steps = Vec::new();
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let matching = graph.edges().iter().find(|e| {
            (e.from == from && e.to == to) || (!e.directed && e.from == to && e.to == from)
        });
        match matching {
            Some(edge) => steps.push(PathStep {
                from: graph.node(from).label.clone(),
                to: graph.node(to).label.clone(),
                weight: edge.weight,
            }),
            None => {
                let err = ReportError::BrokenPath {
                    from: graph.node(from).label.clone(),
                    to: graph.node(to).label.clone(),
                };
                error!(%err, "path references a missing edge");
                return Err(err);
            }
        }
    }
    Ok(steps)
}
