//! Post-run report model: per-destination paths, costs, and aggregate
//! statistics, as plain serializable data.
//!
//! Rendering (banner text, tables, JSON) belongs to the presentation layer;
//! this module only assembles results and enforces that they are requested
//! post-`Complete`.

use serde::Serialize;
use tracing::warn;

use crate::engine::EngineState;
use crate::error::ReportError;
use crate::graph::Graph;
use crate::path::{cost_breakdown, path_labels, path_to, PathStep};

/// Shortest-path results for one destination node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    /// The destination's label.
    pub label: String,
    /// Final distance from the source; `None` means unreachable.
    pub distance: Option<f64>,
    /// Full path as ordered labels, empty when unreachable.
    pub path: Vec<String>,
    /// Per-hop cost breakdown, empty when unreachable (or when the line
    /// degraded on an internal-consistency failure).
    pub breakdown: Vec<PathStep>,
}

impl Destination {
    /// True when this destination is reachable from the source.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Aggregate statistics over all destinations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Number of destinations reachable from the source.
    pub reachable: usize,
    /// Number of unreachable destinations.
    pub unreachable: usize,
    /// Smallest finite distance and the label attaining it.
    pub min: Option<(String, f64)>,
    /// Largest finite distance and the label attaining it.
    pub max: Option<(String, f64)>,
    /// Average distance among reachable destinations.
    pub average: Option<f64>,
}

/// Complete analysis report for a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Label of the source node.
    pub source: String,
    /// Total node count.
    pub node_count: usize,
    /// Total edge count.
    pub edge_count: usize,
    /// Whether the graph was directed during the run.
    pub directed: bool,
    /// Every node except the source: reachable destinations first, sorted
    /// by distance, then unreachable ones in label-insertion order.
    pub destinations: Vec<Destination>,
    /// Aggregate statistics.
    pub stats: Stats,
}

impl Report {
    /// Assemble the report from a solved graph.
    ///
    /// Fails with [`ReportError::AlgorithmNotRun`] unless the engine is in
    /// `Complete`. A `BrokenPath` on one destination degrades that line's
    /// breakdown only; it never fails the whole report.
    pub fn build(graph: &Graph, state: EngineState) -> Result<Self, ReportError> {
        if state != EngineState::Complete {
            return Err(ReportError::AlgorithmNotRun);
        }
        let source = graph.source().ok_or(ReportError::AlgorithmNotRun)?;

        let mut reachable = Vec::new();
        let mut unreachable = Vec::new();
        for id in graph.node_ids() {
            if id == source {
                continue;
            }
            let node = graph.node(id);
            if node.distance.is_infinite() {
                unreachable.push(Destination {
                    label: node.label.clone(),
                    distance: None,
                    path: Vec::new(),
                    breakdown: Vec::new(),
                });
            } else {
                let ids = path_to(graph, id).unwrap_or_default();
                let breakdown = match cost_breakdown(graph, &ids) {
                    Ok(steps) => steps,
                    Err(err) => {
                        warn!(%err, label = %node.label, "degrading report line");
                        Vec::new()
                    }
                };
                reachable.push(Destination {
                    label: node.label.clone(),
                    distance: Some(node.distance),
                    path: path_labels(graph, &ids),
                    breakdown,
                });
            }
        }
        reachable.sort_by(|a, b| {
            a.distance
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.distance.unwrap_or(f64::INFINITY))
        });

        let stats = Stats::compute(&reachable, unreachable.len());

        let mut destinations = reachable;
        destinations.extend(unreachable);

        Ok(Self {
            source: graph.node(source).label.clone(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            directed: graph.is_directed(),
            destinations,
            stats,
        })
    }

    /// Reachable destinations only, in distance order.
    pub fn reachable(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter().filter(|d| d.is_reachable())
    }

    /// Unreachable destinations only.
    pub fn unreachable(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter().filter(|d| !d.is_reachable())
    }
}

impl Stats {
    fn compute(reachable: &[Destination], unreachable: usize) -> Self {
        let mut min: Option<(String, f64)> = None;
        let mut max: Option<(String, f64)> = None;
        let mut sum = 0.0;
        for dest in reachable {
            let d = dest.distance.unwrap_or(f64::INFINITY);
            sum += d;
            if min.as_ref().map_or(true, |(_, m)| d < *m) {
                min = Some((dest.label.clone(), d));
            }
            if max.as_ref().map_or(true, |(_, m)| d > *m) {
                max = Some((dest.label.clone(), d));
            }
        }
        let average = if reachable.is_empty() {
            None
        } else {
            Some(sum / reachable.len() as f64)
        };
        Self {
            reachable: reachable.len(),
            unreachable,
            min,
            max,
            average,
        }
    }
}
