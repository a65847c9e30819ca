//! Step-wise Dijkstra engine with a lazy-deletion priority frontier.
//!
//! The engine is a small state machine (`Idle` -> `Running` -> `Complete`)
//! driven by repeated [`Engine::step`] calls. It assumes no scheduler: the
//! caller decides whether steps come from a timer (animation) or a tight
//! loop (tests, batch solving). Each step processes exactly one frontier
//! pop, which makes it the sole suspension point for animation.
//!
//! The frontier is a binary min-heap keyed by `(distance, seq)`. `seq` is a
//! monotonically increasing insertion counter that breaks exact-priority
//! ties in insertion order; it never participates in distance comparison.
//! Superseded entries are not removed eagerly -- they are discarded at pop
//! time via the visited flag (lazy deletion), which avoids any decrease-key
//! operation and bounds the run at O(nodes + edges) pops.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::EngineError;
use crate::graph::{Graph, NodeId};

/// Lifecycle of a single shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No run in progress; scratch fields are (or are about to be) clean.
    #[default]
    Idle,
    /// A run is in progress; call [`Engine::step`] to advance it.
    Running,
    /// The frontier drained; every node's distance is final.
    Complete,
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A node was finalized and its neighbors relaxed.
    Visited(NodeId),
    /// The popped entry was stale (node already visited); nothing happened.
    Stale,
    /// The frontier is empty; the run is complete.
    Finished,
}

/// Frontier entry ordered by `(distance, seq)`.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    distance: f64,
    seq: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Incremental single-source shortest-path engine.
#[derive(Debug, Default)]
pub struct Engine {
    state: EngineState,
    frontier: BinaryHeap<Reverse<FrontierEntry>>,
    seq: u64,
}

impl Engine {
    /// Create an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// True once a run has drained the frontier.
    pub fn is_complete(&self) -> bool {
        self.state == EngineState::Complete
    }

    /// Begin a run: reset all scratch state, seed the frontier with the
    /// source at distance 0, and enter `Running`.
    ///
    /// Fails with [`EngineError::NoSource`] or [`EngineError::EmptyGraph`]
    /// without any state change.
    pub fn start(&mut self, graph: &mut Graph) -> Result<(), EngineError> {
        let source = graph.source().ok_or(EngineError::NoSource)?;
        if graph.node_count() == 0 {
            return Err(EngineError::EmptyGraph);
        }

        graph.reset_scratch();
        graph.node_mut(source).distance = 0.0;

        self.frontier.clear();
        self.seq = 0;
        let seq = self.next_seq();
        self.frontier.push(Reverse(FrontierEntry {
            distance: 0.0,
            seq,
            node: source,
        }));
        self.state = EngineState::Running;
        debug!(source = %graph.node(source).label, "run started");
        Ok(())
    }

    /// Process one frontier pop.
    ///
    /// Returns [`StepOutcome::Finished`] (and transitions to `Complete`)
    /// when the frontier is empty, [`StepOutcome::Stale`] when the popped
    /// entry referred to an already-visited node, and
    /// [`StepOutcome::Visited`] after finalizing a node and relaxing its
    /// unvisited neighbors. Calling `step` outside `Running` is a no-op
    /// reported as `Finished`.
    pub fn step(&mut self, graph: &mut Graph) -> StepOutcome {
        if self.state != EngineState::Running {
            return StepOutcome::Finished;
        }

        let Some(Reverse(entry)) = self.frontier.pop() else {
            self.state = EngineState::Complete;
            debug!("run complete");
            return StepOutcome::Finished;
        };

        if graph.node(entry.node).visited {
            // Lazy deletion: a later push superseded this entry.
            return StepOutcome::Stale;
        }

        graph.node_mut(entry.node).visited = true;
        let current_dist = graph.node(entry.node).distance;
        debug!(
            node = %graph.node(entry.node).label,
            distance = current_dist,
            "visiting"
        );

        for (neighbor, weight) in graph.neighbors_of(entry.node) {
            if graph.node(neighbor).visited {
                continue;
            }
            let candidate = current_dist + weight;
            // Strict inequality: comparisons against infinity always fail,
            // so unreached nodes never update each other.
            if candidate < graph.node(neighbor).distance {
                let n = graph.node_mut(neighbor);
                n.distance = candidate;
                n.previous = Some(entry.node);
                let seq = self.next_seq();
                self.frontier.push(Reverse(FrontierEntry {
                    distance: candidate,
                    seq,
                    node: neighbor,
                }));
            }
        }

        StepOutcome::Visited(entry.node)
    }

    /// Drive the run to completion in a tight loop.
    ///
    /// Convenience for non-animated callers; the engine must have been
    /// started first.
    pub fn run_to_completion(&mut self, graph: &mut Graph) {
        while self.step(graph) != StepOutcome::Finished {}
    }

    /// Return to `Idle` from any state, clearing the frontier and every
    /// node's scratch fields.
    pub fn reset(&mut self, graph: &mut Graph) {
        graph.reset_scratch();
        self.frontier.clear();
        self.seq = 0;
        self.state = EngineState::Idle;
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        seq
    }
}
