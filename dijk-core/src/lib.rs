//! dijk-core - Graph store and incremental Dijkstra engine.
//!
//! This crate is the algorithmic core of dijk, an interactive editor and
//! step-animator for Dijkstra's single-source shortest-path algorithm.
//! It owns the mutable graph model, the snapshot-based undo history, the
//! step-wise engine with its lazy-deletion priority frontier, and path/
//! report reconstruction. It performs no I/O and assumes no scheduler;
//! front ends drive it one step at a time.
//!
//! # Architecture
//!
//! ```text
//! commands -> Session -> Graph (store) + History (undo)
//!                     -> Engine (step-wise Dijkstra)
//!                     -> Report / RenderState (views)
//! ```
//!
//! # Usage
//!
//! ```
//! use dijk_core::Session;
//!
//! let mut session = Session::new();
//! let a = session.add_node(0.0, 0.0)?;
//! let b = session.add_node(100.0, 0.0)?;
//! session.add_edge(a, b, 2.5)?;
//! session.set_source(a);
//!
//! session.run()?;
//! session.run_to_completion();
//!
//! let report = session.report()?;
//! assert_eq!(report.destinations[0].distance, Some(2.5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod history;
pub mod path;
pub mod report;
pub mod session;

pub use engine::{Engine, EngineState, StepOutcome};
pub use error::{EngineError, GraphError, GraphResult, ReportError};
pub use graph::{Edge, Graph, Node, NodeId, MAX_NODES};
pub use history::{History, MAX_HISTORY};
pub use path::{cost_breakdown, path_labels, path_to, PathStep};
pub use report::{Destination, Report, Stats};
pub use session::{EdgeOutcome, EdgeView, NodeView, RenderState, Session};
