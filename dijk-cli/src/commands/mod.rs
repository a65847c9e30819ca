//! Command implementations for the dijk CLI.
//!
//! `parse` defines the shared command language; `edit` hosts the
//! interactive REPL and `solve` the non-animated script runner. Both
//! modes funnel graph mutations through [`apply_mutation`] so editor
//! and script behavior cannot drift apart.

pub mod edit;
pub mod parse;
pub mod solve;

use anyhow::{bail, Result};
use dijk_core::{EdgeOutcome, EngineState, Session, StepOutcome};

use self::parse::Command;

/// Apply a graph-mutating command and describe what happened.
///
/// The run/show/report group is mode-specific and stays with the callers.
pub(crate) fn apply_mutation(session: &mut Session, command: &Command) -> Result<String> {
    match command {
        Command::AddNode { x, y } => {
            let id = session.add_node(*x, *y)?;
            Ok(format!("added node {}", session.graph().node(id).label))
        }
        Command::AddEdge { from, to, weight } => {
            let from_id = session.node_by_label(from)?;
            let to_id = session.node_by_label(to)?;
            match session.add_edge(from_id, to_id, *weight)? {
                EdgeOutcome::Created => Ok(format!(
                    "added edge {} {} {} (weight {})",
                    session.graph().node(from_id).label,
                    if session.graph().is_directed() {
                        "->"
                    } else {
                        "--"
                    },
                    session.graph().node(to_id).label,
                    weight,
                )),
                EdgeOutcome::SelfLoop => Ok("self-loop ignored".to_string()),
                EdgeOutcome::NotArmed => bail!("no edge start armed"),
            }
        }
        Command::SetSource { node } => {
            let id = session.node_by_label(node)?;
            session.set_source(id);
            Ok(format!("source set to {}", session.graph().node(id).label))
        }
        Command::MoveNode { node, x, y } => {
            let id = session.node_by_label(node)?;
            session.move_node(id, *x, *y);
            Ok(format!(
                "moved {} to ({}, {})",
                session.graph().node(id).label,
                x,
                y
            ))
        }
        Command::Rename { node, new_label } => {
            let id = session.node_by_label(node)?;
            session.rename_node(id, new_label)?;
            Ok(format!("renamed to {}", session.graph().node(id).label))
        }
        Command::Directed { on } => {
            session.set_directedness(*on);
            Ok(format!(
                "all edges are now {}",
                if *on { "directed" } else { "undirected" }
            ))
        }
        Command::Undo => {
            if session.undo() {
                Ok("undid last change".to_string())
            } else {
                Ok("nothing to undo".to_string())
            }
        }
        Command::Reset => {
            session.reset();
            Ok("algorithm reset - ready to run again".to_string())
        }
        Command::Clear => {
            session.clear();
            Ok("graph cleared".to_string())
        }
        other => bail!("internal: '{:?}' is not a mutation command", other),
    }
}

/// Advance a run by exactly one frontier pop, starting one if needed.
pub(crate) fn advance_one(session: &mut Session) -> Result<String> {
    if session.engine_state() == EngineState::Idle {
        session.run()?;
    }
    Ok(match session.step() {
        StepOutcome::Visited(id) => {
            let node = session.graph().node(id);
            format!("visiting {} (distance {:.1})", node.label, node.distance)
        }
        StepOutcome::Stale => "discarded a stale frontier entry".to_string(),
        StepOutcome::Finished => "run complete".to_string(),
    })
}
