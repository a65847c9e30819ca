//! Script mode: execute the command language without animation.
//!
//! Reads a script from a file (or stdin when no path is given), applies
//! every command, and prints the analysis report once the run completes.
//! Errors carry the offending line number and abort the script; an editor
//! session can recover interactively, a script cannot.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dijk_core::{EngineState, Session};
use tracing::debug;

use crate::commands::{advance_one, apply_mutation};
use crate::commands::parse::{self, Command};
use crate::output::{OutputConfig, Outputter};

/// Execute a script and print the final report.
pub fn run(script: Option<&Path>, config: OutputConfig) -> Result<()> {
    let content = match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };

    let mut session = Session::new();
    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let command = match parse::parse(raw) {
            Ok(None) => continue,
            Ok(Some(command)) => command,
            Err(err) => bail!("line {}: {}", line_no, err),
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", parse::help_text()),
            Command::Show => session.render_state().output(&config),
            Command::Report => {
                let report = session
                    .report()
                    .with_context(|| format!("line {}: report", line_no))?;
                report.output(&config);
            }
            Command::Run => {
                session
                    .run()
                    .with_context(|| format!("line {}: run", line_no))?;
                session.run_to_completion();
            }
            Command::Step => {
                let message = advance_one(&mut session)
                    .with_context(|| format!("line {}: step", line_no))?;
                debug!(line_no, %message, "step");
            }
            other => {
                let message = apply_mutation(&mut session, &other)
                    .with_context(|| format!("line {}", line_no))?;
                debug!(line_no, %message, "applied");
            }
        }
    }

    // A script that ran the algorithm gets its report printed even without
    // an explicit `report` line.
    if session.engine_state() == EngineState::Complete {
        session.report()?.output(&config);
    } else {
        bail!("script finished without completing a run (missing 'run'?)");
    }

    Ok(())
}
