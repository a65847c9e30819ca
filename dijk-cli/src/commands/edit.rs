//! Interactive graph editor REPL.
//!
//! Reads the command language line by line from stdin. `run` animates the
//! algorithm, sleeping between frontier pops so each finalized node is
//! visible before the next; every other command completes immediately.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use dijk_core::{Session, StepOutcome};
use tracing::debug;

use crate::commands::{advance_one, apply_mutation};
use crate::commands::parse::{self, Command};
use crate::output::{OutputConfig, Outputter};

/// Run the editor until `quit` or end of input.
pub async fn run(delay_ms: u64, config: OutputConfig) -> Result<()> {
    let mut session = Session::new();

    println!("{}", "dijk interactive editor".bold());
    println!("Type 'help' for commands, 'quit' to leave.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "dijk>".cyan().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        let command = match parse::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => command,
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", parse::help_text()),
            Command::Show => session.render_state().output(&config),
            Command::Report => match session.report() {
                Ok(report) => report.output(&config),
                Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
            },
            Command::Run => animate_run(&mut session, delay_ms).await,
            Command::Step => match advance_one(&mut session) {
                Ok(message) => println!("{}", message),
                Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
            },
            other => match apply_mutation(&mut session, &other) {
                Ok(message) => println!("{}", message.green()),
                Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
            },
        }
    }

    Ok(())
}

/// Animate a full run, one frontier pop per frame.
///
/// Stale pops advance silently so the animation only shows real visits.
async fn animate_run(session: &mut Session, delay_ms: u64) {
    if let Err(err) = session.run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        return;
    }

    loop {
        match session.step() {
            StepOutcome::Visited(id) => {
                let node = session.graph().node(id);
                println!(
                    "visiting {} (distance {:.1})",
                    node.label.yellow().bold(),
                    node.distance
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            StepOutcome::Stale => debug!("stale frontier entry discarded"),
            StepOutcome::Finished => break,
        }
    }

    println!(
        "{} type 'report' for the full analysis",
        "run complete;".green().bold()
    );
}
