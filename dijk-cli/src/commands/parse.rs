//! Parser for the dijk command language.
//!
//! The same line-oriented language drives both the interactive editor and
//! script mode. Blank lines and `#` comments are ignored. Node references
//! are labels and are matched case-insensitively downstream.

/// A single parsed editor command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `node <x> <y>` - add a node at canvas coordinates.
    AddNode { x: f64, y: f64 },
    /// `edge <from> <to> <weight>` - connect two nodes.
    AddEdge {
        from: String,
        to: String,
        weight: f64,
    },
    /// `source <node>` - choose the starting node.
    SetSource { node: String },
    /// `move <node> <x> <y>` - reposition a node.
    MoveNode { node: String, x: f64, y: f64 },
    /// `rename <node> <label>` - relabel a node.
    Rename { node: String, new_label: String },
    /// `directed on|off` - flip every edge's directedness.
    Directed { on: bool },
    /// `run` - execute the algorithm from the source.
    Run,
    /// `step` - advance a started run by one frontier pop.
    Step,
    /// `undo` - restore the most recent snapshot.
    Undo,
    /// `reset` - clear algorithm results, keep the graph.
    Reset,
    /// `clear` - wipe the whole graph (undoable).
    Clear,
    /// `show` - print the current graph.
    Show,
    /// `report` - print the analysis report.
    Report,
    /// `help` - list commands.
    Help,
    /// `quit` - leave the editor.
    Quit,
}

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines and comments, `Err` with a
/// human-readable message for malformed input.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let command = match parts[0].to_lowercase().as_str() {
        "node" | "n" => {
            let (x, y) = (coord(&parts, 1, "x")?, coord(&parts, 2, "y")?);
            expect_len(&parts, 3)?;
            Command::AddNode { x, y }
        }
        "edge" | "e" => {
            expect_len(&parts, 4)?;
            Command::AddEdge {
                from: parts[1].to_string(),
                to: parts[2].to_string(),
                weight: number(parts[3], "weight")?,
            }
        }
        "source" | "src" => {
            expect_len(&parts, 2)?;
            Command::SetSource {
                node: parts[1].to_string(),
            }
        }
        "move" | "mv" => {
            expect_len(&parts, 4)?;
            Command::MoveNode {
                node: parts[1].to_string(),
                x: number(parts[2], "x")?,
                y: number(parts[3], "y")?,
            }
        }
        "rename" => {
            expect_len(&parts, 3)?;
            Command::Rename {
                node: parts[1].to_string(),
                new_label: parts[2].to_string(),
            }
        }
        "directed" => {
            expect_len(&parts, 2)?;
            let on = match parts[1].to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => return Err(format!("expected 'on' or 'off', got '{}'", other)),
            };
            Command::Directed { on }
        }
        "run" => Command::Run,
        "step" => Command::Step,
        "undo" => Command::Undo,
        "reset" => Command::Reset,
        "clear" => Command::Clear,
        "show" | "ls" => Command::Show,
        "report" => Command::Report,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };

    // Bare keywords take no arguments
    if matches!(
        command,
        Command::Run
            | Command::Step
            | Command::Undo
            | Command::Reset
            | Command::Clear
            | Command::Show
            | Command::Report
            | Command::Help
            | Command::Quit
    ) {
        expect_len(&parts, 1)?;
    }

    Ok(Some(command))
}

fn expect_len(parts: &[&str], expected: usize) -> Result<(), String> {
    if parts.len() != expected {
        return Err(format!(
            "'{}' takes {} argument(s), got {}",
            parts[0],
            expected - 1,
            parts.len() - 1
        ));
    }
    Ok(())
}

fn coord(parts: &[&str], index: usize, name: &str) -> Result<f64, String> {
    let raw = parts
        .get(index)
        .ok_or_else(|| format!("missing {} coordinate", name))?;
    number(raw, name)
}

fn number(raw: &str, name: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("invalid {} '{}': expected a number", name, raw))
}

/// One-screen command reference for `help`.
pub fn help_text() -> &'static str {
    "\
Commands:
  node <x> <y>             add a node at the given position
  edge <from> <to> <w>     connect two nodes with weight w (> 0)
  source <node>            choose the starting node
  move <node> <x> <y>      reposition a node
  rename <node> <label>    relabel a node (up to 3 characters)
  directed on|off          make every edge directed or undirected
  run                      run the algorithm from the source
  step                     advance a started run by one step
  undo                     undo the last change (up to 20)
  reset                    clear results, keep the graph
  clear                    wipe the whole graph (undoable)
  show                     print nodes and edges
  report                   print the analysis report
  help                     this message
  quit                     leave the editor"
}
