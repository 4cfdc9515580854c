//! Line parsing and the interactive loop.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use citegraph_core::MergeBatch;
use citegraph_engine::{MetricsFlags, MetricsRequest};
use citegraph_executor::{Command, Executor};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "citegraph> ";
const HISTORY_FILE: &str = ".citegraph_history";

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Execute(Command),
    Load { path: PathBuf, strict: bool },
    Export { path: PathBuf, csv: bool },
    Help,
    Quit,
}

fn shell_commands() -> ClapCommand {
    ClapCommand::new("citegraph")
        .multicall(true)
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .subcommand(
            ClapCommand::new("load")
                .about("Merge a JSON batch of vertices and edges")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Reject edges to unknown vertices"),
                ),
        )
        .subcommand(ClapCommand::new("stats").about("Vertex and edge counts and density"))
        .subcommand(
            ClapCommand::new("metrics")
                .about("Degree centrality plus the selected metrics")
                .arg(Arg::new("pagerank").long("pagerank").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("betweenness")
                        .long("betweenness")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("closeness").long("closeness").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("damping")
                        .long("damping")
                        .value_name("X")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .value_name("N")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(ClapCommand::new("classify").about("Run the self-citation classifier"))
        .subcommand(
            ClapCommand::new("vertex")
                .about("Show one vertex with its degrees")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            ClapCommand::new("list")
                .about("List vertices in insertion order")
                .arg(Arg::new("limit").value_parser(value_parser!(usize)))
                .arg(Arg::new("offset").value_parser(value_parser!(usize))),
        )
        .subcommand(
            ClapCommand::new("export")
                .about("Write the graph to a file as JSON or CSV")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("csv")
                        .long("csv")
                        .action(ArgAction::SetTrue)
                        .help("Write the edge list as CSV"),
                ),
        )
        .subcommand(ClapCommand::new("clear").about("Remove every vertex and edge"))
        .subcommand(ClapCommand::new("config").about("Show the engine configuration"))
        .subcommand(ClapCommand::new("help").about("Show this help"))
        .subcommand(
            ClapCommand::new("quit")
                .alias("exit")
                .about("Leave the shell"),
        )
}

fn metrics_request(m: &ArgMatches) -> MetricsRequest {
    let flags = MetricsFlags {
        pagerank: m.get_flag("pagerank"),
        betweenness: m.get_flag("betweenness"),
        closeness: m.get_flag("closeness"),
    };
    let flags = if flags == MetricsFlags::none() {
        MetricsFlags::default()
    } else {
        flags
    };
    MetricsRequest {
        flags,
        damping: m.get_one::<f64>("damping").copied(),
        max_iterations: m.get_one::<usize>("iterations").copied(),
    }
}

/// Parse one line. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<Action>> {
    let words = shlex::split(line).ok_or_else(|| anyhow!("unbalanced quotes"))?;
    if words.is_empty() {
        return Ok(None);
    }
    let matches = shell_commands().try_get_matches_from(words)?;
    let action = match matches.subcommand() {
        Some(("load", m)) => Action::Load {
            path: path_arg(m)?,
            strict: m.get_flag("strict"),
        },
        Some(("stats", _)) => Action::Execute(Command::ComputeStatistics),
        Some(("metrics", m)) => Action::Execute(Command::ComputeMetrics {
            request: metrics_request(m),
        }),
        Some(("classify", _)) => Action::Execute(Command::ClassifyCitations),
        Some(("vertex", m)) => Action::Execute(Command::GetVertex {
            id: m
                .get_one::<String>("id")
                .cloned()
                .ok_or_else(|| anyhow!("missing vertex id"))?,
        }),
        Some(("list", m)) => Action::Execute(Command::ListVertices {
            limit: m.get_one::<usize>("limit").copied(),
            offset: m.get_one::<usize>("offset").copied(),
        }),
        Some(("export", m)) => Action::Export {
            path: path_arg(m)?,
            csv: m.get_flag("csv"),
        },
        Some(("clear", _)) => Action::Execute(Command::Clear),
        Some(("config", _)) => Action::Execute(Command::ConfigGet),
        Some(("help", _)) => Action::Help,
        Some(("quit", _)) => Action::Quit,
        _ => return Err(anyhow!("unknown command")),
    };
    Ok(Some(action))
}

fn path_arg(m: &ArgMatches) -> Result<PathBuf> {
    m.get_one::<PathBuf>("file")
        .cloned()
        .ok_or_else(|| anyhow!("missing file"))
}

/// An executor plus the shell's file operations.
pub struct Shell {
    executor: Executor,
}

impl Shell {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Read a JSON batch from `path` and merge it, printing the stats.
    pub fn load(&self, path: &Path, strict: bool) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let batch: MergeBatch = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a merge batch", path.display()))?;
        tracing::debug!(
            target: "citegraph::cli",
            path = %path.display(),
            vertices = batch.vertices.len(),
            edges = batch.edges.len(),
            "loading batch"
        );
        self.execute(Command::Merge { batch, strict })
    }

    /// Write the current graph to `path`.
    pub fn export(&self, path: &Path, csv: bool) -> Result<()> {
        let snapshot = self.executor.store().snapshot();
        let body = if csv {
            snapshot.to_csv()
        } else {
            serde_json::to_string_pretty(&snapshot.to_view())?
        };
        std::fs::write(path, body)
            .with_context(|| format!("failed to write {}", path.display()))?;
        print_json(&serde_json::json!({
            "exported": path.display().to_string(),
            "format": if csv { "csv" } else { "json" },
            "vertices": snapshot.vertex_count(),
            "edges": snapshot.edge_count(),
        }))
    }

    fn execute(&self, cmd: Command) -> Result<()> {
        let output = self.executor.execute(cmd)?;
        print_json(&output)
    }

    /// Parse and run one line.
    pub fn run_line(&self, line: &str) -> Result<Flow> {
        let action = match parse_line(line)? {
            Some(action) => action,
            None => return Ok(Flow::Continue),
        };
        match action {
            Action::Execute(cmd) => self.execute(cmd)?,
            Action::Load { path, strict } => self.load(&path, strict)?,
            Action::Export { path, csv } => self.export(&path, csv)?,
            Action::Help => println!("{}", shell_commands().render_long_help()),
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE))
}

/// Read lines until `quit` or end of input. Errors from a line are printed
/// and the loop continues.
pub fn interactive(shell: &Shell) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let history = history_path();
    if let Some(path) = &history {
        // Missing on first run.
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match shell.run_line(line) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => eprintln!("error: {:#}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            tracing::warn!(target: "citegraph::cli", error = %e, "failed to save history");
        }
    }
    Ok(())
}
