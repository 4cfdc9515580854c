//! `citegraph`: an interactive shell over the citation graph engine.
//!
//! ```text
//! citegraph [--config FILE] [--load FILE]... [-e COMMAND]... [-v]
//! ```
//!
//! Files given with `--load` are merged first. Commands given with `-e` are
//! then run in order and the shell exits; without `-e` an interactive prompt
//! with history is opened.

mod repl;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use citegraph_core::EngineConfig;
use citegraph_executor::Executor;
use tracing_subscriber::EnvFilter;

use crate::repl::{Flow, Shell};

fn cli() -> ClapCommand {
    ClapCommand::new("citegraph")
        .about("Accumulate, analyze and classify citation graphs")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML engine configuration"),
        )
        .arg(
            Arg::new("load")
                .long("load")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .help("Merge a JSON batch before starting"),
        )
        .arg(
            Arg::new("exec")
                .short('e')
                .value_name("COMMAND")
                .action(ArgAction::Append)
                .help("Run a shell command and exit"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log engine events at debug level"),
        )
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let executor = Executor::new(config).context("invalid engine configuration")?;
    let shell = Shell::new(executor);

    for path in matches.get_many::<PathBuf>("load").into_iter().flatten() {
        shell.load(path, false)?;
    }

    let scripted: Vec<&String> = matches
        .get_many::<String>("exec")
        .into_iter()
        .flatten()
        .collect();
    if scripted.is_empty() {
        return repl::interactive(&shell);
    }
    for line in scripted {
        if shell.run_line(line)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
