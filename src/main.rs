//! tsauto CLI - watch-triggered TypeScript compilation
//!
//! Usage: tsauto <COMMAND>
//!
//! Commands:
//!   watch    Watch the workspace and compile on every relevant change
//!   compile  Compile once and exit
//!   config   Show the resolved configuration

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Watch {
            root,
            compiler,
            log_file,
            overlap,
        } => commands::watch::cmd_watch(
            commands::watch::WatchArgs {
                root,
                compiler,
                log_file,
                overlap,
            },
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Compile {
            root,
            compiler,
            file,
        } => commands::compile::cmd_compile(
            root.as_deref(),
            compiler,
            file,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Config { root } => {
            commands::config::cmd_config(root.as_deref(), cli.json, cli.color)
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
