use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tsauto::config::ColorMode;

/// tsauto - re-runs the TypeScript compiler whenever sources or tsconfig.json change
#[derive(Parser, Debug)]
#[command(name = "tsauto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON status events instead of terminal output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the workspace and compile on every relevant change
    Watch {
        /// Workspace root (discovered from the current directory by default)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Compiler program, e.g. "npx tsc"
        #[arg(long)]
        compiler: Option<String>,

        /// Also append the compile log to this file
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Launch a compiler for every trigger instead of coalescing
        #[arg(long)]
        overlap: bool,
    },

    /// Compile once, the way a watch trigger would, and exit
    Compile {
        /// Workspace root (discovered from the current directory by default)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Compiler program, e.g. "npx tsc"
        #[arg(long)]
        compiler: Option<String>,

        /// Source file to compile when the workspace has no tsconfig.json
        file: Option<PathBuf>,
    },

    /// Show the resolved tsauto configuration
    Config {
        /// Workspace root (discovered from the current directory by default)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}
