use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tuido", about = concat!("[ ] tuido v", env!("CARGO_PKG_VERSION"), " - tasks hiding in your notes"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to scan (default: current directory)
    pub root: Option<PathBuf>,

    /// File suffix to scan, repeatable (replaces the configured list)
    #[arg(long = "ext", value_name = "SUFFIX", global = true)]
    pub extensions: Vec<String>,

    /// Config file to use instead of <ROOT>/.tuido.toml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the tag color offset
    #[arg(long, value_name = "N", global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tasks that the TUI would show
    List(ListArgs),
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Directory to scan (default: current directory)
    pub root: Option<PathBuf>,
    /// Show resolved tasks (checked and obsolete) instead of active ones
    #[arg(long)]
    pub resolved: bool,
    /// Tag filter, e.g. "#ui #bug"
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
