use crate::types::{KindFilter, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wsrecall")]
#[command(about = "List recently opened editor workspaces", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: WSRECALL_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Overrides RUST_LOG; defaults to warn
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recent workspaces across all editor instances
    List {
        /// Keep only the first entry per path
        #[arg(long)]
        dedup: bool,

        #[arg(long)]
        kind: Option<KindFilter>,

        /// Case-insensitive match on name or path
        #[arg(long)]
        filter: Option<String>,

        #[arg(long)]
        limit: Option<usize>,

        /// Read these app-data directories instead of configured/detected editors
        #[arg(long = "app-data")]
        app_data: Vec<PathBuf>,
    },

    /// Editor instances that would be read
    Instances {
        #[arg(long = "app-data")]
        app_data: Vec<PathBuf>,
    },
}
