use crate::commands::Commands;

use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(name = "cb")]
#[command(about = "Case board: track legal cases and their attached files")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Project data file (defaults to the configured storage path)
    #[arg(long, global = true)]
    pub(crate) data_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
