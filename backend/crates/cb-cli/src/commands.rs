use crate::{file_commands::FileCommands, project_commands::ProjectCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Attachment operations
    File {
        #[command(subcommand)]
        action: FileCommands,
    },
}
