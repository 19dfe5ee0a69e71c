use clap::Subcommand;

#[derive(Subcommand)]
pub enum FileCommands {
    /// List a project's attachments with their current state
    List {
        /// Project ID
        id: String,
    },
    /// Open an attachment with the system default application
    Open {
        /// Project ID
        id: String,
        /// Attachment position, as shown by `file list`
        index: usize,
    },
}
