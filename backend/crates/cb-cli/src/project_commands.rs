use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects, most recently updated first
    List {
        /// Only projects with this status (等待接手 / 正在处理 / 已结案, or waiting / in_progress / closed)
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive match on name, client, opponent or lawyer
        #[arg(long, default_value = "")]
        keyword: String,
    },
    /// Get a project by ID
    Get {
        /// Project ID
        id: String,
    },
    /// Open a new case
    Create {
        #[arg(long)]
        client: String,
        #[arg(long)]
        opponent: String,
        #[arg(long)]
        lawyer: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Edit a project. Fields not given keep their current value
    Edit(EditArgs),
    /// Delete a project
    Delete {
        /// Project ID
        id: String,
        /// Must match the project's name
        #[arg(long)]
        confirm_name: String,
    },
    /// Delete every project
    DeleteAll {
        /// Must be the literal text DELETE
        #[arg(long)]
        confirm: String,
    },
    /// Project counts per status
    Stats,
    /// Projects grouped into status columns
    Board {
        /// Card fields to show (client, opponent, stage, lawyer, status, completion)
        #[arg(long = "field")]
        fields: Vec<String>,
    },
}

#[derive(Args)]
pub struct EditArgs {
    /// Project ID
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub client: Option<String>,
    #[arg(long)]
    pub opponent: Option<String>,
    #[arg(long)]
    pub lawyer: Option<String>,
    #[arg(long)]
    pub stage: Option<String>,
    /// Percentage, 0 to 100
    #[arg(long)]
    pub completion: Option<i32>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Attachment path; repeat for several, or pass newline-separated paths
    #[arg(long = "file")]
    pub files: Vec<String>,
    /// Append --file paths to the current attachments instead of replacing them
    #[arg(long, conflicts_with = "clear_files")]
    pub keep_files: bool,
    /// Drop all current attachments
    #[arg(long)]
    pub clear_files: bool,
}
