pub mod attachments;
pub mod board;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;

pub use attachments::{
    PathOpener, SystemOpener, normalize_file_paths, open_attachment, resolve_missing_paths,
};
pub use board::{
    card_field::{CardField, card_title},
    filter_projects, group_by_status,
    project_stats::ProjectStats,
    status_column::StatusColumn,
};
pub use error::{CoreError, Result};
pub use models::attachment_state::AttachmentState;
pub use models::file_link::FileLink;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use services::create_project_request::CreateProjectRequest;
pub use services::edit_outcome::EditOutcome;
pub use services::edit_project_request::EditProjectRequest;
pub use services::project_draft::ProjectDraft;
pub use services::project_service::{ProjectService, default_project_name};
pub use services::project_store::ProjectStore;

pub use error_location::ErrorLocation;

/// Storage timestamp layout: local time, second precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Name given to a project whose client and opponent are both blank.
pub const DEFAULT_PROJECT_NAME: &str = "新项目";
