use crate::ProjectDraft;

/// Full replacement values for an existing project.
#[derive(Debug, Clone, Default)]
pub struct EditProjectRequest {
    pub draft: ProjectDraft,
    /// Attachment paths in display order; replaces the current list
    pub file_paths: Vec<String>,
}
