use crate::Project;

use serde::Serialize;

/// Result of a successful edit.
#[derive(Debug, Clone, Serialize)]
pub struct EditOutcome {
    pub project: Project,
    /// Attachment paths that did not exist when saved
    pub missing_paths: Vec<String>,
}
