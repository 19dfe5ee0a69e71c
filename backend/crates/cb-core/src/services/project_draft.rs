use crate::{Project, ProjectStatus};

/// User-editable fields of a project, as collected by a form or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub client: String,
    pub opponent: String,
    pub lawyer: String,
    pub stage: String,
    pub completion: i32,
    pub status: ProjectStatus,
    pub notes: String,
}

impl ProjectDraft {
    /// Pre-fill a draft with the current values of `project`.
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            client: project.client.clone(),
            opponent: project.opponent.clone(),
            lawyer: project.lawyer.clone(),
            stage: project.stage.clone(),
            completion: project.completion,
            status: project.status,
            notes: project.notes.clone(),
        }
    }

    /// Trim surrounding whitespace from every text field.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            client: self.client.trim().to_string(),
            opponent: self.opponent.trim().to_string(),
            lawyer: self.lawyer.trim().to_string(),
            stage: self.stage.trim().to_string(),
            notes: self.notes.trim().to_string(),
            ..self
        }
    }
}
