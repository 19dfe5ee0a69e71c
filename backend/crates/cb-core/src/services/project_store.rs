use crate::{CoreError, Project};

/// Persistence used by the create and edit workflows. Implemented by the
/// JSON-file repository; tests use an in-memory store.
pub trait ProjectStore {
    type Error: From<CoreError>;

    fn get(&self, project_id: &str) -> Option<Project>;

    /// Stamp and insert a new project, returning it as stored.
    fn add(&self, project: Project) -> Result<Project, Self::Error>;

    /// Stamp and replace the project with the same id, returning it as stored.
    fn update(&self, project: Project) -> Result<Project, Self::Error>;
}
