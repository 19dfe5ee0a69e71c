//! Create and edit workflows for projects.
//!
//! `build_project` and the `prepare_*` functions are pure; `create` and
//! `edit` run them and persist through a `ProjectStore`, which is where
//! timestamps get stamped.

use crate::{
    CoreError, CreateProjectRequest, DEFAULT_PROJECT_NAME, EditOutcome, EditProjectRequest,
    FileLink, Project, ProjectDraft, ProjectStatus, ProjectStore, Result as CoreErrorResult,
    resolve_missing_paths,
};

use log::{debug, warn};
use uuid::Uuid;

pub struct ProjectService;

impl ProjectService {
    /// Assemble a project from `draft`, classifying each path as file or
    /// folder. A fresh id is generated unless `project_id` is given.
    pub fn build_project(
        draft: ProjectDraft,
        file_paths: &[String],
        project_id: Option<String>,
    ) -> Project {
        let files = file_paths
            .iter()
            .map(|path| FileLink::from_path(path))
            .collect();

        Project {
            id: project_id.unwrap_or_else(new_project_id),
            name: draft.name,
            client: draft.client,
            opponent: draft.opponent,
            lawyer: draft.lawyer,
            stage: draft.stage,
            completion: draft.completion,
            status: draft.status,
            notes: draft.notes,
            files,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// Validate a new-case request and build the project to add.
    pub fn prepare_create(request: CreateProjectRequest) -> CoreErrorResult<Project> {
        let client = request.client.trim();
        let opponent = request.opponent.trim();
        let lawyer = request.lawyer.trim();

        if client.is_empty() {
            return Err(CoreError::validation("client is required"));
        }
        if opponent.is_empty() {
            return Err(CoreError::validation("opponent is required"));
        }
        if lawyer.is_empty() {
            return Err(CoreError::validation("lawyer is required"));
        }

        let draft = ProjectDraft {
            name: default_project_name(client, opponent),
            client: client.to_string(),
            opponent: opponent.to_string(),
            lawyer: lawyer.to_string(),
            stage: String::new(),
            completion: 0,
            status: ProjectStatus::default(),
            notes: request.notes.trim().to_string(),
        };

        Ok(Self::build_project(draft, &[], None))
    }

    /// Validate an edit of `existing` and build its replacement. The id and
    /// `created_at` carry over.
    pub fn prepare_edit(
        existing: &Project,
        draft: ProjectDraft,
        file_paths: &[String],
    ) -> CoreErrorResult<Project> {
        let draft = draft.trimmed();
        if draft.name.is_empty() {
            return Err(CoreError::validation("project name is required"));
        }
        if !(0..=100).contains(&draft.completion) {
            return Err(CoreError::validation(format!(
                "completion must be between 0 and 100, got {}",
                draft.completion
            )));
        }

        let mut project = Self::build_project(draft, file_paths, Some(existing.id.clone()));
        project.created_at = existing.created_at.clone();
        Ok(project)
    }

    /// Validate `request` and add the new project to `store`.
    pub fn create<S: ProjectStore>(
        store: &S,
        request: CreateProjectRequest,
    ) -> Result<Project, S::Error> {
        let project = Self::prepare_create(request)?;
        let stored = store.add(project)?;

        debug!("Created project {} ({})", stored.id, stored.name);
        Ok(stored)
    }

    /// Replace the project `existing_id` with `request`. Paths that do not
    /// exist are still saved and reported back in the outcome.
    pub fn edit<S: ProjectStore>(
        store: &S,
        existing_id: &str,
        request: EditProjectRequest,
    ) -> Result<EditOutcome, S::Error> {
        let existing = store
            .get(existing_id)
            .ok_or_else(|| CoreError::project_not_found(existing_id))?;

        let missing_paths = resolve_missing_paths(&request.file_paths);
        if !missing_paths.is_empty() {
            warn!(
                "Project {existing_id} references {} missing path(s): {}",
                missing_paths.len(),
                missing_paths.join(", ")
            );
        }

        let project = Self::prepare_edit(&existing, request.draft, &request.file_paths)?;
        let stored = store.update(project)?;

        Ok(EditOutcome {
            project: stored,
            missing_paths,
        })
    }
}

/// "{client} 对 {opponent}", or the placeholder name when both are blank.
pub fn default_project_name(client: &str, opponent: &str) -> String {
    let name = format!("{client} 对 {opponent}");
    let name = name.trim();
    if name.is_empty() || name == "对" {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        name.to_string()
    }
}

fn new_project_id() -> String {
    Uuid::new_v4().simple().to_string()
}
