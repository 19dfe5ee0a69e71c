//! Project repository for CRUD operations on the case list.
//!
//! Every call reloads the whole file; every mutation rewrites it. Records
//! are kept in `list()` order on disk, so the file is re-sorted by each write.

use crate::{JsonStorage, Result as StoreErrorResult, StoreError};

use cb_core::{Project, ProjectStore};

use std::path::PathBuf;

use log::{debug, info, warn};
use serde_json::Value;

pub struct ProjectRepository {
    storage: JsonStorage,
}

impl ProjectRepository {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            storage: JsonStorage::new(data_file),
        }
    }

    pub fn storage(&self) -> &JsonStorage {
        &self.storage
    }

    /// All projects, most recently touched first. Projects with equal
    /// timestamps keep their stored order. Array items that are not JSON
    /// objects are skipped; every object loads, with bad fields coerced.
    pub fn list(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self
            .storage
            .load()
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match Project::from_value(item) {
                Ok(project) => Some(project),
                Err(e) => {
                    warn!("Skipping unreadable record #{index}: {e}");
                    None
                }
            })
            .collect();

        projects.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
        projects
    }

    pub fn get(&self, project_id: &str) -> Option<Project> {
        self.list().into_iter().find(|p| p.id == project_id)
    }

    /// Normalize and insert at the front. Returns the stored project.
    pub fn add(&self, mut project: Project) -> StoreErrorResult<Project> {
        project.ensure_defaults();

        let mut projects = self.list();
        projects.insert(0, project.clone());
        self.save(&projects)?;

        debug!("Added project {} ({})", project.id, project.name);
        Ok(project)
    }

    /// Normalize and replace the first project with the same id. When no
    /// project has that id the project is inserted at the front instead.
    pub fn update(&self, mut project: Project) -> StoreErrorResult<Project> {
        project.ensure_defaults();

        let mut projects = self.list();
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => {
                *existing = project.clone();
                debug!("Updated project {}", project.id);
            }
            None => {
                projects.insert(0, project.clone());
                debug!("Project {} not stored yet, inserted", project.id);
            }
        }
        self.save(&projects)?;

        Ok(project)
    }

    /// Remove the project with `project_id`. Returns `false`, without
    /// touching the file, when there is no such project.
    pub fn delete(&self, project_id: &str) -> StoreErrorResult<bool> {
        let projects = self.list();
        let before = projects.len();

        let remaining: Vec<Project> = projects
            .into_iter()
            .filter(|p| p.id != project_id)
            .collect();

        if remaining.len() == before {
            debug!("Delete of unknown project {project_id} ignored");
            return Ok(false);
        }

        self.save(&remaining)?;
        debug!("Deleted project {project_id}");
        Ok(true)
    }

    /// Remove every record. Returns how many were stored, counting ones
    /// `list` skips.
    pub fn delete_all(&self) -> StoreErrorResult<usize> {
        let count = self.storage.load().len();
        self.storage.save(&[])?;

        info!("Deleted all {count} records");
        Ok(count)
    }

    fn save(&self, projects: &[Project]) -> StoreErrorResult<()> {
        let items = projects
            .iter()
            .map(Project::to_value)
            .collect::<Result<Vec<Value>, _>>()?;

        self.storage.save(&items)
    }
}

impl ProjectStore for ProjectRepository {
    type Error = StoreError;

    fn get(&self, project_id: &str) -> Option<Project> {
        ProjectRepository::get(self, project_id)
    }

    fn add(&self, project: Project) -> StoreErrorResult<Project> {
        ProjectRepository::add(self, project)
    }

    fn update(&self, project: Project) -> StoreErrorResult<Project> {
        ProjectRepository::update(self, project)
    }
}
