use cb_core::Project;
use cb_store::ProjectRepository;

use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

/// Repository over a data file inside a scratch directory. The directory is
/// removed when this is dropped.
pub struct TestStore {
    pub temp: TempDir,
    pub repo: ProjectRepository,
}

impl TestStore {
    pub fn data_file(&self) -> PathBuf {
        self.repo.storage().path().to_path_buf()
    }

    /// Write raw file contents, bypassing the repository.
    pub fn write_raw(&self, contents: &str) {
        let path = self.data_file();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    /// Seed the file with `projects` exactly as given, without normalization.
    pub fn seed(&self, projects: &[Project]) {
        let items: Vec<Value> = projects.iter().map(|p| p.to_value().unwrap()).collect();
        self.repo.storage().save(&items).unwrap();
    }

    pub fn ids(&self) -> Vec<String> {
        self.repo.list().into_iter().map(|p| p.id).collect()
    }
}

/// Creates a repository whose data file lives in a nested, not yet existing
/// directory.
pub fn create_test_store() -> TestStore {
    let temp = TempDir::new().unwrap();
    let repo = ProjectRepository::new(temp.path().join("data").join("projects.json"));
    TestStore { temp, repo }
}
