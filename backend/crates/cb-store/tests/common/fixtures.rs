use cb_core::{FileLink, Project, ProjectStatus};

/// Creates a test Project with sensible defaults and no timestamps
pub fn create_test_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Case {id}"),
        client: "Acme Ltd".to_string(),
        opponent: "Beta LLC".to_string(),
        lawyer: "Wang".to_string(),
        stage: "一审".to_string(),
        completion: 20,
        status: ProjectStatus::InProgress,
        notes: "test notes".to_string(),
        files: vec![FileLink {
            path: format!("/cases/{id}/complaint.pdf"),
            name: "complaint.pdf".to_string(),
            extension: ".pdf".to_string(),
            is_folder: false,
        }],
        created_at: String::new(),
        updated_at: String::new(),
    }
}

/// Creates a test Project carrying fixed timestamps
pub fn create_stamped_project(id: &str, created_at: &str, updated_at: &str) -> Project {
    Project {
        created_at: created_at.to_string(),
        updated_at: updated_at.to_string(),
        ..create_test_project(id)
    }
}
