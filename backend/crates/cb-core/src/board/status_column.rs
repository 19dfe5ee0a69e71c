use crate::{Project, ProjectStatus};

/// Projects sharing one status, as shown in a single board column.
#[derive(Debug)]
pub struct StatusColumn<'a> {
    pub status: ProjectStatus,
    pub projects: Vec<&'a Project>,
}

impl<'a> StatusColumn<'a> {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            projects: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
