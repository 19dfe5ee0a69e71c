use crate::{Project, ProjectStatus};

use serde::Serialize;

/// Counters shown above the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: usize,
    pub waiting: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl ProjectStats {
    pub fn collect<'a, I>(projects: I) -> Self
    where
        I: IntoIterator<Item = &'a Project>,
    {
        projects
            .into_iter()
            .fold(Self::default(), |mut stats, project| {
                stats.total += 1;
                match project.status {
                    ProjectStatus::Waiting => stats.waiting += 1,
                    ProjectStatus::InProgress => stats.in_progress += 1,
                    ProjectStatus::Closed => stats.closed += 1,
                }
                stats
            })
    }

    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Waiting => self.waiting,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Closed => self.closed,
        }
    }
}
