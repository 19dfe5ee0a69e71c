//! Read-side helpers for the case board: filtering, per-status columns,
//! counters and card formatting.

pub mod card_field;
pub mod project_stats;
pub mod status_column;

use crate::{Project, ProjectStatus, StatusColumn};

/// Projects matching `status` (all when `None`) and containing `keyword`,
/// case-insensitively, in the name, client, opponent or lawyer.
/// Input order is preserved.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    status: Option<ProjectStatus>,
    keyword: &str,
) -> Vec<&'a Project> {
    let needle = keyword.trim().to_lowercase();

    projects
        .iter()
        .filter(|project| status.is_none_or(|wanted| project.status == wanted))
        .filter(|project| {
            needle.is_empty()
                || [
                    &project.name,
                    &project.client,
                    &project.opponent,
                    &project.lawyer,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// One column per status, in status order, each keeping the input order.
pub fn group_by_status<'a, I>(projects: I) -> Vec<StatusColumn<'a>>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut columns: Vec<StatusColumn<'a>> = ProjectStatus::ALL
        .iter()
        .map(|status| StatusColumn::new(*status))
        .collect();

    for project in projects {
        if let Some(column) = columns.iter_mut().find(|c| c.status == project.status) {
            column.projects.push(project);
        }
    }

    columns
}
