//! Executes a parsed command against a repository and returns the JSON value
//! to print.

use crate::commands::Commands;
use crate::file_commands::FileCommands;
use crate::project_commands::{EditArgs, ProjectCommands};
use crate::views::{AttachmentView, BoardView};
use crate::{Cli, CliError, Result as CliErrorResult};

use cb_core::{
    CardField, CoreError, CreateProjectRequest, EditProjectRequest, PathOpener, ProjectDraft,
    ProjectService, ProjectStats, ProjectStatus, filter_projects, group_by_status,
    normalize_file_paths, open_attachment,
};
use cb_store::ProjectRepository;

use std::str::FromStr;

use serde_json::{Value, json};

/// Literal a user must type to wipe the whole project list.
pub const DELETE_ALL_CONFIRMATION: &str = "DELETE";

pub fn run(
    cli: Cli,
    repo: &ProjectRepository,
    opener: &dyn PathOpener,
) -> CliErrorResult<Value> {
    match cli.command {
        Commands::Project { action } => match action {
            ProjectCommands::List { status, keyword } => list_projects(repo, status, &keyword),
            ProjectCommands::Get { id } => {
                let project = repo
                    .get(&id)
                    .ok_or_else(|| CoreError::project_not_found(&id))?;
                Ok(serde_json::to_value(project)?)
            }
            ProjectCommands::Create {
                client,
                opponent,
                lawyer,
                notes,
            } => {
                let request = CreateProjectRequest {
                    client,
                    opponent,
                    lawyer,
                    notes,
                };
                Ok(serde_json::to_value(ProjectService::create(repo, request)?)?)
            }
            ProjectCommands::Edit(args) => edit_project(repo, args),
            ProjectCommands::Delete { id, confirm_name } => {
                delete_project(repo, &id, &confirm_name)
            }
            ProjectCommands::DeleteAll { confirm } => {
                if confirm != DELETE_ALL_CONFIRMATION {
                    return Err(CliError::confirmation(format!(
                        "type {DELETE_ALL_CONFIRMATION} to delete every project"
                    )));
                }
                let deleted = repo.delete_all()?;
                Ok(json!({ "deleted": deleted }))
            }
            ProjectCommands::Stats => {
                let stats = ProjectStats::collect(&repo.list());
                Ok(serde_json::to_value(stats)?)
            }
            ProjectCommands::Board { fields } => board(repo, &fields),
        },

        Commands::File { action } => match action {
            FileCommands::List { id } => {
                let project = repo
                    .get(&id)
                    .ok_or_else(|| CoreError::project_not_found(&id))?;
                let views: Vec<AttachmentView> = project
                    .files
                    .iter()
                    .enumerate()
                    .map(|(index, link)| AttachmentView::new(index, link))
                    .collect();
                Ok(serde_json::to_value(views)?)
            }
            FileCommands::Open { id, index } => open_file(repo, opener, &id, index),
        },
    }
}

fn list_projects(
    repo: &ProjectRepository,
    status: Option<String>,
    keyword: &str,
) -> CliErrorResult<Value> {
    let status = status
        .as_deref()
        .map(ProjectStatus::from_str)
        .transpose()?;

    let projects = repo.list();
    let matching = filter_projects(&projects, status, keyword);
    Ok(serde_json::to_value(matching)?)
}

fn edit_project(repo: &ProjectRepository, args: EditArgs) -> CliErrorResult<Value> {
    let existing = repo
        .get(&args.id)
        .ok_or_else(|| CoreError::project_not_found(&args.id))?;

    let mut draft = ProjectDraft::from_project(&existing);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(client) = args.client {
        draft.client = client;
    }
    if let Some(opponent) = args.opponent {
        draft.opponent = opponent;
    }
    if let Some(lawyer) = args.lawyer {
        draft.lawyer = lawyer;
    }
    if let Some(stage) = args.stage {
        draft.stage = stage;
    }
    if let Some(completion) = args.completion {
        draft.completion = completion;
    }
    if let Some(status) = args.status {
        draft.status = ProjectStatus::from_str(&status)?;
    }
    if let Some(notes) = args.notes {
        draft.notes = notes;
    }

    let replace = args.clear_files || (!args.files.is_empty() && !args.keep_files);
    let mut paths = if replace {
        Vec::new()
    } else {
        existing.file_paths()
    };
    paths.extend(args.files.iter().flat_map(|text| normalize_file_paths(text)));

    let request = EditProjectRequest {
        draft,
        file_paths: paths,
    };
    let outcome = ProjectService::edit(repo, &existing.id, request)?;
    Ok(serde_json::to_value(outcome)?)
}

fn delete_project(
    repo: &ProjectRepository,
    id: &str,
    confirm_name: &str,
) -> CliErrorResult<Value> {
    let project = repo
        .get(id)
        .ok_or_else(|| CoreError::project_not_found(id))?;

    if confirm_name != project.name {
        return Err(CliError::confirmation(format!(
            "name '{confirm_name}' does not match project '{}'",
            project.name
        )));
    }

    let deleted = repo.delete(id)?;
    Ok(json!({ "deleted": deleted }))
}

fn board(repo: &ProjectRepository, fields: &[String]) -> CliErrorResult<Value> {
    let selected = fields
        .iter()
        .map(|field| CardField::from_str(field))
        .collect::<Result<Vec<_>, _>>()?;
    let fields = CardField::sanitize(&selected);

    let projects = repo.list();
    let columns = group_by_status(&projects);
    Ok(serde_json::to_value(BoardView::new(&columns, &fields))?)
}

fn open_file(
    repo: &ProjectRepository,
    opener: &dyn PathOpener,
    id: &str,
    index: usize,
) -> CliErrorResult<Value> {
    let project = repo
        .get(id)
        .ok_or_else(|| CoreError::project_not_found(id))?;
    let link = project.files.get(index).ok_or_else(|| {
        CoreError::validation(format!(
            "project {id} has no attachment #{index} ({} attached)",
            project.files.len()
        ))
    })?;

    match open_attachment(link, opener) {
        Ok(()) => Ok(json!({ "opened": true, "path": link.path })),
        Err(e) if e.is_warning() => Ok(json!({
            "opened": false,
            "path": link.path,
            "state": link.state(),
        })),
        Err(e) => Err(e.into()),
    }
}
