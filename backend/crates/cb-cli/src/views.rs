//! JSON shapes printed by commands that do not simply print stored projects.

use cb_core::{
    AttachmentState, CardField, FileLink, Project, ProjectStatus, StatusColumn, card_title,
};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AttachmentView {
    pub index: usize,
    pub icon: &'static str,
    pub name: String,
    pub path: String,
    pub is_folder: bool,
    pub state: AttachmentState,
}

impl AttachmentView {
    pub fn new(index: usize, link: &FileLink) -> Self {
        Self {
            index,
            icon: link.icon(),
            name: link.name.clone(),
            path: link.path.clone(),
            is_folder: link.is_folder,
            state: link.state(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardView {
    pub fields: Vec<FieldView>,
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ColumnView {
    pub status: ProjectStatus,
    pub count: usize,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Serialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    /// Formatted values, one per selected field and in the same order
    pub values: Vec<String>,
}

impl BoardView {
    pub fn new(columns: &[StatusColumn<'_>], fields: &[CardField]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|field| FieldView {
                    key: field.key(),
                    label: field.label(),
                })
                .collect(),
            columns: columns
                .iter()
                .map(|column| ColumnView {
                    status: column.status,
                    count: column.len(),
                    cards: column
                        .projects
                        .iter()
                        .map(|project| CardView::new(project, fields))
                        .collect(),
                })
                .collect(),
        }
    }
}

impl CardView {
    fn new(project: &Project, fields: &[CardField]) -> Self {
        Self {
            id: project.id.clone(),
            title: card_title(project),
            values: fields.iter().map(|field| field.format(project)).collect(),
        }
    }
}
