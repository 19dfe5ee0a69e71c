use crate::{CoreError, Project, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

const UNSET: &str = "未填写";
const UNTITLED: &str = "未命名项目";

/// A project attribute that can be shown on a board card under its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Client,
    Opponent,
    Stage,
    Lawyer,
    Status,
    Completion,
}

impl CardField {
    /// Every selectable field, in display order.
    pub const ALL: [CardField; 6] = [
        Self::Client,
        Self::Opponent,
        Self::Stage,
        Self::Lawyer,
        Self::Status,
        Self::Completion,
    ];

    pub const DEFAULTS: [CardField; 3] = [Self::Client, Self::Opponent, Self::Stage];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Client => "当事人",
            Self::Opponent => "相对人",
            Self::Stage => "阶段",
            Self::Lawyer => "承办律师",
            Self::Status => "状态",
            Self::Completion => "完成度",
        }
    }

    /// Command-line spelling of the field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Opponent => "opponent",
            Self::Stage => "stage",
            Self::Lawyer => "lawyer",
            Self::Status => "status",
            Self::Completion => "completion",
        }
    }

    pub fn format(&self, project: &Project) -> String {
        let text = match self {
            Self::Client => &project.client,
            Self::Opponent => &project.opponent,
            Self::Stage => &project.stage,
            Self::Lawyer => &project.lawyer,
            Self::Status => return project.status.as_str().to_string(),
            Self::Completion => return format!("{}%", project.completion),
        };
        or_unset(text, UNSET)
    }

    /// Keep `selected` in display order with duplicates removed; fall back to
    /// the defaults when nothing is selected.
    pub fn sanitize(selected: &[CardField]) -> Vec<CardField> {
        let fields: Vec<CardField> = Self::ALL
            .into_iter()
            .filter(|field| selected.contains(field))
            .collect();

        if fields.is_empty() {
            Self::DEFAULTS.to_vec()
        } else {
            fields
        }
    }
}

/// Card heading: the project name, or a placeholder.
pub fn card_title(project: &Project) -> String {
    or_unset(&project.name, UNTITLED)
}

fn or_unset(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl FromStr for CardField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.label() == value || field.key() == value)
            .ok_or_else(|| CoreError::InvalidCardField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
