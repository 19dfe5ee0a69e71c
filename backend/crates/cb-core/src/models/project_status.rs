use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Workflow state of a case, in board column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum ProjectStatus {
    /// Case is registered but nobody has picked it up yet
    #[default]
    #[serde(rename = "等待接手")]
    Waiting,
    /// Case is being worked on
    #[serde(rename = "正在处理")]
    InProgress,
    /// Case is closed
    #[serde(rename = "已结案")]
    Closed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Waiting, Self::InProgress, Self::Closed];

    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "等待接手",
            Self::InProgress => "正在处理",
            Self::Closed => "已结案",
        }
    }

    /// Exact match on a persisted label. No trimming, no aliases.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }

    /// Read a persisted value, substituting the default for anything that is
    /// not one of the labels, including non-string values.
    pub fn from_value_or_default(value: &Value) -> Self {
        let status = match value {
            Value::Null => return Self::default(),
            Value::String(label) => Self::from_label(label),
            _ => None,
        };

        status.unwrap_or_else(|| {
            warn!(
                "Unknown project status {value}, using '{}'",
                Self::default().as_str()
            );
            Self::default()
        })
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    /// Command-line parsing: accepts the labels or the snake_case aliases,
    /// ignoring surrounding whitespace. Stored values go through `from_label`.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim() {
            "等待接手" | "waiting" => Ok(Self::Waiting),
            "正在处理" | "in_progress" => Ok(Self::InProgress),
            "已结案" | "closed" => Ok(Self::Closed),
            _ => Err(CoreError::InvalidProjectStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value_or_default(&raw))
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
