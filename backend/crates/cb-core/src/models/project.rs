//! Project entity - one legal case or matter.

use crate::models::lenient::{completion, file_links, text};
use crate::{FileLink, ProjectStatus, Result as CoreErrorResult, TIMESTAMP_FORMAT};

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A case record. Every field falls back to its default when missing from
/// the persisted JSON and is coerced when wrongly typed, so any JSON object
/// loads as a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Opaque unique identifier, assigned once
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// Party the firm represents
    #[serde(deserialize_with = "text")]
    pub client: String,
    /// Opposing party
    #[serde(deserialize_with = "text")]
    pub opponent: String,
    /// Lawyer in charge
    #[serde(deserialize_with = "text")]
    pub lawyer: String,
    /// Free-text procedural stage (e.g. "一审", "执行")
    #[serde(deserialize_with = "text")]
    pub stage: String,
    /// Percentage 0-100; range is the caller's responsibility
    #[serde(deserialize_with = "completion")]
    pub completion: i32,
    pub status: ProjectStatus,
    #[serde(deserialize_with = "text")]
    pub notes: String,
    #[serde(deserialize_with = "file_links")]
    pub files: Vec<FileLink>,
    #[serde(deserialize_with = "text")]
    pub created_at: String,
    #[serde(deserialize_with = "text")]
    pub updated_at: String,
}

impl Project {
    /// Stamp timestamps before a write: `created_at` only if unset,
    /// `updated_at` always. Status is already normalized by deserialization.
    pub fn ensure_defaults(&mut self) {
        self.ensure_defaults_at(&timestamp_now());
    }

    pub fn ensure_defaults_at(&mut self, now: &str) {
        if self.created_at.is_empty() {
            self.created_at = now.to_string();
        }
        self.updated_at = now.to_string();
    }

    /// Ordering key: last update, or creation when never updated.
    pub fn sort_key(&self) -> &str {
        if self.updated_at.is_empty() {
            &self.created_at
        } else {
            &self.updated_at
        }
    }

    pub fn from_value(value: Value) -> CoreErrorResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> CoreErrorResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Paths of all attachments, in order.
    pub fn file_paths(&self) -> Vec<String> {
        self.files.iter().map(|file| file.path.clone()).collect()
    }
}

/// Current local time in the storage timestamp layout.
pub(crate) fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
