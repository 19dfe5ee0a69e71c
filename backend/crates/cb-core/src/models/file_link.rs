//! FileLink entity - a local file or folder attached to a project.

use crate::models::lenient::{flag, text};
use crate::{AttachmentState, Result as CoreErrorResult};

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to one attachment.
///
/// `is_folder` and `extension` are captured when the link is created and are
/// never re-checked against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLink {
    #[serde(deserialize_with = "text")]
    pub path: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// Lowercased, with the leading dot (".pdf"); empty for folders
    #[serde(deserialize_with = "text")]
    pub extension: String,
    #[serde(deserialize_with = "flag")]
    pub is_folder: bool,
}

impl FileLink {
    /// Classify `path` against the live filesystem.
    pub fn from_path(path: &str) -> Self {
        let file_path = Path::new(path);

        let name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| path.to_string());

        let is_folder = file_path.is_dir();

        let extension = if is_folder {
            String::new()
        } else {
            file_path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .filter(|e| !e.is_empty())
                .map(|e| format!(".{e}"))
                .unwrap_or_default()
        };

        Self {
            path: path.to_string(),
            name,
            extension,
            is_folder,
        }
    }

    pub fn from_value(value: Value) -> CoreErrorResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> CoreErrorResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Current state of the path on disk.
    pub fn state(&self) -> AttachmentState {
        if self.path.is_empty() {
            AttachmentState::Empty
        } else if Path::new(&self.path).exists() {
            AttachmentState::Ok
        } else {
            AttachmentState::Missing
        }
    }

    /// Display glyph for the attachment kind.
    pub fn icon(&self) -> &'static str {
        if self.is_folder {
            return "📁";
        }
        match self.extension.as_str() {
            ".pdf" => "📕",
            ".doc" | ".docx" => "📝",
            ".xls" | ".xlsx" => "📊",
            ".ppt" | ".pptx" => "📈",
            ".zip" | ".rar" => "🗜️",
            ".png" | ".jpg" | ".jpeg" => "🖼️",
            _ => "📄",
        }
    }
}
