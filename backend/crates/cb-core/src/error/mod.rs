use crate::AttachmentState;

use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid card field: {value} {location}")]
    InvalidCardField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Project not found: {id} {location}")]
    ProjectNotFound { id: String, location: ErrorLocation },

    #[error("Attachment cannot be opened ({state}): '{path}' {location}")]
    AttachmentUnavailable {
        path: String,
        state: AttachmentState,
        location: ErrorLocation,
    },

    #[error("Failed to open {path}: {source} {location}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed record: {source} {location}")]
    MalformedRecord {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ProjectNotFound error at caller location.
    #[track_caller]
    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::ProjectNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the error is a refusal the user can act on rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::AttachmentUnavailable { .. })
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedRecord {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
