use serde::Serialize;

/// Whether an attachment's path can currently be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentState {
    Ok,
    /// Path string is empty
    Empty,
    /// Path no longer exists on disk
    Missing,
}

impl AttachmentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Empty => "empty",
            Self::Missing => "missing",
        }
    }

    pub fn is_openable(&self) -> bool {
        *self == Self::Ok
    }
}

impl std::fmt::Display for AttachmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
