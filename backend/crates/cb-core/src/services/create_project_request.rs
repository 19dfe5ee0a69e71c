/// Minimal input for opening a new case. Everything else is filled in later
/// through an edit.
#[derive(Debug, Clone, Default)]
pub struct CreateProjectRequest {
    /// Required
    pub client: String,
    /// Required
    pub opponent: String,
    /// Required
    pub lawyer: String,
    pub notes: String,
}
