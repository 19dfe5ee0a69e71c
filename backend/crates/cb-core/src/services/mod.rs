pub mod create_project_request;
pub mod edit_outcome;
pub mod edit_project_request;
pub mod project_draft;
pub mod project_service;
pub mod project_store;
