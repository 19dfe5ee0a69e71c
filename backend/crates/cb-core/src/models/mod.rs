pub mod attachment_state;
pub mod file_link;
pub mod project;
pub mod project_status;

mod lenient;
