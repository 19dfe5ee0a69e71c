mod file_link;
mod project;
mod project_status;
