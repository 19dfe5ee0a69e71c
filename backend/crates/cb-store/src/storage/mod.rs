pub mod json_storage;
