#![allow(dead_code)]

pub mod fixtures;
pub mod test_store;

pub use fixtures::create_test_project;
pub use test_store::{TestStore, create_test_store};
