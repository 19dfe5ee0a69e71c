pub mod error;
pub mod repositories;
pub mod storage;

pub use error::{Result, StoreError};
pub use repositories::project_repository::ProjectRepository;
pub use storage::json_storage::JsonStorage;
