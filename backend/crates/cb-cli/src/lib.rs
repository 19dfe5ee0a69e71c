//! cb-cli library
//!
//! Command parsing and execution, exported so the binary and the integration
//! tests share one code path.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod file_commands;
pub mod logger;
pub(crate) mod project_commands;
pub(crate) mod runner;
pub(crate) mod views;


pub use cli::Cli;
pub use error::{CliError, Result};
pub use runner::{DELETE_ALL_CONFIRMATION, run};
