//! cb - case board CLI
//!
//! Keeps the firm's case list in a JSON file and prints every result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Open a case
//! cb project create --client 张三 --opponent 李四 --lawyer 王律师
//!
//! # Move it along and attach documents
//! cb project edit <id> --stage 一审 --status in_progress --file ~/cases/complaint.pdf
//!
//! # Board view with custom card fields
//! cb project board --field client --field completion --pretty
//! ```

use cb_cli::{Cli, Result as CliErrorResult, logger, run};
use cb_config::Config;
use cb_core::SystemOpener;
use cb_store::ProjectRepository;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty();

    match execute(cli) {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> CliErrorResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let data_file = match cli.data_file() {
        Some(path) => path.to_path_buf(),
        None => config.data_path()?,
    };

    let repo = ProjectRepository::new(data_file);
    run(cli, &repo, &SystemOpener)
}
