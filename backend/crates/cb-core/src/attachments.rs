//! Attachment path handling: parsing pasted path lists, spotting paths that
//! vanished from disk, and handing paths to the OS default application.

use crate::{CoreError, FileLink, Result as CoreErrorResult};

use std::panic::Location;
use std::path::Path;
use std::process::Command;

use error_location::ErrorLocation;
use log::{info, warn};

/// Something that can open a path with whatever application the user has
/// associated with it.
pub trait PathOpener {
    fn open(&self, path: &Path) -> std::io::Result<()>;
}

/// Opens paths through the platform launcher (`open`, `explorer`, `xdg-open`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl PathOpener for SystemOpener {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        #[cfg(target_os = "macos")]
        let mut command = Command::new("open");
        #[cfg(target_os = "windows")]
        let mut command = Command::new("explorer");
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = Command::new("xdg-open");

        command.arg(path).spawn().map(|_| ())
    }
}

/// Split newline-separated path text into trimmed, non-empty entries.
pub fn normalize_file_paths(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Paths from `paths` that do not exist on disk, in input order.
pub fn resolve_missing_paths(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .filter(|path| !Path::new(path.as_str()).exists())
        .cloned()
        .collect()
}

/// Open `link` with `opener`. Empty or missing paths are refused with
/// `CoreError::AttachmentUnavailable`.
#[track_caller]
pub fn open_attachment(link: &FileLink, opener: &dyn PathOpener) -> CoreErrorResult<()> {
    let state = link.state();
    if !state.is_openable() {
        warn!("Refusing to open attachment '{}': {state}", link.path);
        return Err(CoreError::AttachmentUnavailable {
            path: link.path.clone(),
            state,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let path = Path::new(&link.path);
    opener.open(path).map_err(|source| CoreError::OpenFailed {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!("Opened attachment {}", link.path);
    Ok(())
}
