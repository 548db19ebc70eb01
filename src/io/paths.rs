//! Home directory and source catalog discovery.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{InstallerError, Result};

/// The two roots an install run works between: the user's home (destinations)
/// and the directory holding the `features/` source catalog.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    pub home: PathBuf,
    pub source_root: PathBuf,
}

impl InstallPaths {
    /// Locate both roots. The source catalog is looked for next to the
    /// running binary first, then at the nearest ancestor of the current
    /// directory containing a `features/` directory.
    pub fn discover() -> Result<Self> {
        let home = BaseDirs::new()
            .ok_or_else(|| InstallerError::Path("failed to determine home directory".to_string()))?
            .home_dir()
            .to_path_buf();
        Ok(Self {
            home,
            source_root: find_source_root()?,
        })
    }
}

fn find_source_root() -> Result<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            if dir.join("features").is_dir() {
                return Ok(dir.to_path_buf());
            }
        }
    }

    let cwd = std::env::current_dir()?;
    if let Some(dir) = find_root_from(&cwd) {
        return Ok(dir);
    }

    Err(InstallerError::Path(
        "could not locate a features/ source catalog next to the binary or above the current directory".to_string(),
    ))
}

/// Walk `start` and its ancestors for the nearest directory containing a
/// `features/` catalog.
fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join("features").is_dir())
        .map(Path::to_path_buf)
}
