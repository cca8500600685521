//! Write the bundled configuration and gateway template into a directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::AppError;
use crate::ports::Filesystem;
use crate::services::assets::scaffold_assets::scaffold_files;

/// Returns the written paths. Nothing is written if any target exists and
/// `force` is not set.
pub fn execute<F: Filesystem>(
    filesystem: &F,
    dir: &Path,
    force: bool,
) -> Result<Vec<PathBuf>, AppError> {
    let files = scaffold_files();

    if !force
        && let Some(existing) =
            files.iter().map(|file| dir.join(&file.path)).find(|path| filesystem.exists(path))
    {
        return Err(AppError::AlreadyExists(existing));
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.path);
        filesystem.write(&path, file.content.as_bytes())?;
        info!(path = %path.display(), "wrote scaffold file");
        written.push(path);
    }
    Ok(written)
}
