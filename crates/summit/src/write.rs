use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{artifact::Artifact, errors::IoError};

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), IoError> {
    fs::create_dir_all(dir).map_err(|source| IoError::CreateDirFailed {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `contents` to `path`, creating the parent directory if needed and overwriting any existing file.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    fs::write(path, contents).map_err(|source| IoError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(target: "write", "Wrote {} ({} bytes)", path.display(), contents.len());

    Ok(())
}

/// Writes every artifact into `output_dir`, returning the written paths in order.
///
/// Writing stops at the first failure. Artifacts written before it are left on disk, nothing is rolled back.
pub fn write_artifacts(artifacts: &[Artifact], output_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    ensure_dir(output_dir)?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = output_dir.join(&artifact.name);
        write_file(&path, &artifact.contents)?;

        info!(target: "write", "Created {}", path.display());
        written.push(path);
    }

    Ok(written)
}
