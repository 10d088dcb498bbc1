use crate::shared::error::DepGraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a repository index read from disk (512 MiB).
///
/// Uncompressed `Packages` files of large archives are a few hundred MiB.
pub const MAX_METADATA_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Maximum size of a configuration file (1 MiB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Checks that `path` is a regular file and not a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Returns
/// The file size in bytes
pub fn inspect_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DepGraphError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(DepGraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point to the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Rejects files larger than `max_size` bytes
pub fn ensure_size_within(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DepGraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Use a smaller repository index (e.g. a single component and architecture)"
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a file as raw bytes after the regular-file and size checks
pub fn read_checked(path: &Path, file_description: &str, max_size: u64) -> Result<Vec<u8>> {
    let size = inspect_regular_file(path, file_description)?;
    ensure_size_within(size, path, max_size)?;

    fs::read(path).map_err(|e| {
        DepGraphError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
