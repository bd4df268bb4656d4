use crate::shared::error::BuildError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a catalog or config file (1 MB)
pub const MAX_DATA_FILE_SIZE: u64 = 1024 * 1024;

/// Reads a small data file after checking it is a regular file, not a
/// symbolic link, and no larger than `max_size` bytes.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Used in error messages (e.g. "catalog file")
/// * `max_size` - Upper bound on the file size in bytes
///
/// # Errors
/// Returns `BuildError::FileReadError` if any check fails or the read itself fails
pub fn read_guarded_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let read_error = |details: String| BuildError::FileReadError {
        path: path.to_path_buf(),
        details,
    };

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| read_error(format!("Failed to read {} metadata: {}", file_description, e)))?;

    if metadata.is_symlink() {
        return Err(read_error(format!(
            "Security: {} is a symbolic link. Symbolic links are not allowed.",
            file_description
        ))
        .into());
    }

    if !metadata.is_file() {
        return Err(read_error(format!("{} is not a regular file", file_description)).into());
    }

    if metadata.len() > max_size {
        return Err(read_error(format!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            file_description,
            metadata.len(),
            max_size
        ))
        .into());
    }

    fs::read_to_string(path)
        .map_err(|e| read_error(format!("Failed to read {}: {}", file_description, e)).into())
}
