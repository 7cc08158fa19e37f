use crate::shared::error::DepSlimError;
use crate::shared::Result;
use std::fs::Metadata;
use std::path::Path;

/// Maximum input file size (100 MB)
/// Lock files of real monorepos stay far below this.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates metadata obtained via `symlink_metadata` for a file we are about to read
///
/// # Security
/// The metadata must come from `symlink_metadata()` so that a symlink is seen
/// as a symlink and not as the file it points to.
///
/// # Errors
/// Returns an error if:
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds [`MAX_FILE_SIZE`]
pub fn validate_input_metadata(metadata: &Metadata, path: &Path) -> Result<()> {
    if metadata.is_symlink() {
        return Err(DepSlimError::SecurityError {
            path: path.to_path_buf(),
            reason: "Path is a symbolic link".to_string(),
            hint: "Symbolic links are not followed. Point --path at the real project directory."
                .to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DepSlimError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DepSlimError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Check that the path points at a package-lock.json / package.json".to_string(),
        }
        .into());
    }
    Ok(())
}
