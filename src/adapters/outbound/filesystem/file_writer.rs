use crate::ports::outbound::OutputPresenter;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing reports to files
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: String) -> anyhow::Error {
        BuildError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
        .into()
    }

    /// Rejects a missing parent directory or an existing symlink at the target
    fn validate_target(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(self.write_error(
                    "Security: Output path is a symbolic link. Writing through symbolic links is not allowed."
                        .to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_target()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))
    }
}

/// StdoutPresenter adapter for writing reports to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("build.md");

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("# Build Report").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "# Build Report");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("build.json");
        fs::write(&output_path, "old").unwrap();

        FileSystemWriter::new(output_path.clone()).present("new").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/build.json");

        let result = FileSystemWriter::new(output_path).present("content");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to write to file"));
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "keep").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemWriter::new(link).present("overwrite");

        assert!(result.unwrap_err().to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        assert!(presenter.present("").is_ok());
    }
}
