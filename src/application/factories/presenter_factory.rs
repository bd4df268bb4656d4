use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the formatted report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// File output when a path is given, stdout otherwise
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_presenter_type_from_output() {
        assert_eq!(PresenterType::from_output(None), PresenterType::Stdout);
        let path = PathBuf::from("build.md");
        assert_eq!(
            PresenterType::from_output(Some(path.clone())),
            PresenterType::File(path)
        );
    }

    #[test]
    fn test_file_presenter_writes_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.json");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("{\"total_cost\": 0}").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "{\"total_cost\": 0}");
    }
}
