use super::catalog_file::{parse_catalog_file, CatalogFileData};
use crate::build_estimation::builtin;
use crate::build_estimation::domain::{Catalog, WorkloadSet};
use crate::ports::outbound::CatalogSource;
use crate::shared::security::{read_guarded_file, MAX_DATA_FILE_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// FileCatalogSource adapter reading a TOML catalog file
///
/// The file is read and parsed on the first load; the catalog and the
/// workloads of every later call come from that same parse. A file that
/// defines no `[[workload]]` entries is paired with the built-in workload
/// profiles.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    loaded: OnceLock<LoadedCatalog>,
}

#[derive(Debug, Clone)]
struct LoadedCatalog {
    catalog: Arc<Catalog>,
    workloads: Arc<WorkloadSet>,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn loaded(&self) -> Result<&LoadedCatalog> {
        if let Some(loaded) = self.loaded.get() {
            return Ok(loaded);
        }

        let content = read_guarded_file(&self.path, "catalog file", MAX_DATA_FILE_SIZE)?;
        let CatalogFileData { catalog, workloads } = parse_catalog_file(&content, &self.path)?;
        let loaded = LoadedCatalog {
            catalog: Arc::new(catalog),
            workloads: workloads.map_or_else(builtin::shared_workloads, Arc::new),
        };

        Ok(self.loaded.get_or_init(|| loaded))
    }
}

impl CatalogSource for FileCatalogSource {
    fn load_catalog(&self) -> Result<Arc<Catalog>> {
        Ok(Arc::clone(&self.loaded()?.catalog))
    }

    fn load_workloads(&self) -> Result<Arc<WorkloadSet>> {
        Ok(Arc::clone(&self.loaded()?.workloads))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_estimation::domain::Category;
    use crate::shared::error::BuildError;
    use std::fs;
    use tempfile::TempDir;

    const ONE_GPU: &str = r#"
[[component]]
category = "gpu"
id = "arc-a770"
name = "Intel Arc A770"
price = 289
performance = 62
tier = "mid"
vram_gb = 16
tdp_watts = 225
"#;

    #[test]
    fn test_load_catalog_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, ONE_GPU).unwrap();

        let source = FileCatalogSource::new(&path);
        let catalog = source.load_catalog().unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.lookup(Category::Graphics, "arc-a770").unwrap().price(),
            289
        );
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn test_missing_workloads_fall_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, ONE_GPU).unwrap();

        let workloads = FileCatalogSource::new(&path).load_workloads().unwrap();
        assert_eq!(workloads.as_ref(), builtin::workloads());
    }

    #[test]
    fn test_file_workloads_replace_builtin() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        let content = format!(
            "{}\n[[workload]]\nid = \"esports\"\nprocessor_coefficient = 0.5\nmemory_coefficient = 0.1\nbase_fps = {{ mid = 200 }}\n",
            ONE_GPU
        );
        fs::write(&path, content).unwrap();

        let workloads = FileCatalogSource::new(&path).load_workloads().unwrap();
        assert_eq!(workloads.len(), 1);
        assert!(workloads.lookup("esports").is_ok());
        assert!(workloads.lookup("racing-simulator").is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let source = FileCatalogSource::new(dir.path().join("absent.toml"));

        let err = source.load_catalog().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let err = FileCatalogSource::new(&path).load_catalog().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::CatalogParseError { .. })
        ));
    }

    #[test]
    fn test_file_is_parsed_once_per_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, ONE_GPU).unwrap();

        let source = FileCatalogSource::new(&path);
        let catalog = source.load_catalog().unwrap();
        fs::write(&path, "not = = toml").unwrap();

        let workloads = source.load_workloads().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(workloads.as_ref(), builtin::workloads());
        assert!(Arc::ptr_eq(&catalog, &source.load_catalog().unwrap()));
    }

    #[test]
    fn test_failed_load_is_retried() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        let source = FileCatalogSource::new(&path);

        assert!(source.load_catalog().is_err());

        fs::write(&path, ONE_GPU).unwrap();
        assert_eq!(source.load_catalog().unwrap().len(), 1);
    }
}
