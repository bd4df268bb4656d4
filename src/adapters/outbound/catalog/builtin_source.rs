use crate::build_estimation::builtin;
use crate::build_estimation::domain::{Catalog, WorkloadSet};
use crate::ports::outbound::CatalogSource;
use crate::shared::Result;
use std::sync::Arc;

/// BuiltinCatalogSource adapter serving the compiled-in catalog and workloads
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn load_catalog(&self) -> Result<Arc<Catalog>> {
        Ok(builtin::shared_catalog())
    }

    fn load_workloads(&self) -> Result<Arc<WorkloadSet>> {
        Ok(builtin::shared_workloads())
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
