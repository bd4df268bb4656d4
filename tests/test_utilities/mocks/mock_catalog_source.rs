use pc_builder::prelude::*;
use std::sync::Arc;

/// Mock CatalogSource serving in-memory data, or failing on demand
pub struct MockCatalogSource {
    catalog: Arc<Catalog>,
    workloads: Arc<WorkloadSet>,
    should_fail: bool,
}

impl MockCatalogSource {
    pub fn new(catalog: Catalog, workloads: WorkloadSet) -> Self {
        Self {
            catalog: Arc::new(catalog),
            workloads: Arc::new(workloads),
            should_fail: false,
        }
    }

    /// Built-in catalog and workloads
    pub fn builtin() -> Self {
        Self {
            catalog: builtin::shared_catalog(),
            workloads: builtin::shared_workloads(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            catalog: Arc::default(),
            workloads: Arc::default(),
            should_fail: true,
        }
    }
}

impl CatalogSource for MockCatalogSource {
    fn load_catalog(&self) -> Result<Arc<Catalog>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog load failure");
        }
        Ok(Arc::clone(&self.catalog))
    }

    fn load_workloads(&self) -> Result<Arc<WorkloadSet>> {
        if self.should_fail {
            anyhow::bail!("Mock workload load failure");
        }
        Ok(Arc::clone(&self.workloads))
    }

    fn describe(&self) -> String {
        "mock catalog".to_string()
    }
}
