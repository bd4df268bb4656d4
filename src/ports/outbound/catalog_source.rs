use crate::build_estimation::domain::{Catalog, WorkloadSet};
use crate::shared::Result;
use std::sync::Arc;

/// CatalogSource port for loading reference data
///
/// The engine only needs a catalog and a workload set that satisfy the
/// domain invariants; where they come from (compiled-in tables, a data
/// file) is up to the adapter. Both are read-only once loaded, so adapters
/// hand out shared handles and load their backing data at most once.
pub trait CatalogSource {
    /// Loads the component catalog
    ///
    /// # Errors
    /// Returns an error if the data cannot be read, parsed or validated
    fn load_catalog(&self) -> Result<Arc<Catalog>>;

    /// Loads the workload profiles used for frame-rate estimates
    ///
    /// # Errors
    /// Returns an error if the data cannot be read, parsed or validated
    fn load_workloads(&self) -> Result<Arc<WorkloadSet>>;

    /// Short description of where the data comes from, for progress messages
    fn describe(&self) -> String;
}
