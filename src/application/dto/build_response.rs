use super::report_metadata::ReportMetadata;
use crate::build_estimation::domain::{Catalog, Category, ComponentRecord, WorkloadSet};
use crate::build_estimation::services::FrameRateEstimate;
use std::sync::Arc;

/// BuildResponse - Output DTO of the build evaluation use case
///
/// Owns copies of the selected records so it can outlive the catalog the
/// build was evaluated against.
#[derive(Debug, Clone)]
pub struct BuildResponse {
    /// Selected components in category order
    pub components: Vec<ComponentRecord>,
    /// Categories left empty
    pub missing_categories: Vec<Category>,
    /// Sum of the selected component prices
    pub total_cost: u64,
    /// One estimate per requested workload
    pub estimates: Vec<FrameRateEstimate>,
    pub metadata: ReportMetadata,
}

/// CatalogResponse - Output DTO of the catalog listing use case
#[derive(Debug, Clone)]
pub struct CatalogResponse {
    pub catalog: Arc<Catalog>,
    pub workloads: Arc<WorkloadSet>,
    pub metadata: ReportMetadata,
}
