//! Read model for the catalog listing

use super::build_read_model::ReportMetadataView;
use super::component_view::ComponentView;
use crate::build_estimation::domain::GpuTier;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReadModel {
    pub metadata: ReportMetadataView,
    pub sections: Vec<CatalogSectionView>,
    pub workloads: Vec<WorkloadView>,
}

/// All components of one category
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSectionView {
    pub category: String,
    pub title: String,
    pub description: String,
    pub components: Vec<ComponentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkloadView {
    pub id: String,
    pub name: String,
    /// Base fps per graphics tier, in tier order
    pub base_fps: BTreeMap<GpuTier, f64>,
    pub processor_coefficient: f64,
    pub memory_coefficient: f64,
}
