//! Read model for an evaluated build

use super::component_view::ComponentView;
use crate::build_estimation::policies::FrameRateRating;
use serde::Serialize;

/// Main read model for an evaluated build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReadModel {
    pub metadata: ReportMetadataView,
    /// Selected components in category order
    pub components: Vec<ComponentView>,
    /// Canonical names of categories with nothing selected
    pub missing_categories: Vec<String>,
    pub total_cost: u64,
    pub estimates: Vec<EstimateView>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub catalog_source: String,
}

/// View representation of one frame-rate estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateView {
    pub workload_id: String,
    pub workload_name: String,
    /// Raw estimate, rounded to two decimals
    pub fps: f64,
    /// Estimate rounded to a whole frame
    pub display_fps: u32,
    pub rating: FrameRateRating,
}
