use super::build_read_model::{BuildReadModel, EstimateView, ReportMetadataView};
use super::component_view::ComponentView;
use crate::application::dto::{BuildResponse, ReportMetadata};
use crate::build_estimation::policies::FrameRateRating;
use crate::build_estimation::services::FrameRateEstimate;

/// Builder for constructing BuildReadModel from a use case response
pub struct BuildReadModelBuilder;

impl BuildReadModelBuilder {
    pub fn build(response: &BuildResponse) -> BuildReadModel {
        BuildReadModel {
            metadata: Self::build_metadata(&response.metadata),
            components: response.components.iter().map(ComponentView::from).collect(),
            missing_categories: response
                .missing_categories
                .iter()
                .map(|category| category.to_string())
                .collect(),
            total_cost: response.total_cost,
            estimates: response.estimates.iter().map(Self::build_estimate).collect(),
        }
    }

    pub(crate) fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp.clone(),
            tool_name: metadata.tool_name.clone(),
            tool_version: metadata.tool_version.clone(),
            catalog_source: metadata.catalog_source.clone(),
        }
    }

    fn build_estimate(estimate: &FrameRateEstimate) -> EstimateView {
        EstimateView {
            workload_id: estimate.workload_id.clone(),
            workload_name: estimate.workload_name.clone(),
            fps: (estimate.fps * 100.0).round() / 100.0,
            display_fps: estimate.display_fps(),
            rating: FrameRateRating::from_fps(estimate.fps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_estimation::domain::{Category, ComponentRecord, ComponentSpecs};

    fn create_test_metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-01-15T10:30:00Z".to_string(),
            "pc-builder".to_string(),
            "0.1.0".to_string(),
            "built-in catalog".to_string(),
        )
    }

    fn create_test_response() -> BuildResponse {
        let ram = ComponentRecord::new(
            "ddr5-32",
            "32 GB DDR5",
            110,
            85,
            ComponentSpecs::Memory {
                capacity_gb: 32,
                speed_mts: 6000,
            },
        )
        .unwrap();

        BuildResponse {
            components: vec![ram],
            missing_categories: vec![Category::Processor, Category::PowerSupply],
            total_cost: 110,
            estimates: vec![FrameRateEstimate {
                workload_id: "racing-simulator".to_string(),
                workload_name: "Racing Simulator".to_string(),
                fps: 130.79264,
            }],
            metadata: create_test_metadata(),
        }
    }

    #[test]
    fn test_build_metadata() {
        let view = BuildReadModelBuilder::build_metadata(&create_test_metadata());
        assert_eq!(view.timestamp, "2024-01-15T10:30:00Z");
        assert_eq!(view.tool_name, "pc-builder");
        assert_eq!(view.catalog_source, "built-in catalog");
    }

    #[test]
    fn test_build_components_and_cost() {
        let model = BuildReadModelBuilder::build(&create_test_response());

        assert_eq!(model.total_cost, 110);
        assert_eq!(model.components.len(), 1);
        assert_eq!(model.components[0].category, "memory");
        assert_eq!(model.components[0].summary, "32 GB @ 6000 MT/s");
        assert_eq!(model.missing_categories, vec!["processor", "power-supply"]);
    }

    #[test]
    fn test_build_estimate_rounding_and_rating() {
        let model = BuildReadModelBuilder::build(&create_test_response());

        let estimate = &model.estimates[0];
        assert_eq!(estimate.fps, 130.79);
        assert_eq!(estimate.display_fps, 131);
        assert_eq!(estimate.rating, FrameRateRating::Excellent);
    }
}
