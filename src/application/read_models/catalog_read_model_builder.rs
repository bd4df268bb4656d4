use super::build_read_model_builder::BuildReadModelBuilder;
use super::catalog_read_model::{CatalogReadModel, CatalogSectionView, WorkloadView};
use super::component_view::ComponentView;
use crate::application::dto::CatalogResponse;
use crate::build_estimation::domain::{Catalog, Category, WorkloadProfile};

/// Builder for constructing CatalogReadModel from the catalog listing response
pub struct CatalogReadModelBuilder;

impl CatalogReadModelBuilder {
    pub fn build(response: &CatalogResponse) -> CatalogReadModel {
        CatalogReadModel {
            metadata: BuildReadModelBuilder::build_metadata(&response.metadata),
            sections: Self::build_sections(&response.catalog),
            workloads: response.workloads.iter().map(Self::build_workload).collect(),
        }
    }

    /// One section per category that has components, in category order
    fn build_sections(catalog: &Catalog) -> Vec<CatalogSectionView> {
        Category::ALL
            .iter()
            .filter(|category| !catalog.list(**category).is_empty())
            .map(|category| CatalogSectionView {
                category: category.to_string(),
                title: category.title().to_string(),
                description: category.description().to_string(),
                components: catalog
                    .list(*category)
                    .iter()
                    .map(ComponentView::from)
                    .collect(),
            })
            .collect()
    }

    fn build_workload(workload: &WorkloadProfile) -> WorkloadView {
        WorkloadView {
            id: workload.id().to_string(),
            name: workload.name().to_string(),
            base_fps: workload.base_fps_table().clone(),
            processor_coefficient: workload.processor_coefficient(),
            memory_coefficient: workload.memory_coefficient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ReportMetadata;
    use crate::build_estimation::builtin;
    use crate::build_estimation::domain::GpuTier;
    use std::sync::Arc;

    fn builtin_response() -> CatalogResponse {
        CatalogResponse {
            catalog: builtin::shared_catalog(),
            workloads: builtin::shared_workloads(),
            metadata: ReportMetadata::generate("built-in catalog"),
        }
    }

    #[test]
    fn test_sections_follow_category_order() {
        let model = CatalogReadModelBuilder::build(&builtin_response());
        let categories: Vec<&str> = model.sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["processor", "graphics", "memory", "storage", "mainboard", "power-supply"]
        );
    }

    #[test]
    fn test_section_components_keep_catalog_order() {
        let response = builtin_response();
        let model = CatalogReadModelBuilder::build(&response);
        let graphics = &model.sections[1];

        let expected: Vec<&str> = response
            .catalog
            .list(Category::Graphics)
            .iter()
            .map(|r| r.id())
            .collect();
        let actual: Vec<&str> = graphics.components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(actual, expected);
        assert_eq!(graphics.title, "GPU - Graphics Processing Unit");
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        let response = CatalogResponse {
            catalog: Arc::new(Catalog::default()),
            workloads: builtin::shared_workloads(),
            metadata: ReportMetadata::generate("empty"),
        };
        let model = CatalogReadModelBuilder::build(&response);
        assert!(model.sections.is_empty());
        assert_eq!(model.workloads.len(), 3);
    }

    #[test]
    fn test_workload_view() {
        let model = CatalogReadModelBuilder::build(&builtin_response());
        let racing = model
            .workloads
            .iter()
            .find(|w| w.id == "racing-simulator")
            .unwrap();
        assert_eq!(racing.base_fps.get(&GpuTier::High), Some(&110.0));
        assert_eq!(racing.processor_coefficient, 0.12);
    }
}
