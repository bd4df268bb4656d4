//! Read models for presenting build results
//!
//! Flattened, presentation-neutral views built from use case responses.
//! Formatters only ever see these types.

mod build_read_model;
mod build_read_model_builder;
mod catalog_read_model;
mod catalog_read_model_builder;
mod component_view;

pub use build_read_model::{BuildReadModel, EstimateView, ReportMetadataView};
pub use build_read_model_builder::BuildReadModelBuilder;
pub use catalog_read_model::{CatalogReadModel, CatalogSectionView, WorkloadView};
pub use catalog_read_model_builder::CatalogReadModelBuilder;
pub use component_view::ComponentView;
