//! pc-builder - PC build configuration and frame-rate estimation
//!
//! This library lets a user pick at most one component per category from a
//! catalog, keeps the running total cost of the build, and estimates the
//! frame rate the build would reach in a set of game workloads.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_estimation`): Catalog, build configuration and the estimator
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use pc_builder::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let catalog = builtin::catalog();
//! let mut build = BuildConfiguration::new(catalog);
//! build.select(Category::Processor, "r7-7800x3d")?;
//! build.select(Category::Graphics, "rtx-4070-super")?;
//! build.select(Category::Memory, "ddr5-32-6000")?;
//!
//! assert_eq!(build.total_cost(), 1108);
//!
//! let racing = builtin::workloads().lookup("racing-simulator")?;
//! let fps = PerformanceEstimator::estimate(&build, racing);
//! assert_eq!(FrameRateRating::from_fps(fps), FrameRateRating::Excellent);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_estimation;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{BuiltinCatalogSource, FileCatalogSource};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{BuildRequest, BuildResponse, OutputFormat, Selection};
    pub use crate::application::use_cases::{EvaluateBuildUseCase, ListCatalogUseCase};
    pub use crate::build_estimation::builtin;
    pub use crate::build_estimation::domain::{
        BuildConfiguration, Catalog, Category, ComponentRecord, ComponentSpecs, GpuTier,
        SharedBuildConfiguration, StorageInterface, WorkloadProfile, WorkloadSet,
    };
    pub use crate::build_estimation::policies::FrameRateRating;
    pub use crate::build_estimation::services::{FrameRateEstimate, PerformanceEstimator};
    pub use crate::ports::outbound::{
        BuildFormatter, CatalogSource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::BuildError;
    pub use crate::shared::Result;
}
