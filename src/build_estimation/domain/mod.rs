pub mod build_configuration;
pub mod catalog;
pub mod category;
pub mod component;
pub mod workload;

pub use build_configuration::{BuildConfiguration, SharedBuildConfiguration};
pub use catalog::Catalog;
pub use category::Category;
pub use component::{ComponentRecord, ComponentSpecs, GpuTier, StorageInterface};
pub use workload::{WorkloadProfile, WorkloadSet};
