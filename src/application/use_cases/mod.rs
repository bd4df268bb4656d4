/// Use cases module containing application business logic orchestration
mod evaluate_build;
mod list_catalog;

pub use evaluate_build::EvaluateBuildUseCase;
pub use list_catalog::ListCatalogUseCase;
