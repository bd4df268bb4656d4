/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod build_request;
mod build_response;
mod output_format;
mod report_metadata;
mod selection;

pub use build_request::BuildRequest;
pub use build_response::{BuildResponse, CatalogResponse};
pub use output_format::OutputFormat;
pub use report_metadata::ReportMetadata;
pub use selection::Selection;
