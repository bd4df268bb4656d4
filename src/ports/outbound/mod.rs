/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod catalog_source;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_source::CatalogSource;
pub use formatter::BuildFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
