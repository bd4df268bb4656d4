use crate::application::read_models::{BuildReadModel, CatalogReadModel};
use crate::shared::Result;

/// BuildFormatter port for rendering results
///
/// This port abstracts the rendering of an evaluated build and of the
/// catalog listing into a particular output format (text, JSON, Markdown).
pub trait BuildFormatter {
    /// Formats an evaluated build
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_build(&self, model: &BuildReadModel) -> Result<String>;

    /// Formats the catalog listing
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_catalog(&self, model: &CatalogReadModel) -> Result<String>;
}
