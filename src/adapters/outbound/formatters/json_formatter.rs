use crate::application::read_models::{BuildReadModel, CatalogReadModel};
use crate::ports::outbound::BuildFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter emitting the read models as pretty-printed JSON
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl BuildFormatter for JsonFormatter {
    fn format_build(&self, model: &BuildReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).context("Failed to serialize build report to JSON")
    }

    fn format_catalog(&self, model: &CatalogReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).context("Failed to serialize catalog to JSON")
    }
}
