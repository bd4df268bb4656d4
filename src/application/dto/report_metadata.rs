use chrono::Utc;

/// Provenance of a generated report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Where the catalog data came from
    pub catalog_source: String,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        catalog_source: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            catalog_source,
        }
    }

    /// Metadata stamped with the current time and this crate's name and version
    pub fn generate(catalog_source: impl Into<String>) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            catalog_source.into(),
        )
    }
}
