//! Component view struct for read models

use crate::build_estimation::domain::ComponentRecord;
use serde::Serialize;

/// View representation of a catalog component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentView {
    /// Canonical category name (e.g. "power-supply")
    pub category: String,
    pub id: String,
    pub name: String,
    pub price: u32,
    /// Performance score, 0-100
    pub performance: u8,
    /// Category-specific attributes in short form
    pub summary: String,
}

impl From<&ComponentRecord> for ComponentView {
    fn from(record: &ComponentRecord) -> Self {
        Self {
            category: record.category().to_string(),
            id: record.id().to_string(),
            name: record.name().to_string(),
            price: record.price(),
            performance: record.performance(),
            summary: record.specs().summary(),
        }
    }
}
