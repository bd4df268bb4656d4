use super::category::Category;
use super::component::ComponentRecord;
use crate::shared::error::BuildError;
use std::collections::{BTreeMap, HashSet};

/// Read-only catalog of purchasable components, grouped by category.
///
/// Within a category, records keep the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<Category, Vec<ComponentRecord>>,
}

impl Catalog {
    /// Builds a catalog from a flat list of records
    ///
    /// # Errors
    /// Returns `BuildError::CatalogValidation` if two records in the same
    /// category share an id
    pub fn new(records: Vec<ComponentRecord>) -> Result<Self, BuildError> {
        let mut entries: BTreeMap<Category, Vec<ComponentRecord>> = BTreeMap::new();
        let mut seen: HashSet<(Category, String)> = HashSet::new();

        for record in records {
            let category = record.category();
            if !seen.insert((category, record.id().to_string())) {
                return Err(BuildError::CatalogValidation {
                    message: format!(
                        "duplicate component id '{}' in category '{}'",
                        record.id(),
                        category
                    ),
                });
            }
            entries.entry(category).or_default().push(record);
        }

        Ok(Self { entries })
    }

    /// Finds a component by id within a category
    ///
    /// # Errors
    /// Returns `BuildError::ComponentNotFound` (listing the valid ids) when the
    /// category has no component with that id
    pub fn lookup(&self, category: Category, id: &str) -> Result<&ComponentRecord, BuildError> {
        self.list(category)
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| BuildError::ComponentNotFound {
                category: category.to_string(),
                id: id.to_string(),
                available: self.available_ids(category),
            })
    }

    /// All components of a category in display order (empty if none)
    pub fn list(&self, category: Category) -> &[ComponentRecord] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories that have at least one component
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    /// Total number of records across all categories
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn available_ids(&self, category: Category) -> String {
        let ids: Vec<&str> = self.list(category).iter().map(|r| r.id()).collect();
        if ids.is_empty() {
            "(none)".to_string()
        } else {
            ids.join(", ")
        }
    }
}
