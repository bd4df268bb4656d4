use super::catalog::Catalog;
use super::category::Category;
use super::component::ComponentRecord;
use super::workload::WorkloadProfile;
use crate::build_estimation::services::PerformanceEstimator;
use crate::shared::error::BuildError;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// The user's current per-category part selection.
///
/// Every selected record is borrowed from the catalog the configuration
/// was created with; `select` is the only way in, so a configuration never
/// holds a part the catalog does not list.
#[derive(Debug, Clone)]
pub struct BuildConfiguration<'c> {
    catalog: &'c Catalog,
    selections: BTreeMap<Category, &'c ComponentRecord>,
}

impl<'c> BuildConfiguration<'c> {
    /// Creates an empty configuration (nothing selected)
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            selections: BTreeMap::new(),
        }
    }

    /// Selects `id` for `category`, replacing any previous selection there.
    ///
    /// # Errors
    /// Returns `BuildError::ComponentNotFound` and leaves the configuration
    /// untouched when the catalog has no such component
    pub fn select(&mut self, category: Category, id: &str) -> Result<&'c ComponentRecord, BuildError> {
        let record = self.catalog.lookup(category, id)?;
        self.selections.insert(category, record);
        Ok(record)
    }

    /// Removes the selection for `category`; returns what was selected, if anything
    pub fn clear(&mut self, category: Category) -> Option<&'c ComponentRecord> {
        self.selections.remove(&category)
    }

    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    pub fn get(&self, category: Category) -> Option<&'c ComponentRecord> {
        self.selections.get(&category).copied()
    }

    /// Sum of the prices of every selected component; 0 when empty
    pub fn total_cost(&self) -> u64 {
        self.selections
            .values()
            .map(|record| u64::from(record.price()))
            .sum()
    }

    /// Selected components in category order
    pub fn selections(&self) -> impl Iterator<Item = (Category, &'c ComponentRecord)> + '_ {
        self.selections.iter().map(|(category, record)| (*category, *record))
    }

    pub fn selected_count(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

/// A `BuildConfiguration` guarded by a single lock, for hosts that touch
/// one build from several threads.
///
/// Each method holds the lock for the whole lookup-then-write (or read)
/// sequence, so no caller can observe a half-applied selection.
#[derive(Debug)]
pub struct SharedBuildConfiguration<'c> {
    inner: Mutex<BuildConfiguration<'c>>,
}

impl<'c> SharedBuildConfiguration<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            inner: Mutex::new(BuildConfiguration::new(catalog)),
        }
    }

    pub fn select(&self, category: Category, id: &str) -> Result<&'c ComponentRecord, BuildError> {
        self.with_mut(|config| config.select(category, id))
    }

    pub fn clear(&self, category: Category) -> Option<&'c ComponentRecord> {
        self.with_mut(|config| config.clear(category))
    }

    pub fn clear_all(&self) {
        self.with_mut(BuildConfiguration::clear_all)
    }

    pub fn get(&self, category: Category) -> Option<&'c ComponentRecord> {
        self.read(|config| config.get(category))
    }

    pub fn total_cost(&self) -> u64 {
        self.read(BuildConfiguration::total_cost)
    }

    /// Estimates `workload` against the selection as it stands under the lock
    pub fn estimate(&self, workload: &WorkloadProfile) -> f64 {
        self.read(|config| PerformanceEstimator::estimate(config, workload))
    }

    /// Runs `f` against a consistent view of the configuration
    pub fn read<R>(&self, f: impl FnOnce(&BuildConfiguration<'c>) -> R) -> R {
        // A panic in another reader cannot leave the map half-written
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Copies out the current state
    pub fn snapshot(&self) -> BuildConfiguration<'c> {
        self.read(BuildConfiguration::clone)
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut BuildConfiguration<'c>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
