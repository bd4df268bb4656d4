use super::component::GpuTier;
use crate::shared::error::BuildError;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Reference game scenario used to estimate frame rates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadProfile {
    id: String,
    name: String,
    base_fps: BTreeMap<GpuTier, f64>,
    processor_coefficient: f64,
    memory_coefficient: f64,
}

impl WorkloadProfile {
    /// # Errors
    /// Returns `BuildError::CatalogValidation` if the id is blank or a base
    /// frame rate is not a finite number
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_fps: BTreeMap<GpuTier, f64>,
        processor_coefficient: f64,
        memory_coefficient: f64,
    ) -> Result<Self, BuildError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BuildError::CatalogValidation {
                message: "workload id must not be empty".to_string(),
            });
        }
        if let Some((tier, fps)) = base_fps.iter().find(|(_, fps)| !fps.is_finite()) {
            return Err(BuildError::CatalogValidation {
                message: format!("workload '{}' has invalid {} tier base fps {}", id, tier, fps),
            });
        }
        if !processor_coefficient.is_finite() || !memory_coefficient.is_finite() {
            return Err(BuildError::CatalogValidation {
                message: format!("workload '{}' has a non-finite coefficient", id),
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            base_fps,
            processor_coefficient,
            memory_coefficient,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base frame rate for a graphics tier; `None` when the table has no entry
    pub fn base_fps(&self, tier: GpuTier) -> Option<f64> {
        self.base_fps.get(&tier).copied()
    }

    pub fn base_fps_table(&self) -> &BTreeMap<GpuTier, f64> {
        &self.base_fps
    }

    pub fn processor_coefficient(&self) -> f64 {
        self.processor_coefficient
    }

    pub fn memory_coefficient(&self) -> f64 {
        self.memory_coefficient
    }
}

/// Ordered set of workload profiles with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadSet {
    profiles: Vec<WorkloadProfile>,
}

impl WorkloadSet {
    /// # Errors
    /// Returns `BuildError::CatalogValidation` on duplicate workload ids
    pub fn new(profiles: Vec<WorkloadProfile>) -> Result<Self, BuildError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id()) {
                return Err(BuildError::CatalogValidation {
                    message: format!("duplicate workload id '{}'", profile.id()),
                });
            }
        }
        Ok(Self { profiles })
    }

    /// # Errors
    /// Returns `BuildError::InvalidWorkload` for an unknown id
    pub fn lookup(&self, id: &str) -> Result<&WorkloadProfile, BuildError> {
        self.profiles
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| BuildError::InvalidWorkload {
                id: id.to_string(),
                available: self
                    .profiles
                    .iter()
                    .map(|p| p.id())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkloadProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<'a> IntoIterator for &'a WorkloadSet {
    type Item = &'a WorkloadProfile;
    type IntoIter = std::slice::Iter<'a, WorkloadProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
