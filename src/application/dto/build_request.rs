use super::selection::Selection;

/// BuildRequest - Input DTO for the build evaluation use case
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    /// Selections applied in order; a later one in the same category wins
    pub selections: Vec<Selection>,
    /// Workload ids to estimate; empty means every known workload
    pub workloads: Vec<String>,
}

impl BuildRequest {
    pub fn new(selections: Vec<Selection>, workloads: Vec<String>) -> Self {
        Self {
            selections,
            workloads,
        }
    }
}
