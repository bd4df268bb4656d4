use crate::application::dto::{BuildRequest, BuildResponse, ReportMetadata};
use crate::build_estimation::domain::{
    BuildConfiguration, Category, WorkloadProfile, WorkloadSet,
};
use crate::build_estimation::services::PerformanceEstimator;
use crate::ports::outbound::{CatalogSource, ProgressReporter};
use crate::shared::Result;

/// EvaluateBuildUseCase - Applies a set of selections and estimates the result
///
/// # Type Parameters
/// * `CS` - CatalogSource implementation
/// * `PR` - ProgressReporter implementation
pub struct EvaluateBuildUseCase<CS, PR> {
    catalog_source: CS,
    progress_reporter: PR,
}

impl<CS, PR> EvaluateBuildUseCase<CS, PR>
where
    CS: CatalogSource,
    PR: ProgressReporter,
{
    pub fn new(catalog_source: CS, progress_reporter: PR) -> Self {
        Self {
            catalog_source,
            progress_reporter,
        }
    }

    /// Executes the build evaluation
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded, a selection names a
    /// component the catalog does not have (`BuildError::ComponentNotFound`),
    /// or a requested workload is unknown (`BuildError::InvalidWorkload`)
    pub fn execute(&self, request: BuildRequest) -> Result<BuildResponse> {
        let source_description = self.catalog_source.describe();
        self.progress_reporter
            .report(&format!("📦 Loading catalog from: {}", source_description));

        let catalog = self.catalog_source.load_catalog()?;
        let workloads = self.catalog_source.load_workloads()?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} component(s) and {} workload(s)",
            catalog.len(),
            workloads.len()
        ));

        let mut config = BuildConfiguration::new(&catalog);
        for selection in &request.selections {
            let record = config.select(selection.category, &selection.component_id)?;
            self.progress_reporter.report(&format!(
                "   - {}: {} ({})",
                selection.category,
                record.name(),
                record.price()
            ));
        }

        let targets = Self::resolve_workloads(&workloads, &request.workloads)?;
        self.warn_if_estimate_impossible(&config);

        let estimates = PerformanceEstimator::estimate_all(&config, targets);
        let total_cost = config.total_cost();

        self.progress_reporter.report_completion(&format!(
            "✅ Build evaluated: {} component(s), total cost {}",
            config.selected_count(),
            total_cost
        ));

        Ok(BuildResponse {
            components: config
                .selections()
                .map(|(_, record)| record.clone())
                .collect(),
            missing_categories: Category::ALL
                .into_iter()
                .filter(|category| config.get(*category).is_none())
                .collect(),
            total_cost,
            estimates,
            metadata: ReportMetadata::generate(source_description),
        })
    }

    /// Requested workloads in request order without repeats; all of them
    /// when none were requested
    fn resolve_workloads<'w>(
        workloads: &'w WorkloadSet,
        requested: &[String],
    ) -> Result<Vec<&'w WorkloadProfile>> {
        if requested.is_empty() {
            return Ok(workloads.iter().collect());
        }

        let mut resolved: Vec<&WorkloadProfile> = Vec::new();
        for id in requested {
            let workload = workloads.lookup(id)?;
            if !resolved.iter().any(|w| w.id() == workload.id()) {
                resolved.push(workload);
            }
        }
        Ok(resolved)
    }

    fn warn_if_estimate_impossible(&self, config: &BuildConfiguration<'_>) {
        let missing: Vec<&str> = [Category::Processor, Category::Graphics]
            .into_iter()
            .filter(|category| config.get(*category).is_none())
            .map(|category| category.as_str())
            .collect();

        if !missing.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: no {} selected; frame-rate estimates will be 0",
                missing.join(" or ")
            ));
        }
    }
}
