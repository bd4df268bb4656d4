use crate::application::dto::{CatalogResponse, ReportMetadata};
use crate::ports::outbound::{CatalogSource, ProgressReporter};
use crate::shared::Result;

/// ListCatalogUseCase - Loads the catalog and workloads for browsing
pub struct ListCatalogUseCase<CS, PR> {
    catalog_source: CS,
    progress_reporter: PR,
}

impl<CS, PR> ListCatalogUseCase<CS, PR>
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

    pub fn execute(&self) -> Result<CatalogResponse> {
        let source_description = self.catalog_source.describe();
        self.progress_reporter
            .report(&format!("📦 Loading catalog from: {}", source_description));

        let catalog = self.catalog_source.load_catalog()?;
        let workloads = self.catalog_source.load_workloads()?;

        if catalog.is_empty() {
            self.progress_reporter
                .report_warning("⚠️  Warning: the catalog contains no components");
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Catalog loaded: {} component(s) in {} categories, {} workload(s)",
            catalog.len(),
            catalog.categories().count(),
            workloads.len()
        ));

        Ok(CatalogResponse {
            catalog,
            workloads,
            metadata: ReportMetadata::generate(source_description),
        })
    }
}
