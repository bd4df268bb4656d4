use crate::application::read_models::{
    BuildReadModel, CatalogReadModel, CatalogSectionView, ComponentView, EstimateView,
    ReportMetadataView, WorkloadView,
};
use crate::build_estimation::domain::GpuTier;
use crate::ports::outbound::BuildFormatter;
use crate::shared::Result;

/// Markdown table header for selected components
const BUILD_TABLE_HEADER: &str = "| Category | Component | Details | Performance | Price |\n";

/// Markdown table separator line for selected components
const BUILD_TABLE_SEPARATOR: &str = "|----------|-----------|---------|-------------|-------|\n";

/// Markdown table header for catalog sections
const CATALOG_TABLE_HEADER: &str = "| ID | Name | Details | Performance | Price |\n";

/// Markdown table separator line for catalog sections
const CATALOG_TABLE_SEPARATOR: &str = "|----|------|---------|-------------|-------|\n";

/// Markdown table header for frame-rate estimates
const ESTIMATE_TABLE_HEADER: &str = "| Workload | Estimated FPS | Rating |\n";

/// Markdown table separator line for frame-rate estimates
const ESTIMATE_TABLE_SEPARATOR: &str = "|----------|---------------|--------|\n";

/// MarkdownFormatter adapter for build reports and catalog listings
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_metadata(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str(&format!("- Generated: {}\n", metadata.timestamp));
        output.push_str(&format!(
            "- Tool: {} {}\n",
            metadata.tool_name, metadata.tool_version
        ));
        output.push_str(&format!(
            "- Catalog: {}\n\n",
            Self::escape_markdown_table_cell(&metadata.catalog_source)
        ));
    }

    fn render_components(&self, output: &mut String, components: &[ComponentView]) {
        output.push_str("## Selected Components\n\n");

        if components.is_empty() {
            output.push_str("No components selected.\n\n");
            return;
        }

        output.push_str(BUILD_TABLE_HEADER);
        output.push_str(BUILD_TABLE_SEPARATOR);
        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                component.category,
                Self::escape_markdown_table_cell(&component.name),
                Self::escape_markdown_table_cell(&component.summary),
                component.performance,
                component.price
            ));
        }
        output.push('\n');
    }

    fn render_missing(&self, output: &mut String, missing: &[String]) {
        if missing.is_empty() {
            return;
        }
        output.push_str(&format!("Not selected: {}\n\n", missing.join(", ")));
    }

    fn render_estimates(&self, output: &mut String, estimates: &[EstimateView]) {
        output.push_str("## Estimated Frame Rates\n\n");

        if estimates.is_empty() {
            output.push_str("No workloads evaluated.\n\n");
            return;
        }

        output.push_str(ESTIMATE_TABLE_HEADER);
        output.push_str(ESTIMATE_TABLE_SEPARATOR);
        for estimate in estimates {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&estimate.workload_name),
                estimate.display_fps,
                estimate.rating
            ));
        }
        output.push('\n');
    }

    fn render_section(&self, output: &mut String, section: &CatalogSectionView) {
        output.push_str(&format!("## {}\n\n", section.title));
        output.push_str(&format!("{}\n\n", section.description));
        output.push_str(CATALOG_TABLE_HEADER);
        output.push_str(CATALOG_TABLE_SEPARATOR);
        for component in &section.components {
            output.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                component.id,
                Self::escape_markdown_table_cell(&component.name),
                Self::escape_markdown_table_cell(&component.summary),
                component.performance,
                component.price
            ));
        }
        output.push('\n');
    }

    fn render_workloads(&self, output: &mut String, workloads: &[WorkloadView]) {
        output.push_str("## Workloads\n\n");

        let tiers: Vec<&str> = GpuTier::ALL.iter().map(|tier| tier.as_str()).collect();
        output.push_str(&format!(
            "| ID | Name | {} | CPU coefficient | Memory coefficient |\n",
            tiers.join(" | ")
        ));
        output.push_str(&format!(
            "|----|------|{}|-----------------|--------------------|\n",
            vec!["---"; tiers.len()].join("|")
        ));

        for workload in workloads {
            let base_fps: Vec<String> = GpuTier::ALL
                .iter()
                .map(|tier| {
                    workload
                        .base_fps
                        .get(tier)
                        .map_or_else(|| "-".to_string(), |fps| fps.to_string())
                })
                .collect();
            output.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                workload.id,
                Self::escape_markdown_table_cell(&workload.name),
                base_fps.join(" | "),
                workload.processor_coefficient,
                workload.memory_coefficient
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFormatter for MarkdownFormatter {
    fn format_build(&self, model: &BuildReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str("# PC Build Report\n\n");
        self.render_metadata(&mut output, &model.metadata);
        self.render_components(&mut output, &model.components);
        output.push_str(&format!("**Total cost:** {}\n\n", model.total_cost));
        self.render_missing(&mut output, &model.missing_categories);
        self.render_estimates(&mut output, &model.estimates);

        Ok(output)
    }

    fn format_catalog(&self, model: &CatalogReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str("# PC Component Catalog\n\n");
        self.render_metadata(&mut output, &model.metadata);
        for section in &model.sections {
            self.render_section(&mut output, section);
        }
        self.render_workloads(&mut output, &model.workloads);

        Ok(output)
    }
}
