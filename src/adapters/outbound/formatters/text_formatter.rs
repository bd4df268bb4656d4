use crate::application::read_models::{
    BuildReadModel, CatalogReadModel, ComponentView, EstimateView, ReportMetadataView,
};
use crate::build_estimation::domain::GpuTier;
use crate::build_estimation::policies::FrameRateRating;
use crate::ports::outbound::BuildFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// TextFormatter adapter producing a terminal-friendly report
///
/// Frame-rate ratings are coloured by bucket when `color` is enabled.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint_rating(&self, rating: FrameRateRating) -> String {
        let label = rating.label();
        if !self.color {
            return label.to_string();
        }
        match rating {
            FrameRateRating::Excellent => label.green().to_string(),
            FrameRateRating::Good => label.cyan().to_string(),
            FrameRateRating::Playable => label.yellow().to_string(),
            FrameRateRating::Poor => label.red().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn render_title(&self, output: &mut String, title: &str, metadata: &ReportMetadataView) {
        output.push_str(&self.bold(title));
        output.push('\n');
        output.push_str(&"=".repeat(title.chars().count()));
        output.push('\n');
        output.push_str(&format!("Catalog: {}\n\n", metadata.catalog_source));
    }

    fn render_component_line(&self, output: &mut String, label: &str, component: &ComponentView) {
        output.push_str(&format!(
            "  {:<14} {:<34} {:>6}\n",
            label, component.name, component.price
        ));
        output.push_str(&format!("  {:<14} {}\n", "", component.summary));
    }

    fn render_estimate_line(&self, output: &mut String, estimate: &EstimateView) {
        output.push_str(&format!(
            "  {:<24} {:>5} fps  {}\n",
            estimate.workload_name,
            estimate.display_fps,
            self.paint_rating(estimate.rating)
        ));
    }
}

impl BuildFormatter for TextFormatter {
    fn format_build(&self, model: &BuildReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_title(&mut output, "PC Build Report", &model.metadata);

        output.push_str(&self.bold("Components"));
        output.push('\n');
        if model.components.is_empty() {
            output.push_str("  (nothing selected)\n");
        }
        for component in &model.components {
            self.render_component_line(&mut output, &component.category, component);
        }
        if !model.missing_categories.is_empty() {
            output.push_str(&format!(
                "  Not selected: {}\n",
                model.missing_categories.join(", ")
            ));
        }
        output.push_str(&format!("\nTotal cost: {}\n\n", model.total_cost));

        output.push_str(&self.bold("Estimated frame rates"));
        output.push('\n');
        if model.estimates.is_empty() {
            output.push_str("  (no workloads)\n");
        }
        for estimate in &model.estimates {
            self.render_estimate_line(&mut output, estimate);
        }

        Ok(output)
    }

    fn format_catalog(&self, model: &CatalogReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_title(&mut output, "PC Component Catalog", &model.metadata);

        for section in &model.sections {
            output.push_str(&format!("{} [{}]\n", self.bold(&section.title), section.category));
            output.push_str(&format!("  {}\n", section.description));
            for component in &section.components {
                self.render_component_line(&mut output, &component.id, component);
            }
            output.push('\n');
        }

        output.push_str(&self.bold("Workloads"));
        output.push('\n');
        for workload in &model.workloads {
            let base_fps: Vec<String> = GpuTier::ALL
                .iter()
                .filter_map(|tier| {
                    workload
                        .base_fps
                        .get(tier)
                        .map(|fps| format!("{} {}", tier, fps))
                })
                .collect();
            output.push_str(&format!("  {:<24} {}\n", workload.id, workload.name));
            output.push_str(&format!(
                "  {:<24} base fps: {}; cpu x{}, memory x{}\n",
                "",
                base_fps.join(", "),
                workload.processor_coefficient,
                workload.memory_coefficient
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_model() -> BuildReadModel {
        BuildReadModel {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "pc-builder".to_string(),
                tool_version: "1.0.0".to_string(),
                catalog_source: "built-in catalog".to_string(),
            },
            components: vec![ComponentView {
                category: "memory".to_string(),
                id: "ddr5-32-6000".to_string(),
                name: "32 GB DDR5-6000".to_string(),
                price: 110,
                performance: 85,
                summary: "32 GB @ 6000 MT/s".to_string(),
            }],
            missing_categories: vec!["processor".to_string(), "graphics".to_string()],
            total_cost: 110,
            estimates: vec![
                EstimateView {
                    workload_id: "racing-simulator".to_string(),
                    workload_name: "Racing Simulator".to_string(),
                    fps: 130.79,
                    display_fps: 131,
                    rating: FrameRateRating::Excellent,
                },
                EstimateView {
                    workload_id: "open-world-adventure".to_string(),
                    workload_name: "Open World Adventure".to_string(),
                    fps: 12.0,
                    display_fps: 12,
                    rating: FrameRateRating::Poor,
                },
            ],
        }
    }

    #[test]
    fn test_format_build_plain() {
        let output = TextFormatter::new(false)
            .format_build(&create_test_model())
            .unwrap();

        assert!(output.starts_with("PC Build Report\n==============="));
        assert!(output.contains("Catalog: built-in catalog"));
        assert!(output.contains("32 GB DDR5-6000"));
        assert!(output.contains("Not selected: processor, graphics"));
        assert!(output.contains("Total cost: 110"));
        assert!(output.contains("131 fps  excellent"));
        assert!(output.contains("12 fps  poor"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_format_build_colored_ratings() {
        let output = TextFormatter::new(true)
            .format_build(&create_test_model())
            .unwrap();

        assert!(output.contains('\u{1b}'));
        assert!(output.contains(&"excellent".green().to_string()));
        assert!(output.contains(&"poor".red().to_string()));
    }

    #[test]
    fn test_paint_rating_without_color() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.paint_rating(FrameRateRating::Good), "good");
        assert_eq!(formatter.paint_rating(FrameRateRating::Playable), "playable");
    }

    #[test]
    fn test_format_empty_build() {
        let mut model = create_test_model();
        model.components.clear();
        model.estimates.clear();

        let output = TextFormatter::new(false).format_build(&model).unwrap();
        assert!(output.contains("(nothing selected)"));
        assert!(output.contains("(no workloads)"));
    }
}
