/// Integration tests for the application layer
mod test_utilities;

use pc_builder::application::read_models::{BuildReadModelBuilder, CatalogReadModelBuilder};
use pc_builder::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.toml")
}

fn select(category: Category, id: &str) -> Selection {
    Selection::new(category, id)
}

#[test]
fn test_evaluate_build_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = EvaluateBuildUseCase::new(MockCatalogSource::builtin(), progress_reporter.clone());

    let request = BuildRequest::new(
        vec![
            select(Category::Processor, "r7-7800x3d"),
            select(Category::Graphics, "rtx-4070-super"),
        ],
        vec!["racing-simulator".to_string()],
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.total_cost, 998);
    assert_eq!(response.estimates.len(), 1);
    assert_eq!(response.estimates[0].display_fps(), 131);
    assert!((response.estimates[0].fps - 130.77).abs() < 0.05);
    assert!(progress_reporter.warnings().is_empty());
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Loading catalog from: mock catalog")));
}

#[test]
fn test_evaluate_build_memory_raises_estimate() {
    let without_memory = EvaluateBuildUseCase::new(MockCatalogSource::builtin(), MockProgressReporter::new())
        .execute(BuildRequest::new(
            vec![
                select(Category::Processor, "r5-7600"),
                select(Category::Graphics, "rx-7600"),
            ],
            vec!["open-world-adventure".to_string()],
        ))
        .unwrap();

    let with_memory = EvaluateBuildUseCase::new(MockCatalogSource::builtin(), MockProgressReporter::new())
        .execute(BuildRequest::new(
            vec![
                select(Category::Processor, "r5-7600"),
                select(Category::Graphics, "rx-7600"),
                select(Category::Memory, "ddr5-32-6000"),
            ],
            vec!["open-world-adventure".to_string()],
        ))
        .unwrap();

    assert!(with_memory.estimates[0].fps > without_memory.estimates[0].fps);
    assert_eq!(with_memory.total_cost, without_memory.total_cost + 110);
}

#[test]
fn test_evaluate_build_missing_graphics_warns() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = EvaluateBuildUseCase::new(MockCatalogSource::builtin(), progress_reporter.clone());

    let response = use_case
        .execute(BuildRequest::new(
            vec![select(Category::Processor, "i9-14900k")],
            vec![],
        ))
        .unwrap();

    assert_eq!(response.total_cost, 549);
    assert_eq!(response.estimates.len(), 3);
    assert!(response.estimates.iter().all(|e| e.fps == 0.0));
    let warnings = progress_reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("no graphics selected"));
}

#[test]
fn test_evaluate_build_unknown_component_has_hint() {
    let use_case = EvaluateBuildUseCase::new(MockCatalogSource::builtin(), MockProgressReporter::new());

    let err = use_case
        .execute(BuildRequest::new(vec![select(Category::Memory, "ddr6-128")], vec![]))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Component 'ddr6-128' not found in category 'memory'"));
    assert!(message.contains("ddr5-32-6000"));
}

#[test]
fn test_evaluate_build_source_failure_propagates() {
    let use_case = EvaluateBuildUseCase::new(MockCatalogSource::with_failure(), MockProgressReporter::new());

    let err = use_case.execute(BuildRequest::default()).unwrap_err();
    assert!(err.to_string().contains("Mock catalog load failure"));
}

#[test]
fn test_list_catalog_builtin() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = ListCatalogUseCase::new(MockCatalogSource::builtin(), progress_reporter.clone());

    let response = use_case.execute().unwrap();
    assert_eq!(response.catalog.len(), builtin::catalog().len());
    assert_eq!(response.workloads.len(), 3);
    assert!(progress_reporter.warnings().is_empty());
    assert!(progress_reporter.message_count() >= 2);
}

#[test]
fn test_list_catalog_empty_warns() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = ListCatalogUseCase::new(
        MockCatalogSource::new(Catalog::default(), builtin::workloads().clone()),
        progress_reporter.clone(),
    );

    let response = use_case.execute().unwrap();
    assert!(response.catalog.is_empty());
    assert_eq!(progress_reporter.warnings().len(), 1);
}

#[test]
fn test_file_catalog_source_end_to_end() {
    let use_case = EvaluateBuildUseCase::new(
        FileCatalogSource::new(fixture_catalog()),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(BuildRequest::new(
            vec![
                select(Category::Processor, "flagship-cpu"),
                select(Category::Graphics, "halo-gpu"),
                select(Category::Memory, "kit-16"),
            ],
            vec![],
        ))
        .unwrap();

    assert_eq!(response.total_cost, 2150);
    assert_eq!(response.estimates.len(), 1);
    assert_eq!(response.estimates[0].workload_id, "benchmark");
    // 200 * 1.1 * 1.05 * 1.2
    assert!((response.estimates[0].fps - 277.2).abs() < 1e-9);
}

#[test]
fn test_build_report_formats() {
    let response = EvaluateBuildUseCase::new(MockCatalogSource::builtin(), MockProgressReporter::new())
        .execute(BuildRequest::new(
            vec![
                select(Category::Processor, "r7-7800x3d"),
                select(Category::Graphics, "rtx-4070-super"),
            ],
            vec!["racing-simulator".to_string()],
        ))
        .unwrap();
    let model = BuildReadModelBuilder::build(&response);

    let json = JsonFormatter::new().format_build(&model).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_cost"], 998);
    assert_eq!(value["estimates"][0]["display_fps"], 131);
    assert_eq!(value["estimates"][0]["rating"], "excellent");

    let markdown = MarkdownFormatter::new().format_build(&model).unwrap();
    assert!(markdown.contains("| Racing Simulator | 131 | excellent |"));

    let text = TextFormatter::new(false).format_build(&model).unwrap();
    assert!(text.contains("Total cost: 998"));
}

#[test]
fn test_catalog_listing_formats() {
    let response = ListCatalogUseCase::new(MockCatalogSource::builtin(), MockProgressReporter::new())
        .execute()
        .unwrap();
    let model = CatalogReadModelBuilder::build(&response);

    let markdown = MarkdownFormatter::new().format_catalog(&model).unwrap();
    assert!(markdown.contains("`rtx-4090`"));
    assert!(markdown.contains("## Workloads"));

    let json = JsonFormatter::new().format_catalog(&model).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sections"].as_array().unwrap().len(), 6);
    assert_eq!(value["workloads"][0]["base_fps"]["ultra"], 320.0);
}

#[test]
fn test_shared_configuration_in_threads() {
    let catalog = builtin::catalog();
    let shared = SharedBuildConfiguration::new(catalog);

    std::thread::scope(|scope| {
        scope.spawn(|| shared.select(Category::Processor, "r7-7800x3d").unwrap());
        scope.spawn(|| shared.select(Category::Graphics, "rtx-4070-super").unwrap());
        scope.spawn(|| shared.select(Category::PowerSupply, "psu-750-gold").unwrap());
    });

    assert_eq!(shared.total_cost(), 399 + 599 + 109);
    let racing = builtin::workloads().lookup("racing-simulator").unwrap();
    assert!((shared.estimate(racing) - 130.77).abs() < 0.05);
}
