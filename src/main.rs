mod cli;

use cli::Args;
use pc_builder::adapters::outbound::catalog::{BuiltinCatalogSource, FileCatalogSource};
use pc_builder::adapters::outbound::console::StderrProgressReporter;
use pc_builder::application::dto::{BuildRequest, OutputFormat, Selection};
use pc_builder::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pc_builder::application::read_models::{BuildReadModelBuilder, CatalogReadModelBuilder};
use pc_builder::application::use_cases::{EvaluateBuildUseCase, ListCatalogUseCase};
use pc_builder::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use pc_builder::ports::outbound::{CatalogSource, ProgressReporter};
use pc_builder::shared::error::ExitCode;
use pc_builder::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Effective settings after merging CLI flags over the config file
#[derive(Debug, PartialEq)]
struct RunSettings {
    format: OutputFormat,
    color: bool,
    catalog: Option<PathBuf>,
    selections: Vec<Selection>,
    workloads: Vec<String>,
    output: Option<PathBuf>,
    list: bool,
}

impl RunSettings {
    /// CLI flags win over the config file, which wins over defaults.
    /// Config selections come first so a CLI selection in the same
    /// category replaces them.
    fn resolve(args: Args, config: ConfigFile) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let mut selections = config.selections()?;
        selections.extend(args.select);

        let workloads = if args.workload.is_empty() {
            config.workloads.unwrap_or_default()
        } else {
            args.workload
        };

        Ok(Self {
            format,
            color: !args.no_color && config.color.unwrap_or(true),
            catalog: args.catalog.or(config.catalog),
            selections,
            workloads,
            output: args.output,
            list: args.list,
        })
    }
}

fn run(args: Args) -> Result<()> {
    let reporter = StderrProgressReporter::with_quiet(args.quiet);
    let config = load_config(args.config.as_deref(), &reporter)?;
    let settings = RunSettings::resolve(args, config)?;

    let formatted_output = match settings.catalog {
        Some(ref path) => render(FileCatalogSource::new(path), &settings, reporter)?,
        None => render(BuiltinCatalogSource::new(), &settings, reporter)?,
    };

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(explicit: Option<&Path>, reporter: &impl ProgressReporter) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            reporter.report(&format!("📄 Using config file: {}", path.display()));
            load_config_from_path(path)
        }
        None => match discover_config(Path::new("."))? {
            Some(config) => {
                reporter.report(&format!("📄 Auto-discovered config file: {}", CONFIG_FILENAME));
                Ok(config)
            }
            None => Ok(ConfigFile::default()),
        },
    }
}

/// Runs the requested use case against `source` and formats the result
fn render<CS: CatalogSource>(
    source: CS,
    settings: &RunSettings,
    reporter: StderrProgressReporter,
) -> Result<String> {
    let formatter = FormatterFactory::create(settings.format, settings.color);

    if settings.list {
        let response = ListCatalogUseCase::new(source, reporter).execute()?;
        reporter.report(FormatterFactory::progress_message(settings.format));
        return formatter.format_catalog(&CatalogReadModelBuilder::build(&response));
    }

    let request = BuildRequest::new(settings.selections.clone(), settings.workloads.clone());
    let response = EvaluateBuildUseCase::new(source, reporter).execute(request)?;
    reporter.report(FormatterFactory::progress_message(settings.format));
    formatter.format_build(&BuildReadModelBuilder::build(&response))
}
