use clap::Parser;
use pc_builder::application::dto::{OutputFormat, Selection};
use std::path::PathBuf;

/// Configure a PC build from a component catalog and estimate its frame rates
#[derive(Parser, Debug)]
#[command(name = "pc-builder")]
#[command(version)]
#[command(
    about = "Configure a PC build from a component catalog and estimate its frame rates",
    long_about = None
)]
pub struct Args {
    /// Select a component: CATEGORY=ID (e.g. gpu=rtx-4070-super)
    /// Can be specified multiple times; a later selection replaces an
    /// earlier one in the same category
    #[arg(short, long = "select", value_name = "CATEGORY=ID")]
    pub select: Vec<Selection>,

    /// Estimate only these workloads (defaults to all)
    #[arg(short, long = "workload", value_name = "WORKLOAD")]
    pub workload: Vec<String>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML catalog file to use instead of the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Path to a config file (defaults to ./pc-builder.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List the catalog and workloads instead of evaluating a build
    #[arg(long)]
    pub list: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress progress messages (warnings are still shown)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
