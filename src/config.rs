//! Configuration file support for pc-builder.
//!
//! Provides YAML-based configuration through `pc-builder.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::application::dto::{OutputFormat, Selection};
use crate::build_estimation::domain::Category;
use crate::shared::security::{read_guarded_file, MAX_DATA_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pc-builder.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Path to a TOML catalog file
    pub catalog: Option<PathBuf>,
    /// Category name (or alias) to component id
    pub build: Option<BTreeMap<String, String>>,
    pub workloads: Option<Vec<String>>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The `build` map as selections, in category order
    pub fn selections(&self) -> Result<Vec<Selection>> {
        let mut selections = Vec::new();
        if let Some(ref build) = self.build {
            for (category, id) in build {
                let category: Category = category.parse()?;
                selections.push(Selection::new(category, id.trim()));
            }
        }
        selections.sort_by_key(|selection| selection.category);
        Ok(selections)
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        match self.format {
            Some(ref format) => format
                .parse::<OutputFormat>()
                .map(Some)
                .map_err(|e| anyhow::anyhow!("Invalid config: {}", e)),
            None => Ok(None),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_guarded_file(path, "config file", MAX_DATA_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    if let Some(ref build) = config.build {
        let mut seen: BTreeMap<Category, &str> = BTreeMap::new();
        for (key, id) in build {
            let Ok(category) = key.parse::<Category>() else {
                bail!(
                    "Invalid config: build.{} is not a component category.\n\n\
                     💡 Hint: Use one of processor, graphics, memory, storage, mainboard, power-supply.",
                    key
                );
            };
            if let Some(previous) = seen.insert(category, key.as_str()) {
                bail!(
                    "Invalid config: build.{} and build.{} both select {}.\n\n\
                     💡 Hint: Keep a single entry per category.",
                    previous,
                    key,
                    category
                );
            }
            if id.trim().is_empty() {
                bail!(
                    "Invalid config: build.{} must not be empty.\n\n\
                     💡 Hint: Each build entry maps a category to a component id (e.g., \"gpu: rtx-4070-super\").",
                    key
                );
            }
        }
    }

    if let Some(ref workloads) = config.workloads {
        for (i, id) in workloads.iter().enumerate() {
            if id.trim().is_empty() {
                bail!(
                    "Invalid config: workloads[{}] must not be empty.\n\n\
                     💡 Hint: List workload ids such as \"racing-simulator\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
