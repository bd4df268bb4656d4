//! TOML catalog file format.
//!
//! ```toml
//! [[component]]
//! category = "graphics"
//! id = "rtx-4070-super"
//! name = "NVIDIA GeForce RTX 4070 Super"
//! price = 599
//! performance = 92
//! tier = "high"
//! vram_gb = 12
//! tdp_watts = 220
//!
//! [[workload]]
//! id = "racing-simulator"
//! name = "Racing Simulator"
//! processor_coefficient = 0.12
//! memory_coefficient = 0.05
//! base_fps = { low = 50, mid = 80, high = 110, ultra = 150 }
//! ```
//!
//! Each component carries the attributes its category needs; attributes
//! belonging to other categories are ignored.

use crate::build_estimation::domain::{
    Catalog, Category, ComponentRecord, ComponentSpecs, GpuTier, StorageInterface,
    WorkloadProfile, WorkloadSet,
};
use crate::shared::error::BuildError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed and validated contents of a catalog file
#[derive(Debug, Clone)]
pub struct CatalogFileData {
    pub catalog: Catalog,
    /// `None` when the file defines no workloads
    pub workloads: Option<WorkloadSet>,
}

#[derive(Debug, Deserialize)]
struct RawCatalogFile {
    #[serde(default, rename = "component")]
    components: Vec<RawComponent>,
    #[serde(default, rename = "workload")]
    workloads: Vec<RawWorkload>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    category: String,
    id: String,
    name: String,
    price: u32,
    performance: u32,
    cores: Option<u32>,
    threads: Option<u32>,
    socket: Option<String>,
    tdp_watts: Option<u32>,
    tier: Option<GpuTier>,
    vram_gb: Option<u32>,
    capacity_gb: Option<u32>,
    speed_mts: Option<u32>,
    interface: Option<StorageInterface>,
    form_factor: Option<String>,
    wattage: Option<u32>,
    efficiency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWorkload {
    id: String,
    name: Option<String>,
    #[serde(default)]
    base_fps: BTreeMap<GpuTier, f64>,
    processor_coefficient: f64,
    memory_coefficient: f64,
}

/// Parses catalog file content
///
/// # Errors
/// - `BuildError::CatalogParseError` for malformed TOML or wrongly typed values
/// - `BuildError::UnknownCategory` for an unrecognised `category`
/// - `BuildError::CatalogValidation` for a missing attribute, out-of-range
///   score or duplicate id
pub fn parse_catalog_file(content: &str, path: &Path) -> Result<CatalogFileData, BuildError> {
    let raw: RawCatalogFile = toml::from_str(content).map_err(|e| BuildError::CatalogParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let records = raw
        .components
        .into_iter()
        .map(RawComponent::into_record)
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = Catalog::new(records)?;

    let workloads = if raw.workloads.is_empty() {
        None
    } else {
        let profiles = raw
            .workloads
            .into_iter()
            .map(RawWorkload::into_profile)
            .collect::<Result<Vec<_>, _>>()?;
        Some(WorkloadSet::new(profiles)?)
    };

    Ok(CatalogFileData { catalog, workloads })
}

impl RawComponent {
    fn into_record(self) -> Result<ComponentRecord, BuildError> {
        let category: Category = self.category.parse()?;
        let id = self.id;
        let missing = |field: &str| BuildError::CatalogValidation {
            message: format!("{} component '{}' is missing '{}'", category, id, field),
        };

        let specs = match category {
            Category::Processor => ComponentSpecs::Processor {
                cores: self.cores.ok_or_else(|| missing("cores"))?,
                threads: self.threads.ok_or_else(|| missing("threads"))?,
                socket: self.socket.ok_or_else(|| missing("socket"))?,
                tdp_watts: self.tdp_watts.ok_or_else(|| missing("tdp_watts"))?,
            },
            Category::Graphics => ComponentSpecs::Graphics {
                tier: self.tier.ok_or_else(|| missing("tier"))?,
                vram_gb: self.vram_gb.ok_or_else(|| missing("vram_gb"))?,
                tdp_watts: self.tdp_watts.ok_or_else(|| missing("tdp_watts"))?,
            },
            Category::Memory => ComponentSpecs::Memory {
                capacity_gb: self.capacity_gb.ok_or_else(|| missing("capacity_gb"))?,
                speed_mts: self.speed_mts.ok_or_else(|| missing("speed_mts"))?,
            },
            Category::Storage => ComponentSpecs::Storage {
                capacity_gb: self.capacity_gb.ok_or_else(|| missing("capacity_gb"))?,
                interface: self.interface.ok_or_else(|| missing("interface"))?,
            },
            Category::Mainboard => ComponentSpecs::Mainboard {
                socket: self.socket.ok_or_else(|| missing("socket"))?,
                form_factor: self.form_factor.ok_or_else(|| missing("form_factor"))?,
            },
            Category::PowerSupply => ComponentSpecs::PowerSupply {
                wattage: self.wattage.ok_or_else(|| missing("wattage"))?,
                efficiency: self.efficiency.ok_or_else(|| missing("efficiency"))?,
            },
        };

        let performance = u8::try_from(self.performance).map_err(|_| BuildError::CatalogValidation {
            message: format!(
                "component '{}' has performance {} (must be 0-100)",
                id, self.performance
            ),
        })?;

        ComponentRecord::new(id, self.name, self.price, performance, specs)
    }
}

impl RawWorkload {
    fn into_profile(self) -> Result<WorkloadProfile, BuildError> {
        let name = self.name.unwrap_or_else(|| self.id.clone());
        WorkloadProfile::new(
            self.id,
            name,
            self.base_fps,
            self.processor_coefficient,
            self.memory_coefficient,
        )
    }
}
