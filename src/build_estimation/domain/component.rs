use super::category::Category;
use crate::shared::error::BuildError;
use serde::{Deserialize, Serialize};

/// Maximum value of a component performance score
pub const MAX_PERFORMANCE: u8 = 100;

/// Coarse graphics-card performance bracket.
///
/// Used as the key into a workload's base frame-rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuTier {
    Low,
    Mid,
    High,
    Ultra,
}

impl GpuTier {
    pub const ALL: [GpuTier; 4] = [GpuTier::Low, GpuTier::Mid, GpuTier::High, GpuTier::Ultra];

    pub fn as_str(&self) -> &'static str {
        match self {
            GpuTier::Low => "low",
            GpuTier::Mid => "mid",
            GpuTier::High => "high",
            GpuTier::Ultra => "ultra",
        }
    }
}

impl std::fmt::Display for GpuTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage device interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageInterface {
    Hdd,
    Sata,
    Nvme,
}

impl std::fmt::Display for StorageInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageInterface::Hdd => write!(f, "HDD"),
            StorageInterface::Sata => write!(f, "SATA SSD"),
            StorageInterface::Nvme => write!(f, "NVMe SSD"),
        }
    }
}

/// Category-specific attributes of a component.
///
/// One variant per category, so a memory speed can never be read off a
/// graphics card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum ComponentSpecs {
    Processor {
        cores: u32,
        threads: u32,
        socket: String,
        tdp_watts: u32,
    },
    Graphics {
        tier: GpuTier,
        vram_gb: u32,
        tdp_watts: u32,
    },
    Memory {
        capacity_gb: u32,
        speed_mts: u32,
    },
    Storage {
        capacity_gb: u32,
        interface: StorageInterface,
    },
    Mainboard {
        socket: String,
        form_factor: String,
    },
    PowerSupply {
        wattage: u32,
        efficiency: String,
    },
}

impl ComponentSpecs {
    pub fn category(&self) -> Category {
        match self {
            ComponentSpecs::Processor { .. } => Category::Processor,
            ComponentSpecs::Graphics { .. } => Category::Graphics,
            ComponentSpecs::Memory { .. } => Category::Memory,
            ComponentSpecs::Storage { .. } => Category::Storage,
            ComponentSpecs::Mainboard { .. } => Category::Mainboard,
            ComponentSpecs::PowerSupply { .. } => Category::PowerSupply,
        }
    }

    /// Short human-readable attribute summary, e.g. "8C/16T, AM5, 120 W"
    pub fn summary(&self) -> String {
        match self {
            ComponentSpecs::Processor {
                cores,
                threads,
                socket,
                tdp_watts,
            } => format!("{}C/{}T, {}, {} W", cores, threads, socket, tdp_watts),
            ComponentSpecs::Graphics {
                tier,
                vram_gb,
                tdp_watts,
            } => format!("{} tier, {} GB VRAM, {} W", tier, vram_gb, tdp_watts),
            ComponentSpecs::Memory {
                capacity_gb,
                speed_mts,
            } => format!("{} GB @ {} MT/s", capacity_gb, speed_mts),
            ComponentSpecs::Storage {
                capacity_gb,
                interface,
            } => format!("{} GB {}", capacity_gb, interface),
            ComponentSpecs::Mainboard {
                socket,
                form_factor,
            } => format!("{}, {}", socket, form_factor),
            ComponentSpecs::PowerSupply {
                wattage,
                efficiency,
            } => format!("{} W, {}", wattage, efficiency),
        }
    }
}

/// A purchasable part in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    id: String,
    name: String,
    price: u32,
    performance: u8,
    #[serde(flatten)]
    specs: ComponentSpecs,
}

impl ComponentRecord {
    /// Creates a validated component record
    ///
    /// # Errors
    /// Returns `BuildError::CatalogValidation` if the id or name is blank or the
    /// performance score is above 100
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u32,
        performance: u8,
        specs: ComponentSpecs,
    ) -> Result<Self, BuildError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(BuildError::CatalogValidation {
                message: format!("{} component id must not be empty", specs.category()),
            });
        }
        if name.trim().is_empty() {
            return Err(BuildError::CatalogValidation {
                message: format!("component '{}' has an empty name", id),
            });
        }
        if performance > MAX_PERFORMANCE {
            return Err(BuildError::CatalogValidation {
                message: format!(
                    "component '{}' has performance {} (must be 0-{})",
                    id, performance, MAX_PERFORMANCE
                ),
            });
        }

        Ok(Self {
            id,
            name,
            price,
            performance,
            specs,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn performance(&self) -> u8 {
        self.performance
    }

    pub fn specs(&self) -> &ComponentSpecs {
        &self.specs
    }

    pub fn category(&self) -> Category {
        self.specs.category()
    }

    /// Graphics tier, for graphics cards only
    pub fn gpu_tier(&self) -> Option<GpuTier> {
        match self.specs {
            ComponentSpecs::Graphics { tier, .. } => Some(tier),
            _ => None,
        }
    }

    /// (capacity in GB, speed in MT/s), for memory kits only
    pub fn memory_profile(&self) -> Option<(u32, u32)> {
        match self.specs {
            ComponentSpecs::Memory {
                capacity_gb,
                speed_mts,
            } => Some((capacity_gb, speed_mts)),
            _ => None,
        }
    }
}
