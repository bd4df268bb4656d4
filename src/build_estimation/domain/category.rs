use crate::shared::error::BuildError;
use serde::{Deserialize, Serialize};

/// Component category of a build
///
/// The set is closed: a build holds at most one component per category.
/// Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Processor,
    Graphics,
    Memory,
    Storage,
    Mainboard,
    PowerSupply,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 6] = [
        Category::Processor,
        Category::Graphics,
        Category::Memory,
        Category::Storage,
        Category::Mainboard,
        Category::PowerSupply,
    ];

    /// Canonical kebab-case name, as used in catalog files and selections
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Processor => "processor",
            Category::Graphics => "graphics",
            Category::Memory => "memory",
            Category::Storage => "storage",
            Category::Mainboard => "mainboard",
            Category::PowerSupply => "power-supply",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Processor => "CPU - Central Processing Unit",
            Category::Graphics => "GPU - Graphics Processing Unit",
            Category::Memory => "RAM - Random Access Memory",
            Category::Storage => "Storage Drives",
            Category::Mainboard => "Motherboard",
            Category::PowerSupply => "Power Supply Unit (PSU)",
        }
    }

    /// One-sentence explanation of what the part does in a build
    pub fn description(&self) -> &'static str {
        match self {
            Category::Processor => {
                "Executes every instruction the system runs; a faster chip keeps the graphics card fed with work."
            }
            Category::Graphics => {
                "Renders each frame you see; its tier sets the baseline frame rate in every game."
            }
            Category::Memory => {
                "Short-term working storage for the processor; speed and capacity both nudge frame rates."
            }
            Category::Storage => {
                "Long-term storage for the system and games; fast drives shorten load times."
            }
            Category::Mainboard => {
                "The circuit board that connects every other part and lets them talk to each other."
            }
            Category::PowerSupply => {
                "Converts wall power into the voltages each component needs."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = BuildError;

    /// Accepts canonical names plus the short hardware aliases (`cpu`, `gpu`, `ram`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "processor" | "cpu" => Ok(Category::Processor),
            "graphics" | "gpu" => Ok(Category::Graphics),
            "memory" | "ram" => Ok(Category::Memory),
            "storage" | "disk" => Ok(Category::Storage),
            "mainboard" | "motherboard" => Ok(Category::Mainboard),
            "power-supply" | "power" | "psu" => Ok(Category::PowerSupply),
            _ => Err(BuildError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}
