//! Default catalog and reference workloads.
//!
//! Both are built once, on first use, and shared for the rest of the
//! process. A catalog file can replace them at the application layer.

use crate::build_estimation::domain::{
    Catalog, ComponentRecord, ComponentSpecs, GpuTier, StorageInterface, WorkloadProfile,
    WorkloadSet,
};
use crate::shared::error::BuildError;
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

static CATALOG: LazyLock<Arc<Catalog>> =
    LazyLock::new(|| Arc::new(build_catalog().expect("built-in catalog data is valid")));

static WORKLOADS: LazyLock<Arc<WorkloadSet>> =
    LazyLock::new(|| Arc::new(build_workloads().expect("built-in workload data is valid")));

/// The process-wide default catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// The process-wide reference workloads
pub fn workloads() -> &'static WorkloadSet {
    &WORKLOADS
}

/// Shared handle to the default catalog
pub fn shared_catalog() -> Arc<Catalog> {
    Arc::clone(&CATALOG)
}

/// Shared handle to the reference workloads
pub fn shared_workloads() -> Arc<WorkloadSet> {
    Arc::clone(&WORKLOADS)
}

fn processor(
    id: &str,
    name: &str,
    price: u32,
    performance: u8,
    (cores, threads): (u32, u32),
    socket: &str,
    tdp_watts: u32,
) -> Result<ComponentRecord, BuildError> {
    let specs = ComponentSpecs::Processor {
        cores,
        threads,
        socket: socket.to_string(),
        tdp_watts,
    };
    ComponentRecord::new(id, name, price, performance, specs)
}

fn graphics(
    id: &str,
    name: &str,
    price: u32,
    performance: u8,
    tier: GpuTier,
    vram_gb: u32,
    tdp_watts: u32,
) -> Result<ComponentRecord, BuildError> {
    let specs = ComponentSpecs::Graphics {
        tier,
        vram_gb,
        tdp_watts,
    };
    ComponentRecord::new(id, name, price, performance, specs)
}

fn memory(
    id: &str,
    name: &str,
    price: u32,
    performance: u8,
    capacity_gb: u32,
    speed_mts: u32,
) -> Result<ComponentRecord, BuildError> {
    let specs = ComponentSpecs::Memory {
        capacity_gb,
        speed_mts,
    };
    ComponentRecord::new(id, name, price, performance, specs)
}

fn storage(
    id: &str,
    name: &str,
    price: u32,
    performance: u8,
    capacity_gb: u32,
    interface: StorageInterface,
) -> Result<ComponentRecord, BuildError> {
    let specs = ComponentSpecs::Storage {
        capacity_gb,
        interface,
    };
    ComponentRecord::new(id, name, price, performance, specs)
}

fn mainboard(
    id: &str,
    name: &str,
    price: u32,
    performance: u8,
    socket: &str,
    form_factor: &str,
) -> Result<ComponentRecord, BuildError> {
    let specs = ComponentSpecs::Mainboard {
        socket: socket.to_string(),
        form_factor: form_factor.to_string(),
    };
    ComponentRecord::new(id, name, price, performance, specs)
}

fn power_supply(
    id: &str,
    name: &str,
    price: u32,
    performance: u8,
    wattage: u32,
    efficiency: &str,
) -> Result<ComponentRecord, BuildError> {
    let specs = ComponentSpecs::PowerSupply {
        wattage,
        efficiency: efficiency.to_string(),
    };
    ComponentRecord::new(id, name, price, performance, specs)
}

fn build_catalog() -> Result<Catalog, BuildError> {
    use GpuTier::*;
    use StorageInterface::*;

    let records = vec![
        processor("i3-12100f", "Intel Core i3-12100F", 99, 55, (4, 8), "LGA1700", 58)?,
        processor("r5-7600", "AMD Ryzen 5 7600", 199, 74, (6, 12), "AM5", 65)?,
        processor("i5-13600k", "Intel Core i5-13600K", 289, 82, (14, 20), "LGA1700", 125)?,
        processor("r7-7800x3d", "AMD Ryzen 7 7800X3D", 399, 95, (8, 16), "AM5", 120)?,
        processor("i9-14900k", "Intel Core i9-14900K", 549, 97, (24, 32), "LGA1700", 125)?,
        graphics("gtx-1650", "NVIDIA GeForce GTX 1650", 149, 35, Low, 4, 75)?,
        graphics("rx-7600", "AMD Radeon RX 7600", 269, 58, Mid, 8, 165)?,
        graphics("rtx-4060-ti", "NVIDIA GeForce RTX 4060 Ti", 399, 70, Mid, 8, 160)?,
        graphics("rtx-4070-super", "NVIDIA GeForce RTX 4070 Super", 599, 92, High, 12, 220)?,
        graphics("rx-7900-xtx", "AMD Radeon RX 7900 XTX", 899, 88, Ultra, 24, 355)?,
        graphics("rtx-4090", "NVIDIA GeForce RTX 4090", 1599, 100, Ultra, 24, 450)?,
        memory("ddr4-8-3200", "8 GB DDR4-3200", 25, 40, 8, 3200)?,
        memory("ddr4-16-3600", "16 GB DDR4-3600", 45, 60, 16, 3600)?,
        memory("ddr5-32-6000", "32 GB DDR5-6000", 110, 85, 32, 6000)?,
        memory("ddr5-64-6400", "64 GB DDR5-6400", 220, 95, 64, 6400)?,
        storage("hdd-2tb", "2 TB 7200 RPM Hard Drive", 55, 20, 2000, Hdd)?,
        storage("sata-1tb", "1 TB SATA SSD", 65, 55, 1000, Sata)?,
        storage("nvme-1tb", "1 TB NVMe Gen4 SSD", 85, 80, 1000, Nvme)?,
        storage("nvme-2tb", "2 TB NVMe Gen4 SSD", 150, 90, 2000, Nvme)?,
        mainboard("b660m", "B660M Micro-ATX", 119, 55, "LGA1700", "Micro-ATX")?,
        mainboard("b650", "B650 ATX", 169, 65, "AM5", "ATX")?,
        mainboard("z790", "Z790 ATX", 259, 85, "LGA1700", "ATX")?,
        mainboard("x670e", "X670E ATX", 329, 90, "AM5", "ATX")?,
        power_supply("psu-550-bronze", "550 W 80+ Bronze", 55, 45, 550, "80+ Bronze")?,
        power_supply("psu-750-gold", "750 W 80+ Gold", 109, 75, 750, "80+ Gold")?,
        power_supply("psu-1000-platinum", "1000 W 80+ Platinum", 229, 92, 1000, "80+ Platinum")?,
    ];

    Catalog::new(records)
}

fn workload(
    id: &str,
    name: &str,
    [low, mid, high, ultra]: [f64; 4],
    processor_coefficient: f64,
    memory_coefficient: f64,
) -> Result<WorkloadProfile, BuildError> {
    let base_fps = BTreeMap::from([
        (GpuTier::Low, low),
        (GpuTier::Mid, mid),
        (GpuTier::High, high),
        (GpuTier::Ultra, ultra),
    ]);
    WorkloadProfile::new(id, name, base_fps, processor_coefficient, memory_coefficient)
}

fn build_workloads() -> Result<WorkloadSet, BuildError> {
    WorkloadSet::new(vec![
        workload(
            "competitive-shooter",
            "Competitive Shooter",
            [90.0, 160.0, 240.0, 320.0],
            0.35,
            0.15,
        )?,
        workload(
            "open-world-adventure",
            "Open-World Adventure",
            [35.0, 60.0, 85.0, 120.0],
            0.15,
            0.08,
        )?,
        workload(
            "racing-simulator",
            "Racing Simulator",
            [50.0, 80.0, 110.0, 150.0],
            0.12,
            0.05,
        )?,
    ])
}
