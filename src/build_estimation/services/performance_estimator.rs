use crate::build_estimation::domain::{BuildConfiguration, Category, WorkloadProfile, WorkloadSet};
use serde::Serialize;

/// Processor performance score at which the processor modifier is neutral
const PROCESSOR_REFERENCE_SCORE: f64 = 80.0;

/// Memory speed (MT/s) at which the memory modifier is neutral
const MEMORY_REFERENCE_SPEED: f64 = 3200.0;

/// Capacity thresholds (GB) and their multiplicative bonuses, applied cumulatively
const MEMORY_CAPACITY_BONUSES: [(u32, f64); 2] = [(16, 1.05), (32, 1.02)];

/// Graphics scaling spans 80%..120% of the tier base across performance 0..100
const GRAPHICS_SCALING_FLOOR: f64 = 0.8;
const GRAPHICS_SCALING_RANGE: f64 = 0.4;

/// Frame-rate estimate for one workload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRateEstimate {
    pub workload_id: String,
    pub workload_name: String,
    pub fps: f64,
}

impl FrameRateEstimate {
    /// Estimate rounded to the nearest whole frame, as shown to users
    pub fn display_fps(&self) -> u32 {
        // fps is finite and non-negative; saturating cast caps absurd values
        self.fps.round() as u32
    }
}

/// PerformanceEstimator service for frame-rate estimation
///
/// Pure heuristic over a build snapshot and a workload profile; the same
/// inputs always produce the same value.
pub struct PerformanceEstimator;

impl PerformanceEstimator {
    /// Estimates frames per second for `config` running `workload`.
    ///
    /// Steps, in order:
    /// 1. No processor or no graphics card selected: 0.
    /// 2. Start from the workload's base fps for the card's tier (0 if absent).
    /// 3. Scale by `1 + (cpu_perf - 80) / 100 * processor_coefficient`.
    /// 4. With memory selected, scale by `1 + (speed - 3200) / 3200 * memory_coefficient`,
    ///    then by 1.05 at >= 16 GB and a further 1.02 at >= 32 GB.
    /// 5. Scale by `0.8 + 0.4 * gpu_perf / 100`.
    /// 6. Clamp at 0.
    pub fn estimate(config: &BuildConfiguration<'_>, workload: &WorkloadProfile) -> f64 {
        let (Some(processor), Some(graphics)) = (
            config.get(Category::Processor),
            config.get(Category::Graphics),
        ) else {
            return 0.0;
        };

        let mut fps = graphics
            .gpu_tier()
            .and_then(|tier| workload.base_fps(tier))
            .unwrap_or(0.0);

        fps *= Self::processor_modifier(f64::from(processor.performance()), workload);

        if let Some((capacity_gb, speed_mts)) = config
            .get(Category::Memory)
            .and_then(|memory| memory.memory_profile())
        {
            fps *= Self::memory_modifier(f64::from(speed_mts), workload);
            fps *= Self::memory_capacity_bonus(capacity_gb);
        }

        fps *= Self::graphics_scaling(f64::from(graphics.performance()));

        fps.max(0.0)
    }

    /// Estimates every workload in the set, in set order
    pub fn estimate_all<'w>(
        config: &BuildConfiguration<'_>,
        workloads: impl IntoIterator<Item = &'w WorkloadProfile>,
    ) -> Vec<FrameRateEstimate> {
        workloads
            .into_iter()
            .map(|workload| FrameRateEstimate {
                workload_id: workload.id().to_string(),
                workload_name: workload.name().to_string(),
                fps: Self::estimate(config, workload),
            })
            .collect()
    }

    /// Convenience wrapper over [`Self::estimate_all`] for a whole set
    pub fn estimate_set(config: &BuildConfiguration<'_>, workloads: &WorkloadSet) -> Vec<FrameRateEstimate> {
        Self::estimate_all(config, workloads)
    }

    fn processor_modifier(performance: f64, workload: &WorkloadProfile) -> f64 {
        1.0 + ((performance - PROCESSOR_REFERENCE_SCORE) / 100.0) * workload.processor_coefficient()
    }

    fn memory_modifier(speed_mts: f64, workload: &WorkloadProfile) -> f64 {
        1.0 + ((speed_mts - MEMORY_REFERENCE_SPEED) / MEMORY_REFERENCE_SPEED)
            * workload.memory_coefficient()
    }

    fn memory_capacity_bonus(capacity_gb: u32) -> f64 {
        MEMORY_CAPACITY_BONUSES
            .iter()
            .filter(|(threshold, _)| capacity_gb >= *threshold)
            .map(|(_, bonus)| bonus)
            .product()
    }

    fn graphics_scaling(performance: f64) -> f64 {
        GRAPHICS_SCALING_FLOOR + GRAPHICS_SCALING_RANGE * (performance / 100.0)
    }
}
