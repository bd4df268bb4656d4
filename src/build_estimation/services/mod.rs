mod performance_estimator;

pub use performance_estimator::{FrameRateEstimate, PerformanceEstimator};
