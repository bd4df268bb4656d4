use serde::Serialize;

/// FrameRateRating policy for bucketing estimated frame rates for display
///
/// Buckets are applied to the estimate rounded to a whole frame, so the
/// rating always agrees with the number shown next to it.
///
/// | Rounded fps | Rating    |
/// |-------------|-----------|
/// | >= 120      | Excellent |
/// | >= 60       | Good      |
/// | >= 30       | Playable  |
/// | otherwise   | Poor      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameRateRating {
    Poor,
    Playable,
    Good,
    Excellent,
}

const EXCELLENT_THRESHOLD: f64 = 120.0;
const GOOD_THRESHOLD: f64 = 60.0;
const PLAYABLE_THRESHOLD: f64 = 30.0;

impl FrameRateRating {
    pub fn from_fps(fps: f64) -> Self {
        let shown = fps.round();
        if shown >= EXCELLENT_THRESHOLD {
            FrameRateRating::Excellent
        } else if shown >= GOOD_THRESHOLD {
            FrameRateRating::Good
        } else if shown >= PLAYABLE_THRESHOLD {
            FrameRateRating::Playable
        } else {
            FrameRateRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrameRateRating::Excellent => "excellent",
            FrameRateRating::Good => "good",
            FrameRateRating::Playable => "playable",
            FrameRateRating::Poor => "poor",
        }
    }
}

impl std::fmt::Display for FrameRateRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
