mod frame_rate_rating;

pub use frame_rate_rating::FrameRateRating;
