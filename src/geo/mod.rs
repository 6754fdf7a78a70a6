pub mod distance;
pub mod signal;

pub use distance::{Candidate, YARDS_PER_MAP_UNIT, display_yards, distance, distance_with_scale, nearest};
pub use signal::{BallStatus, BatteryTier, SignalBucket, battery_tier, signal_bucket};
