use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection quality guessed from distance alone.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalBucket {
    Strong,
    Good,
    Fair,
    Weak,
}

impl fmt::Display for SignalBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalBucket::Strong => "Strong",
            SignalBucket::Good => "Good",
            SignalBucket::Fair => "Fair",
            SignalBucket::Weak => "Weak",
        };
        write!(f, "{name}")
    }
}

/// Each bucket includes its lower bound: exactly 50 yards is `Good`.
#[must_use]
pub fn signal_bucket(distance: f64) -> SignalBucket {
    if distance < 50.0 {
        SignalBucket::Strong
    } else if distance < 100.0 {
        SignalBucket::Good
    } else if distance < 200.0 {
        SignalBucket::Fair
    } else {
        SignalBucket::Weak
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallStatus {
    Signal(SignalBucket),
    Disconnected,
}

impl BallStatus {
    #[must_use]
    pub fn for_ball(connected: bool, distance: f64) -> Self {
        if connected {
            BallStatus::Signal(signal_bucket(distance))
        } else {
            BallStatus::Disconnected
        }
    }
}

impl fmt::Display for BallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallStatus::Signal(bucket) => write!(f, "{bucket}"),
            BallStatus::Disconnected => write!(f, "Disconnected"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryTier {
    High,
    Medium,
    Low,
}

#[must_use]
pub fn battery_tier(level: u8) -> BatteryTier {
    match level {
        61.. => BatteryTier::High,
        31..=60 => BatteryTier::Medium,
        _ => BatteryTier::Low,
    }
}
