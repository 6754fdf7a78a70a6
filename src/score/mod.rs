pub mod aggregate;
pub mod classify;
pub mod scorecard;

pub use aggregate::{aggregate_trend, average, best, history_trend, parse_duration_minutes};
pub use classify::{classify, color_tier, format_to_par, round_tier, total_tier};
pub use scorecard::{HoleResult, Scorecard, ScorecardSummary};
