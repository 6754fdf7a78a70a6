use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::TrackError;
use crate::model::GameRecord;

const RECENT_WINDOW: usize = 3;

/// # Errors
///
/// Will return `Err` if `rounds` is empty
#[allow(clippy::cast_precision_loss)]
pub fn average(rounds: &[u32]) -> Result<f64, TrackError> {
    if rounds.is_empty() {
        return Err(TrackError::EmptyInput("average of no rounds".to_string()));
    }
    let total: u64 = rounds.iter().map(|&r| u64::from(r)).sum();
    Ok(total as f64 / rounds.len() as f64)
}

/// Lowest total score.
///
/// # Errors
///
/// Will return `Err` if `rounds` is empty
pub fn best(rounds: &[u32]) -> Result<u32, TrackError> {
    rounds
        .iter()
        .copied()
        .min()
        .ok_or_else(|| TrackError::EmptyInput("best of no rounds".to_string()))
}

/// Mean of `recent` minus mean of `older`. Negative means scores are coming down.
/// Either side being empty gives 0.
#[must_use]
pub fn aggregate_trend(recent: &[u32], older: &[u32]) -> f64 {
    match (average(recent), average(older)) {
        (Ok(recent_avg), Ok(older_avg)) => recent_avg - older_avg,
        _ => 0.0,
    }
}

/// Trend over a newest-first history: the first three rounds against the next three.
#[must_use]
pub fn history_trend(records: &[GameRecord]) -> f64 {
    if records.len() < 2 {
        return 0.0;
    }
    let totals: Vec<u32> = records.iter().map(|g| g.total_score).collect();
    let split = RECENT_WINDOW.min(totals.len());
    let older_end = (split + RECENT_WINDOW).min(totals.len());
    let trend = aggregate_trend(&totals[..split], &totals[split..older_end]);
    debug!("history trend over {} rounds: {trend}", totals.len());
    trend
}

/// Minutes in a duration such as "4h 15m", "3h" or "55m".
///
/// # Errors
///
/// Will return `Err` if the text has neither an hour nor a minute part
pub fn parse_duration_minutes(text: &str) -> Result<u32, TrackError> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?\s*$")
            .expect("Invalid regex pattern - this is a programming error")
    });

    let caps = re
        .captures(text)
        .ok_or_else(|| TrackError::Parse(format!("unrecognised duration '{text}'")))?;
    let hours = caps.get(1);
    let minutes = caps.get(2);
    if hours.is_none() && minutes.is_none() {
        return Err(TrackError::Parse(format!("empty duration '{text}'")));
    }
    let parse = |m: Option<regex::Match<'_>>| -> Result<u32, TrackError> {
        m.map_or(Ok(0), |m| {
            m.as_str()
                .parse::<u32>()
                .map_err(|e| TrackError::Parse(format!("duration '{text}': {e}")))
        })
    };
    let (hours, minutes) = (parse(hours)?, parse(minutes)?);
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| TrackError::Parse(format!("duration '{text}' is too long")))
}
