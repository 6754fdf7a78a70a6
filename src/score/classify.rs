use crate::model::{ColorTier, ScoreLabel, ScoreResult};

/// Zero strokes means the hole has not been played yet.
#[must_use]
pub fn classify(strokes: u32, par: u8) -> ScoreResult {
    if strokes == 0 {
        return ScoreResult {
            label: ScoreLabel::Unplayed,
            differential: None,
        };
    }
    let differential = i64::from(strokes) - i64::from(par);
    ScoreResult {
        label: ScoreLabel::from_differential(differential),
        differential: Some(differential),
    }
}

/// Five tiers keyed to the golf terms, used for per-hole results.
#[must_use]
pub fn color_tier(differential: i64) -> ColorTier {
    match differential {
        i64::MIN..=-2 => ColorTier::Excellent,
        -1 => ColorTier::Good,
        0 => ColorTier::Neutral,
        1 => ColorTier::Warning,
        _ => ColorTier::Poor,
    }
}

/// Three tiers by sign, used for running scorecard totals.
#[must_use]
pub fn total_tier(differential: i64) -> ColorTier {
    match differential.signum() {
        0 => ColorTier::Neutral,
        -1 => ColorTier::Good,
        _ => ColorTier::Poor,
    }
}

/// Three tiers for a finished round: even or better, within five, or worse.
#[must_use]
pub fn round_tier(differential: i64) -> ColorTier {
    match differential {
        i64::MIN..=0 => ColorTier::Good,
        1..=5 => ColorTier::Warning,
        _ => ColorTier::Poor,
    }
}

/// "-" before any strokes, otherwise a signed differential; even par reads "+0".
#[must_use]
pub fn format_to_par(total_strokes: u32, differential: i64) -> String {
    if total_strokes == 0 {
        "-".to_string()
    } else if differential >= 0 {
        format!("+{differential}")
    } else {
        differential.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_unplayed() {
        let result = classify(0, 4);
        assert_eq!(result.label, ScoreLabel::Unplayed);
        assert_eq!(result.differential, None);
    }

    #[test]
    fn classify_named_results() {
        assert_eq!(classify(2, 4).label, ScoreLabel::EagleOrBetter);
        assert_eq!(classify(1, 5).label, ScoreLabel::EagleOrBetter);
        let birdie = classify(3, 4);
        assert_eq!(birdie.label, ScoreLabel::Birdie);
        assert_eq!(birdie.differential, Some(-1));
        let par = classify(4, 4);
        assert_eq!(par.label, ScoreLabel::Par);
        assert_eq!(par.differential, Some(0));
        assert_eq!(classify(5, 4).label, ScoreLabel::Bogey);
    }

    #[test]
    fn classify_double_bogey_is_textual() {
        let result = classify(6, 4);
        assert_eq!(result.label.to_string(), "+2");
        assert_eq!(result.differential, Some(2));
    }

    #[test]
    fn five_tier_colors() {
        assert_eq!(color_tier(-3), ColorTier::Excellent);
        assert_eq!(color_tier(-2), ColorTier::Excellent);
        assert_eq!(color_tier(-1), ColorTier::Good);
        assert_eq!(color_tier(0), ColorTier::Neutral);
        assert_eq!(color_tier(1), ColorTier::Warning);
        assert_eq!(color_tier(2), ColorTier::Poor);
        assert_eq!(color_tier(9), ColorTier::Poor);
    }

    #[test]
    fn three_tier_schemes_differ() {
        assert_eq!(total_tier(0), ColorTier::Neutral);
        assert_eq!(total_tier(-4), ColorTier::Good);
        assert_eq!(total_tier(3), ColorTier::Poor);

        assert_eq!(round_tier(0), ColorTier::Good);
        assert_eq!(round_tier(5), ColorTier::Warning);
        assert_eq!(round_tier(6), ColorTier::Poor);
    }

    #[test]
    fn to_par_text() {
        assert_eq!(format_to_par(0, -72), "-");
        assert_eq!(format_to_par(72, 0), "+0");
        assert_eq!(format_to_par(85, 13), "+13");
        assert_eq!(format_to_par(70, -2), "-2");
    }
}
