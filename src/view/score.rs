use std::fmt::Write;

use crate::controller::{GameHistory, HistoryStats, Period, format_game_date};
use crate::score::{Scorecard, format_to_par, round_tier};

#[must_use]
pub fn render_scorecard(card: &Scorecard) -> String {
    let mut out = String::new();
    writeln!(out, "{} - {}", card.course_name(), card.player_name()).ok();
    writeln!(out, "{:>4} {:>4} {:>6} {:>6}  Result", "Hole", "Par", "Yards", "Score").ok();
    for row in card.results() {
        let tier = row.tier.map(|t| format!(" ({t})")).unwrap_or_default();
        writeln!(
            out,
            "{:>4} {:>4} {:>6} {:>6}  {}{tier}",
            row.hole.hole_number, row.hole.par, row.hole.yards, row.strokes, row.result.label
        )
        .ok();
    }
    let summary = card.summary();
    writeln!(
        out,
        "TOTAL {:>3} {:>6} {:>6}  {} ({})",
        summary.total_par, summary.total_yards, summary.total_strokes, summary.to_par_display, summary.tier
    )
    .ok();
    writeln!(out, "Holes Played: {}/{}", summary.holes_played, summary.holes_total).ok();
    out
}

#[must_use]
pub fn render_stats(stats: &HistoryStats) -> String {
    let arrow = if stats.trend <= 0.0 { '↓' } else { '↑' };
    format!(
        "Best Score: {}  Average: {:.1}  Trend: {arrow}{:.1}  Games: {}  Time: {}h {}m",
        stats.best,
        stats.average,
        stats.trend.abs(),
        stats.games,
        stats.total_minutes / 60,
        stats.total_minutes % 60
    )
}

#[must_use]
pub fn render_games(history: &GameHistory, period: Period) -> String {
    let mut out = String::new();
    writeln!(out, "Recent Games ({period})").ok();
    for game in history.filter(period) {
        writeln!(
            out,
            "[{}] {} - {} - {}  score {} ({}, {})  holes {}/18",
            game.id,
            game.course_name,
            format_game_date(game.date),
            game.duration,
            game.total_score,
            format_to_par(game.total_score, game.to_par()),
            round_tier(game.to_par()),
            game.holes_played
        )
        .ok();
    }
    out
}
