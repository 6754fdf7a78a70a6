use std::fmt::Write;

use crate::controller::{BallCard, CourseSession, DistanceReadout, Navigation};
use crate::error::TrackError;

/// # Errors
///
/// Will return `Err` if a distance cannot be computed
pub fn render_course(session: &CourseSession) -> Result<String, TrackError> {
    let readout = session.readout()?;
    let cards = session.ball_cards()?;
    Ok(render_course_parts(session, &readout, &cards))
}

#[must_use]
pub fn render_course_parts(
    session: &CourseSession,
    readout: &DistanceReadout,
    cards: &[BallCard],
) -> String {
    let mut out = String::new();
    let bluetooth = if session.bluetooth_connected() { "on" } else { "off" };
    writeln!(out, "{} - Hole {} (bluetooth {bluetooth})", session.course_name(), session.current_hole()).ok();
    writeln!(out, "To Hole: {} yds", readout.to_hole).ok();
    match &readout.nearest {
        Some(ball) => writeln!(out, "Nearest Ball: {} yds ({})", ball.yards, ball.name).ok(),
        None => writeln!(out, "Nearest Ball: none connected").ok(),
    };
    writeln!(out, "Tracked Balls:").ok();
    for card in cards {
        let marker = if card.selected { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<10} {:>4} yds  {:<12} battery {}% ({:?})",
            card.name, card.yards, card.status.to_string(), card.battery_level, card.battery
        )
        .ok();
    }
    out
}

#[must_use]
pub fn render_navigation(nav: &Navigation) -> String {
    format!("Navigate to {}: {} yds", nav.ball_name, nav.yards)
}
