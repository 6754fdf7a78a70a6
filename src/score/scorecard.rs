use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::TrackError;
use crate::model::{ColorTier, CourseData, GameRecord, HoleSpec, ScoreEntry, ScoreResult};
use crate::score::classify::{classify, color_tier, format_to_par, total_tier};

/// One row of the scorecard table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HoleResult {
    pub hole: HoleSpec,
    pub strokes: u32,
    pub result: ScoreResult,
    /// `None` while the hole is unplayed.
    pub tier: Option<ColorTier>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScorecardSummary {
    pub total_strokes: u32,
    pub total_par: u32,
    pub total_yards: u32,
    pub to_par: i64,
    pub to_par_display: String,
    pub tier: ColorTier,
    pub holes_played: usize,
    pub holes_total: usize,
}

/// Strokes per hole for one round on one course.
#[derive(Clone, Debug)]
pub struct Scorecard {
    course_name: String,
    player_name: String,
    holes: Vec<HoleSpec>,
    strokes: BTreeMap<u8, u32>,
}

impl Scorecard {
    /// # Errors
    ///
    /// Will return `Err` if a hole is invalid or a hole number repeats
    pub fn new(course: CourseData) -> Result<Self, TrackError> {
        course.validate()?;
        let strokes = course.holes.iter().map(|h| (h.hole_number, 0)).collect();
        Ok(Self {
            course_name: course.course_name,
            player_name: "Your Game".to_string(),
            holes: course.holes,
            strokes,
        })
    }

    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    #[must_use]
    pub fn holes(&self) -> &[HoleSpec] {
        &self.holes
    }

    fn slot(&mut self, hole_number: u8) -> Result<&mut u32, TrackError> {
        self.strokes
            .get_mut(&hole_number)
            .ok_or_else(|| TrackError::NotFound(format!("hole {hole_number} is not on this card")))
    }

    /// Adds `delta` strokes to a hole, never going below zero. Returns the new count.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the hole is not on this card
    pub fn adjust(&mut self, hole_number: u8, delta: i32) -> Result<u32, TrackError> {
        let slot = self.slot(hole_number)?;
        let updated = if delta.is_negative() {
            slot.saturating_sub(delta.unsigned_abs())
        } else {
            slot.saturating_add(delta.unsigned_abs())
        };
        *slot = updated;
        info!("hole {hole_number}: {delta:+} -> {updated} strokes");
        Ok(updated)
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole is not on this card
    pub fn set_strokes(&mut self, hole_number: u8, strokes: u32) -> Result<(), TrackError> {
        *self.slot(hole_number)? = strokes;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole is not on this card
    pub fn strokes(&self, hole_number: u8) -> Result<u32, TrackError> {
        self.strokes
            .get(&hole_number)
            .copied()
            .ok_or_else(|| TrackError::NotFound(format!("hole {hole_number} is not on this card")))
    }

    #[must_use]
    pub fn entries(&self) -> Vec<ScoreEntry> {
        self.strokes
            .iter()
            .map(|(&hole_number, &strokes)| ScoreEntry { hole_number, strokes })
            .collect()
    }

    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }

    #[must_use]
    pub fn total_yards(&self) -> u32 {
        self.holes.iter().map(|h| h.yards).sum()
    }

    /// Saturates at `u32::MAX`.
    #[must_use]
    pub fn total_strokes(&self) -> u32 {
        self.strokes.values().fold(0, |acc, &s| acc.saturating_add(s))
    }

    /// Total strokes against the par of the whole course, played or not.
    #[must_use]
    pub fn to_par(&self) -> i64 {
        i64::from(self.total_strokes()) - i64::from(self.total_par())
    }

    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.strokes.values().filter(|&&s| s > 0).count()
    }

    #[must_use]
    pub fn results(&self) -> Vec<HoleResult> {
        self.holes
            .iter()
            .map(|hole| {
                let strokes = self.strokes.get(&hole.hole_number).copied().unwrap_or(0);
                let result = classify(strokes, hole.par);
                HoleResult {
                    hole: *hole,
                    strokes,
                    result,
                    tier: result.differential.map(color_tier),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> ScorecardSummary {
        let total_strokes = self.total_strokes();
        let to_par = self.to_par();
        ScorecardSummary {
            total_strokes,
            total_par: self.total_par(),
            total_yards: self.total_yards(),
            to_par,
            to_par_display: format_to_par(total_strokes, to_par),
            tier: total_tier(to_par),
            holes_played: self.holes_played(),
            holes_total: self.holes.len(),
        }
    }

    /// Closes the round into a history record. Best and worst holes are picked by
    /// differential among played holes; the earlier hole wins a tie.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no hole has been played
    pub fn finish(&self, date: NaiveDate, duration: impl Into<String>) -> Result<GameRecord, TrackError> {
        let played: Vec<(u8, i64)> = self
            .results()
            .into_iter()
            .filter_map(|r| r.result.differential.map(|d| (r.hole.hole_number, d)))
            .collect();

        let mut iter = played.iter().copied();
        let Some(first) = iter.next() else {
            warn!("refusing to finish {} with no holes played", self.course_name);
            return Err(TrackError::EmptyInput(format!(
                "no holes played on {}",
                self.course_name
            )));
        };
        let (best, worst) = iter.fold((first, first), |(best, worst), hole| {
            (
                if hole.1 < best.1 { hole } else { best },
                if hole.1 > worst.1 { hole } else { worst },
            )
        });

        let par: u32 = self
            .holes
            .iter()
            .filter(|h| self.strokes.get(&h.hole_number).is_some_and(|&s| s > 0))
            .map(|h| u32::from(h.par))
            .sum();

        Ok(GameRecord {
            id: String::new(),
            course_name: self.course_name.clone(),
            date,
            total_score: self.total_strokes(),
            par,
            holes_played: u8::try_from(played.len()).unwrap_or(u8::MAX),
            duration: duration.into(),
            best_hole: best.0,
            worst_hole: worst.0,
        })
    }
}
