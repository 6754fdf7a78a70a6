use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackError;

pub const MIN_HOLE: u8 = 1;
pub const MAX_HOLE: u8 = 18;

/// A position on the course map. Map units, not geographic coordinates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// # Errors
    ///
    /// Will return `Err` if either coordinate is NaN or infinite
    pub fn validated(x: f64, y: f64) -> Result<Self, TrackError> {
        Self::new(x, y).check()
    }

    /// # Errors
    ///
    /// Will return `Err` if either coordinate is NaN or infinite
    pub fn check(self) -> Result<Self, TrackError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(self)
        } else {
            Err(TrackError::InvalidInput(format!(
                "non-finite point ({}, {})",
                self.x, self.y
            )))
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackedBall {
    pub id: String,
    pub name: String,
    pub position: Point,
    pub connected: bool,
    pub battery_level: u8,
}

impl TrackedBall {
    /// # Errors
    ///
    /// Will return `Err` if the position is not finite or the battery level is above 100
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Point,
        connected: bool,
        battery_level: u8,
    ) -> Result<Self, TrackError> {
        let ball = Self {
            id: id.into(),
            name: name.into(),
            position,
            connected,
            battery_level,
        };
        ball.check()?;
        Ok(ball)
    }

    /// Checks a ball that may have been built without `new`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the position is not finite or the battery level is above 100
    pub fn check(&self) -> Result<(), TrackError> {
        if self.battery_level > 100 {
            return Err(TrackError::InvalidInput(format!(
                "ball {} battery level {} is above 100",
                self.id, self.battery_level
            )));
        }
        self.position.check()?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleSpec {
    pub hole_number: u8,
    pub par: u8,
    pub yards: u32,
}

impl HoleSpec {
    /// # Errors
    ///
    /// Will return `Err` if the hole number is outside 1..=18, or par or yards are zero
    pub fn validate(&self) -> Result<(), TrackError> {
        check_hole_number(self.hole_number)?;
        if self.par == 0 {
            return Err(TrackError::InvalidInput(format!(
                "hole {} has a par of zero",
                self.hole_number
            )));
        }
        if self.yards == 0 {
            return Err(TrackError::InvalidInput(format!(
                "hole {} has zero yards",
                self.hole_number
            )));
        }
        Ok(())
    }
}

/// # Errors
///
/// Will return `Err` if the hole number is outside 1..=18
pub fn check_hole_number(hole_number: u8) -> Result<u8, TrackError> {
    if (MIN_HOLE..=MAX_HOLE).contains(&hole_number) {
        Ok(hole_number)
    } else {
        Err(TrackError::InvalidInput(format!(
            "hole number {hole_number} is outside {MIN_HOLE}..={MAX_HOLE}"
        )))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub hole_number: u8,
    pub strokes: u32,
}

/// A completed round.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub id: String,
    pub course_name: String,
    pub date: NaiveDate,
    pub total_score: u32,
    pub par: u32,
    pub holes_played: u8,
    pub duration: String,
    pub best_hole: u8,
    pub worst_hole: u8,
}

impl GameRecord {
    #[must_use]
    pub fn to_par(&self) -> i64 {
        i64::from(self.total_score) - i64::from(self.par)
    }
}

/// Fixed features of the hole drawn on the course map.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CourseLayout {
    pub pin: Point,
    pub tee: Point,
}

impl Default for CourseLayout {
    fn default() -> Self {
        Self {
            pin: Point::new(250.0, 100.0),
            tee: Point::new(100.0, 350.0),
        }
    }
}
