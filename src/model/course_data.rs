use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::TrackError;
use crate::model::{GameRecord, HoleSpec, TrackedBall};

const DEMO_COURSE_JSON: &str = include_str!("../../data/pebble_beach.json");
const DEMO_HISTORY_JSON: &str = include_str!("../../data/history.json");
const DEMO_BALLS_JSON: &str = include_str!("../../data/balls.json");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CourseData {
    pub course_name: String,
    pub holes: Vec<HoleSpec>,
}

impl CourseData {
    /// # Errors
    ///
    /// Will return `Err` if the json is malformed, a hole is invalid, or a hole number repeats
    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        let course: CourseData = serde_json::from_str(json)?;
        course.validate()?;
        Ok(course)
    }

    /// # Errors
    ///
    /// Will return `Err` if a hole is invalid or a hole number repeats
    pub fn validate(&self) -> Result<(), TrackError> {
        let mut seen = HashSet::new();
        for hole in &self.holes {
            hole.validate()?;
            if !seen.insert(hole.hole_number) {
                return Err(TrackError::InvalidInput(format!(
                    "hole {} listed twice for {}",
                    hole.hole_number, self.course_name
                )));
            }
        }
        Ok(())
    }
}

/// # Errors
///
/// Will return `Err` if the bundled course json fails to parse
pub fn demo_course() -> Result<CourseData, TrackError> {
    CourseData::from_json(DEMO_COURSE_JSON)
}

/// # Errors
///
/// Will return `Err` if the bundled history json fails to parse
pub fn demo_history() -> Result<Vec<GameRecord>, TrackError> {
    history_from_json(DEMO_HISTORY_JSON)
}

/// # Errors
///
/// Will return `Err` if the bundled ball json fails to parse
pub fn demo_balls() -> Result<Vec<TrackedBall>, TrackError> {
    let balls: Vec<TrackedBall> = serde_json::from_str(DEMO_BALLS_JSON)?;
    balls
        .into_iter()
        .map(|b| TrackedBall::new(b.id, b.name, b.position, b.connected, b.battery_level))
        .collect()
}

/// # Errors
///
/// Will return `Err` if the json is malformed or a date is not `YYYY-MM-DD`
pub fn history_from_json(json: &str) -> Result<Vec<GameRecord>, TrackError> {
    Ok(serde_json::from_str(json)?)
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or not a valid course
pub fn load_course(path: &Path) -> Result<CourseData, TrackError> {
    let contents = fs::read_to_string(path)?;
    CourseData::from_json(&contents)
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or not a valid history list
pub fn load_history(path: &Path) -> Result<Vec<GameRecord>, TrackError> {
    let contents = fs::read_to_string(path)?;
    history_from_json(&contents)
}
