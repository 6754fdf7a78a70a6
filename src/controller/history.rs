use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::TrackError;
use crate::model::{ColorTier, GameRecord};
use crate::score::{average, best, format_to_par, history_trend, parse_duration_minutes, round_tier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Year(i32),
}

impl Period {
    #[must_use]
    pub fn includes(self, date: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::Year(year) => date.year() == year,
        }
    }
}

impl FromStr for Period {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Period::All);
        }
        s.parse::<i32>()
            .map(Period::Year)
            .map_err(|_| TrackError::Parse(format!("period '{s}' is neither 'all' nor a year")))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::All => write!(f, "ALL"),
            Period::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HistoryStats {
    pub best: u32,
    pub average: f64,
    /// Negative when recent rounds are lower than the ones before.
    pub trend: f64,
    pub games: usize,
    pub total_minutes: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GameDetails {
    pub course_name: String,
    pub date: String,
    pub total_score: u32,
    pub to_par: String,
    pub tier: ColorTier,
    pub duration: String,
    pub best_hole: u8,
    pub worst_hole: u8,
}

/// "Jan 15, 2025"
#[must_use]
pub fn format_game_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Completed rounds, newest first.
#[derive(Clone, Debug, Default)]
pub struct GameHistory {
    games: Vec<GameRecord>,
}

impl GameHistory {
    #[must_use]
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    #[must_use]
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[must_use]
    pub fn filter(&self, period: Period) -> Vec<&GameRecord> {
        self.games.iter().filter(|g| period.includes(g.date)).collect()
    }

    /// Adds a finished round at the front, giving it the next free numeric id.
    pub fn record(&mut self, mut game: GameRecord) -> String {
        let next = self
            .games
            .iter()
            .filter_map(|g| g.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        game.id = next.to_string();
        info!("recorded round {} at {}", game.id, game.course_name);
        self.games.insert(0, game);
        next.to_string()
    }

    /// # Errors
    ///
    /// Will return `Err` if no game has this id
    pub fn delete(&mut self, id: &str) -> Result<GameRecord, TrackError> {
        let Some(pos) = self.games.iter().position(|g| g.id == id) else {
            warn!("delete of unknown game {id}");
            return Err(TrackError::NotFound(format!("game {id}")));
        };
        info!("deleted game {id}");
        Ok(self.games.remove(pos))
    }

    pub fn clear(&mut self) {
        info!("cleared {} games", self.games.len());
        self.games.clear();
    }

    /// # Errors
    ///
    /// Will return `Err` if no game has this id
    pub fn details(&self, id: &str) -> Result<GameDetails, TrackError> {
        let game = self
            .games
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| TrackError::NotFound(format!("game {id}")))?;
        Ok(GameDetails {
            course_name: game.course_name.clone(),
            date: format_game_date(game.date),
            total_score: game.total_score,
            to_par: format_to_par(game.total_score, game.to_par()),
            tier: round_tier(game.to_par()),
            duration: game.duration.clone(),
            best_hole: game.best_hole,
            worst_hole: game.worst_hole,
        })
    }

    /// Stats over the games in `period`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the period has no games or a duration is unreadable
    pub fn stats(&self, period: Period) -> Result<HistoryStats, TrackError> {
        let games: Vec<GameRecord> = self.filter(period).into_iter().cloned().collect();
        let totals: Vec<u32> = games.iter().map(|g| g.total_score).collect();
        let total_minutes = games.iter().try_fold(0u32, |acc, g| {
            parse_duration_minutes(&g.duration).map(|m| acc.saturating_add(m))
        })?;
        Ok(HistoryStats {
            best: best(&totals)?,
            average: average(&totals)?,
            trend: history_trend(&games),
            games: games.len(),
            total_minutes,
        })
    }
}
