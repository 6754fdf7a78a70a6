use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

use crate::controller::SettingKey;

#[derive(Parser, Debug)]
#[command(author, version, about = "Track golf balls on the course, keep score, review past rounds.", long_about = None)]
pub struct Cli {
    /// Optional TOML file; command-line values win over it.
    #[arg(long, value_name = "CONFIG_TOML")]
    pub config_toml: Option<PathBuf>,
    /// Course json with `course_name` and 18 `holes`. Defaults to the bundled course.
    #[arg(long, value_name = "COURSE_JSON", value_parser = crate::args::validation::check_readable_json)]
    pub course_json: Option<PathBuf>,
    /// Game history json. Defaults to the bundled history.
    #[arg(long, value_name = "HISTORY_JSON", value_parser = crate::args::validation::check_readable_json)]
    pub history_json: Option<PathBuf>,
    /// Map units to yards.
    #[arg(long, value_name = "YARDS_PER_UNIT")]
    pub yards_per_unit: Option<f64>,
    #[arg(long, value_name = "PLAYER_X")]
    pub player_x: Option<f64>,
    #[arg(long, value_name = "PLAYER_Y")]
    pub player_y: Option<f64>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Distances to the pin and to tracked balls.
    Course {
        #[arg(long, default_value_t = 1)]
        hole: u8,
        /// Simulate this many scans for new balls.
        #[arg(long, default_value_t = 0)]
        scan: usize,
        /// Seed for simulated scans.
        #[arg(long)]
        seed: Option<u64>,
        /// Ball to navigate to.
        #[arg(long)]
        navigate: Option<String>,
    },
    /// Per-hole results and totals.
    Scorecard {
        /// Strokes per hole in hole order, e.g. 4,3,5. Missing holes stay unplayed.
        #[arg(long, value_delimiter = ',')]
        strokes: Vec<u32>,
        #[arg(long)]
        player: Option<String>,
    },
    /// Stats and past rounds.
    History {
        #[arg(long, default_value = "all")]
        period: String,
    },
    /// Show app settings, optionally flipping some first.
    Settings {
        #[arg(long, value_enum)]
        toggle: Vec<SettingKey>,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub course_json: Option<PathBuf>,
    pub history_json: Option<PathBuf>,
    pub yards_per_unit: Option<f64>,
    pub player_x: Option<f64>,
    pub player_y: Option<f64>,
}

/// Command line merged with the config file and defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub course_json: Option<PathBuf>,
    pub history_json: Option<PathBuf>,
    pub yards_per_unit: f64,
    pub player_x: f64,
    pub player_y: f64,
    pub command: Command,
}
