pub mod types;
pub mod validation;

pub use types::{AppConfig, Cli, Command, FileConfig};

use clap::Parser;
use log::debug;
use std::fs;

use crate::error::TrackError;
use crate::geo::YARDS_PER_MAP_UNIT;

const DEFAULT_PLAYER_X: f64 = 100.0;
const DEFAULT_PLAYER_Y: f64 = 180.0;

/// # Errors
///
/// Will return `Err` if the config file is unreadable or invalid, or a merged value is out of range
pub fn args_checks() -> Result<AppConfig, TrackError> {
    load_config(Cli::parse())
}

/// Merge command line values over the optional TOML file, then defaults.
///
/// # Errors
///
/// Will return `Err` if the config file is unreadable or invalid, or a merged value is out of range
pub fn load_config(cli: Cli) -> Result<AppConfig, TrackError> {
    let file_config = read_file_config(&cli)?;

    let yards_per_unit = cli
        .yards_per_unit
        .or(file_config.yards_per_unit)
        .unwrap_or(YARDS_PER_MAP_UNIT);
    if !yards_per_unit.is_finite() || yards_per_unit <= 0.0 {
        return Err(TrackError::InvalidInput(format!(
            "yards_per_unit {yards_per_unit} must be finite and positive"
        )));
    }

    let player_x = cli.player_x.or(file_config.player_x).unwrap_or(DEFAULT_PLAYER_X);
    let player_y = cli.player_y.or(file_config.player_y).unwrap_or(DEFAULT_PLAYER_Y);
    crate::model::Point::validated(player_x, player_y)?;

    let config = AppConfig {
        course_json: cli.course_json.or(file_config.course_json),
        history_json: cli.history_json.or(file_config.history_json),
        yards_per_unit,
        player_x,
        player_y,
        command: cli.command,
    };
    debug!("config: {config:?}");
    Ok(config)
}

fn read_file_config(cli: &Cli) -> Result<FileConfig, TrackError> {
    match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                TrackError::Io(format!("read config toml {}: {e}", path.display()))
            })?;
            Ok(toml::from_str::<FileConfig>(&contents)?)
        }
        None => Ok(FileConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jacktrack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_apply_without_file() {
        let config = load_config(parse(&["history"])).unwrap();
        assert_eq!(config.yards_per_unit, 2.0);
        assert_eq!((config.player_x, config.player_y), (100.0, 180.0));
        assert!(config.course_json.is_none());
    }

    #[test]
    fn cli_values_win() {
        let config = load_config(parse(&["--yards-per-unit", "1.5", "--player-x", "10", "course"])).unwrap();
        assert_eq!(config.yards_per_unit, 1.5);
        assert_eq!(config.player_x, 10.0);
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let err = load_config(parse(&["--yards-per-unit", "0", "history"]));
        assert!(matches!(err, Err(TrackError::InvalidInput(_))));
    }

    #[test]
    fn strokes_split_on_commas() {
        let cli = parse(&["scorecard", "--strokes", "4,3,5"]);
        match cli.command {
            Command::Scorecard { strokes, .. } => assert_eq!(strokes, vec![4, 3, 5]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn toml_file_fills_gaps() {
        let path = std::env::temp_dir().join(format!("jacktrack-args-{}.toml", std::process::id()));
        fs::write(&path, "yards_per_unit = 3.0\nplayer_y = 50.0\n").unwrap();
        let cli = parse(&["--config-toml", path.to_str().unwrap(), "--player-y", "60", "history"]);
        let config = load_config(cli).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.yards_per_unit, 3.0);
        assert_eq!(config.player_y, 60.0);
    }
}
