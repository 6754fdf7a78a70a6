use anyhow::{Context, Result};
use jacktrack::args::{self, AppConfig, Command};
use jacktrack::controller::{CourseSession, GameHistory, Period, Settings};
use jacktrack::model::{self, CourseData, Point};
use jacktrack::score::Scorecard;
use jacktrack::view;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = args::args_checks().context("load config")?;
    match config.command.clone() {
        Command::Course { hole, scan, seed, navigate } => {
            run_course(&config, hole, scan, seed, navigate.as_deref())
        }
        Command::Scorecard { strokes, player } => run_scorecard(&config, &strokes, player),
        Command::History { period } => run_history(&config, &period),
        Command::Settings { toggle } => {
            let mut settings = Settings::default();
            for key in toggle {
                settings.toggle(key);
            }
            print!("{}", view::render_settings(&settings));
            Ok(())
        }
    }
}

fn load_course(config: &AppConfig) -> Result<CourseData> {
    match &config.course_json {
        Some(path) => model::load_course(path).with_context(|| format!("load course {}", path.display())),
        None => model::demo_course().context("load bundled course"),
    }
}

fn run_course(
    config: &AppConfig,
    hole: u8,
    scan: usize,
    seed: Option<u64>,
    navigate: Option<&str>,
) -> Result<()> {
    let course = load_course(config)?;
    let balls = model::demo_balls().context("load bundled balls")?;
    let mut session = CourseSession::new(
        course.course_name,
        Point::new(config.player_x, config.player_y),
        balls,
        config.yards_per_unit,
    )?;
    session.go_to_hole(hole)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    for _ in 0..scan {
        session.scan_for_ball(&mut rng)?;
    }

    if let Some(id) = navigate {
        let nav = session.navigate_to(id)?;
        println!("{}", view::render_navigation(&nav));
    }
    print!("{}", view::render_course(&session)?);
    Ok(())
}

fn run_scorecard(config: &AppConfig, strokes: &[u32], player: Option<String>) -> Result<()> {
    let course = load_course(config)?;
    let mut card = Scorecard::new(course)?;
    if let Some(player) = player {
        card.set_player_name(player);
    }
    let holes: Vec<u8> = card.holes().iter().map(|h| h.hole_number).collect();
    if strokes.len() > holes.len() {
        warn!("ignoring {} strokes beyond the last hole", strokes.len() - holes.len());
    }
    for (hole, &count) in holes.iter().zip(strokes) {
        card.set_strokes(*hole, count)?;
    }
    print!("{}", view::render_scorecard(&card));
    Ok(())
}

fn run_history(config: &AppConfig, period: &str) -> Result<()> {
    let games = match &config.history_json {
        Some(path) => model::load_history(path).with_context(|| format!("load history {}", path.display()))?,
        None => model::demo_history().context("load bundled history")?,
    };
    let history = GameHistory::new(games);
    let period: Period = period.parse()?;
    match history.stats(period) {
        Ok(stats) => println!("{}", view::render_stats(&stats)),
        Err(e) => warn!("no stats for {period}: {e}"),
    }
    print!("{}", view::render_games(&history, period));
    Ok(())
}
