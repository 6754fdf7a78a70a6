pub mod course;
pub mod history;
pub mod settings;

pub use course::{BallCard, CourseSession, DistanceReadout, Navigation, NearestBall};
pub use history::{GameDetails, GameHistory, HistoryStats, Period, format_game_date};
pub use settings::{APP_NAME, APP_VERSION, SettingKey, Settings};
