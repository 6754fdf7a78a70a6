pub mod course;
pub mod score;

use std::fmt::Write;

use crate::controller::{APP_NAME, APP_VERSION, SettingKey, Settings};

pub use course::{render_course, render_navigation};
pub use score::{render_games, render_scorecard, render_stats};

#[must_use]
pub fn render_settings(settings: &Settings) -> String {
    let mut out = String::new();
    for key in SettingKey::ALL {
        let state = if settings.get(key) { "on" } else { "off" };
        writeln!(out, "{:<22} {state}", key.title()).ok();
    }
    writeln!(out, "{APP_NAME} v{APP_VERSION}").ok();
    out
}
