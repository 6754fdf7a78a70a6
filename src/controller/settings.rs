use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const APP_NAME: &str = "JackTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    #[value(name = "bluetooth_tracking")]
    BluetoothTracking,
    #[value(name = "location_services")]
    LocationServices,
    Notifications,
    #[value(name = "auto_save")]
    AutoSave,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::BluetoothTracking,
        SettingKey::LocationServices,
        SettingKey::Notifications,
        SettingKey::AutoSave,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SettingKey::BluetoothTracking => "Bluetooth Tracking",
            SettingKey::LocationServices => "Location Services",
            SettingKey::Notifications => "Notifications",
            SettingKey::AutoSave => "Auto-Save Scorecards",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// App toggles. Held in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub bluetooth_tracking: bool,
    pub location_services: bool,
    pub notifications: bool,
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bluetooth_tracking: true,
            location_services: true,
            notifications: true,
            auto_save: true,
        }
    }
}

impl Settings {
    fn slot(&mut self, key: SettingKey) -> &mut bool {
        match key {
            SettingKey::BluetoothTracking => &mut self.bluetooth_tracking,
            SettingKey::LocationServices => &mut self.location_services,
            SettingKey::Notifications => &mut self.notifications,
            SettingKey::AutoSave => &mut self.auto_save,
        }
    }

    #[must_use]
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::BluetoothTracking => self.bluetooth_tracking,
            SettingKey::LocationServices => self.location_services,
            SettingKey::Notifications => self.notifications,
            SettingKey::AutoSave => self.auto_save,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        *self.slot(key) = value;
        info!("{key} set to {value}");
    }

    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let value = !self.get(key);
        self.set(key, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_starts_on() {
        let settings = Settings::default();
        assert!(SettingKey::ALL.iter().all(|&k| settings.get(k)));
    }

    #[test]
    fn toggle_flips_only_one_key() {
        let mut settings = Settings::default();
        assert!(!settings.toggle(SettingKey::Notifications));
        assert!(!settings.notifications);
        assert!(settings.auto_save);
        assert!(settings.toggle(SettingKey::Notifications));
    }
}
