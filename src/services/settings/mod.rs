//! Settings persistence: a single TOML file in the application config
//! directory.

mod service;

pub use service::{SettingsService, CONFIG_PATH_ENV, SETTINGS_FILE_NAME};
