use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Overrides the settings file location when set
pub const CONFIG_PATH_ENV: &str = "PARISH_CALENDAR_CONFIG";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the default location: `$PARISH_CALENDAR_CONFIG`, or
    /// `settings.toml` in the platform config directory.
    pub fn from_environment() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let dirs = ProjectDirs::from("org", "Parish", "ParishCalendar")
            .ok_or_else(|| anyhow!("Could not determine the user config directory"))?;
        Ok(dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields the defaults
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Validate and write settings, creating the config directory if needed
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::SessionSettings;
    use crate::models::user::Role;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("absent.toml"));

        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE_NAME));

        let settings = Settings {
            theme: "dark".to_string(),
            timezone: Some("Europe/Athens".to_string()),
            default_tab: "feasts".to_string(),
            session: Some(SessionSettings {
                name: "Fr. John".to_string(),
                role: Role::Teacher,
            }),
            ..Settings::default()
        };

        service.save(&settings).unwrap();
        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "theme = \"dark\"\n\n[session]\nname = \"Maria\"\nrole = \"student\"\n")
            .unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.default_tab, "calendar");
        assert_eq!(settings.session.map(|s| s.role), Some(Role::Student));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "theme = \"neon\"\n").unwrap();

        let err = SettingsService::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let settings = Settings {
            date_format: String::new(),
            ..Settings::default()
        };

        assert!(SettingsService::new(&path).save(&settings).is_err());
        assert!(!path.exists());
    }

    #[test]
    #[serial]
    fn test_env_override_path() {
        std::env::set_var(CONFIG_PATH_ENV, "/tmp/parish-test/settings.toml");
        let path = SettingsService::default_path().unwrap();
        std::env::remove_var(CONFIG_PATH_ENV);

        assert_eq!(path, PathBuf::from("/tmp/parish-test/settings.toml"));
    }
}
