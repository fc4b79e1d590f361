// Settings module
// Application settings loaded from settings.toml

use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ui::DashboardTab;
use crate::models::user::{Role, User};

/// en-US short date, e.g. 12/8/2024
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Theme must be 'light' or 'dark', got '{0}'")]
    InvalidTheme(String),
    #[error("Date format cannot be empty")]
    EmptyDateFormat,
    #[error("Date format '{0}' cannot be used for calendar days")]
    InvalidDateFormat(String),
    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),
    #[error(transparent)]
    InvalidTab(#[from] crate::models::ui::UnknownTab),
    #[error("Session user name cannot be empty")]
    EmptySessionName,
}

/// Signed-in user as configured for this desktop session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub name: String,
    pub role: Role,
}

impl From<&SessionSettings> for User {
    fn from(session: &SessionSettings) -> Self {
        User::new(session.name.clone(), session.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub use_system_theme: bool,
    /// chrono format string for list dates
    pub date_format: String,
    /// IANA timezone deciding "today"; None means the local timezone
    pub timezone: Option<String>,
    pub default_tab: String,
    pub session: Option<SessionSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            use_system_theme: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: None,
            default_tab: DashboardTab::Calendar.id().to_string(),
            session: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let theme = self.theme.trim();
        if !theme.eq_ignore_ascii_case("light") && !theme.eq_ignore_ascii_case("dark") {
            return Err(SettingsError::InvalidTheme(self.theme.clone()));
        }

        if self.date_format.trim().is_empty() {
            return Err(SettingsError::EmptyDateFormat);
        }
        validate_date_format(&self.date_format)?;

        self.timezone()?;
        self.default_tab()?;

        if let Some(session) = &self.session {
            if session.name.trim().is_empty() {
                return Err(SettingsError::EmptySessionName);
            }
        }

        Ok(())
    }

    /// Theme names compare case-insensitively, like `CalendarTheme::named`
    pub fn is_dark(&self) -> bool {
        self.theme.trim().eq_ignore_ascii_case("dark")
    }

    pub fn timezone(&self) -> Result<Option<Tz>, SettingsError> {
        self.timezone
            .as_deref()
            .map(|name| {
                Tz::from_str(name).map_err(|_| SettingsError::InvalidTimezone(name.to_string()))
            })
            .transpose()
    }

    pub fn default_tab(&self) -> Result<DashboardTab, SettingsError> {
        Ok(self.default_tab.parse::<DashboardTab>()?)
    }
}

/// Reject formats chrono cannot parse or a `NaiveDate` cannot fill (e.g. `%H`)
fn validate_date_format(format: &str) -> Result<(), SettingsError> {
    let invalid = || SettingsError::InvalidDateFormat(format.to_string());

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let sample = NaiveDate::from_ymd_opt(2024, 12, 8).ok_or_else(invalid)?;
    crate::utils::date::try_format_date(sample, format)
        .map(|_| ())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(!settings.is_dark());
        assert_eq!(settings.default_tab().unwrap(), DashboardTab::Calendar);
        assert_eq!(settings.timezone().unwrap(), None);
    }

    #[test]
    fn test_invalid_theme() {
        let settings = Settings {
            theme: "sepia".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidTheme("sepia".to_string()))
        );
    }

    #[test]
    fn test_theme_name_is_case_insensitive() {
        let settings = Settings {
            theme: "Dark".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
        assert!(settings.is_dark());

        let settings = Settings {
            theme: " LIGHT ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
        assert!(!settings.is_dark());
    }

    #[test]
    fn test_date_format_needing_a_time_is_rejected() {
        let settings = Settings {
            date_format: "%H:%M".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidDateFormat("%H:%M".to_string()))
        );
    }

    #[test]
    fn test_unknown_date_specifier_is_rejected() {
        let settings = Settings {
            date_format: "%Q".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidDateFormat("%Q".to_string()))
        );
    }

    #[test]
    fn test_other_day_formats_are_accepted() {
        for format in ["%Y-%m-%d", "%d.%m.%Y", "%B %-d, %Y", "%a %e %b"] {
            let settings = Settings {
                date_format: format.to_string(),
                ..Settings::default()
            };
            assert!(settings.validate().is_ok(), "{format} should be accepted");
        }
    }

    #[test]
    fn test_timezone_parsing() {
        let mut settings = Settings {
            timezone: Some("America/New_York".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.timezone().unwrap(), Some(chrono_tz::America::New_York));

        settings.timezone = Some("Mars/Olympus".to_string());
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_unknown_default_tab() {
        let settings = Settings {
            default_tab: "agenda".to_string(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidTab(_))));
    }

    #[test]
    fn test_blank_session_name() {
        let settings = Settings {
            session: Some(SessionSettings {
                name: " ".to_string(),
                role: Role::Teacher,
            }),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::EmptySessionName));
    }
}
