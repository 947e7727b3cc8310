//! Configuration file support.
//!
//! The agent reads a TOML file describing the portal and the weekly class
//! schedule. Credentials are never stored in the file: the `[portal]` section
//! names the environment variables they are read from. All validation happens
//! here, at startup; the scheduler only ever sees well-formed entries.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{parse_weekday, ScheduleEntry, ScheduleError, TimeOfDay};

/// Startup configuration errors. All of these abort the run before any
/// evaluation or portal interaction happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("class entry {index} ({name:?}): {source}")]
    InvalidClass {
        index: usize,
        name: String,
        source: ScheduleError,
    },
    #[error("schedule is empty: add at least one [[class]] entry")]
    EmptySchedule,
    #[error("missing credential environment variable {0}")]
    MissingCredential(String),
    #[error("no booking.toml found in standard locations")]
    NotFound,
}

/// Agent configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub portal: PortalSettings,
    #[serde(rename = "class", default)]
    pub classes: Vec<ClassSettings>,
}

/// Portal connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSettings {
    /// Login page URL.
    pub login_url: String,
    /// Gym branch name as displayed in the portal's branch selector.
    pub branch: String,
    /// Environment variable holding the member username.
    #[serde(default = "default_username_env")]
    pub username_env: String,
    /// Environment variable holding the member password.
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

fn default_username_env() -> String {
    "GYM_USERNAME".to_string()
}

fn default_password_env() -> String {
    "GYM_PASSWORD".to_string()
}

/// Raw `[[class]]` entry as written in the file; validated into a
/// [`ScheduleEntry`] by [`AppConfig::schedule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSettings {
    /// Day of week, full or three-letter English name.
    pub day: String,
    /// Class start time, "HH:MM".
    pub time: String,
    /// Class name as shown on the class tile.
    pub name: String,
    /// Classroom label, when the timetable is split per room.
    #[serde(default)]
    pub room: Option<String>,
}

/// Resolved portal credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `booking.toml` in the current directory, then the parent
    /// directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("booking.toml"),
            PathBuf::from("../booking.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Validate the `[[class]]` entries into the immutable schedule.
    ///
    /// Fails fast on the first malformed entry; an empty schedule is also an
    /// error (a run that can never book anything is a misconfiguration).
    pub fn schedule(&self) -> Result<Vec<ScheduleEntry>, ConfigError> {
        if self.classes.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }

        let mut entries = Vec::with_capacity(self.classes.len());
        for (index, class) in self.classes.iter().enumerate() {
            let invalid = |source| ConfigError::InvalidClass {
                index,
                name: class.name.clone(),
                source,
            };
            let day = parse_weekday(&class.day).map_err(invalid)?;
            let time: TimeOfDay = class.time.parse().map_err(invalid)?;

            let mut entry = ScheduleEntry::new(day, time, class.name.clone());
            if let Some(room) = &class.room {
                entry = entry.with_room(room.clone());
            }
            entries.push(entry);
        }
        Ok(entries)
    }
}

impl PortalSettings {
    /// Resolve credentials from the configured environment variables.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let read = |var: &str| {
            env::var(var)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingCredential(var.to_string()))
        };
        Ok(Credentials {
            username: read(&self.username_env)?,
            password: read(&self.password_env)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    const FULL_CONFIG: &str = r#"
[portal]
login_url = "https://example.test/member/login.aspx"
branch = "Arena Yoga & Fitness"

[[class]]
day = "tue"
time = "12:10"
name = "BODYCOMBAT"
room = "Studio A"

[[class]]
day = "Saturday"
time = "02:45"
name = "BODYJAM"
"#;

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.portal.branch, "Arena Yoga & Fitness");
        assert_eq!(config.portal.username_env, "GYM_USERNAME");
        assert_eq!(config.portal.password_env, "GYM_PASSWORD");
        assert_eq!(config.classes.len(), 2);
    }

    #[test]
    fn test_schedule_conversion_preserves_order() {
        let config: AppConfig = toml::from_str(FULL_CONFIG).unwrap();
        let schedule = config.schedule().unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].day, Weekday::Tue);
        assert_eq!(schedule[0].time.to_string(), "12:10");
        assert_eq!(schedule[0].room.as_deref(), Some("Studio A"));
        assert_eq!(schedule[1].day, Weekday::Sat);
        assert_eq!(schedule[1].room, None);
    }

    #[test]
    fn test_custom_credential_env_names() {
        let toml = r#"
[portal]
login_url = "https://example.test/login"
branch = "Downtown"
username_env = "MY_USER"
password_env = "MY_PASS"

[[class]]
day = "mon"
time = "18:00"
name = "Spin"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.portal.username_env, "MY_USER");
        assert_eq!(config.portal.password_env, "MY_PASS");
    }

    #[test]
    fn test_empty_schedule_is_an_error() {
        let toml = r#"
[portal]
login_url = "https://example.test/login"
branch = "Downtown"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.schedule(),
            Err(ConfigError::EmptySchedule)
        ));
    }

    #[test]
    fn test_bad_day_fails_fast_with_entry_context() {
        let toml = r#"
[portal]
login_url = "https://example.test/login"
branch = "Downtown"

[[class]]
day = "someday"
time = "12:10"
name = "BODYCOMBAT"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        let err = config.schedule().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("BODYCOMBAT"), "unexpected error: {msg}");
        assert!(msg.contains("someday"), "unexpected error: {msg}");
    }

    #[test]
    fn test_bad_time_fails_fast() {
        let toml = r#"
[portal]
login_url = "https://example.test/login"
branch = "Downtown"

[[class]]
day = "tue"
time = "25:99"
name = "BODYCOMBAT"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(config.schedule().is_err());
    }

    #[test]
    fn test_missing_credentials_reported_by_variable_name() {
        let portal = PortalSettings {
            login_url: "https://example.test/login".to_string(),
            branch: "Downtown".to_string(),
            username_env: "CLASS_BOOKER_TEST_MISSING_USER".to_string(),
            password_env: "CLASS_BOOKER_TEST_MISSING_PASS".to_string(),
        };
        let err = portal.credentials().unwrap_err();
        assert!(err
            .to_string()
            .contains("CLASS_BOOKER_TEST_MISSING_USER"));
    }
}
