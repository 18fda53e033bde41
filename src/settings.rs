// src/settings.rs

use std::path::Path;
use std::time::Duration;

use chrono::Weekday;
use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

const ENV_PREFIX: &str = "PROPERTY_FINDER";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Base URL of the marketplace API. Unset means the built-in mock listings.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSettings {
    pub min_nights: u32,
    pub week_start: String,
}

impl CalendarSettings {
    pub fn week_start(&self) -> Weekday {
        self.week_start.trim().parse().unwrap_or_else(|_| {
            warn!("Unknown week_start '{}', using sunday", self.week_start);
            Weekday::Sun
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Applied when a search does not ask for a limit. 0 = unlimited.
    pub default_limit: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub source: SourceSettings,
    pub calendar: CalendarSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Defaults, then the optional TOML file, then `PROPERTY_FINDER__SECTION__KEY`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::<DefaultState>::default()
            .set_default("source.timeout_secs", 30_i64)?
            .set_default("calendar.min_nights", 1_i64)?
            .set_default("calendar.week_start", "sunday")?
            .set_default("search.default_limit", 0_i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // Environment variables are process-wide; settings tests take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvVar(&'static str);

    impl EnvVar {
        fn set(key: &'static str, value: &str) -> Self {
            std::env::set_var(key, value);
            Self(key)
        }
    }

    impl Drop for EnvVar {
        fn drop(&mut self) {
            std::env::remove_var(self.0);
        }
    }

    #[test]
    fn defaults_without_file() {
        let _lock = env_lock();
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.source.endpoint, None);
        assert_eq!(settings.source.timeout(), Duration::from_secs(30));
        assert_eq!(settings.calendar.min_nights, 1);
        assert_eq!(settings.calendar.week_start(), Weekday::Sun);
        assert_eq!(settings.search.default_limit, 0);
    }

    #[test]
    fn file_overrides_defaults() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[source]
endpoint = "https://homes.example"
timeout_secs = 5

[calendar]
min_nights = 2
week_start = "monday"
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.source.endpoint.as_deref(), Some("https://homes.example"));
        assert_eq!(settings.source.timeout_secs, 5);
        assert_eq!(settings.calendar.min_nights, 2);
        assert_eq!(settings.calendar.week_start(), Weekday::Mon);
        assert_eq!(settings.search.default_limit, 0);
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[calendar]\nmin_nights = 2").unwrap();

        let _nights = EnvVar::set("PROPERTY_FINDER__CALENDAR__MIN_NIGHTS", "3");
        let _limit = EnvVar::set("PROPERTY_FINDER__SEARCH__DEFAULT_LIMIT", "12");

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.calendar.min_nights, 3);
        assert_eq!(settings.search.default_limit, 12);
        assert_eq!(settings.source.timeout_secs, 30);

        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.calendar.min_nights, 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/property-finder.toml"))).is_err());
    }

    #[test]
    fn bad_week_start_falls_back_to_sunday() {
        let calendar = CalendarSettings {
            min_nights: 1,
            week_start: "someday".into(),
        };
        assert_eq!(calendar.week_start(), Weekday::Sun);
    }
}
