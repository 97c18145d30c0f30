//! Validator configuration loaded at startup.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Everything has a default, so an empty environment yields the standard
//! three-day lead time and the built-in city table.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_LEAD_TIME_DAYS: i64 = 3;

pub const LEAD_TIME_ENV: &str = "BOOKING_LEAD_TIME_DAYS";
pub const EXTRA_CITIES_ENV: &str = "BOOKING_EXTRA_CITIES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Minimum number of days between today and the delivery date.
    pub lead_time_days: i64,
    /// Cities added to the built-in table.
    pub extra_cities: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            extra_cities: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration from a dotenv-formatted file without touching the
    /// process environment.
    pub fn from_dotenv_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let vars = dotenv::from_path_iter(path)?.collect::<Result<HashMap<String, String>, _>>()?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// let config = ValidatorConfig::from_lookup(|key| match key {
    ///     "BOOKING_LEAD_TIME_DAYS" => Some("5".to_string()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.lead_time_days, 5);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lead_time_days = match lookup(LEAD_TIME_ENV) {
            Some(raw) => parse_lead_time(&raw)?,
            None => DEFAULT_LEAD_TIME_DAYS,
        };

        let extra_cities = lookup(EXTRA_CITIES_ENV)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|city| !city.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            lead_time_days,
            extra_cities,
        })
    }
}

fn parse_lead_time(raw: &str) -> Result<i64, ConfigError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidLeadTime {
            key: LEAD_TIME_ENV,
            value: raw.to_string(),
        })?;

    if value < 0 {
        return Err(ConfigError::NegativeLeadTime {
            key: LEAD_TIME_ENV,
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ValidatorConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.lead_time_days, 3);
    }

    #[test]
    fn reads_lead_time_and_cities() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[
            (LEAD_TIME_ENV, " 5 "),
            (EXTRA_CITIES_ENV, "Стерлитамак, Сочи,,"),
        ]))
        .unwrap();
        assert_eq!(config.lead_time_days, 5);
        assert_eq!(config.extra_cities, vec!["Стерлитамак", "Сочи"]);
    }

    #[test]
    fn rejects_non_numeric_lead_time() {
        let error = ValidatorConfig::from_lookup(lookup_from(&[(LEAD_TIME_ENV, "three")]))
            .expect_err("non-numeric lead time must fail");
        assert!(matches!(
            error,
            ConfigError::InvalidLeadTime { ref value, .. } if value == "three"
        ));
        assert!(error.to_string().contains(LEAD_TIME_ENV));
    }

    #[test]
    fn rejects_negative_lead_time() {
        let error = ValidatorConfig::from_lookup(lookup_from(&[(LEAD_TIME_ENV, "-1")]))
            .expect_err("negative lead time must fail");
        assert!(matches!(error, ConfigError::NegativeLeadTime { value: -1, .. }));
    }

    #[test]
    fn reads_dotenv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}=4", LEAD_TIME_ENV).unwrap();
        writeln!(file, "{}=\"Сочи,Норильск\"", EXTRA_CITIES_ENV).unwrap();
        file.flush().unwrap();

        let config = ValidatorConfig::from_dotenv_file(file.path()).unwrap();
        assert_eq!(config.lead_time_days, 4);
        assert_eq!(config.extra_cities, vec!["Сочи", "Норильск"]);
    }

    #[test]
    fn missing_dotenv_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = ValidatorConfig::from_dotenv_file(dir.path().join("absent.env"))
            .expect_err("missing file must fail");
        assert!(matches!(error, ConfigError::DotEnv(_)));
    }
}
