use std::time::Duration;

use url::Url;

use crate::error::Error;

pub const DEFAULT_MENU_URL: &str =
    "https://uwaterloo.ca/food-services-information/locations-and-hours/daily-menu";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const MENU_URL_VAR: &str = "UW_MENU_URL";
const TIMEOUT_VAR: &str = "UW_MENU_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub menu_url: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let menu_url = match lookup(MENU_URL_VAR) {
            Some(raw) => Url::parse(&raw)
                .map_err(|e| Error::Config(format!("{MENU_URL_VAR}={raw:?} is not a valid url: {e}")))?,
            None => Url::parse(DEFAULT_MENU_URL).expect("default menu url should be valid"),
        };
        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::Config(format!("{TIMEOUT_VAR}={raw:?} should be a positive number of seconds"))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            menu_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> crate::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.menu_url.as_str(), DEFAULT_MENU_URL);
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("UW_MENU_URL", "http://localhost:8080/menu"),
            ("UW_MENU_TIMEOUT_SECS", " 3 "),
        ])
        .unwrap();
        assert_eq!(config.menu_url.as_str(), "http://localhost:8080/menu");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("UW_MENU_URL", "not a url")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            config_from(&[("UW_MENU_TIMEOUT_SECS", "0")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            config_from(&[("UW_MENU_TIMEOUT_SECS", "soon")]),
            Err(Error::Config(_))
        ));
    }
}
