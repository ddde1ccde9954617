mod logging;

pub use logging::init_logging;

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Dataset location used when neither `--data` nor `INSOLATION_DATA` is set.
pub const DEFAULT_DATA_PATH: &str = "./data/insolation_data_1983-2005_trimmed.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    config_from(|key| env::var(key).ok())
}

fn config_from(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    AppConfig {
        data_path: non_empty("INSOLATION_DATA")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from),
        log_file: non_empty("INSOLATION_LOG").map(PathBuf::from),
        debug: non_empty("DEBUG").is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(lookup(&[]));

        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.log_file, None);
        assert!(!config.debug);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(lookup(&[
            ("INSOLATION_DATA", "/srv/insolation.csv"),
            ("INSOLATION_LOG", "dashboard.log"),
            ("DEBUG", "1"),
        ]));

        assert_eq!(config.data_path, PathBuf::from("/srv/insolation.csv"));
        assert_eq!(config.log_file, Some(PathBuf::from("dashboard.log")));
        assert!(config.debug);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(lookup(&[("INSOLATION_DATA", "  "), ("DEBUG", "")]));

        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(!config.debug);
    }
}
