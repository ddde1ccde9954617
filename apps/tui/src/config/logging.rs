use crate::config::AppConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Installs the global logger.
///
/// `RUST_LOG` wins over the computed level. Without a log file an
/// interactive session only lets warnings through, since stderr shares the
/// screen with the dashboard.
pub fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(level_for(config, interactive));
    builder.parse_default_env();

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().wrap_err("Failed to install logger")
}

const fn level_for(config: &AppConfig, interactive: bool) -> LevelFilter {
    if config.debug {
        LevelFilter::Debug
    } else if interactive && config.log_file.is_none() {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(debug: bool, log_file: Option<&str>) -> AppConfig {
        AppConfig {
            data_path: PathBuf::from("data.csv"),
            log_file: log_file.map(PathBuf::from),
            debug,
        }
    }

    #[test]
    fn interactive_sessions_stay_quiet_on_stderr() {
        assert_eq!(level_for(&config(false, None), true), LevelFilter::Warn);
        assert_eq!(level_for(&config(false, Some("a.log")), true), LevelFilter::Info);
        assert_eq!(level_for(&config(false, None), false), LevelFilter::Info);
    }

    #[test]
    fn debug_always_wins() {
        assert_eq!(level_for(&config(true, None), true), LevelFilter::Debug);
    }
}
