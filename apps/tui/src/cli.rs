use crate::app::ControlPanel;
use crate::domain::ControlId;
use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "insolation-dashboard",
    version,
    about = "Monthly solar insolation dashboard"
)]
pub struct CliArgs {
    /// Insolation CSV to load
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Initial year (1983-2005)
    #[arg(long)]
    pub year: Option<i32>,

    /// Initial latitude (-90..90, step 2)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Initial longitude (-180..180, step 2)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Print the series for the selection and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("INSOLATION_DATA", data);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("INSOLATION_LOG", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Control panel with any `--year/--lat/--lon` applied through the
    /// normal clamp-and-snap path.
    pub fn initial_panel(&self) -> ControlPanel {
        let mut panel = ControlPanel::new();
        let overrides = [
            (ControlId::Year, self.year.map(f64::from)),
            (ControlId::Latitude, self.lat),
            (ControlId::Longitude, self.lon),
        ];

        for (control, value) in overrides {
            if let Some(value) = value {
                panel.set(control, value);
                log::debug!("Initial {} = {}", control.as_str(), panel.value(control));
            }
        }

        panel
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Selection;

    #[test]
    fn initial_selection_is_clamped_and_snapped() {
        let args = CliArgs::parse_from([
            "insolation-dashboard",
            "--year",
            "1970",
            "--lat",
            "-35",
            "--lon=81",
        ]);

        assert_eq!(args.initial_panel().selection(), Selection::new(1983, -34.0, 82.0));
    }

    #[test]
    fn defaults_without_overrides() {
        let args = CliArgs::parse_from(["insolation-dashboard", "--headless"]);

        assert!(args.headless);
        assert_eq!(args.initial_panel().selection(), Selection::new(2005, 0.0, 0.0));
    }

    #[test]
    fn help_lists_the_data_flag() {
        assert!(CliArgs::help_text().contains("--data"));
    }
}
