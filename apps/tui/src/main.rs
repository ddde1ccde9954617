use clap::Parser;
use color_eyre::eyre::{Report, WrapErr};
use color_eyre::Result;
use insolation_dashboard::app::App;
use insolation_dashboard::cli::CliArgs;
use insolation_dashboard::dataset::{Dataset, DatasetSummary};
use insolation_dashboard::{config, event, terminal};
use std::path::PathBuf;
use std::sync::Arc;

/// Malformed groups logged individually before the rest are only counted.
const MAX_REPORTED_ISSUES: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = config::init_app_config();

    // Check if we're running in a terminal
    let headless = args.headless || args.json || !is_terminal();
    config::init_logging(&config, !headless)?;
    log::debug!("Resolved configuration: {config:?}");

    let dataset = load_dataset(config.data_path.clone()).await?;
    let mut app = App::new(Arc::new(dataset), args.initial_panel());
    report_issues(&app.summary);

    if headless {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

/// Reads the CSV on a blocking worker so the runtime thread never waits on
/// disk.
async fn load_dataset(path: PathBuf) -> Result<Dataset> {
    let shown = path.display().to_string();

    let loaded = tokio::task::spawn_blocking(move || Dataset::load(path))
        .await
        .wrap_err("Dataset loader task failed")?;

    loaded.map_err(|err| {
        let kind = err.kind();
        Report::new(err).wrap_err(format!(
            "Cannot start without the insolation dataset ({kind} in {shown})"
        ))
    })
}

fn report_issues(summary: &DatasetSummary) {
    for issue in summary.issues.iter().take(MAX_REPORTED_ISSUES) {
        log::warn!(
            "Group year={} lat={} lon={} has {} row(s){}",
            issue.year,
            issue.latitude,
            issue.longitude,
            issue.rows,
            if issue.months_out_of_order {
                ", months out of order"
            } else {
                ""
            }
        );
    }

    if summary.issues.len() > MAX_REPORTED_ISSUES {
        log::warn!(
            "{} more incomplete group(s) not shown",
            summary.issues.len() - MAX_REPORTED_ISSUES
        );
    }
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
