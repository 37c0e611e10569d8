//! Vital Stats GUI - Main Entry Point
//!
//! Dashboard for Brazilian births, deaths and marriages statistics

use anyhow::Context;
use vital_stats_gui::domain::config::AppConfig;
use vital_stats_gui::services::ApiClient;
use vital_stats_gui::utils::config_store::{CONFIG_FILE, config_dir, load_config, save_config};
use vital_stats_gui::utils::logging;

fn main() -> anyhow::Result<()> {
    // Config is read before logging exists; report problems once it does
    let (config, config_error) = match load_config::<AppConfig>(CONFIG_FILE) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let config = config.with_env_overrides();

    let _log_guard = logging::init(&config.log);

    match config_error {
        Some(e) => tracing::warn!("Ignoring unreadable {CONFIG_FILE}, using defaults: {e}"),
        None => write_default_config_if_missing(&config),
    }

    let api = ApiClient::new(&config.api).context("building HTTP client")?;
    tracing::info!("Starting Vital Stats against {}", api.base_url());

    run(config, api)
}

/// First run: leave an editable config file behind
fn write_default_config_if_missing(config: &AppConfig) {
    let Ok(dir) = config_dir() else { return };
    if dir.join(CONFIG_FILE).exists() {
        return;
    }
    match save_config(CONFIG_FILE, config) {
        Ok(()) => tracing::info!("Wrote default configuration to {}", dir.display()),
        Err(e) => tracing::warn!("Could not write default configuration: {e}"),
    }
}

#[cfg(feature = "gui")]
fn run(config: AppConfig, api: ApiClient) -> anyhow::Result<()> {
    vital_stats_gui::app::application::run_app(config, api);
    Ok(())
}

/// Without the GUI, print the national view once
#[cfg(not(feature = "gui"))]
fn run(config: AppConfig, api: ApiClient) -> anyhow::Result<()> {
    use vital_stats_gui::eventing::app_event::AppEvent;
    use vital_stats_gui::i18n::{Locale, t};
    use vital_stats_gui::services::{Session, block_on};
    use vital_stats_gui::utils::format::format_number;

    let locale = Locale::from_system();
    let mut session = Session::new(api, config.initial_filters());
    block_on(session.dispatch(AppEvent::Init)).context("starting tokio runtime")?;

    let state = session.state();
    let filters = state.filters();
    println!("{}", t(locale, "app-title"));
    println!(
        "{} · {} {}",
        t(locale, filters.record_type.label_key()),
        t(locale, "results-year"),
        filters.year
    );
    println!();
    for row in state.rows() {
        println!("{:<32} {:>14}", row.name, format_number(row.total, locale));
    }
    println!(
        "{:<32} {:>14}",
        t(locale, "results-total"),
        format_number(state.total(), locale)
    );

    for notice in state.notices().newest_first() {
        eprintln!("[{}] {}", notice.level().label(), notice.kind.message(locale));
    }
    Ok(())
}
