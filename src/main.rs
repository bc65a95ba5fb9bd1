//! Brightpath Portal Entry Point

mod models;
mod config;
mod logging;
mod router;
mod nav;
mod parent;
mod favorites;
mod toast;
mod filter;
mod forms;
mod format;
mod markdown;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init(config.level());
    if let Some(e) = config_error {
        warn!(error = %e, "ignoring {}, using defaults", config::CONFIG_GLOBAL);
    }
    info!(app = %config.app_name, today = %config.today(), "starting");

    mount_to_body(move || view! { <App config=config /> });
}
