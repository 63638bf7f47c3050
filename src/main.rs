//! Hiring Board Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod commands;
mod query;
mod store;
mod context;
mod board;
mod scroll;
mod resolve;
mod route;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    logging::init(config.log_level);
    if let Some(e) = config_error {
        log::warn!("{}; using default config", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
