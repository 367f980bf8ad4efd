//! Birthday Card Frontend Entry Point

mod config;
mod logging;
mod state;
mod sequencer;
mod store;
mod context;
mod confetti;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_from_page() {
        Ok(config) => (config, None),
        Err(e) => (config::CardConfig::default(), Some(e)),
    };
    logging::init(config.level().unwrap_or(tracing::Level::INFO));
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid card config, using defaults");
    }
    tracing::info!(
        candles = config.total_candles,
        balloons = config.total_balloons,
        tick_ms = config.tick_interval_ms,
        "mounting birthday card"
    );

    mount_to_body(move || view! { <App config=config /> });
}
