pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod form;
pub mod hooks;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_utils;

use crate::app::{App, AppProps};
use crate::config::ClientConfig;

/// Install logging and mount the app on the document body
pub fn run() -> anyhow::Result<()> {
    let config = ClientConfig::from_build_env();
    services::logging::init(config.log_level)
        .map_err(|e| anyhow::anyhow!("failed to install console logger: {}", e))?;

    log::info!("expense tracker starting against {}", config.api_base_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
    Ok(())
}
