//! Media Shell
//!
//! Serves the Dioxus app (server feature) or hydrates it in the browser.

use media_shell::app::App;
#[cfg(feature = "server")]
use media_shell::config;

#[cfg(feature = "server")]
fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_shell=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Media Shell v{} ({})",
        media_shell::VERSION,
        media_shell::GIT_SHA
    );

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration, using defaults: {}", e);
            config::ShellConfig::default()
        }
    };
    tracing::info!(
        "Configuration loaded, media server: {}, isolated paths: {:?}",
        config.server_url,
        config.new_layout_paths
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
