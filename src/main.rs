use anyhow::Context;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_booking::{config::Config, controllers::Session, AppState};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load().context("Failed to load configuration")?;

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting box office for {}", config.app.name);

    // Build the catalog and the schedule from configuration
    let state = AppState::new(config).context("Failed to seed catalog")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(state, stdin.lock(), stdout.lock());
    session.run().context("Console I/O failed")?;

    info!("Box office closed");
    Ok(())
}
