#[warn(clippy::pedantic)]
mod error;
mod fetch;
mod render;

use crate::error::MainError;
use crate::fetch::fetch_datafeed;
use crate::render::StatusReport;
use chrono::Utc;
use shared::controllers::filter_online;
use shared::error::InitializationError;
use shared::load_config;
use shared::traffic::{AircraftState, TrafficClassifier};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), MainError> {
    // stdout carries the status-bar block, so logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(InitializationError::Tracing)?;

    let config = load_config()
        .inspect_err(|e| error!(error = ?e, "configuration could not be initialized"))
        .map_err(InitializationError::from)?;
    let positions = config
        .watched_positions()
        .inspect_err(|e| error!(error = ?e, "watched positions could not be loaded"))
        .map_err(InitializationError::from)?;
    debug!(
        airports = config.airports.len(),
        positions = positions.len(),
        "configuration loaded"
    );

    let http_client = reqwest::Client::new();
    let datafeed = fetch_datafeed(&http_client, &config.datafeed.status_url)
        .await
        .inspect_err(|e| error!(error = ?e, "failed to fetch and deserialize datafeed"))?;

    let traffic = TrafficClassifier::new(&config.airports)
        .classify(datafeed.pilots.iter().map(AircraftState::from));
    let online = filter_online(&datafeed.controllers, &positions);

    let report = StatusReport {
        facility: &config.facility,
        registry: &config.airports,
        traffic: &traffic,
        online: &online,
        now: Utc::now(),
    };
    print!("{report}");

    Ok(())
}
