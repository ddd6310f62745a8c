use crate::error::FetchError;
use reqwest::Client;
use shared::vatsim::datafeed::{DatafeedRoot, StatusRoot};
use tracing::{debug, info};

pub async fn fetch_datafeed(
    client: &Client,
    status_url: &str,
) -> Result<DatafeedRoot, FetchError> {
    debug!(url = status_url, "fetching VATSIM status document");
    let status = client
        .get(status_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let status: StatusRoot = serde_json::from_str(&status)?;

    let Some(url) = status.datafeed_url() else {
        return Err(FetchError::UnexpectedStatus {
            v3: status.data.v3.len(),
            metar: status.metar.len(),
        });
    };

    debug!(url, "fetching VATSIM datafeed");
    let resp = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let datafeed: DatafeedRoot = serde_json::from_str(&resp)?;

    info!(
        updated_at = ?datafeed.general.update_timestamp,
        pilots = datafeed.pilots.len(),
        controllers = datafeed.controllers.len(),
        "fetched VATSIM datafeed"
    );
    Ok(datafeed)
}
