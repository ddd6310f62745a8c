use chrono::{DateTime, Utc};
use shared::vatsim::datafeed::{DatafeedRoot, STATUS_ENDPOINT, StatusRoot};

#[tokio::test]
#[ignore = "requires network access"]
async fn verify_datafeed_dtos() -> Result<(), reqwest::Error> {
    let status = reqwest::get(STATUS_ENDPOINT).await?.json::<StatusRoot>().await?;
    let url = status.datafeed_url().expect("single v3 endpoint in status document");

    let res = reqwest::get(url).await?.json::<DatafeedRoot>().await?;
    assert!(res.general.update_timestamp > DateTime::<Utc>::MIN_UTC);
    Ok(())
}
