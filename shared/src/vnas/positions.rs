use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A position from a vNAS facility export. Only `callsign` takes part in
/// the online check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub callsign: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub radio_name: String,
    #[serde(default)]
    pub frequency: Option<f64>,
    pub eram_configuration: Option<EramConfiguration>,
    pub stars_configuration: Option<StarsConfiguration>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EramConfiguration {
    pub sector_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StarsConfiguration {
    pub subset: i32,
    pub sector_id: String,
}

pub fn load_positions(path: impl AsRef<Path>) -> Result<Vec<Position>, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::PositionsIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::PositionsJson {
        path: path.to_path_buf(),
        source,
    })
}
