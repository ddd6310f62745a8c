pub mod airports;
pub mod controllers;
pub mod geo;
pub mod traffic;
pub mod vatsim;
pub mod vnas;

use crate::airports::AirportRegistry;
use crate::error::ConfigError;
use crate::vnas::positions::{Position, load_positions};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use figment::value::magic::RelativePathBuf;
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const ENV_VAR_PREFIX: &str = "VATSIM_STATUS__";
pub const SETTINGS_FILE: &str = "Settings.toml";
pub const SETTINGS_FILE_ENV_VAR: &str = "VATSIM_STATUS_SETTINGS";

const DEFAULT_CONTROLLER_URL: &str = "https://nyartcc.org/controller/";
const DEFAULT_AIRPORT_URL: &str = "https://vatsim-radar.com/airport/";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub datafeed: DatafeedConfig,
    pub facility: FacilityConfig,
    pub airports: AirportRegistry,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatafeedConfig {
    #[serde(default = "default_status_url")]
    pub status_url: String,
}

impl Default for DatafeedConfig {
    fn default() -> Self {
        Self {
            status_url: default_status_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FacilityConfig {
    /// vNAS position export listing the positions this facility reports on.
    pub positions_file: RelativePathBuf,
    #[serde(default = "default_controller_url")]
    pub controller_url: String,
    #[serde(default = "default_airport_url")]
    pub airport_url: String,
    /// Base64-encoded PNG shown as the status-bar icon.
    pub template_image: Option<String>,
}

fn default_status_url() -> String {
    vatsim::datafeed::STATUS_ENDPOINT.to_string()
}

fn default_controller_url() -> String {
    DEFAULT_CONTROLLER_URL.to_string()
}

fn default_airport_url() -> String {
    DEFAULT_AIRPORT_URL.to_string()
}

impl Config {
    pub fn watched_positions(&self) -> Result<Vec<Position>, ConfigError> {
        load_positions(self.facility.positions_file.relative())
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    let settings_file =
        env::var(SETTINGS_FILE_ENV_VAR).unwrap_or_else(|_| SETTINGS_FILE.to_string());
    load_config_from(settings_file)
}

pub fn load_config_from(settings_file: impl AsRef<Path>) -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file(settings_file.as_ref()))
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        .extract::<Config>()?)
}

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
        #[error("failed to read positions file {path}: {source}")]
        PositionsIo {
            path: PathBuf,
            source: std::io::Error,
        },
        #[error("failed to parse positions file {path}: {source}")]
        PositionsJson {
            path: PathBuf,
            source: serde_json::Error,
        },
    }

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum RegistryError {
        #[error("at least one major airport must be configured")]
        Empty,
        #[error("airport codes must not be empty")]
        EmptyCode,
        #[error("airport code {0} is configured more than once")]
        DuplicateCode(String),
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
    }
}
