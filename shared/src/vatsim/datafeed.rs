use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_ENDPOINT: &str = "https://status.vatsim.net/status.json";

// The public feeds gain fields over time, so unknown fields are tolerated here.

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusRoot {
    pub data: StatusData,
    pub metar: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusData {
    pub v3: Vec<String>,
    #[serde(default)]
    pub transceivers: Vec<String>,
}

impl StatusRoot {
    /// The v3 datafeed URL, if the status document has the single-endpoint
    /// shape we know how to consume.
    pub fn datafeed_url(&self) -> Option<&str> {
        match (self.data.v3.as_slice(), self.metar.len()) {
            ([url], 1) => Some(url.as_str()),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatafeedRoot {
    pub general: General,
    pub pilots: Vec<Pilot>,
    pub controllers: Vec<Controller>,
    #[serde(default)]
    pub atis: Vec<Atis>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct General {
    pub version: i32,
    pub update_timestamp: DateTime<Utc>,
    pub connected_clients: i32,
    pub unique_users: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pilot {
    pub cid: i32,
    pub name: String,
    pub callsign: String,
    pub server: String,
    pub pilot_rating: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
    pub groundspeed: i32,
    pub transponder: String,
    pub heading: i32,
    pub qnh_i_hg: f64,
    pub qnh_mb: f64,
    pub flight_plan: Option<FlightPlan>,
    pub logon_time: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FlightPlan {
    pub flight_rules: String,
    pub aircraft: String,
    pub aircraft_faa: String,
    pub aircraft_short: String,
    pub departure: String,
    pub arrival: String,
    pub alternate: String,
    pub cruise_tas: String,
    pub altitude: String,
    pub deptime: String,
    pub enroute_time: String,
    pub fuel_time: String,
    pub remarks: String,
    pub route: String,
    pub revision_id: i32,
    pub assigned_transponder: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Controller {
    pub cid: i32,
    pub name: String,
    pub callsign: String,
    pub frequency: String,
    pub facility: i32,
    pub rating: i32,
    pub server: String,
    pub visual_range: i32,
    pub text_atis: Option<Vec<String>>,
    pub logon_time: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Atis {
    pub cid: i32,
    pub name: String,
    pub callsign: String,
    pub frequency: String,
    pub facility: i32,
    pub rating: i32,
    pub server: String,
    pub visual_range: i32,
    pub atis_code: Option<String>,
    pub text_atis: Option<Vec<String>>,
    pub logon_time: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
