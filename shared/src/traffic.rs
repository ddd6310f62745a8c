use crate::airports::{AirportRegistry, MajorAirport};
use crate::geo::{GeoPoint, distance_nm};
use crate::vatsim::datafeed::Pilot;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Aircraft farther than this from the first registered major are ignored.
pub const GLOBAL_CUTOFF_NM: f64 = 500.0;
pub const DEPARTURE_RADIUS_NM: f64 = 30.0;
pub const GROUND_DEPARTURE_RADIUS_NM: f64 = 3.0;
pub const ARRIVAL_RADIUS_NM: f64 = 300.0;
/// Unfiled aircraft below this groundspeed are parked or taxiing; arrivals must exceed it.
pub const STATIONARY_GROUNDSPEED_KT: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftState<'a> {
    pub position: GeoPoint,
    pub groundspeed: i32,
    /// Filed departure code, empty when no flight plan is filed.
    pub departure: &'a str,
    /// Filed arrival code, empty when no flight plan is filed.
    pub arrival: &'a str,
}

impl<'a> From<&'a Pilot> for AircraftState<'a> {
    fn from(pilot: &'a Pilot) -> Self {
        let (departure, arrival) = pilot
            .flight_plan
            .as_ref()
            .map_or(("", ""), |fp| (fp.departure.as_str(), fp.arrival.as_str()));
        Self {
            position: GeoPoint::new(pilot.longitude, pilot.latitude),
            groundspeed: pilot.groundspeed,
            departure,
            arrival,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TrafficSummary {
    pub departures: HashMap<String, u32>,
    pub arrivals: HashMap<String, u32>,
    pub total: u32,
}

impl TrafficSummary {
    pub fn departures_for(&self, code: &str) -> u32 {
        self.departures.get(code).copied().unwrap_or(0)
    }

    pub fn arrivals_for(&self, code: &str) -> u32 {
        self.arrivals.get(code).copied().unwrap_or(0)
    }

    fn record_departure(&mut self, code: &str) {
        *self.departures.entry(code.to_string()).or_default() += 1;
        self.total += 1;
    }

    fn record_arrival(&mut self, code: &str) {
        *self.arrivals.entry(code.to_string()).or_default() += 1;
        self.total += 1;
    }
}

pub struct TrafficClassifier<'r> {
    registry: &'r AirportRegistry,
}

impl<'r> TrafficClassifier<'r> {
    pub const fn new(registry: &'r AirportRegistry) -> Self {
        Self { registry }
    }

    pub fn classify<'a>(
        &self,
        aircraft: impl IntoIterator<Item = AircraftState<'a>>,
    ) -> TrafficSummary {
        let mut summary = TrafficSummary::default();
        let Some(anchor) = self.registry.first() else {
            return summary;
        };

        let mut considered = 0usize;
        for ac in aircraft {
            if distance_nm(ac.position, anchor.location) > GLOBAL_CUTOFF_NM {
                continue;
            }
            considered += 1;

            if let Some(major) = self.departure_major(&ac) {
                trace!(major = %major.code, departure = ac.departure, "counted departure");
                summary.record_departure(&major.code);
            }
            if let Some(major) = self.arrival_major(&ac) {
                trace!(major = %major.code, arrival = ac.arrival, "counted arrival");
                summary.record_arrival(&major.code);
            }
        }

        debug!(
            considered,
            departures = summary.departures.values().sum::<u32>(),
            arrivals = summary.arrivals.values().sum::<u32>(),
            total = summary.total,
            "classified traffic"
        );
        summary
    }

    fn departure_major(&self, ac: &AircraftState<'_>) -> Option<&'r MajorAirport> {
        if let Some(major) = self.registry.find_major(ac.departure)
            && distance_nm(ac.position, major.location) < DEPARTURE_RADIUS_NM
        {
            return Some(major);
        }

        // No flight plan yet: sitting on the ramp at a watched field.
        if ac.departure.is_empty() && ac.groundspeed < STATIONARY_GROUNDSPEED_KT {
            return self
                .registry
                .candidates()
                .find(|(_, location)| {
                    distance_nm(ac.position, *location) < GROUND_DEPARTURE_RADIUS_NM
                })
                .map(|(major, _)| major);
        }

        None
    }

    fn arrival_major(&self, ac: &AircraftState<'_>) -> Option<&'r MajorAirport> {
        self.registry.find_major(ac.arrival).filter(|major| {
            distance_nm(ac.position, major.location) < ARRIVAL_RADIUS_NM
                && ac.groundspeed > STATIONARY_GROUNDSPEED_KT
        })
    }
}

pub fn classify<'a>(
    aircraft: impl IntoIterator<Item = AircraftState<'a>>,
    registry: &AirportRegistry,
) -> TrafficSummary {
    TrafficClassifier::new(registry).classify(aircraft)
}
