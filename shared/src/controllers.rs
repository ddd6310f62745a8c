use crate::vatsim::datafeed::Controller;
use crate::vnas::positions::Position;
use std::collections::HashSet;
use tracing::{Level, debug, event_enabled};

pub const CENTER_SUFFIX: &str = "_CTR";

#[derive(Debug, Default)]
pub struct OnlineControllers<'a> {
    /// Sorted ascending by callsign.
    pub controllers: Vec<&'a Controller>,
    pub has_center: bool,
}

impl OnlineControllers<'_> {
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

/// Keeps the sessions whose callsign exactly matches a watched position.
pub fn filter_online<'a>(sessions: &'a [Controller], watched: &[Position]) -> OnlineControllers<'a> {
    let watched: HashSet<&str> = watched.iter().map(|p| p.callsign.as_str()).collect();

    let mut controllers: Vec<&Controller> = sessions
        .iter()
        .filter(|c| watched.contains(c.callsign.as_str()))
        .collect();
    controllers.sort_by(|a, b| a.callsign.cmp(&b.callsign));

    let has_center = controllers.iter().any(|c| c.callsign.ends_with(CENTER_SUFFIX));

    if event_enabled!(Level::DEBUG) {
        let callsigns: Vec<_> = controllers.iter().map(|c| c.callsign.as_str()).collect();
        debug!(online = ?callsigns, has_center, "filtered online controllers");
    }

    OnlineControllers {
        controllers,
        has_center,
    }
}
