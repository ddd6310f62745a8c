use chrono::{DateTime, TimeDelta, Utc};
use shared::FacilityConfig;
use shared::airports::AirportRegistry;
use shared::controllers::OnlineControllers;
use shared::traffic::TrafficSummary;
use std::fmt::{Display, Formatter};

/// One xbar plugin refresh: a header line followed by dropdown sections.
/// See https://github.com/matryer/xbar-plugins/blob/main/CONTRIBUTING.md
pub struct StatusReport<'a> {
    pub facility: &'a FacilityConfig,
    pub registry: &'a AirportRegistry,
    pub traffic: &'a TrafficSummary,
    pub online: &'a OnlineControllers<'a>,
    pub now: DateTime<Utc>,
}

impl Display for StatusReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.online.len())?;
        if self.online.has_center {
            write!(f, "*")?;
        }
        write!(f, ":headphones: {} :airplane:", self.traffic.total)?;
        if let Some(image) = &self.facility.template_image {
            write!(f, " | templateImage={image}")?;
        }
        writeln!(f)?;

        if !self.online.is_empty() {
            writeln!(f, "---")?;
            for ctrl in &self.online.controllers {
                writeln!(
                    f,
                    "{} - {} ({}) | font=Monaco | href={}{}",
                    ctrl.callsign,
                    ctrl.name,
                    format_online_time(self.now - ctrl.logon_time),
                    self.facility.controller_url,
                    ctrl.cid
                )?;
            }
        }

        writeln!(f, "---")?;
        let mut codes: Vec<&str> = self
            .registry
            .majors()
            .iter()
            .map(|m| m.code.as_str())
            .collect();
        codes.sort_unstable();
        for code in codes {
            writeln!(
                f,
                "{code} {:2}🛫 {:2}🛬 | font=Monaco | href={}{code}",
                self.traffic.departures_for(code),
                self.traffic.arrivals_for(code),
                self.facility.airport_url
            )?;
        }

        Ok(())
    }
}

fn format_online_time(elapsed: TimeDelta) -> String {
    let minutes = elapsed.num_minutes().max(0);
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use figment::Figment;
    use figment::providers::{Format, Toml};
    use serde_json::json;
    use shared::airports::MajorAirport;
    use shared::geo::GeoPoint;
    use shared::vatsim::datafeed::Controller;

    fn facility(template_image: Option<&str>) -> FacilityConfig {
        let mut toml = String::from(
            r#"
            positions_file = "positions.json"
            controller_url = "https://nyartcc.org/controller/"
            airport_url = "https://vatsim-radar.com/airport/"
            "#,
        );
        if let Some(image) = template_image {
            toml.push_str(&format!("template_image = \"{image}\"\n"));
        }
        Figment::from(Toml::string(&toml)).extract().unwrap()
    }

    fn registry() -> AirportRegistry {
        let major = |code: &str| MajorAirport {
            code: code.to_string(),
            location: GeoPoint::default(),
            satellites: vec![],
        };
        AirportRegistry::new(vec![major("KJFK"), major("KLGA"), major("KEWR")]).unwrap()
    }

    fn session(callsign: &str, name: &str, cid: i32, logon: &str) -> Controller {
        serde_json::from_value(json!({
            "cid": cid,
            "name": name,
            "callsign": callsign,
            "frequency": "125.325",
            "facility": 6,
            "rating": 5,
            "server": "USA-EAST",
            "visual_range": 600,
            "text_atis": null,
            "logon_time": logon,
            "last_updated": logon
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 14, 5, 0).unwrap()
    }

    #[test]
    fn online_time_formatting() {
        assert_eq!(format_online_time(TimeDelta::minutes(5)), "0:05");
        assert_eq!(format_online_time(TimeDelta::minutes(125)), "2:05");
        assert_eq!(format_online_time(TimeDelta::seconds(59)), "0:00");
        assert_eq!(format_online_time(TimeDelta::minutes(-3)), "0:00");
    }

    #[test]
    fn renders_quiet_facility() {
        let facility = facility(None);
        let registry = registry();
        let traffic = TrafficSummary::default();
        let online = OnlineControllers::default();
        let report = StatusReport {
            facility: &facility,
            registry: &registry,
            traffic: &traffic,
            online: &online,
            now: now(),
        };

        assert_eq!(
            report.to_string(),
            "0:headphones: 0 :airplane:\n\
             ---\n\
             KEWR  0🛫  0🛬 | font=Monaco | href=https://vatsim-radar.com/airport/KEWR\n\
             KJFK  0🛫  0🛬 | font=Monaco | href=https://vatsim-radar.com/airport/KJFK\n\
             KLGA  0🛫  0🛬 | font=Monaco | href=https://vatsim-radar.com/airport/KLGA\n"
        );
    }

    #[test]
    fn renders_staffed_facility() {
        let facility = facility(Some("aWNvbg=="));
        let registry = registry();
        let mut traffic = TrafficSummary::default();
        traffic.departures.insert("KJFK".to_string(), 12);
        traffic.arrivals.insert("KJFK".to_string(), 3);
        traffic.arrivals.insert("KEWR".to_string(), 7);
        traffic.total = 22;

        let sessions = [
            session("JFK_TWR", "Alex Doe", 1_234_567, "2026-10-17T13:55:00Z"),
            session("NY_CTR", "Sam Roe", 7_654_321, "2026-10-17T11:42:30Z"),
        ];
        let online = OnlineControllers {
            controllers: sessions.iter().collect(),
            has_center: true,
        };
        let report = StatusReport {
            facility: &facility,
            registry: &registry,
            traffic: &traffic,
            online: &online,
            now: now(),
        };

        assert_eq!(
            report.to_string(),
            "2*:headphones: 22 :airplane: | templateImage=aWNvbg==\n\
             ---\n\
             JFK_TWR - Alex Doe (0:10) | font=Monaco | href=https://nyartcc.org/controller/1234567\n\
             NY_CTR - Sam Roe (2:22) | font=Monaco | href=https://nyartcc.org/controller/7654321\n\
             ---\n\
             KEWR  0🛫  7🛬 | font=Monaco | href=https://vatsim-radar.com/airport/KEWR\n\
             KJFK 12🛫  3🛬 | font=Monaco | href=https://vatsim-radar.com/airport/KJFK\n\
             KLGA  0🛫  0🛬 | font=Monaco | href=https://vatsim-radar.com/airport/KLGA\n"
        );
    }
}
