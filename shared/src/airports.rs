use crate::error::RegistryError;
use crate::geo::GeoPoint;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Airport {
    pub code: String,
    pub location: GeoPoint,
}

/// A primary airport and the satellite fields whose traffic is attributed to it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MajorAirport {
    pub code: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub satellites: Vec<Airport>,
}

impl MajorAirport {
    pub fn owns(&self, code: &str) -> bool {
        self.code == code || self.satellites.iter().any(|s| s.code == code)
    }
}

/// Ordered set of major airports. Registration order is significant: the
/// first major anchors the global distance cutoff and earlier entries win
/// ties during ground attribution.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<MajorAirport>")]
pub struct AirportRegistry {
    majors: Vec<MajorAirport>,
}

impl AirportRegistry {
    pub fn new(majors: Vec<MajorAirport>) -> Result<Self, RegistryError> {
        if majors.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        let codes = majors
            .iter()
            .flat_map(|m| std::iter::once(&m.code).chain(m.satellites.iter().map(|s| &s.code)));
        for code in codes {
            if code.is_empty() {
                return Err(RegistryError::EmptyCode);
            }
            if !seen.insert(code.as_str()) {
                return Err(RegistryError::DuplicateCode(code.clone()));
            }
        }

        Ok(Self { majors })
    }

    pub fn majors(&self) -> &[MajorAirport] {
        &self.majors
    }

    pub fn len(&self) -> usize {
        self.majors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }

    pub fn first(&self) -> Option<&MajorAirport> {
        self.majors.first()
    }

    /// Resolves an airport code (major or satellite) to the major that owns it.
    pub fn find_major(&self, code: &str) -> Option<&MajorAirport> {
        self.majors.iter().find(|m| m.owns(code))
    }

    /// Every major's own location followed by its satellites, in registration order,
    /// each paired with the major it attributes to.
    pub fn candidates(&self) -> impl Iterator<Item = (&MajorAirport, GeoPoint)> {
        self.majors.iter().flat_map(|major| {
            std::iter::once((major, major.location))
                .chain(major.satellites.iter().map(move |s| (major, s.location)))
        })
    }
}

impl TryFrom<Vec<MajorAirport>> for AirportRegistry {
    type Error = RegistryError;

    fn try_from(majors: Vec<MajorAirport>) -> Result<Self, Self::Error> {
        Self::new(majors)
    }
}
