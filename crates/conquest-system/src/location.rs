//! Planets and the stations parked at their lagrange points.

use serde::{Deserialize, Serialize};

use crate::orbit::{AuPoint, CircularOrbit, LagrangePoint};

/// The two sides of a conquest campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Green,
    Orange,
}

/// What kind of body a [`Location`] is.
///
/// `Unknown` absorbs subtype names this build does not recognise, so older
/// binaries can still read newer system files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationSubType {
    PlanetHabitable,
    PlanetGaseous,
    PlanetBarren,
    StationMining,
    StationFactoryParts,
    StationFactoryRestores,
    StationSupplyDepot,
    #[serde(other)]
    Unknown,
}

impl LocationSubType {
    /// Every recognised subtype, in declaration order.
    pub const KNOWN: [LocationSubType; 7] = [
        LocationSubType::PlanetHabitable,
        LocationSubType::PlanetGaseous,
        LocationSubType::PlanetBarren,
        LocationSubType::StationMining,
        LocationSubType::StationFactoryParts,
        LocationSubType::StationFactoryRestores,
        LocationSubType::StationSupplyDepot,
    ];
}

/// A planet or a lagrange-point station.
///
/// Stations live in their planet's `lagrange_locations` and follow the
/// planet's orbit at a fixed angular offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    name: String,
    team: Team,
    sub_type: LocationSubType,
    orbit: CircularOrbit,
    lagrange_point: Option<LagrangePoint>,
    lagrange_locations: Vec<Location>,
}

impl Location {
    /// A planet on its own orbit around the star.
    pub fn planet(
        name: impl Into<String>,
        team: Team,
        sub_type: LocationSubType,
        orbit: CircularOrbit,
    ) -> Self {
        Self {
            name: name.into(),
            team,
            sub_type,
            orbit,
            lagrange_point: None,
            lagrange_locations: Vec::new(),
        }
    }

    /// Park a new station at `point` on this planet's orbit.
    pub fn attach_station(
        &mut self,
        name: impl Into<String>,
        team: Team,
        sub_type: LocationSubType,
        point: LagrangePoint,
    ) -> &mut Location {
        let station = Location {
            name: name.into(),
            team,
            sub_type,
            orbit: point.orbit_for(&self.orbit),
            lagrange_point: Some(point),
            lagrange_locations: Vec::new(),
        };
        self.lagrange_locations.push(station);
        let last = self.lagrange_locations.len() - 1;
        &mut self.lagrange_locations[last]
    }

    /// Builder form of [`attach_station`](Self::attach_station).
    pub fn with_station(
        mut self,
        name: impl Into<String>,
        team: Team,
        sub_type: LocationSubType,
        point: LagrangePoint,
    ) -> Self {
        self.attach_station(name, team, sub_type, point);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn sub_type(&self) -> LocationSubType {
        self.sub_type
    }

    /// Radius of the orbit around the star, in AU.
    pub fn orbital_distance_au(&self) -> f32 {
        self.orbit.distance_au
    }

    pub fn orbit(&self) -> &CircularOrbit {
        &self.orbit
    }

    /// The lagrange point this station occupies; `None` for planets.
    pub fn lagrange_point(&self) -> Option<LagrangePoint> {
        self.lagrange_point
    }

    /// Stations attached to this planet, in insertion order.
    pub fn lagrange_locations(&self) -> &[Location] {
        &self.lagrange_locations
    }

    /// Position in AU relative to the star after `day` simulated days.
    pub fn coordinates(&self, day: u32) -> AuPoint {
        self.orbit.position_at(day)
    }
}
