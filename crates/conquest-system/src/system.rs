//! Star systems and their RON file representation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::belt::Belt;
use crate::error::SystemError;
use crate::location::{Location, LocationSubType, Team};
use crate::orbit::{CircularOrbit, LagrangePoint};

/// One star with its planets (and their stations) and asteroid belts.
#[derive(Clone, Debug, PartialEq)]
pub struct StarSystem {
    name: String,
    planets: Vec<Location>,
    belts: Vec<Belt>,
}

impl StarSystem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            planets: Vec::new(),
            belts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Planets in insertion order.
    pub fn planets(&self) -> &[Location] {
        &self.planets
    }

    /// Belts in insertion order.
    pub fn belts(&self) -> &[Belt] {
        &self.belts
    }

    /// Belts sorted from the star outwards by near edge.
    pub fn belts_by_near_edge(&self) -> Vec<&Belt> {
        let mut belts: Vec<&Belt> = self.belts.iter().collect();
        belts.sort_by(|a, b| a.cmp_near_edge(b));
        belts
    }

    /// Add a planet; its name and its stations' names must be new to the system.
    pub fn add_planet(&mut self, planet: Location) -> Result<(), SystemError> {
        let mut names = self.names();
        let incoming = std::iter::once(planet.name())
            .chain(planet.lagrange_locations().iter().map(Location::name));
        for name in incoming {
            if !names.insert(name) {
                return Err(SystemError::DuplicateName(name.to_string()));
            }
        }
        self.planets.push(planet);
        Ok(())
    }

    /// Add a belt; its name must be new to the system.
    pub fn add_belt(&mut self, belt: Belt) -> Result<(), SystemError> {
        if self.names().contains(belt.name()) {
            return Err(SystemError::DuplicateName(belt.name().to_string()));
        }
        self.belts.push(belt);
        Ok(())
    }

    fn names(&self) -> HashSet<&str> {
        self.planets
            .iter()
            .flat_map(|p| std::iter::once(p).chain(p.lagrange_locations()))
            .map(Location::name)
            .chain(self.belts.iter().map(Belt::name))
            .collect()
    }

    // --- File representation ---

    /// Validate a parsed system file into a system.
    pub fn from_file_data(file: SystemFile) -> Result<Self, SystemError> {
        let mut system = StarSystem::new(file.name);

        for entry in file.planets {
            let mut planet = Location::planet(entry.name, entry.team, entry.sub_type, entry.orbit);
            for station in entry.stations {
                planet.attach_station(station.name, station.team, station.sub_type, station.point);
            }
            system.add_planet(planet)?;
        }

        for entry in file.belts {
            system.add_belt(Belt::new(entry.name, entry.near_edge_au, entry.far_edge_au)?)?;
        }

        log::debug!(
            "Built system {:?}: {} planets, {} belts",
            system.name,
            system.planets.len(),
            system.belts.len()
        );
        Ok(system)
    }

    /// The file representation of this system.
    pub fn to_file_data(&self) -> SystemFile {
        SystemFile {
            name: self.name.clone(),
            planets: self
                .planets
                .iter()
                .map(|planet| PlanetEntry {
                    name: planet.name().to_string(),
                    team: planet.team(),
                    sub_type: planet.sub_type(),
                    orbit: *planet.orbit(),
                    stations: planet
                        .lagrange_locations()
                        .iter()
                        .filter_map(|station| {
                            Some(StationEntry {
                                name: station.name().to_string(),
                                team: station.team(),
                                sub_type: station.sub_type(),
                                point: station.lagrange_point()?,
                            })
                        })
                        .collect(),
                })
                .collect(),
            belts: self
                .belts
                .iter()
                .map(|belt| BeltEntry {
                    name: belt.name().to_string(),
                    near_edge_au: belt.near_edge_au(),
                    far_edge_au: belt.far_edge_au(),
                })
                .collect(),
        }
    }

    /// Load and validate a RON system file.
    pub fn load(path: &Path) -> Result<Self, SystemError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SystemError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SystemFile = ron::from_str(&contents).map_err(SystemError::ParseError)?;
        let system = Self::from_file_data(file)?;
        log::info!("Loaded system {:?} from {}", system.name, path.display());
        Ok(system)
    }

    /// Write this system as pretty RON.
    pub fn save(&self, path: &Path) -> Result<(), SystemError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
        let serialized = ron::ser::to_string_pretty(&self.to_file_data(), pretty)
            .map_err(SystemError::SerializeError)?;
        std::fs::write(path, serialized).map_err(|source| SystemError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// On-disk description of a star system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemFile {
    pub name: String,
    #[serde(default)]
    pub planets: Vec<PlanetEntry>,
    #[serde(default)]
    pub belts: Vec<BeltEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanetEntry {
    pub name: String,
    pub team: Team,
    pub sub_type: LocationSubType,
    pub orbit: CircularOrbit,
    #[serde(default)]
    pub stations: Vec<StationEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationEntry {
    pub name: String,
    pub team: Team,
    pub sub_type: LocationSubType,
    pub point: LagrangePoint,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeltEntry {
    pub name: String,
    pub near_edge_au: f32,
    pub far_edge_au: f32,
}
