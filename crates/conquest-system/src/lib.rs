//! Star-system data model consumed by the map renderer.
//!
//! A [`StarSystem`] holds planets (each with its lagrange-point stations) and
//! asteroid belts. Positions come from simple circular orbits evaluated at a
//! simulated day; the renderer only ever borrows a system immutably.

mod belt;
mod error;
mod location;
mod orbit;
mod system;

pub use belt::Belt;
pub use error::SystemError;
pub use location::{Location, LocationSubType, Team};
pub use orbit::{AuPoint, CircularOrbit, LagrangePoint};
pub use system::{BeltEntry, PlanetEntry, StarSystem, StationEntry, SystemFile};
