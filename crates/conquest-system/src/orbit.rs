//! Circular orbits around the system's star, measured in AU and days.

use serde::{Deserialize, Serialize};

/// A position in the orbital plane, in AU, with the star at the origin.
pub type AuPoint = glam::Vec2;

/// A circular orbit around the star.
///
/// The body sits at `phase_degrees` on day 0 and completes one revolution
/// every `period_days`. A period of zero keeps the body fixed at its phase.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircularOrbit {
    /// Orbital radius in AU.
    pub distance_au: f32,
    /// Days per revolution.
    #[serde(default)]
    pub period_days: f32,
    /// Angle at day 0, counter-clockwise from the +x axis.
    #[serde(default)]
    pub phase_degrees: f32,
}

impl CircularOrbit {
    pub fn new(distance_au: f32, period_days: f32, phase_degrees: f32) -> Self {
        Self {
            distance_au,
            period_days,
            phase_degrees,
        }
    }

    /// An orbit that never moves from `phase_degrees`.
    pub fn fixed(distance_au: f32, phase_degrees: f32) -> Self {
        Self::new(distance_au, 0.0, phase_degrees)
    }

    /// Angle in degrees after `day` simulated days, wrapped to `[0, 360)`.
    pub fn angle_at(&self, day: u32) -> f32 {
        let travelled = if self.period_days > 0.0 {
            // f64 keeps long campaigns from drifting.
            ((day as f64 / self.period_days as f64).fract() * 360.0) as f32
        } else {
            0.0
        };
        (self.phase_degrees + travelled).rem_euclid(360.0)
    }

    /// Position in AU after `day` simulated days.
    pub fn position_at(&self, day: u32) -> AuPoint {
        let theta = self.angle_at(day).to_radians();
        AuPoint::new(
            self.distance_au * theta.cos(),
            self.distance_au * theta.sin(),
        )
    }

    /// The same orbit shifted ahead by `degrees`.
    pub fn offset(&self, degrees: f32) -> Self {
        Self {
            phase_degrees: (self.phase_degrees + degrees).rem_euclid(360.0),
            ..*self
        }
    }
}

/// Lagrange points that share their planet's orbit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LagrangePoint {
    /// Opposite the planet, across the star.
    L3,
    /// 60° ahead of the planet.
    L4,
    /// 60° behind the planet.
    L5,
}

impl LagrangePoint {
    /// Angular offset from the planet along its orbit.
    pub fn offset_degrees(self) -> f32 {
        match self {
            LagrangePoint::L3 => 180.0,
            LagrangePoint::L4 => 60.0,
            LagrangePoint::L5 => -60.0,
        }
    }

    /// Orbit of a station at this point of `planet`'s orbit.
    pub fn orbit_for(self, planet: &CircularOrbit) -> CircularOrbit {
        planet.offset(self.offset_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_day_zero_sits_at_phase() {
        let orbit = CircularOrbit::new(2.0, 100.0, 0.0);
        let pos = orbit.position_at(0);
        assert_eq!(pos, AuPoint::new(2.0, 0.0));
    }

    #[test]
    fn test_quarter_period_turns_ninety_degrees() {
        let orbit = CircularOrbit::new(1.5, 100.0, 0.0);
        let pos = orbit.position_at(25);
        assert!(pos.x.abs() < EPS, "x = {}", pos.x);
        assert!((pos.y - 1.5).abs() < EPS, "y = {}", pos.y);
    }

    #[test]
    fn test_full_period_returns_to_start() {
        let orbit = CircularOrbit::new(3.0, 40.0, 30.0);
        let start = orbit.position_at(0);
        let end = orbit.position_at(40);
        assert!((start - end).length() < EPS);
        assert!((orbit.position_at(400) - start).length() < EPS);
    }

    #[test]
    fn test_radius_is_constant() {
        let orbit = CircularOrbit::new(4.25, 73.0, 12.0);
        for day in 0..200 {
            let r = orbit.position_at(day).length();
            assert!((r - 4.25).abs() < EPS, "day {day}: r = {r}");
        }
    }

    #[test]
    fn test_fixed_orbit_never_moves() {
        let orbit = CircularOrbit::fixed(1.0, 90.0);
        assert_eq!(orbit.position_at(0), orbit.position_at(1000));
    }

    #[test]
    fn test_position_is_deterministic() {
        let orbit = CircularOrbit::new(2.7, 11.0, 5.0);
        for day in [0, 1, 7, 365, 10_000] {
            assert_eq!(orbit.position_at(day), orbit.position_at(day));
        }
    }

    #[test]
    fn test_lagrange_offsets() {
        let planet = CircularOrbit::new(2.0, 100.0, 0.0);
        let l3 = LagrangePoint::L3.orbit_for(&planet).position_at(0);
        assert!((l3 - AuPoint::new(-2.0, 0.0)).length() < EPS);

        let l4 = LagrangePoint::L4.orbit_for(&planet);
        let l5 = LagrangePoint::L5.orbit_for(&planet);
        assert!((l4.phase_degrees - 60.0).abs() < EPS);
        assert!((l5.phase_degrees - 300.0).abs() < EPS);
        assert_eq!(l4.distance_au, planet.distance_au);
        assert_eq!(l4.period_days, planet.period_days);
    }

    #[test]
    fn test_station_tracks_planet_over_time() {
        let planet = CircularOrbit::new(1.0, 60.0, 10.0);
        let station = LagrangePoint::L4.orbit_for(&planet);
        for day in [0, 13, 59, 600] {
            let gap = (station.angle_at(day) - planet.angle_at(day)).rem_euclid(360.0);
            assert!((gap - 60.0).abs() < 1e-2, "day {day}: gap {gap}");
        }
    }
}
