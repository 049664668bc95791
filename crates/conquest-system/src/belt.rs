//! Asteroid belts: rings around the star bounded by two radii.

use std::cmp::Ordering;

use crate::error::SystemError;

/// An asteroid belt between `near_edge_au` and `far_edge_au`.
#[derive(Clone, Debug, PartialEq)]
pub struct Belt {
    name: String,
    near_edge_au: f32,
    far_edge_au: f32,
}

impl Belt {
    /// Build a belt, rejecting edges that do not describe a ring
    /// (`0 <= near < far`, both finite).
    pub fn new(
        name: impl Into<String>,
        near_edge_au: f32,
        far_edge_au: f32,
    ) -> Result<Self, SystemError> {
        let name = name.into();
        let valid = near_edge_au.is_finite()
            && far_edge_au.is_finite()
            && near_edge_au >= 0.0
            && near_edge_au < far_edge_au;
        if !valid {
            return Err(SystemError::InvalidBelt {
                name,
                near: near_edge_au,
                far: far_edge_au,
            });
        }
        Ok(Self {
            name,
            near_edge_au,
            far_edge_au,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn near_edge_au(&self) -> f32 {
        self.near_edge_au
    }

    pub fn far_edge_au(&self) -> f32 {
        self.far_edge_au
    }

    /// Orders belts from the star outwards by their near edge.
    pub fn cmp_near_edge(&self, other: &Belt) -> Ordering {
        self.near_edge_au.total_cmp(&other.near_edge_au)
    }
}
