// Celestial body descriptors

use serde::{Deserialize, Serialize};

/// A star, planet or moon.
///
/// Bodies live in a flat slice; the hierarchy is expressed only through
/// `orbit_around`, an index into that same slice. Periods and the time passed
/// to the composer must share a unit (hours in the bundled presets).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Radius of the sphere representing the body.
    pub radius: f32,
    /// Time for one full turn about the body's own vertical axis.
    pub spin_period: f32,
    /// Index of the body this one orbits. `None` places it at the origin.
    #[serde(default)]
    pub orbit_around: Option<usize>,
    /// Distance between the centers of this body and its parent.
    #[serde(default)]
    pub orbit_altitude: f32,
    /// Time for one full orbit around the parent.
    #[serde(default)]
    pub orbit_period: f32,
}

impl CelestialBody {
    /// A body fixed at the origin that only spins.
    pub fn root(radius: f32, spin_period: f32) -> Self {
        Self {
            radius,
            spin_period,
            orbit_around: None,
            orbit_altitude: 0.0,
            orbit_period: 0.0,
        }
    }

    /// A body on a circular orbit around `parent`.
    pub fn orbiting(
        radius: f32,
        spin_period: f32,
        parent: usize,
        orbit_altitude: f32,
        orbit_period: f32,
    ) -> Self {
        Self {
            radius,
            spin_period,
            orbit_around: Some(parent),
            orbit_altitude,
            orbit_period,
        }
    }

    pub fn is_root(&self) -> bool {
        self.orbit_around.is_none()
    }
}

/// Position of a body in the orbit hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// No parent: sits at the origin ("sun").
    Root,
    /// Orbits a root ("planet").
    Planet,
    /// Orbits a body that itself orbits something ("moon").
    Moon,
}

impl BodyKind {
    /// Classify `bodies[index]` by looking one level up its parent chain.
    ///
    /// Returns `None` when `index` or the parent reference is out of range.
    pub fn of(bodies: &[CelestialBody], index: usize) -> Option<Self> {
        let body = bodies.get(index)?;
        match body.orbit_around {
            None => Some(BodyKind::Root),
            Some(parent) => {
                if bodies.get(parent)?.is_root() {
                    Some(BodyKind::Planet)
                } else {
                    Some(BodyKind::Moon)
                }
            }
        }
    }
}
