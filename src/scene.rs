// Scene module for the orrery

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::body::CelestialBody;
use crate::composer;
use crate::config::ConfigError;
use crate::error::Result;
use crate::math::Transform;

/// A body together with the name it is shown under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedBody {
    pub name: String,
    #[serde(flatten)]
    pub body: CelestialBody,
}

impl NamedBody {
    /// Creates a new named body.
    pub fn new(name: impl Into<String>, body: CelestialBody) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Per-body model matrix laid out for a GPU uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyUniform {
    pub model: [[f32; 4]; 4],
}

impl BodyUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

impl Default for BodyUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

/// A whole solar system: an ordered list of bodies referring to each other by
/// index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SystemFile")]
pub struct SolarSystem {
    bodies: Vec<NamedBody>,
    // Descriptor-only view kept in step with `bodies` for the composer.
    #[serde(skip)]
    descriptors: Vec<CelestialBody>,
}

// On-disk shape of a system; every deserialized `SolarSystem` goes through
// here so the descriptor view is always rebuilt.
#[derive(Deserialize)]
struct SystemFile {
    bodies: Vec<NamedBody>,
}

impl From<SystemFile> for SolarSystem {
    fn from(file: SystemFile) -> Self {
        let descriptors = file.bodies.iter().map(|b| b.body).collect();
        Self {
            bodies: file.bodies,
            descriptors,
        }
    }
}

impl SolarSystem {
    /// Creates a new, empty system.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            descriptors: Vec::new(),
        }
    }

    /// Sun, Earth and Moon with periods in hours. The Moon is tidally locked.
    pub fn sun_earth_moon() -> Self {
        let mut system = Self::new();
        let sun = system.add_body("Sun", CelestialBody::root(2.0, 24.0));
        let earth = system.add_body(
            "Earth",
            CelestialBody::orbiting(1.0, 24.0, sun, 10.0, 365.0 * 24.0),
        );
        system.add_body(
            "Moon",
            CelestialBody::orbiting(0.3, 27.0 * 24.0, earth, 2.0, 27.0 * 24.0),
        );
        system
    }

    /// Adds a body and returns the index other bodies use to orbit it.
    pub fn add_body(&mut self, name: impl Into<String>, body: CelestialBody) -> usize {
        self.bodies.push(NamedBody::new(name, body));
        self.descriptors.push(body);
        self.bodies.len() - 1
    }

    /// Gets a body by name.
    pub fn get_body(&self, name: &str) -> Option<&NamedBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Index of the first body called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn named_bodies(&self) -> &[NamedBody] {
        &self.bodies
    }

    /// Descriptors in insertion order, as the composer consumes them.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// World transform of every body at `time`, in insertion order.
    pub fn transforms_at(&self, time: f32) -> Result<Vec<Mat4>> {
        composer::compute(self.bodies(), time)
    }

    /// Decomposed pose of every body at `time`, paired with its name.
    pub fn poses_at(&self, time: f32) -> Result<Vec<(String, Transform)>> {
        let transforms = self.transforms_at(time)?;
        Ok(self
            .bodies
            .iter()
            .zip(transforms)
            .map(|(b, m)| (b.name.clone(), Transform::from_matrix(m)))
            .collect())
    }

    /// Model matrices at `time`, ready for `bytemuck::cast_slice`.
    pub fn uniforms_at(&self, time: f32) -> Result<Vec<BodyUniform>> {
        let transforms = self.transforms_at(time)?;
        Ok(transforms.into_iter().map(BodyUniform::new).collect())
    }

    /// Parses a system from JSON: `{ "bodies": [ { "name": .., "radius": .., ... } ] }`.
    ///
    /// References are not checked here; the composer rejects bad ones.
    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> std::result::Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
