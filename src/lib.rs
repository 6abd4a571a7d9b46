// Orrery: world transforms for a hierarchy of spinning, orbiting bodies

pub mod body;
pub mod clock;
pub mod composer;
pub mod config;
pub mod error;
pub mod math;
pub mod scene;

pub use body::{BodyKind, CelestialBody};
pub use clock::SimulationClock;
pub use composer::{compute, compute_into};
pub use config::DemoConfig;
pub use error::{OrreryError, PeriodKind, Result};
pub use math::Transform;
pub use scene::{BodyUniform, NamedBody, SolarSystem};
