// Error types for the orrery crate

use thiserror::Error;

use crate::config::ConfigError;

/// Which period of a body was degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Spin,
    Orbit,
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodKind::Spin => f.write_str("spin"),
            PeriodKind::Orbit => f.write_str("orbit"),
        }
    }
}

/// Errors surfaced by the transform composer and its collaborators.
///
/// Every variant except `Config` describes a caller bug; none of them are
/// transient and nothing is retried.
#[derive(Debug, Error)]
pub enum OrreryError {
    /// `orbit_around` points past the end of the body collection.
    #[error("body {body} orbits index {parent}, but only {len} bodies exist")]
    InvalidReference {
        body: usize,
        parent: usize,
        len: usize,
    },
    /// `orbit_around` points at the body itself.
    #[error("body {body} orbits itself")]
    SelfReference { body: usize },
    /// Following `orbit_around` from this body never reaches a root.
    #[error("body {body} is part of an orbit cycle")]
    OrbitCycle { body: usize },
    /// A period that is used as a divisor is zero or not finite.
    #[error("body {body} has degenerate {kind} period {value}")]
    DegeneratePeriod {
        body: usize,
        kind: PeriodKind,
        value: f32,
    },
    /// Radius or orbit altitude is NaN or infinite.
    #[error("body {body} has non-finite {field}: {value}")]
    NonFiniteParameter {
        body: usize,
        field: &'static str,
        value: f32,
    },
    /// The simulation time is NaN or infinite.
    #[error("simulation time is not finite: {0}")]
    NonFiniteTime(f32),
    /// Inputs were finite but the composed matrix is not, e.g. a tiny period
    /// or a huge time overflowing the angle.
    #[error("transform of body {body} is not finite at t={time}")]
    NonFiniteResult { body: usize, time: f32 },
    /// A rotation axis with zero length (or NaN components).
    #[error("rotation axis {0} cannot be normalized")]
    MalformedAxis(glam::Vec3),
    /// Loading a config or scene file failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, OrreryError>;
