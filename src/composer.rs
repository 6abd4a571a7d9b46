// Transform composer: body descriptors + time -> world matrices
//
// Every matrix maps a unit sphere at the origin onto the body's pose. Reading
// a product right to left gives the order the steps are applied in:
//
//   root:   Spin * Scale
//   planet: Sweep * Offset * CounterSweep * Spin * Scale
//   moon:   ParentSweep * ParentOffset * ParentCounterSweep
//             * Sweep * Offset * CounterSweep * Spin * Scale
//
// Each CounterSweep cancels the turn its Sweep would otherwise add to the
// body's orientation, so spin is driven by `spin_period` alone.

use glam::{Mat4, Vec3};
use log::{debug, trace};

use crate::body::{BodyKind, CelestialBody};
use crate::error::{OrreryError, PeriodKind, Result};
use crate::math::{angle_at, rotation, scale, translation, SPIN_AXIS};

/// Compute the world transform of every body at `time`.
///
/// The output has one matrix per input body, in input order. The whole input
/// is validated first; any bad descriptor rejects the call.
pub fn compute(bodies: &[CelestialBody], time: f32) -> Result<Vec<Mat4>> {
    let mut transforms = Vec::with_capacity(bodies.len());
    compute_into(bodies, time, &mut transforms)?;
    Ok(transforms)
}

/// Like [`compute`], but refills a caller-owned buffer.
///
/// `out` is cleared first and left empty if the input is rejected.
pub fn compute_into(bodies: &[CelestialBody], time: f32, out: &mut Vec<Mat4>) -> Result<()> {
    out.clear();
    validate(bodies, time)?;
    debug!("composing {} bodies at t={}", bodies.len(), time);

    out.reserve(bodies.len());
    for index in 0..bodies.len() {
        match compose_body(bodies, index, time) {
            Ok(matrix) => out.push(matrix),
            Err(err) => {
                out.clear();
                return Err(err);
            }
        }
    }
    Ok(())
}

/// Check every precondition of [`compute`] without producing matrices.
pub fn validate(bodies: &[CelestialBody], time: f32) -> Result<()> {
    if !time.is_finite() {
        return Err(OrreryError::NonFiniteTime(time));
    }

    let len = bodies.len();
    for (index, body) in bodies.iter().enumerate() {
        if !body.radius.is_finite() {
            return Err(OrreryError::NonFiniteParameter {
                body: index,
                field: "radius",
                value: body.radius,
            });
        }
        check_period(index, PeriodKind::Spin, body.spin_period)?;

        let Some(parent) = body.orbit_around else {
            continue;
        };
        if parent == index {
            return Err(OrreryError::SelfReference { body: index });
        }
        if parent >= len {
            return Err(OrreryError::InvalidReference {
                body: index,
                parent,
                len,
            });
        }
        check_period(index, PeriodKind::Orbit, body.orbit_period)?;
        if !body.orbit_altitude.is_finite() {
            return Err(OrreryError::NonFiniteParameter {
                body: index,
                field: "orbit_altitude",
                value: body.orbit_altitude,
            });
        }
    }

    check_acyclic(bodies)
}

fn check_period(body: usize, kind: PeriodKind, value: f32) -> Result<()> {
    if value == 0.0 || !value.is_finite() {
        return Err(OrreryError::DegeneratePeriod { body, kind, value });
    }
    Ok(())
}

// Every parent chain must end at a root. References are already known to be
// in range. Each body is walked at most once after it settles.
fn check_acyclic(bodies: &[CelestialBody]) -> Result<()> {
    let mut settled = vec![false; bodies.len()];
    let mut walked_by = vec![usize::MAX; bodies.len()];

    for start in 0..bodies.len() {
        let mut current = start;
        while !settled[current] {
            if walked_by[current] == start {
                return Err(OrreryError::OrbitCycle { body: current });
            }
            walked_by[current] = start;
            match bodies[current].orbit_around {
                Some(parent) => current = parent,
                None => break,
            }
        }

        let mut current = start;
        while !settled[current] {
            settled[current] = true;
            match bodies[current].orbit_around {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }
    Ok(())
}

// Expects `bodies` to have passed `validate`.
fn compose_body(bodies: &[CelestialBody], index: usize, time: f32) -> Result<Mat4> {
    let body = &bodies[index];
    let size = scale(Vec3::splat(body.radius));
    let spin = rotation(angle_at(body.spin_period, time), SPIN_AXIS)?;

    let kind = BodyKind::of(bodies, index).ok_or(OrreryError::InvalidReference {
        body: index,
        parent: body.orbit_around.unwrap_or(index),
        len: bodies.len(),
    })?;

    let matrix = match (kind, body.orbit_around) {
        (BodyKind::Planet, Some(_)) => orbital_frame(body, time)? * spin * size,
        (BodyKind::Moon, Some(parent)) => {
            orbital_frame(&bodies[parent], time)? * orbital_frame(body, time)? * spin * size
        }
        _ => spin * size,
    };
    if !matrix.is_finite() {
        return Err(OrreryError::NonFiniteResult { body: index, time });
    }

    trace!(
        "body {} ({:?}) at {}",
        index,
        kind,
        matrix.w_axis.truncate()
    );
    Ok(matrix)
}

// Sweep * Offset * CounterSweep for one level of orbit. Moves the body out to
// its orbit radius and around its parent without turning it.
fn orbital_frame(body: &CelestialBody, time: f32) -> Result<Mat4> {
    let angle = angle_at(body.orbit_period, time);
    let sweep = rotation(angle, SPIN_AXIS)?;
    let offset = translation(Vec3::new(body.orbit_altitude, 0.0, 0.0));
    let counter_sweep = rotation(-angle, SPIN_AXIS)?;
    Ok(sweep * offset * counter_sweep)
}
