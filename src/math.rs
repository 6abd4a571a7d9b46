// Math utilities for the orrery
//
// Matrices are glam's column-major `Mat4` acting on column vectors: a point is
// transformed as `m * p`, and `b * a` applies `a` first, then `b`.

use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};

use crate::error::{OrreryError, Result};

/// Axis used for every spin and orbital sweep.
pub const SPIN_AXIS: Vec3 = Vec3::Y;

/// Rotation of `angle` radians about `axis` (right-handed).
///
/// The axis does not need to be unit length, but it must be finite and
/// non-zero.
pub fn rotation(angle: f32, axis: Vec3) -> Result<Mat4> {
    let axis = axis.try_normalize().ok_or(OrreryError::MalformedAxis(axis))?;
    Ok(Mat4::from_axis_angle(axis, angle))
}

/// Translation by `offset`.
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Per-axis scale by `factor`.
pub fn scale(factor: Vec3) -> Mat4 {
    Mat4::from_scale(factor)
}

/// Angle swept after `time` by something that turns once every `period`.
///
/// Callers guarantee `period` is finite and non-zero.
pub fn angle_at(period: f32, time: f32) -> f32 {
    (TAU / period) * time
}

/// Represents a decomposed 3D transformation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Split an affine matrix into scale, rotation and translation.
    ///
    /// Only meaningful for matrices without shear, which is all the composer
    /// ever produces (uniform scale followed by rotations and translations).
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Recompose into `T * R * S`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Where the body's local `direction` points in world space.
    pub fn facing(&self, local_direction: Vec3) -> Vec3 {
        self.rotation * local_direction
    }

    /// Rotation about the spin axis in `(-PI, PI]`, assuming the rotation
    /// has no tilt.
    pub fn spin_angle(&self) -> f32 {
        let x = self.facing(Vec3::X);
        (-x.z).atan2(x.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotation_about_y_turns_x_towards_negative_z() {
        let m = rotation(FRAC_PI_2, Vec3::Y).unwrap();
        let p = m.transform_point3(Vec3::X);
        assert_abs_diff_eq!(p, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn rotation_normalizes_the_axis() {
        let a = rotation(1.0, Vec3::new(0.0, 5.0, 0.0)).unwrap();
        let b = rotation(1.0, Vec3::Y).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }

    #[test]
    fn rotation_rejects_degenerate_axes() {
        assert!(matches!(
            rotation(1.0, Vec3::ZERO),
            Err(OrreryError::MalformedAxis(_))
        ));
        assert!(matches!(
            rotation(1.0, Vec3::new(f32::NAN, 1.0, 0.0)),
            Err(OrreryError::MalformedAxis(_))
        ));
    }

    #[test]
    fn translation_moves_points_but_not_directions() {
        let m = translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_vector3(Vec3::X), Vec3::X);
    }

    #[test]
    fn scale_is_per_axis() {
        let m = scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.transform_point3(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn right_hand_factor_applies_first() {
        // Translate then rotate: the offset gets swept around the origin.
        let t = translation(Vec3::new(10.0, 0.0, 0.0));
        let r = rotation(FRAC_PI_2, Vec3::Y).unwrap();
        assert_abs_diff_eq!(
            (r * t).transform_point3(Vec3::ZERO),
            Vec3::new(0.0, 0.0, -10.0),
            epsilon = 1e-5
        );
        // Rotate then translate: the point stays on +X.
        assert_abs_diff_eq!(
            (t * r).transform_point3(Vec3::ZERO),
            Vec3::new(10.0, 0.0, 0.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn angle_at_completes_a_turn_every_period() {
        assert_abs_diff_eq!(angle_at(24.0, 24.0), TAU, epsilon = 1e-6);
        assert_abs_diff_eq!(angle_at(24.0, 6.0), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(angle_at(24.0, -6.0), -FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn decomposition_recovers_components() {
        let matrix = translation(Vec3::new(4.0, 0.0, -2.0))
            * rotation(0.75, SPIN_AXIS).unwrap()
            * scale(Vec3::splat(0.3));
        let recovered = Transform::from_matrix(matrix);
        assert_abs_diff_eq!(recovered.position, Vec3::new(4.0, 0.0, -2.0), epsilon = 1e-5);
        assert_abs_diff_eq!(recovered.scale, Vec3::splat(0.3), epsilon = 1e-5);
        assert_abs_diff_eq!(recovered.spin_angle(), 0.75, epsilon = 1e-5);
        assert_abs_diff_eq!(recovered.matrix(), matrix, epsilon = 1e-5);
    }
}
