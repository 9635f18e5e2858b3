//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the Euler-angle transform used by objects.
//! Rotation is stored as a 3-vector of radians about the x, y and z axes
//! because the integrator adds angular velocity to it component-wise.

pub use nalgebra::{Matrix4, Rotation3, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Position and Euler rotation of an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,

    /// Euler rotation in radians about the x, y and z axes
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (translation * rotation)
    pub fn to_matrix(&self) -> Mat4 {
        let rotation = Rotation3::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::new_translation(&self.position) * rotation.to_homogeneous()
    }
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Yaw (rotation about +Y) that faces along the horizontal part of `direction`.
    ///
    /// Measured from +Z towards +X, i.e. `atan2(x, z)`.
    pub fn heading_yaw(direction: &Vec3) -> f32 {
        direction.x.atan2(direction.z)
    }

    /// True when the horizontal (x/z) part of `v` is exactly zero
    pub fn is_horizontal_zero(v: &Vec3) -> bool {
        v.x == 0.0 && v.z == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_matrix() {
        assert_relative_eq!(Transform::identity().to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_translation_in_matrix() {
        let transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let matrix = transform.to_matrix();

        assert_relative_eq!(matrix.m14, 1.0);
        assert_relative_eq!(matrix.m24, 2.0);
        assert_relative_eq!(matrix.m34, 3.0);
    }

    #[test]
    fn test_heading_yaw() {
        assert_relative_eq!(utils::heading_yaw(&Vec3::new(0.0, 0.0, 1.0)), 0.0);
        assert_relative_eq!(
            utils::heading_yaw(&Vec3::new(1.0, 0.0, 0.0)),
            std::f32::consts::FRAC_PI_2
        );
        assert_relative_eq!(
            utils::heading_yaw(&Vec3::new(0.0, 5.0, -1.0)),
            std::f32::consts::PI
        );
    }
}
