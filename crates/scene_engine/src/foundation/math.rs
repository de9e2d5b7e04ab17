//! Math utilities and types
//!
//! Scene positions are points, directions are vectors. Keeping the two apart
//! means `point + vector` is the only way to move something.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Tolerance used when checking that a direction is normalised
    pub const UNIT_EPSILON: f32 = 1.0e-3;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Point3, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// True when every coordinate of the point is finite
    pub fn is_finite_point(point: &Point3) -> bool {
        point.coords.iter().all(|c| c.is_finite())
    }

    /// True when `v` has length 1 within `epsilon`
    pub fn is_unit(v: &Vec3, epsilon: f32) -> bool {
        (v.norm() - 1.0).abs() <= epsilon
    }

    /// Normalise `v`, or `None` if it is zero-length or not finite
    pub fn try_normalize(v: &Vec3) -> Option<Vec3> {
        if !v.iter().all(|c| c.is_finite()) {
            return None;
        }
        v.try_normalize(f32::EPSILON)
    }
}
