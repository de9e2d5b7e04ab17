//! Projectile record

use crate::foundation::collections::NodeHandle;
use crate::foundation::math::{Point3, Vec3};

/// One live projectile
///
/// The direction is fixed at spawn; only position and age change. The handle
/// is owned exclusively by this projectile until it expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    position: Point3,
    direction: Vec3,
    age: f32,
    handle: NodeHandle,
}

impl Projectile {
    pub(crate) const fn new(handle: NodeHandle, origin: Point3, direction: Vec3) -> Self {
        Self {
            position: origin,
            direction,
            age: 0.0,
            handle,
        }
    }

    /// Current position
    pub const fn position(&self) -> Point3 {
        self.position
    }

    /// Direction of travel captured at spawn
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Seconds since spawn
    pub const fn age(&self) -> f32 {
        self.age
    }

    /// Scene node rendering this projectile
    pub const fn handle(&self) -> NodeHandle {
        self.handle
    }

    /// Expired once the age is strictly greater than `lifetime`
    pub fn is_expired(&self, lifetime: f32) -> bool {
        self.age > lifetime
    }

    /// Move along the direction at `speed` for `dt` seconds and age by `dt`.
    /// `dt` must be non-negative.
    pub(crate) fn step(&mut self, speed: f32, dt: f32) {
        self.position += self.direction * (speed * dt);
        self.age += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn projectile() -> Projectile {
        Projectile::new(NodeHandle::default(), Point3::new(0.0, 60.0, 190.0), -Vec3::z())
    }

    #[test]
    fn test_new_projectile_is_fresh() {
        let p = projectile();
        assert_eq!(p.age(), 0.0);
        assert!(!p.is_expired(5.0));
    }

    #[test]
    fn test_step_moves_and_ages() {
        let mut p = projectile();
        p.step(1000.0, 0.5);
        assert_relative_eq!(p.position(), Point3::new(0.0, 60.0, -310.0));
        assert_relative_eq!(p.age(), 0.5);
        assert_eq!(p.direction(), -Vec3::z());
    }

    #[test]
    fn test_expiry_is_strict() {
        let mut p = projectile();
        p.step(1000.0, 5.0);
        assert!(!p.is_expired(5.0));
        p.step(1000.0, 0.001);
        assert!(p.is_expired(5.0));
    }

    #[test]
    fn test_zero_lifetime_expires_after_any_motion() {
        let mut p = projectile();
        assert!(!p.is_expired(0.0));
        p.step(1000.0, 1.0e-4);
        assert!(p.is_expired(0.0));
    }
}
