//! Viewer pose
//!
//! Position and facing of the first-person camera. The external controls move
//! and turn the camera; the demo only reads the pose when firing.

use crate::foundation::math::{utils, Point3, Vec3};

/// First-person viewer pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewer {
    position: Point3,
    facing: Vec3,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            facing: -Vec3::z(),
        }
    }
}

impl Viewer {
    /// Viewer at `position` looking at `target`
    pub fn looking_at(position: Point3, target: Point3) -> Self {
        let mut viewer = Self {
            position,
            ..Self::default()
        };
        viewer.look_at(target);
        viewer
    }

    /// Current position
    pub const fn position(&self) -> Point3 {
        self.position
    }

    /// Unit facing direction
    pub const fn facing(&self) -> Vec3 {
        self.facing
    }

    /// Move without turning
    pub fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    /// Face along `direction`. Zero-length directions are ignored.
    pub fn set_facing(&mut self, direction: Vec3) {
        match utils::try_normalize(&direction) {
            Some(unit) => self.facing = unit,
            None => log::warn!("Ignoring degenerate facing {direction:?}"),
        }
    }

    /// Turn to face `target`
    pub fn look_at(&mut self, target: Point3) {
        self.set_facing(target - self.position);
    }
}
