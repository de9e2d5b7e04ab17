//! Transient projectiles
//!
//! Spheres fired from the viewer that fly in a straight line at a fixed speed
//! and are removed from the scene once older than a fixed lifetime.

mod manager;
mod record;

pub use manager::{AdvanceReport, ExpiryPolicy, ProjectileManager};
pub use record::Projectile;
