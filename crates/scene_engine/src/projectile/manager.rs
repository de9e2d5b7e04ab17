//! Projectile manager
//!
//! Owns the live projectiles in spawn order. Every projectile ages at the same
//! rate and shares one lifetime, so the oldest live projectile is always at
//! the front and expiry only ever pops from the front.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::config::ProjectileConfig;
use crate::foundation::collections::NodeHandle;
use crate::foundation::math::{constants::UNIT_EPSILON, utils, Point3, Vec3};
use crate::foundation::time;
use crate::scene::{NodeKind, SceneGraph, SceneNode};

use super::record::Projectile;

/// How many expired projectiles one tick may remove
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPolicy {
    /// Remove every expired projectile
    #[default]
    AllExpired,
    /// Remove at most the oldest projectile, and only if it has expired.
    /// After a long stall the remaining expired projectiles go one per tick.
    OldestOnly,
}

/// Outcome of one [`ProjectileManager::advance`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Handles of projectiles removed this tick, oldest first
    pub expired: Vec<NodeHandle>,
    /// Detaches the scene graph rejected (projectile still dropped)
    pub detach_failures: usize,
    /// Position updates the scene graph rejected
    pub position_failures: usize,
}

/// Short-lived projectile pool
#[derive(Debug)]
pub struct ProjectileManager {
    live: VecDeque<Projectile>,
    speed: f32,
    lifetime: f32,
    radius: f32,
    color: u32,
    emissive: u32,
    policy: ExpiryPolicy,
}

impl Default for ProjectileManager {
    fn default() -> Self {
        Self::new(&ProjectileConfig::default())
    }
}

impl ProjectileManager {
    /// Create an empty manager
    pub fn new(config: &ProjectileConfig) -> Self {
        Self {
            live: VecDeque::new(),
            speed: config.speed,
            lifetime: config.lifetime,
            radius: config.radius,
            color: config.color,
            emissive: config.emissive,
            policy: config.expiry,
        }
    }

    /// Replace the expiry policy
    #[must_use]
    pub fn with_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active expiry policy
    pub const fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    /// Travel speed in distance units per second
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Lifetime in seconds
    pub const fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Fire a projectile from `origin` along `direction`.
    ///
    /// `origin` should be finite and `direction` unit length; both are used as
    /// given. The new projectile first moves on the next
    /// [`advance`](Self::advance).
    pub fn spawn(
        &mut self,
        graph: &mut impl SceneGraph,
        origin: Point3,
        direction: Vec3,
    ) -> NodeHandle {
        if !utils::is_finite_point(&origin) {
            log::warn!("Projectile origin {origin:?} is not finite");
        }
        if !utils::is_unit(&direction, UNIT_EPSILON) {
            log::warn!("Projectile direction {direction:?} is not unit length");
        }

        let node = SceneNode::new(
            NodeKind::Projectile {
                radius: self.radius,
                color: self.color,
                emissive: self.emissive,
            },
            origin,
        )
        .casting_shadow();
        let handle = graph.attach(node);
        self.live.push_back(Projectile::new(handle, origin, direction));

        log::debug!(
            "Spawned projectile {handle:?} at {origin:?} ({} live)",
            self.live.len()
        );
        handle
    }

    /// Advance every projectile by `dt` seconds, then expire per policy.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn advance(&mut self, graph: &mut impl SceneGraph, dt: f32) -> AdvanceReport {
        let dt = time::sanitize_delta(dt);

        let mut report = AdvanceReport::default();

        for projectile in &mut self.live {
            projectile.step(self.speed, dt);
            if let Err(e) = graph.set_position(projectile.handle(), projectile.position()) {
                log::warn!("Failed to move projectile: {e}");
                report.position_failures += 1;
            }
        }

        while let Some(oldest) = self.live.front() {
            if !oldest.is_expired(self.lifetime) {
                break;
            }
            if self.policy == ExpiryPolicy::OldestOnly && !report.expired.is_empty() {
                break;
            }

            let Some(expired) = self.live.pop_front() else {
                break;
            };
            Self::release(graph, &expired, &mut report);
        }

        report
    }

    /// Detach every live projectile. Returns how many were removed.
    pub fn clear(&mut self, graph: &mut impl SceneGraph) -> usize {
        let mut report = AdvanceReport::default();
        for projectile in self.live.drain(..) {
            Self::release(graph, &projectile, &mut report);
        }
        report.expired.len()
    }

    fn release(graph: &mut impl SceneGraph, projectile: &Projectile, report: &mut AdvanceReport) {
        let handle = projectile.handle();
        if let Err(e) = graph.detach(handle) {
            log::warn!("Failed to detach projectile: {e}");
            report.detach_failures += 1;
        }
        log::debug!(
            "Projectile {handle:?} removed at age {:.3}",
            projectile.age()
        );
        report.expired.push(handle);
    }

    /// Live projectiles in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter()
    }

    /// Look up a live projectile by its scene handle
    pub fn get(&self, handle: NodeHandle) -> Option<&Projectile> {
        self.live.iter().find(|p| p.handle() == handle)
    }

    /// Number of live projectiles
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True when no projectile is live
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
