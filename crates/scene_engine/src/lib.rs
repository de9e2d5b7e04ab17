//! # Scene Engine
//!
//! Scene description and per-frame simulation for the reflecting pool demo.
//!
//! Rendering, shadows, water and mirror shading, model parsing and camera
//! look/move controls live behind the [`scene::SceneGraph`] boundary. This
//! crate owns what sits in front of it:
//!
//! - **Scene setup**: lights, ground, models, water and mirror as scene nodes
//! - **Projectiles**: short-lived spheres fired from the viewer that fly in a
//!   straight line and expire after a fixed lifetime
//! - **Frame driver**: drains input events, advances projectiles and the water
//!   clock once per frame
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DemoConfig::default();
//!     let mut demo = SceneDemo::new(config, SimpleListGraph::new())?;
//!
//!     demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
//!     for _ in 0..60 {
//!         demo.frame(1.0 / 60.0);
//!     }
//!     demo.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod events;
pub mod foundation;
pub mod input;
pub mod projectile;
pub mod scene;

mod engine;

pub use engine::{EngineError, FrameStats, SceneDemo};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        EngineError, FrameStats, SceneDemo,
        config::{Config, ConfigError},
        core::config::{DemoConfig, EngineConfig, ProjectileConfig, SceneConfig},
        events::{EventQueue, InputEvent},
        foundation::{
            math::{Point3, Vec3},
            time::FrameClock,
        },
        input::{KeyBindings, KeyCode},
        projectile::{AdvanceReport, ExpiryPolicy, Projectile, ProjectileManager},
        scene::{NodeHandle, NodeKind, SceneError, SceneGraph, SceneNode, SimpleListGraph, Viewer},
    };
}
