//! Frame driver
//!
//! Owns everything the demo mutates per frame and runs one frame at a time:
//! drain input, fire, advance projectiles, advance the water clock.

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::config::DemoConfig;
use crate::events::{EventQueue, InputEvent};
use crate::foundation::math::Point3;
use crate::foundation::time::{self, FrameClock};
use crate::input::{Action, KeyBindings};
use crate::projectile::ProjectileManager;
use crate::scene::{self, SceneGraph, SceneNodes, Viewer};

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration could not be loaded or failed validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Delta applied this frame in seconds
    pub delta: f32,
    /// Projectiles fired this frame
    pub spawned: usize,
    /// Projectiles removed this frame
    pub expired: usize,
    /// Projectiles alive after the frame
    pub live: usize,
    /// Scene graph operations that failed this frame
    pub scene_faults: usize,
}

/// The reflecting pool demo
pub struct SceneDemo<G: SceneGraph> {
    graph: G,
    projectiles: ProjectileManager,
    events: EventQueue,
    bindings: KeyBindings,
    viewer: Viewer,
    clock: FrameClock,
    static_nodes: SceneNodes,
    water_time: f32,
    water_step: f32,
    frames: u64,
}

impl<G: SceneGraph> SceneDemo<G> {
    /// Validate `config` and populate `graph` with the demo scene
    pub fn new(config: DemoConfig, mut graph: G) -> Result<Self, EngineError> {
        config.validate()?;

        let static_nodes = scene::populate(&mut graph, &config.scene);
        let camera = &config.scene.camera;
        let viewer = Viewer::looking_at(
            Point3::from(camera.position),
            Point3::from(camera.look_at),
        );

        log::info!(
            "Demo ready: projectile speed {}, lifetime {}s, expiry {:?}",
            config.projectiles.speed,
            config.projectiles.lifetime,
            config.projectiles.expiry
        );

        Ok(Self {
            graph,
            projectiles: ProjectileManager::new(&config.projectiles),
            events: EventQueue::new(),
            bindings: KeyBindings::from_fire_key(&config.input.fire_key),
            viewer,
            clock: FrameClock::new().with_max_delta(config.engine.max_frame_delta),
            static_nodes,
            water_time: 0.0,
            water_step: config.engine.fixed_water_step,
            frames: 0,
        })
    }

    /// Queue an input event for the next frame
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Sample the frame clock and run one frame
    pub fn tick(&mut self) -> FrameStats {
        let delta = self.clock.delta();
        self.frame(delta)
    }

    /// Run one frame with an explicit delta in seconds
    ///
    /// Negative or non-finite deltas are applied as 0.
    pub fn frame(&mut self, delta: f32) -> FrameStats {
        let delta = time::sanitize_delta(delta);
        let mut stats = FrameStats {
            delta,
            ..FrameStats::default()
        };

        for event in self.events.drain() {
            match event {
                InputEvent::KeyPressed(key) => match self.bindings.action_for(key) {
                    Some(Action::Fire) => {
                        self.projectiles.spawn(
                            &mut self.graph,
                            self.viewer.position(),
                            self.viewer.facing(),
                        );
                        stats.spawned += 1;
                    }
                    None => {}
                },
                InputEvent::Resized { width, height } => {
                    log::debug!("Viewport resized to {width}x{height}");
                }
                InputEvent::KeyReleased(_) => {}
            }
        }

        let report = self.projectiles.advance(&mut self.graph, delta);
        stats.expired = report.expired.len();
        stats.scene_faults = report.detach_failures + report.position_failures;
        stats.live = self.projectiles.len();

        self.water_time += self.water_step;
        self.frames += 1;

        stats
    }

    /// Detach every live projectile
    pub fn shutdown(&mut self) {
        let removed = self.projectiles.clear(&mut self.graph);
        log::info!(
            "Demo shut down after {} frames, {removed} projectiles detached",
            self.frames
        );
    }

    /// The viewer pose used when firing
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Mutable viewer pose, for the external look/move controls
    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.viewer
    }

    /// The scene graph
    pub const fn graph(&self) -> &G {
        &self.graph
    }

    /// Live projectiles
    pub const fn projectiles(&self) -> &ProjectileManager {
        &self.projectiles
    }

    /// Handles of the static scene content
    pub const fn static_nodes(&self) -> &SceneNodes {
        &self.static_nodes
    }

    /// Water shader time uniform
    pub const fn water_time(&self) -> f32 {
        self.water_time
    }

    /// Frames run so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::input::KeyCode;
    use crate::scene::SimpleListGraph;
    use approx::assert_relative_eq;

    fn demo() -> SceneDemo<SimpleListGraph> {
        SceneDemo::new(DemoConfig::default(), SimpleListGraph::new()).unwrap()
    }

    #[test]
    fn test_new_populates_static_scene() {
        let demo = demo();
        assert_eq!(demo.graph().node_count(), 7);
        assert!(demo.projectiles().is_empty());
        assert_eq!(demo.viewer().position(), Point3::new(0.0, 60.0, 190.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = DemoConfig::default();
        config.projectiles.speed = -1.0;
        let result = SceneDemo::new(config, SimpleListGraph::new());
        assert!(matches!(result, Err(EngineError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_fire_key_spawns_from_viewer() {
        let mut demo = demo();
        demo.viewer_mut().set_facing(Vec3::new(0.0, 0.0, -1.0));
        demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        demo.push_event(InputEvent::KeyPressed(KeyCode::W));
        demo.push_event(InputEvent::KeyReleased(KeyCode::Space));

        let stats = demo.frame(0.0);
        assert_eq!(stats.spawned, 1);
        assert_eq!(stats.live, 1);
        assert_eq!(demo.graph().projectile_count(), 1);

        let p = demo.projectiles().iter().next().unwrap();
        assert_eq!(p.position(), Point3::new(0.0, 60.0, 190.0));
    }

    #[test]
    fn test_one_spawn_per_press() {
        let mut demo = demo();
        for _ in 0..3 {
            demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        }
        assert_eq!(demo.frame(0.016).spawned, 3);
        assert_eq!(demo.projectiles().len(), 3);
    }

    #[test]
    fn test_projectile_moves_on_following_frames() {
        let mut demo = demo();
        demo.viewer_mut().set_facing(Vec3::new(0.0, 0.0, -1.0));
        demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        demo.frame(0.0);

        demo.frame(0.5);
        let p = demo.projectiles().iter().next().unwrap();
        assert_relative_eq!(p.position(), Point3::new(0.0, 60.0, -310.0));
    }

    #[test]
    fn test_projectiles_expire_and_scene_is_restored() {
        let mut demo = demo();
        demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        demo.frame(0.0);

        let mut expired = 0;
        for _ in 0..400 {
            expired += demo.frame(1.0 / 60.0).expired;
        }
        assert_eq!(expired, 1);
        assert!(demo.projectiles().is_empty());
        assert_eq!(demo.graph().node_count(), 7);
    }

    #[test]
    fn test_water_clock_uses_fixed_step() {
        let mut demo = demo();
        demo.frame(0.5);
        demo.frame(0.0);
        assert_relative_eq!(demo.water_time(), 2.0 / 60.0);
        assert_eq!(demo.frames(), 2);
    }

    #[test]
    fn test_shutdown_detaches_projectiles() {
        let mut demo = demo();
        demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        demo.frame(0.1);
        demo.shutdown();
        assert!(demo.projectiles().is_empty());
        assert_eq!(demo.graph().projectile_count(), 0);
    }

    #[test]
    fn test_stats_report_applied_delta() {
        let mut demo = demo();
        demo.push_event(InputEvent::KeyPressed(KeyCode::Space));
        demo.frame(0.0);

        let stats = demo.frame(-0.5);
        assert_eq!(stats.delta, 0.0);
        assert_eq!(demo.frame(f32::NAN).delta, 0.0);
        assert_eq!(demo.frame(0.25).delta, 0.25);

        let p = demo.projectiles().iter().next().unwrap();
        assert_relative_eq!(p.age(), 0.25);
    }

    #[test]
    fn test_tick_samples_clock() {
        let mut demo = demo();
        let stats = demo.tick();
        assert_eq!(stats.delta, 0.0);
    }
}
