//! # Demo Configuration
//!
//! Every tunable of the demo in one serializable tree. Defaults reproduce the
//! reflecting pool scene exactly, so an absent or partial config file is valid.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging, water clock step, frame delta clamp
//! - **Projectile Config**: speed, lifetime, look and expiry policy
//! - **Input Config**: which key fires
//! - **Scene Config**: camera, lights, ground, models, water and mirror

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};
use crate::projectile::ExpiryPolicy;

/// # Engine Configuration
///
/// Frame loop behaviour shared by the whole demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Water shader time added per frame, independent of the frame delta
    pub fixed_water_step: f32,
    /// Upper bound on a single frame delta in seconds (`None` = unbounded)
    pub max_frame_delta: Option<f32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fixed_water_step: 1.0 / 60.0,
            max_frame_delta: None,
        }
    }
}

/// # Projectile Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Distance travelled per second along the firing direction
    pub speed: f32,
    /// Seconds a projectile lives; it expires once its age is strictly greater
    pub lifetime: f32,
    /// Sphere radius of the rendered projectile
    pub radius: f32,
    /// Base colour (0xRRGGBB)
    pub color: u32,
    /// Emissive colour (0xRRGGBB)
    pub emissive: u32,
    /// How many expired projectiles may be removed per tick
    pub expiry: ExpiryPolicy,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 1000.0,
            lifetime: 5.0,
            radius: 50.0,
            color: 0x33_33_33,
            emissive: 0xFF_00_00,
            expiry: ExpiryPolicy::default(),
        }
    }
}

/// # Input Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Name of the key that fires a projectile (see `KeyCode::from_name`)
    pub fire_key: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            fire_key: "Space".to_string(),
        }
    }
}

/// Perspective camera the viewer looks through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// Starting viewer position
    pub position: [f32; 3],
    /// Point the viewer initially faces
    pub look_at: [f32; 3],
    /// Scene clear colour (0xRRGGBB)
    pub background: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            near: 1.0,
            far: 30_000.0,
            position: [0.0, 60.0, 190.0],
            look_at: [0.0, 0.0, 0.0],
            background: 0x22_22_22,
        }
    }
}

/// Shadow-casting spot light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotLightConfig {
    /// Light colour (0xRRGGBB)
    pub color: u32,
    /// Light intensity
    pub intensity: f32,
    /// Cone half-angle in degrees
    pub angle_degrees: f32,
    /// Cone edge softness (0..1)
    pub penumbra: f32,
    /// Light position
    pub position: [f32; 3],
    /// Point the light aims at
    pub target: [f32; 3],
    /// Shadow camera near plane
    pub shadow_near: f32,
    /// Shadow camera far plane
    pub shadow_far: f32,
    /// Shadow depth bias
    pub shadow_bias: f32,
    /// Shadow map width and height in texels
    pub shadow_map_size: u32,
}

impl Default for SpotLightConfig {
    fn default() -> Self {
        Self {
            color: 0xFF_FF_FF,
            intensity: 1.0,
            angle_degrees: 36.0,
            penumbra: 0.3,
            position: [0.0, 1500.0, 1000.0],
            target: [0.0, 0.0, 0.0],
            shadow_near: 1200.0,
            shadow_far: 2500.0,
            shadow_bias: 0.0001,
            shadow_map_size: 4096,
        }
    }
}

/// Scene lighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Ambient light colour (0xRRGGBB)
    pub ambient_color: u32,
    /// The single shadow-casting light
    pub spot: SpotLightConfig,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: 0x44_44_44,
            spot: SpotLightConfig::default(),
        }
    }
}

/// Ground plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Edge length of the unscaled plane
    pub size: f32,
    /// Uniform scale applied to the plane
    pub scale: f32,
    /// Height of the floor
    pub floor_y: f32,
    /// Surface colour (0xRRGGBB)
    pub color: u32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            scale: 100.0,
            floor_y: -250.0,
            color: 0x33_33_33,
        }
    }
}

/// A glTF model placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the `.gltf` file
    pub path: String,
    /// Position (relative to the camera when `follow_camera` is set)
    pub position: [f32; 3],
    /// Uniform scale
    pub scale: f32,
    /// Rotation about the Y axis in radians
    #[serde(default)]
    pub rotation_y: f32,
    /// Parent the model to the camera instead of the scene root
    #[serde(default)]
    pub follow_camera: bool,
}

/// Animated water surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Disc radius
    pub radius: f32,
    /// Disc segment count
    pub segments: u32,
    /// Centre of the disc
    pub position: [f32; 3],
    /// Reflection texture width and height
    pub texture_size: u32,
    /// Path to the normal map
    pub normals_path: String,
    /// Water colour (0xRRGGBB)
    pub color: u32,
    /// Sun colour (0xRRGGBB)
    pub sun_color: u32,
    /// Normal map distortion strength
    pub distortion_scale: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            segments: 32,
            position: [0.0, -95.0, -100.0],
            texture_size: 128,
            normals_path: "textures/waternormals.jpg".to_string(),
            color: 0xAA_AA_FF,
            sun_color: 0xFF_FF_FF,
            distortion_scale: 0.1,
        }
    }
}

/// Planar mirror
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Edge length of the unscaled plane
    pub size: f32,
    /// Mirror position
    pub position: [f32; 3],
    /// Non-uniform scale
    pub scale: [f32; 3],
    /// Tint colour (0xRRGGBB)
    pub color: u32,
    /// Clip plane bias
    pub clip_bias: f32,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            position: [0.0, 0.0, -400.0],
            scale: [5.0, 10.0, 1.0],
            color: 0x77_77_77,
            clip_bias: 0.003,
        }
    }
}

/// # Scene Configuration
///
/// Static content of the demo scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Viewer camera
    pub camera: CameraConfig,
    /// Lights
    pub lighting: LightingConfig,
    /// Ground plane
    pub ground: GroundConfig,
    /// Water surface
    pub water: WaterConfig,
    /// Mirror
    pub mirror: MirrorConfig,
    /// Loaded models
    pub models: Vec<ModelConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            ground: GroundConfig::default(),
            water: WaterConfig::default(),
            mirror: MirrorConfig::default(),
            models: vec![
                ModelConfig {
                    path: "resources/vase/scene.gltf".to_string(),
                    position: [0.0, -170.0, -100.0],
                    scale: 0.5,
                    rotation_y: 0.0,
                    follow_camera: false,
                },
                ModelConfig {
                    path: "resources/monk/scene.gltf".to_string(),
                    position: [0.0, -400.0, 200.0],
                    scale: 300.0,
                    rotation_y: std::f32::consts::PI,
                    follow_camera: true,
                },
            ],
        }
    }
}

/// # Complete Demo Configuration
///
/// Top-level configuration the demo binary loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Engine configuration
    pub engine: EngineConfig,
    /// Projectile tuning
    pub projectiles: ProjectileConfig,
    /// Key bindings
    pub input: InputConfig,
    /// Scene content
    pub scene: SceneConfig,
}

impl DemoConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.to_string()))
        };

        let p = &self.projectiles;
        if !p.speed.is_finite() || p.speed <= 0.0 {
            return invalid("projectile speed must be a positive number");
        }
        if !p.lifetime.is_finite() || p.lifetime < 0.0 {
            return invalid("projectile lifetime must be non-negative");
        }
        if !p.radius.is_finite() || p.radius <= 0.0 {
            return invalid("projectile radius must be positive");
        }

        let camera = &self.scene.camera;
        if camera.near <= 0.0 || camera.near >= camera.far {
            return invalid("camera clip planes must satisfy 0 < near < far");
        }
        if self.scene.lighting.spot.shadow_map_size == 0 {
            return invalid("shadow map size must be at least 1");
        }
        if !self.engine.fixed_water_step.is_finite() || self.engine.fixed_water_step < 0.0 {
            return invalid("water step must be non-negative");
        }

        Ok(())
    }
}

impl Config for DemoConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_defaults_match_demo_scene() {
        let config = DemoConfig::default();
        assert_eq!(config.projectiles.speed, 1000.0);
        assert_eq!(config.projectiles.lifetime, 5.0);
        assert_eq!(config.scene.camera.position, [0.0, 60.0, 190.0]);
        assert_eq!(config.scene.ground.floor_y, -250.0);
        assert_eq!(config.scene.models.len(), 2);
        assert!(config.scene.models[1].follow_camera);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            [projectiles]
            speed = 250.0
            expiry = "oldest_only"
        "#;
        let config: DemoConfig = toml::from_str(text).unwrap();
        assert_eq!(config.projectiles.speed, 250.0);
        assert_eq!(config.projectiles.lifetime, 5.0);
        assert_eq!(config.projectiles.expiry, ExpiryPolicy::OldestOnly);
        assert_eq!(config.input.fire_key, "Space");
    }

    #[test]
    fn test_ron_config_parses() {
        let text = "(projectiles: (lifetime: 2.5), input: (fire_key: \"F\"))";
        let config: DemoConfig = ron::from_str(text).unwrap();
        assert_eq!(config.projectiles.lifetime, 2.5);
        assert_eq!(config.input.fire_key, "F");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DemoConfig::default();
        config.projectiles.speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = DemoConfig::default();
        config.projectiles.lifetime = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.scene.camera.near = 40_000.0;
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.scene.lighting.spot.shadow_map_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_toml_file() {
        let path = std::env::temp_dir().join(format!("scene_demo_{}.toml", std::process::id()));
        let mut config = DemoConfig::default();
        config.projectiles.expiry = ExpiryPolicy::OldestOnly;
        config.engine.max_frame_delta = Some(0.25);

        config.save_to_file(&path).unwrap();
        let loaded = DemoConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("scene_demo_does_not_exist.toml");
        let config = DemoConfig::load_or_default(&path).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DemoConfig::default().save_to_file("config.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
