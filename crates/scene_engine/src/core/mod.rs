//! # Core Module
//!
//! Shared configuration for all demo subsystems.
//!
//! ## Organization
//!
//! - **Config**: the serializable [`DemoConfig`] tree and its validation

pub mod config;

pub use crate::foundation;

pub use config::{
    CameraConfig, Config, ConfigError, DemoConfig, EngineConfig, GroundConfig, InputConfig,
    LightingConfig, MirrorConfig, ModelConfig, ProjectileConfig, SceneConfig, SpotLightConfig,
    WaterConfig,
};
