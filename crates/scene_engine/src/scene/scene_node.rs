//! Scene node descriptions
//!
//! A [`SceneNode`] is everything the external renderer needs to draw one
//! object. The renderer owns meshes, materials and shaders; these are plain
//! values it builds them from.

use crate::foundation::math::{Point3, Vec3};

/// Shadow camera settings for a shadow-casting light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Shadow camera near plane
    pub near: f32,
    /// Shadow camera far plane
    pub far: f32,
    /// Depth bias
    pub bias: f32,
    /// Shadow map width and height in texels
    pub map_size: u32,
}

/// What a node renders as
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Uniform ambient light
    AmbientLight {
        /// Colour (0xRRGGBB)
        color: u32,
    },
    /// Cone light that casts shadows
    SpotLight {
        /// Colour (0xRRGGBB)
        color: u32,
        /// Intensity
        intensity: f32,
        /// Cone half-angle in radians
        angle: f32,
        /// Edge softness (0..1)
        penumbra: f32,
        /// Point the light aims at
        target: Point3,
        /// Shadow map settings
        shadow: ShadowSettings,
    },
    /// Flat ground plane
    Ground {
        /// Edge length before scaling
        size: f32,
        /// Colour (0xRRGGBB)
        color: u32,
    },
    /// glTF model loaded by the renderer
    Model {
        /// Path to the `.gltf` file
        path: String,
    },
    /// Animated water disc
    Water {
        /// Disc radius
        radius: f32,
        /// Disc segment count
        segments: u32,
        /// Reflection texture width and height
        texture_size: u32,
        /// Normal map path
        normals_path: String,
        /// Water colour (0xRRGGBB)
        color: u32,
        /// Sun colour (0xRRGGBB)
        sun_color: u32,
        /// Normal map distortion strength
        distortion_scale: f32,
    },
    /// Planar mirror
    Mirror {
        /// Edge length before scaling
        size: f32,
        /// Tint colour (0xRRGGBB)
        color: u32,
        /// Clip plane bias
        clip_bias: f32,
    },
    /// Emissive sphere fired by the viewer
    Projectile {
        /// Sphere radius
        radius: f32,
        /// Base colour (0xRRGGBB)
        color: u32,
        /// Emissive colour (0xRRGGBB)
        emissive: u32,
    },
}

/// One renderable object
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// What to draw
    pub kind: NodeKind,
    /// Position in the parent's space
    pub position: Point3,
    /// Euler rotation in radians (XYZ order)
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
    /// Casts shadows
    pub cast_shadow: bool,
    /// Receives shadows
    pub receive_shadow: bool,
    /// Parented to the camera rather than the scene root
    pub follow_camera: bool,
}

impl SceneNode {
    /// Create a node at `position` with identity rotation and unit scale
    pub fn new(kind: NodeKind, position: Point3) -> Self {
        Self {
            kind,
            position,
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            cast_shadow: false,
            receive_shadow: false,
            follow_camera: false,
        }
    }

    /// Set the Euler rotation
    #[must_use]
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the per-axis scale
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set a uniform scale
    #[must_use]
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::new(scale, scale, scale))
    }

    /// Mark as casting shadows
    #[must_use]
    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    /// Mark as receiving shadows
    #[must_use]
    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }

    /// Parent to the camera
    #[must_use]
    pub fn following_camera(mut self) -> Self {
        self.follow_camera = true;
        self
    }

    /// True for projectile spheres
    pub const fn is_projectile(&self) -> bool {
        matches!(self.kind, NodeKind::Projectile { .. })
    }
}
