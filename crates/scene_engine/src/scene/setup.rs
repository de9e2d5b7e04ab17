//! Demo scene setup
//!
//! Attaches the static content of the reflecting pool scene: lights, the
//! ground plane, the models, the water disc and the mirror.

use crate::core::config::{ModelConfig, SceneConfig};
use crate::foundation::collections::NodeHandle;
use crate::foundation::math::{constants::PI, utils::deg_to_rad, Point3, Vec3};

use super::scene_graph::SceneGraph;
use super::scene_node::{NodeKind, SceneNode, ShadowSettings};

/// Handles of the static scene nodes
#[derive(Debug, Clone)]
pub struct SceneNodes {
    /// Ambient light
    pub ambient: NodeHandle,
    /// Shadow-casting spot light
    pub spot: NodeHandle,
    /// Ground plane
    pub ground: NodeHandle,
    /// Models, in config order
    pub models: Vec<NodeHandle>,
    /// Water surface
    pub water: NodeHandle,
    /// Mirror
    pub mirror: NodeHandle,
}

fn point(p: [f32; 3]) -> Point3 {
    Point3::new(p[0], p[1], p[2])
}

/// Attach the demo scene to `graph`
pub fn populate(graph: &mut impl SceneGraph, config: &SceneConfig) -> SceneNodes {
    let lighting = &config.lighting;
    let ambient = graph.attach(SceneNode::new(
        NodeKind::AmbientLight {
            color: lighting.ambient_color,
        },
        Point3::origin(),
    ));

    let spot_cfg = &lighting.spot;
    let spot = graph.attach(
        SceneNode::new(
            NodeKind::SpotLight {
                color: spot_cfg.color,
                intensity: spot_cfg.intensity,
                angle: deg_to_rad(spot_cfg.angle_degrees),
                penumbra: spot_cfg.penumbra,
                target: point(spot_cfg.target),
                shadow: ShadowSettings {
                    near: spot_cfg.shadow_near,
                    far: spot_cfg.shadow_far,
                    bias: spot_cfg.shadow_bias,
                    map_size: spot_cfg.shadow_map_size,
                },
            },
            point(spot_cfg.position),
        )
        .casting_shadow(),
    );

    // Plane geometry is authored in XY; lay it flat.
    let ground_cfg = &config.ground;
    let ground = graph.attach(
        SceneNode::new(
            NodeKind::Ground {
                size: ground_cfg.size,
                color: ground_cfg.color,
            },
            Point3::new(0.0, ground_cfg.floor_y, 0.0),
        )
        .with_rotation(Vec3::new(-PI / 2.0, 0.0, 0.0))
        .with_uniform_scale(ground_cfg.scale)
        .casting_shadow()
        .receiving_shadow(),
    );

    let models = config
        .models
        .iter()
        .map(|model| graph.attach(model_node(model)))
        .collect::<Vec<_>>();

    let water_cfg = &config.water;
    let water = graph.attach(
        SceneNode::new(
            NodeKind::Water {
                radius: water_cfg.radius,
                segments: water_cfg.segments,
                texture_size: water_cfg.texture_size,
                normals_path: water_cfg.normals_path.clone(),
                color: water_cfg.color,
                sun_color: water_cfg.sun_color,
                distortion_scale: water_cfg.distortion_scale,
            },
            point(water_cfg.position),
        )
        .with_rotation(Vec3::new(-PI / 2.0, 0.0, 0.0)),
    );

    let mirror_cfg = &config.mirror;
    let mirror = graph.attach(
        SceneNode::new(
            NodeKind::Mirror {
                size: mirror_cfg.size,
                color: mirror_cfg.color,
                clip_bias: mirror_cfg.clip_bias,
            },
            point(mirror_cfg.position),
        )
        .with_scale(Vec3::new(
            mirror_cfg.scale[0],
            mirror_cfg.scale[1],
            mirror_cfg.scale[2],
        )),
    );

    log::info!(
        "Scene populated: {} static nodes ({} models)",
        5 + models.len(),
        models.len()
    );

    SceneNodes {
        ambient,
        spot,
        ground,
        models,
        water,
        mirror,
    }
}

fn model_node(model: &ModelConfig) -> SceneNode {
    let node = SceneNode::new(
        NodeKind::Model {
            path: model.path.clone(),
        },
        point(model.position),
    )
    .with_rotation(Vec3::new(0.0, model.rotation_y, 0.0))
    .with_uniform_scale(model.scale)
    .casting_shadow();

    if model.follow_camera {
        node.following_camera()
    } else {
        node
    }
}
