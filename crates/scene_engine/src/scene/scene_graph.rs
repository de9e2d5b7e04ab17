//! Scene graph trait and implementations
//!
//! The renderer behind the demo owns the real scene graph. Everything in this
//! crate talks to it through [`SceneGraph`], so the simulation can run against
//! [`SimpleListGraph`] headless or against a real renderer unchanged.

use thiserror::Error;

use crate::foundation::collections::{NodeHandle, NodeMap};
use crate::foundation::math::Point3;

use super::scene_node::SceneNode;

/// Scene graph errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The graph holds no node for this handle
    #[error("Unknown scene node {0:?}")]
    UnknownHandle(NodeHandle),
}

/// Collaborator interface to the scene graph of the external renderer
pub trait SceneGraph {
    /// Add a renderable node; the returned handle identifies it until detached
    fn attach(&mut self, node: SceneNode) -> NodeHandle;

    /// Remove a previously attached node and hand it back
    fn detach(&mut self, handle: NodeHandle) -> Result<SceneNode, SceneError>;

    /// Move an attached node
    fn set_position(&mut self, handle: NodeHandle, position: Point3) -> Result<(), SceneError>;

    /// Current position of an attached node
    fn position(&self, handle: NodeHandle) -> Option<Point3>;

    /// Whether the handle refers to an attached node
    fn contains(&self, handle: NodeHandle) -> bool {
        self.position(handle).is_some()
    }

    /// Number of attached nodes
    fn node_count(&self) -> usize;

    /// Remove every node
    fn clear(&mut self);
}

/// In-memory scene graph (no spatial structure)
///
/// Stores nodes in a slot map so detached handles stay invalid forever.
#[derive(Debug, Default)]
pub struct SimpleListGraph {
    nodes: NodeMap<SceneNode>,
}

impl SimpleListGraph {
    /// Create a new empty scene graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow an attached node
    pub fn node(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }

    /// Iterate all attached nodes
    pub fn nodes(&self) -> impl Iterator<Item = (NodeHandle, &SceneNode)> {
        self.nodes.iter()
    }

    /// Number of attached projectile spheres
    pub fn projectile_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_projectile()).count()
    }
}

impl SceneGraph for SimpleListGraph {
    fn attach(&mut self, node: SceneNode) -> NodeHandle {
        self.nodes.insert(node)
    }

    fn detach(&mut self, handle: NodeHandle) -> Result<SceneNode, SceneError> {
        self.nodes
            .remove(handle)
            .ok_or(SceneError::UnknownHandle(handle))
    }

    fn set_position(&mut self, handle: NodeHandle, position: Point3) -> Result<(), SceneError> {
        let node = self
            .nodes
            .get_mut(handle)
            .ok_or(SceneError::UnknownHandle(handle))?;
        node.position = position;
        Ok(())
    }

    fn position(&self, handle: NodeHandle) -> Option<Point3> {
        self.nodes.get(handle).map(|n| n.position)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NodeKind;

    fn sphere(at: Point3) -> SceneNode {
        SceneNode::new(
            NodeKind::Projectile {
                radius: 50.0,
                color: 0x33_33_33,
                emissive: 0xFF_00_00,
            },
            at,
        )
    }

    #[test]
    fn test_attach_detach() {
        let mut graph = SimpleListGraph::new();
        let a = graph.attach(sphere(Point3::origin()));
        let b = graph.attach(sphere(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.projectile_count(), 2);

        let removed = graph.detach(a).unwrap();
        assert_eq!(removed.position, Point3::origin());
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains(b));
        assert!(!graph.contains(a));
    }

    #[test]
    fn test_double_detach_is_an_error() {
        let mut graph = SimpleListGraph::new();
        let a = graph.attach(sphere(Point3::origin()));
        graph.detach(a).unwrap();
        assert_eq!(graph.detach(a), Err(SceneError::UnknownHandle(a)));
    }

    #[test]
    fn test_set_position() {
        let mut graph = SimpleListGraph::new();
        let a = graph.attach(sphere(Point3::origin()));
        graph.set_position(a, Point3::new(0.0, 0.0, -10.0)).unwrap();
        assert_eq!(graph.position(a), Some(Point3::new(0.0, 0.0, -10.0)));

        graph.clear();
        assert!(graph.set_position(a, Point3::origin()).is_err());
    }
}
