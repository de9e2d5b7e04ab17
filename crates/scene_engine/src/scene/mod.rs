//! Scene management
//!
//! The boundary between the demo and the external renderer.
//!
//! ```text
//! Frame driver (SceneDemo)
//!      ↓ attach / set_position / detach
//! SceneGraph (renderer-owned)
//!      ↓
//! Renderer
//! ```

mod scene_graph;
mod scene_node;
pub mod setup;
mod viewer;

pub use crate::foundation::collections::NodeHandle;
pub use scene_graph::{SceneError, SceneGraph, SimpleListGraph};
pub use scene_node::{NodeKind, SceneNode, ShadowSettings};
pub use setup::{populate, SceneNodes};
pub use viewer::Viewer;
