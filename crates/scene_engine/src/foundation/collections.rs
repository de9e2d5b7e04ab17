//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational handle to a node held by a scene graph.
    ///
    /// A handle is never reused for a different node, so a stale handle can be
    /// detected rather than silently aliasing whatever took its slot.
    pub struct NodeHandle;
}

/// Handle-keyed storage for scene nodes
pub type NodeMap<T> = SlotMap<NodeHandle, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_handle_is_not_reused() {
        let mut map: NodeMap<u32> = NodeMap::with_key();
        let first = map.insert(1);
        map.remove(first);
        let second = map.insert(2);
        assert_ne!(first, second);
        assert!(map.get(first).is_none());
    }
}
