//! Render surfaces.
//!
//! The emitter never touches a global document. Hosts hand it a
//! [`RenderSurface`] (the page body, a canvas layer, a test recorder) and
//! the emitter appends, restyles and removes nodes through it.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::PARTICLE_Z_INDEX;

/// Handle to a node owned by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Inline style of one particle node.
///
/// Position is fixed to the viewport at `(left, top)`; motion is carried
/// entirely by `translate`/`scale`/`opacity` so the surface only needs to
/// update a transform per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    /// Viewport x of the burst origin (px).
    pub left: f32,
    /// Viewport y of the burst origin (px).
    pub top: f32,
    /// Diameter (px).
    pub size: f32,
    /// CSS background.
    pub background: String,
    /// Offset from the origin (px).
    pub translate: (f32, f32),
    /// Scale factor.
    pub scale: f32,
    /// Opacity (0-1).
    pub opacity: f32,
}

impl NodeStyle {
    /// A node sitting at `origin`, full size and fully opaque.
    #[must_use]
    pub fn at_origin(origin: (f32, f32), size: f32, background: &str) -> Self {
        Self {
            left: origin.0,
            top: origin.1,
            size,
            background: background.to_owned(),
            translate: (0.0, 0.0),
            scale: 1.0,
            opacity: 1.0,
        }
    }

    /// Distance of the node from its origin (px).
    #[must_use]
    pub fn offset_distance(&self) -> f32 {
        self.translate.0.hypot(self.translate.1)
    }
}

impl fmt::Display for NodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; \
             border-radius: 50%; pointer-events: none; z-index: {}; background: {}; \
             transform: translate({}px, {}px) scale({}); opacity: {};",
            self.left,
            self.top,
            self.size,
            self.size,
            PARTICLE_Z_INDEX,
            self.background,
            self.translate.0,
            self.translate.1,
            self.scale,
            self.opacity,
        )
    }
}

/// Where particles are drawn.
pub trait RenderSurface {
    /// Adds a node and returns its handle.
    fn append(&mut self, style: NodeStyle) -> NodeId;

    /// Replaces the style of a live node. Unknown ids are ignored.
    fn restyle(&mut self, id: NodeId, style: &NodeStyle);

    /// Removes a node. Unknown ids are ignored.
    fn remove(&mut self, id: NodeId);
}

/// In-memory surface.
///
/// Keeps live nodes in insertion order and counts churn. Used by headless
/// hosts and by tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: BTreeMap<NodeId, NodeStyle>,
    next_id: u64,
    appended: u64,
    removed: u64,
}

impl MemorySurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the style of a live node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&NodeStyle> {
        self.nodes.get(&id)
    }

    /// Iterates live nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeStyle)> {
        self.nodes.iter().map(|(id, style)| (*id, style))
    }

    /// Total nodes ever appended.
    #[must_use]
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Total nodes ever removed.
    #[must_use]
    pub fn removed(&self) -> u64 {
        self.removed
    }
}

impl RenderSurface for MemorySurface {
    fn append(&mut self, style: NodeStyle) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.appended += 1;
        self.nodes.insert(id, style);
        id
    }

    fn restyle(&mut self, id: NodeId, style: &NodeStyle) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.clone_from(style);
        }
    }

    fn remove(&mut self, id: NodeId) {
        if self.nodes.remove(&id).is_some() {
            self.removed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BACKGROUND;

    #[test]
    fn test_inline_style() {
        let style = NodeStyle::at_origin((160.0, 40.0), 5.0, DEFAULT_BACKGROUND);
        let css = style.to_string();

        assert!(css.starts_with("position: fixed; left: 160px; top: 40px; width: 5px; height: 5px;"));
        assert!(css.contains("border-radius: 50%"));
        assert!(css.contains("pointer-events: none"));
        assert!(css.contains("z-index: 9999"));
        assert!(css.contains("transform: translate(0px, 0px) scale(1); opacity: 1;"));
    }

    #[test]
    fn test_memory_surface_churn() {
        let mut surface = MemorySurface::new();
        let a = surface.append(NodeStyle::at_origin((0.0, 0.0), 5.0, "red"));
        let b = surface.append(NodeStyle::at_origin((0.0, 0.0), 5.0, "red"));
        assert_ne!(a, b);

        surface.remove(a);
        surface.remove(a);
        assert_eq!(surface.len(), 1);
        assert_eq!(surface.appended(), 2);
        assert_eq!(surface.removed(), 1);
        assert!(surface.get(b).is_some());
    }
}
