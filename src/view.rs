//! Toolkit seam: view-node handles, layout queries, and the pointer-event
//! model the toolbox core consumes.
//!
//! The core never talks to a concrete UI toolkit. It manipulates opaque
//! [`NodeId`]s through the [`ViewTree`] capability; [`ViewStore`] is the
//! in-memory implementation backing the egui frontend and the tests. A
//! retained toolkit could implement `ViewTree` directly over its own tree.

use slab::Slab;

use crate::geometry::{Point, Rect, Size};

/// Opaque handle for a view node.
pub type NodeId = usize;

/// Identity of a pointer across down/move/up events.
pub type PointerId = i64;

/// Input device class reported with each pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
}

/// One pointer event, positions in window coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub pointer_type: PointerType,
    pub position: Point,
    pub timestamp_ms: f64,
}

impl PointerEvent {
    pub fn new(
        pointer_id: PointerId,
        pointer_type: PointerType,
        position: Point,
        timestamp_ms: f64,
    ) -> Self {
        Self {
            pointer_id,
            pointer_type,
            position,
            timestamp_ms,
        }
    }
}

/// Layout queries and mutations the toolbox core needs from its host toolkit.
pub trait ViewTree {
    /// Create a detached node.
    fn create_node(&mut self) -> NodeId;
    /// Attach `child` under `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;
    /// Absolute rectangle of the node, `None` for a stale handle.
    fn rect_of(&self, node: NodeId) -> Option<Rect>;
    /// Position local to the node's parent.
    fn position_of(&self, node: NodeId) -> Point;
    fn size_of(&self, node: NodeId) -> Size;
    fn set_position(&mut self, node: NodeId, pos: Point);
    fn set_size(&mut self, node: NodeId, size: Size);
    /// Set the node's own display flag.
    fn set_displayed(&mut self, node: NodeId, displayed: bool);
    /// Effective display: the node and all of its ancestors are displayed.
    fn is_displayed(&self, node: NodeId) -> bool;
}

#[derive(Clone, Debug)]
struct NodeState {
    pos: Point,
    size: Size,
    displayed: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeState {
    fn new() -> Self {
        Self {
            pos: Point::default(),
            size: Size::ZERO,
            displayed: true,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Slab-backed in-memory view tree.
#[derive(Default)]
pub struct ViewStore {
    nodes: Slab<NodeState>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root node with an absolute rectangle, typically the container
    /// the overlay lives in.
    pub fn create_root(&mut self, rect: Rect) -> NodeId {
        let node = self.create_node();
        self.set_position(node, rect.pos);
        self.set_size(node, rect.size);
        node
    }

    pub fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }
}

impl ViewTree for ViewStore {
    fn create_node(&mut self) -> NodeId {
        self.nodes.insert(NodeState::new())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.nodes.contains(parent) || !self.nodes.contains(child) {
            return;
        }
        if let Some(old_parent) = self.nodes[child].parent {
            self.nodes[old_parent].children.retain(|&c| c != child);
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn rect_of(&self, node: NodeId) -> Option<Rect> {
        let state = self.nodes.get(node)?;
        let mut pos = state.pos;
        let mut current = state.parent;
        while let Some(ancestor) = current {
            let ancestor_state = self.nodes.get(ancestor)?;
            pos = pos + ancestor_state.pos;
            current = ancestor_state.parent;
        }
        Some(Rect::new(pos, state.size))
    }

    fn position_of(&self, node: NodeId) -> Point {
        self.nodes.get(node).map(|n| n.pos).unwrap_or_default()
    }

    fn size_of(&self, node: NodeId) -> Size {
        self.nodes.get(node).map(|n| n.size).unwrap_or(Size::ZERO)
    }

    fn set_position(&mut self, node: NodeId, pos: Point) {
        if let Some(state) = self.nodes.get_mut(node) {
            state.pos = pos;
        }
    }

    fn set_size(&mut self, node: NodeId, size: Size) {
        if let Some(state) = self.nodes.get_mut(node) {
            state.size = size;
        }
    }

    fn set_displayed(&mut self, node: NodeId, displayed: bool) {
        if let Some(state) = self.nodes.get_mut(node) {
            state.displayed = displayed;
        }
    }

    fn is_displayed(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            match self.nodes.get(id) {
                Some(state) if state.displayed => current = state.parent,
                _ => return false,
            }
        }
        true
    }
}
