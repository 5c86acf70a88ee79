//! The floating control toolbox: position, drag, and collapse state.

use crate::drag::{DragSession, TapTracker};
use crate::elements::ToolboxElement;
use crate::geometry::{clamp_to_container, Point, CLAMP_MARGIN};
use crate::view::{NodeId, PointerEvent, PointerType, ViewTree};

/// Initial holder position inside the container.
const INITIAL_POSITION: Point = Point::new(12.0, 12.0);

/// Callback invoked after every position or collapse change, receiving the
/// view tree and the holder node.
pub type MoveHook = Box<dyn FnMut(&mut dyn ViewTree, NodeId)>;

/// Draggable, collapsible container for control elements.
///
/// The holder owns a fixed drag handle node (always first, always visible)
/// followed by each element's nodes in registration order. All geometry
/// operations silently no-op while the holder is not attached to a container;
/// the toolbox may be built before insertion into the visible tree.
pub struct Toolbox {
    holder: NodeId,
    handle: NodeId,
    elements: Vec<Box<dyn ToolboxElement>>,
    collapsed: bool,
    drag: Option<DragSession>,
    taps: TapTracker,
    on_move: Option<MoveHook>,
}

impl Toolbox {
    /// Build the toolbox: handle node first, then every element's nodes in
    /// order. The holder starts detached at the initial position; call
    /// [`attach`](Self::attach) to parent it under a container.
    pub fn new(views: &mut dyn ViewTree, elements: Vec<Box<dyn ToolboxElement>>) -> Self {
        let holder = views.create_node();
        views.set_position(holder, INITIAL_POSITION);
        let handle = views.create_node();
        views.append_child(holder, handle);
        for element in &elements {
            for &node in element.nodes() {
                views.append_child(holder, node);
            }
        }
        Self {
            holder,
            handle,
            elements,
            collapsed: false,
            drag: None,
            taps: TapTracker::new(),
            on_move: None,
        }
    }

    /// Attach the holder under `container`.
    pub fn attach(&self, views: &mut dyn ViewTree, container: NodeId) {
        views.append_child(container, self.holder);
    }

    pub fn holder(&self) -> NodeId {
        self.holder
    }

    pub fn handle(&self) -> NodeId {
        self.handle
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn elements(&self) -> &[Box<dyn ToolboxElement>] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [Box<dyn ToolboxElement>] {
        &mut self.elements
    }

    /// Register the move hook, replacing any previous one.
    pub fn set_on_move(&mut self, hook: MoveHook) {
        self.on_move = Some(hook);
    }

    /// Clamp the candidate position against the container and apply it, then
    /// fire the move hook. No-op while the holder has no parent.
    pub fn update_position(&mut self, views: &mut dyn ViewTree, left: f32, top: f32) {
        let Some(parent) = views.parent_of(self.holder) else {
            return;
        };
        let clamped = clamp_to_container(
            Point::new(left, top),
            views.size_of(parent),
            views.size_of(self.holder),
            CLAMP_MARGIN,
        );
        views.set_position(self.holder, clamped);
        self.fire_on_move(views);
    }

    /// Flip the collapsed flag and hide or show every element node. The drag
    /// handle stays visible. Fires the move hook afterward even though the
    /// geometry did not change; dependents reposition on visibility changes.
    pub fn toggle_collapse(&mut self, views: &mut dyn ViewTree) {
        self.collapsed = !self.collapsed;
        tracing::debug!(collapsed = self.collapsed, "toolbox collapse toggled");
        for element in &self.elements {
            for &node in element.nodes() {
                views.set_displayed(node, !self.collapsed);
            }
        }
        self.fire_on_move(views);
    }

    /// Pointer-down on the drag handle. Ignored while unattached or while a
    /// session is already open; otherwise opens the session and captures the
    /// pointer id.
    pub fn pointer_down(&mut self, views: &mut dyn ViewTree, ev: PointerEvent) {
        if views.parent_of(self.holder).is_none() {
            return;
        }
        if self.drag.is_some() {
            return;
        }
        let origin = views.position_of(self.holder);
        tracing::debug!(pointer = ev.pointer_id, "drag started");
        self.drag = Some(DragSession::new(origin, ev.position, ev.pointer_id));
    }

    /// Pointer-move for the captured pointer; other pointers are ignored.
    pub fn pointer_move(&mut self, views: &mut dyn ViewTree, ev: PointerEvent) {
        let Some(drag) = self.drag else {
            return;
        };
        if drag.pointer_id != ev.pointer_id {
            return;
        }
        let candidate = drag.candidate(ev.position);
        self.update_position(views, candidate.x, candidate.y);
    }

    /// Pointer-up: releases the session, then runs the touch/pen double-tap
    /// check. Mouse pointers use [`double_click`](Self::double_click) instead.
    pub fn pointer_up(&mut self, views: &mut dyn ViewTree, ev: PointerEvent) {
        self.end_drag(ev.pointer_id);
        match ev.pointer_type {
            PointerType::Touch | PointerType::Pen => {
                if self.taps.register_tap(ev.timestamp_ms) {
                    self.toggle_collapse(views);
                }
            }
            PointerType::Mouse => {}
        }
    }

    /// Pointer-cancel: releases the session through the same path as
    /// pointer-up.
    pub fn pointer_cancel(&mut self, _views: &mut dyn ViewTree, ev: PointerEvent) {
        self.end_drag(ev.pointer_id);
    }

    /// Double-click gesture on the handle.
    pub fn double_click(&mut self, views: &mut dyn ViewTree) {
        self.toggle_collapse(views);
    }

    /// Route a click on one of the element nodes to its owning element. The
    /// toolbox does not interpret click semantics.
    pub fn handle_click(&mut self, views: &mut dyn ViewTree, node: NodeId) {
        for element in &mut self.elements {
            if element.nodes().contains(&node) {
                element.notify_click(views);
                return;
            }
        }
    }

    fn end_drag(&mut self, pointer_id: crate::view::PointerId) {
        if self.drag.map_or(false, |d| d.pointer_id == pointer_id) {
            tracing::debug!(pointer = pointer_id, "drag ended");
            self.drag = None;
        }
    }

    fn fire_on_move(&mut self, views: &mut dyn ViewTree) {
        if let Some(mut hook) = self.on_move.take() {
            hook(views, self.holder);
            self.on_move = Some(hook);
        }
    }
}
