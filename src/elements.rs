//! Control elements hosted by the toolbox.
//!
//! The toolbox only arranges whatever nodes an element contributes and routes
//! click notifications to it; command semantics belong to whoever registered
//! the click handler.

use crate::view::{NodeId, ViewTree};

/// Notification passed to a click handler.
#[derive(Clone, Debug)]
pub struct ClickEvent {
    /// Event kind, currently always `"click"`.
    pub event: &'static str,
    /// Name of the originating element.
    pub name: String,
    /// Checkbox state after the click, `None` for plain buttons.
    pub checked: Option<bool>,
}

pub type ClickHandler = Box<dyn FnMut(&mut dyn ViewTree, &ClickEvent)>;

/// Capability every toolbox child implements: renderable nodes plus a click
/// notification subscription.
pub trait ToolboxElement {
    fn name(&self) -> &str;
    /// Text shown on the rendered control.
    fn label(&self) -> &str;
    /// Ordered nodes this element contributes to the toolbox.
    fn nodes(&self) -> &[NodeId];
    /// Checkbox state, `None` for elements without one.
    fn checked(&self) -> Option<bool>;
    /// Register the single click handler, replacing any previous one.
    fn set_on_click(&mut self, handler: ClickHandler);
    /// Deliver a click to this element.
    fn notify_click(&mut self, views: &mut dyn ViewTree);
}

/// Plain push button.
pub struct ToolboxButton {
    name: String,
    label: String,
    nodes: Vec<NodeId>,
    on_click: Option<ClickHandler>,
}

impl ToolboxButton {
    pub fn new(views: &mut dyn ViewTree, name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            nodes: vec![views.create_node()],
            on_click: None,
        }
    }
}

impl ToolboxElement for ToolboxButton {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn checked(&self) -> Option<bool> {
        None
    }

    fn set_on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    fn notify_click(&mut self, views: &mut dyn ViewTree) {
        if let Some(handler) = self.on_click.as_mut() {
            let event = ClickEvent {
                event: "click",
                name: self.name.clone(),
                checked: None,
            };
            handler(views, &event);
        }
    }
}

/// Toggleable checkbox. The checked flag flips before the handler runs, so
/// the handler always observes the new state.
pub struct ToolboxCheckbox {
    name: String,
    label: String,
    nodes: Vec<NodeId>,
    checked: bool,
    on_click: Option<ClickHandler>,
}

impl ToolboxCheckbox {
    pub fn new(views: &mut dyn ViewTree, name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            nodes: vec![views.create_node()],
            checked: false,
            on_click: None,
        }
    }
}

impl ToolboxElement for ToolboxCheckbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn checked(&self) -> Option<bool> {
        Some(self.checked)
    }

    fn set_on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    fn notify_click(&mut self, views: &mut dyn ViewTree) {
        self.checked = !self.checked;
        if let Some(handler) = self.on_click.as_mut() {
            let event = ClickEvent {
                event: "click",
                name: self.name.clone(),
                checked: Some(self.checked),
            };
            handler(views, &event);
        }
    }
}
