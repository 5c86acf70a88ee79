//! Keeps a satellite panel anchored just outside the toolbox.

use crate::geometry::{clamp_to_container, Point, CLAMP_MARGIN};
use crate::toolbox::Toolbox;
use crate::view::{NodeId, ViewTree};

/// Horizontal gap between the toolbox's right edge and the satellite.
const SATELLITE_GAP: f32 = 8.0;

/// Place the satellite just right of the toolbox, clamped to the satellite's
/// own container. Skips satellites that are not currently displayed; hidden
/// panels are repositioned when their show-toggle fires, not while hidden.
/// Safe for detached or zero-sized elements.
pub fn reposition(views: &mut dyn ViewTree, holder: NodeId, satellite: NodeId) {
    if !views.is_displayed(satellite) {
        return;
    }
    let Some(container) = views.parent_of(satellite) else {
        return;
    };
    let (Some(holder_rect), Some(container_rect)) = (views.rect_of(holder), views.rect_of(container))
    else {
        return;
    };
    let candidate = Point::new(
        holder_rect.right() - container_rect.left() + SATELLITE_GAP,
        holder_rect.top() - container_rect.top(),
    );
    let clamped = clamp_to_container(
        candidate,
        container_rect.size,
        views.size_of(satellite),
        CLAMP_MARGIN,
    );
    views.set_position(satellite, clamped);
}

/// Bind the satellite to the toolbox move hook, so every position or collapse
/// change re-anchors it. Replaces any previously registered hook.
pub fn bind(toolbox: &mut Toolbox, satellite: NodeId) {
    toolbox.set_on_move(Box::new(move |views, holder| {
        reposition(views, holder, satellite);
    }));
}

/// Show or hide the satellite. Showing repositions it immediately; merely
/// becoming visible by other means does not retroactively reposition.
pub fn set_satellite_visible(
    views: &mut dyn ViewTree,
    holder: NodeId,
    satellite: NodeId,
    visible: bool,
) {
    views.set_displayed(satellite, visible);
    if visible {
        reposition(views, holder, satellite);
    }
}
