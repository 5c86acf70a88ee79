use std::cell::RefCell;
use std::rc::Rc;

use mirror_toolbox::elements::{ToolboxButton, ToolboxCheckbox, ToolboxElement};
use mirror_toolbox::geometry::{Point, Rect, Size};
use mirror_toolbox::toolbox::Toolbox;
use mirror_toolbox::view::{NodeId, PointerEvent, PointerType, ViewStore, ViewTree};

fn build_scene() -> (ViewStore, Toolbox, Vec<NodeId>) {
    let mut views = ViewStore::new();
    let container = views.create_root(Rect::new(Point::new(0.0, 0.0), Size::new(400.0, 300.0)));
    let more: Box<dyn ToolboxElement> = Box::new(ToolboxCheckbox::new(&mut views, "more", "More"));
    let home: Box<dyn ToolboxElement> = Box::new(ToolboxButton::new(&mut views, "home", "Home"));
    let toolbox = Toolbox::new(&mut views, vec![more, home]);
    toolbox.attach(&mut views, container);
    let nodes = toolbox
        .elements()
        .iter()
        .flat_map(|e| e.nodes().iter().copied())
        .collect();
    (views, toolbox, nodes)
}

fn tap(x: f32, y: f32, t: f64) -> PointerEvent {
    PointerEvent::new(1, PointerType::Touch, Point::new(x, y), t)
}

#[test]
fn collapse_hides_children_but_not_the_handle() {
    let (mut views, mut toolbox, nodes) = build_scene();

    toolbox.toggle_collapse(&mut views);
    assert!(toolbox.is_collapsed());
    for &node in &nodes {
        assert!(!views.is_displayed(node));
    }
    assert!(views.is_displayed(toolbox.handle()));
}

#[test]
fn two_toggles_restore_child_visibility_exactly() {
    let (mut views, mut toolbox, nodes) = build_scene();
    let before: Vec<bool> = nodes.iter().map(|&n| views.is_displayed(n)).collect();

    toolbox.toggle_collapse(&mut views);
    toolbox.toggle_collapse(&mut views);

    assert!(!toolbox.is_collapsed());
    let after: Vec<bool> = nodes.iter().map(|&n| views.is_displayed(n)).collect();
    assert_eq!(before, after);
}

#[test]
fn collapse_fires_the_move_hook() {
    let (mut views, mut toolbox, _nodes) = build_scene();
    let fired = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&fired);
    toolbox.set_on_move(Box::new(move |_views, _holder| {
        *counter.borrow_mut() += 1;
    }));

    toolbox.toggle_collapse(&mut views);
    toolbox.toggle_collapse(&mut views);
    assert_eq!(*fired.borrow(), 2);
}

#[test]
fn double_click_toggles_collapse() {
    let (mut views, mut toolbox, _nodes) = build_scene();
    toolbox.double_click(&mut views);
    assert!(toolbox.is_collapsed());
    toolbox.double_click(&mut views);
    assert!(!toolbox.is_collapsed());
}

#[test]
fn touch_taps_250ms_apart_toggle_exactly_once() {
    let (mut views, mut toolbox, _nodes) = build_scene();

    toolbox.pointer_up(&mut views, tap(20.0, 20.0, 1000.0));
    assert!(!toolbox.is_collapsed());
    toolbox.pointer_up(&mut views, tap(20.0, 20.0, 1250.0));
    assert!(toolbox.is_collapsed());
}

#[test]
fn touch_taps_400ms_apart_do_not_toggle() {
    let (mut views, mut toolbox, _nodes) = build_scene();

    toolbox.pointer_up(&mut views, tap(20.0, 20.0, 1000.0));
    toolbox.pointer_up(&mut views, tap(20.0, 20.0, 1400.0));
    assert!(!toolbox.is_collapsed());

    // The second tap opened a fresh window.
    toolbox.pointer_up(&mut views, tap(20.0, 20.0, 1650.0));
    assert!(toolbox.is_collapsed());
}

#[test]
fn mouse_pointer_ups_do_not_participate_in_tap_detection() {
    let (mut views, mut toolbox, _nodes) = build_scene();

    let click = |t| PointerEvent::new(1, PointerType::Mouse, Point::new(20.0, 20.0), t);
    toolbox.pointer_up(&mut views, click(1000.0));
    toolbox.pointer_up(&mut views, click(1100.0));
    assert!(!toolbox.is_collapsed());
}

#[test]
fn pen_taps_participate_in_tap_detection() {
    let (mut views, mut toolbox, _nodes) = build_scene();

    let pen = |t| PointerEvent::new(1, PointerType::Pen, Point::new(20.0, 20.0), t);
    toolbox.pointer_up(&mut views, pen(1000.0));
    toolbox.pointer_up(&mut views, pen(1200.0));
    assert!(toolbox.is_collapsed());
}
