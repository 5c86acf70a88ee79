//! eframe frontend: renders the toolbox and satellite from [`ViewStore`]
//! state and maps egui pointer responses onto the core pointer protocol.
//!
//! The demo stands in for a device-mirroring page: the central panel is a
//! placeholder for the video stream, the toolbox floats above it, and the
//! "More" checkbox toggles the satellite panel with extra device controls.

use eframe::egui;

use crate::elements::{ToolboxButton, ToolboxCheckbox, ToolboxElement};
use crate::geometry::{Point, Rect, Size};
use crate::satellite;
use crate::settings::{DeviceSettingsService, ToolboxPrefs};
use crate::toolbox::Toolbox;
use crate::view::{NodeId, PointerEvent, PointerType, ViewStore, ViewTree};

const DRAG_HANDLE_GLYPH: &str = "\u{25d9}";

pub struct MirrorApp {
    views: ViewStore,
    toolbox: Toolbox,
    container: NodeId,
    satellite: NodeId,
    settings: DeviceSettingsService,
    device_id: String,
}

#[derive(Default)]
struct HandleSignals {
    drag_started: bool,
    dragged: bool,
    drag_stopped: bool,
    double_clicked: bool,
    pointer: Option<egui::Pos2>,
}

impl MirrorApp {
    pub fn new(settings: DeviceSettingsService, device_id: String) -> Self {
        let mut views = ViewStore::new();
        let container =
            views.create_root(Rect::new(Point::new(0.0, 0.0), Size::new(800.0, 600.0)));

        let satellite = views.create_node();
        views.append_child(container, satellite);
        views.set_displayed(satellite, false);

        let more = ToolboxCheckbox::new(&mut views, "more", "More");
        let mut home = ToolboxButton::new(&mut views, "home", "Home");
        home.set_on_click(Box::new(|_views, event| {
            // Command transport lives outside this crate; the demo only logs.
            tracing::info!(button = %event.name, "device button pressed");
        }));
        let elements: Vec<Box<dyn ToolboxElement>> = vec![Box::new(more), Box::new(home)];

        let mut toolbox = Toolbox::new(&mut views, elements);
        toolbox.attach(&mut views, container);
        satellite::bind(&mut toolbox, satellite);

        let holder = toolbox.holder();
        if let Some(more) = toolbox.elements_mut().iter_mut().find(|e| e.name() == "more") {
            more.set_on_click(Box::new(move |views, event| {
                let visible = event.checked.unwrap_or(false);
                satellite::set_satellite_visible(views, holder, satellite, visible);
            }));
        }

        if let Some(prefs) = ToolboxPrefs::load(&settings, &device_id) {
            toolbox.update_position(&mut views, prefs.left, prefs.top);
            if prefs.collapsed {
                toolbox.toggle_collapse(&mut views);
            }
        }

        Self {
            views,
            toolbox,
            container,
            satellite,
            settings,
            device_id,
        }
    }

    fn persist_prefs(&mut self) {
        let pos = self.views.position_of(self.toolbox.holder());
        ToolboxPrefs {
            left: pos.x,
            top: pos.y,
            collapsed: self.toolbox.is_collapsed(),
        }
        .store(&mut self.settings, &self.device_id);
    }

    fn draw_viewport(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let viewport = ui.max_rect();
            self.views
                .set_position(self.container, Point::new(viewport.left(), viewport.top()));
            self.views.set_size(
                self.container,
                Size::new(viewport.width(), viewport.height()),
            );
            ui.painter()
                .rect_filled(viewport, 4.0, egui::Color32::from_gray(16));
            ui.painter().text(
                viewport.center(),
                egui::Align2::CENTER_CENTER,
                format!("mirroring {}", self.device_id),
                egui::FontId::proportional(18.0),
                egui::Color32::from_gray(90),
            );
        });
    }

    fn draw_toolbox(&mut self, ctx: &egui::Context) {
        let Some(holder_rect) = self.views.rect_of(self.toolbox.holder()) else {
            return;
        };

        let mut signals = HandleSignals::default();
        let mut clicked_nodes: Vec<NodeId> = Vec::new();
        let views = &self.views;
        let toolbox = &self.toolbox;

        let inner = egui::Area::new(egui::Id::new("toolbox"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(holder_rect.left(), holder_rect.top()))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        let handle = ui.add(
                            egui::Button::new(DRAG_HANDLE_GLYPH)
                                .sense(egui::Sense::click_and_drag()),
                        );
                        signals.drag_started = handle.drag_started();
                        signals.dragged = handle.dragged();
                        signals.drag_stopped = handle.drag_stopped();
                        signals.double_clicked = handle.double_clicked();
                        signals.pointer = handle.interact_pointer_pos();

                        for element in toolbox.elements() {
                            let Some(&node) = element.nodes().first() else {
                                continue;
                            };
                            if !views.is_displayed(node) {
                                continue;
                            }
                            let response = match element.checked() {
                                Some(checked) => {
                                    let mut checked = checked;
                                    ui.checkbox(&mut checked, element.label())
                                }
                                None => ui.button(element.label()),
                            };
                            if response.clicked() {
                                clicked_nodes.push(node);
                            }
                        }
                    });
                });
            });

        let size = inner.response.rect.size();
        self.views
            .set_size(self.toolbox.holder(), Size::new(size.x, size.y));

        let now_ms = ctx.input(|i| i.time) * 1000.0;
        let pointer = signals
            .pointer
            .map(|p| Point::new(p.x, p.y))
            .unwrap_or(holder_rect.pos);
        let event = |pos| PointerEvent::new(0, PointerType::Mouse, pos, now_ms);

        if signals.drag_started {
            self.toolbox.pointer_down(&mut self.views, event(pointer));
        } else if signals.dragged {
            self.toolbox.pointer_move(&mut self.views, event(pointer));
        }
        if signals.drag_stopped {
            self.toolbox.pointer_up(&mut self.views, event(pointer));
            self.persist_prefs();
        }
        if signals.double_clicked {
            self.toolbox.double_click(&mut self.views);
            self.persist_prefs();
        }

        for node in clicked_nodes {
            self.toolbox.handle_click(&mut self.views, node);
        }
    }

    fn draw_satellite(&mut self, ctx: &egui::Context) {
        if !self.views.is_displayed(self.satellite) {
            return;
        }
        let Some(rect) = self.views.rect_of(self.satellite) else {
            return;
        };
        let inner = egui::Area::new(egui::Id::new("satellite"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(rect.left(), rect.top()))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label("Device controls");
                    for button in ["Volume up", "Volume down", "Rotate"] {
                        if ui.button(button).clicked() {
                            tracing::info!(%button, "device button pressed");
                        }
                    }
                });
            });
        let size = inner.response.rect.size();
        self.views
            .set_size(self.satellite, Size::new(size.x, size.y));
    }
}

impl eframe::App for MirrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_viewport(ctx);
        self.draw_toolbox(ctx);
        self.draw_satellite(ctx);
    }
}

/// Open the demo window for one device view.
pub fn run(settings: DeviceSettingsService, device_id: String) -> Result<(), eframe::Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mirror Toolbox",
        native_options,
        Box::new(move |_cc| Box::new(MirrorApp::new(settings, device_id))),
    )
}
