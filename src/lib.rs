//! Floating control toolbox overlay for device-mirroring viewports.
//!
//! The core is toolkit-agnostic: the toolbox manipulates opaque view nodes
//! through the [`view::ViewTree`] capability, and [`gui`] supplies the egui
//! frontend on top of the in-memory [`view::ViewStore`].

pub mod drag;
pub mod elements;
pub mod geometry;
pub mod gui;
pub mod logging;
pub mod satellite;
pub mod settings;
pub mod toolbox;
pub mod view;
