//! Toolbar UI module.
//!
//! - `ui_system`: the `toolbar_ui` egui system (shape buttons, view toggle, status)
//! - `widgets`: small formatting helpers

mod ui_system;
mod widgets;

pub use ui_system::toolbar_ui;
