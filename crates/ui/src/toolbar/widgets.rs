use bevy_egui::egui;

use placement::{EditMode, ShapeKind};

pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 50, 40);
pub const INFO_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 150, 70);

/// Button caption with its number-key hint, e.g. "Add Box (1)".
pub fn kind_caption(kind: ShapeKind, index: usize) -> String {
    format!("Add {} ({})", kind.label(), index + 1)
}

pub fn mode_caption(mode: EditMode) -> String {
    match mode {
        EditMode::Idle => "Mode: idle".to_string(),
        EditMode::Placing(kind) => format!("Mode: adding {}", kind.label()),
    }
}

pub fn shape_count_caption(count: usize) -> String {
    match count {
        1 => "1 shape".to_string(),
        n => format!("{n} shapes"),
    }
}
