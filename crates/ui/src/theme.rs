use bevy_egui::{egui, EguiContexts};

/// Light panels to sit on the pale grey scene background.
pub fn apply_editor_theme(mut contexts: EguiContexts) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = egui::Color32::from_rgb(250, 250, 252);
    let inactive = egui::Color32::from_rgb(228, 231, 236);
    let hover = egui::Color32::from_rgb(210, 218, 232);
    let active = egui::Color32::from_rgb(90, 140, 220);

    style.visuals.panel_fill = panel;
    style.visuals.window_fill = panel;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;
    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    // egui 0.31+ uses CornerRadius with u8 values
    let rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    ctx.set_style(style);
}
