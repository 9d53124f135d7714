use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use placement::{EditMode, Editor, EditorInput};
use rendering::camera::{EditorCamera, ToggleView};
use rendering::input::StatusMessage;

use super::widgets::{
    kind_caption, mode_caption, shape_count_caption, ERROR_COLOR, INFO_COLOR,
};

// ---------------------------------------------------------------------------
// Main toolbar system
// ---------------------------------------------------------------------------

pub fn toolbar_ui(
    mut contexts: EguiContexts,
    editor: Res<Editor>,
    editor_camera: Res<EditorCamera>,
    status: Res<StatusMessage>,
    mut inputs: EventWriter<EditorInput>,
    mut toggles: EventWriter<ToggleView>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let mode = editor.mode();

    // ---- Top bar: one button per shape kind, exit, view toggle ----
    egui::TopBottomPanel::top("editor_toolbar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                for (idx, kind) in editor.catalog().kinds().enumerate() {
                    let selected = mode == EditMode::Placing(kind);
                    if ui
                        .selectable_label(selected, kind_caption(kind, idx))
                        .clicked()
                        && !selected
                    {
                        inputs.send(EditorInput::SelectKind(Some(kind)));
                    }
                }

                ui.separator();

                let exit = ui.add_enabled(
                    mode != EditMode::Idle,
                    egui::Button::new("Exit add mode (Esc)"),
                );
                if exit.clicked() {
                    inputs.send(EditorInput::SelectKind(None));
                }

                if ui
                    .button(format!("Toggle view (V): {}", editor_camera.view.label()))
                    .clicked()
                {
                    toggles.send(ToggleView);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(shape_count_caption(editor.shapes().len()));
                    ui.separator();
                    ui.label(egui::RichText::new(mode_caption(mode)).strong());
                });
            });
        });

    // ---- Floating toast for status messages ----
    if status.active() {
        let color = if status.is_error {
            ERROR_COLOR
        } else {
            INFO_COLOR
        };
        let centre_x = ctx.screen_rect().center().x;
        egui::Area::new(egui::Id::new("status_toast"))
            .fixed_pos(egui::pos2(centre_x - 150.0, 44.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.colored_label(color, &status.text);
                });
            });
    }
}
