//! Egui input guard: stops clicks and key presses aimed at the toolbar from
//! reaching the grid underneath.

use bevy_egui::EguiContexts;

/// `true` when the cursor is over an egui panel or egui is handling a
/// drag/click. Pointer systems early-return on this.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

/// `true` while an egui widget has keyboard focus.
#[inline]
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_keyboard_input())
}
