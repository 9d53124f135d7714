use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use placement::EditorParams;

/// Path to a JSON params document overriding the grid and shape table.
#[cfg(not(target_arch = "wasm32"))]
const PARAMS_ENV: &str = "CELLGRID_PARAMS";

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cell Grid Editor".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    // Params must be in place before PlacementPlugin builds the editor
    .insert_resource(load_params())
    .add_plugins((
        placement::PlacementPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}

#[cfg(not(target_arch = "wasm32"))]
fn load_params() -> EditorParams {
    let Ok(path) = std::env::var(PARAMS_ENV) else {
        return EditorParams::default();
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not read {PARAMS_ENV}={path}: {e}; using defaults");
            return EditorParams::default();
        }
    };
    match EditorParams::from_json(&text) {
        Ok(params) => {
            info!("Loaded editor params from {path}");
            params
        }
        Err(e) => {
            warn!("{path}: {e}; using defaults");
            EditorParams::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_params() -> EditorParams {
    EditorParams::default()
}
