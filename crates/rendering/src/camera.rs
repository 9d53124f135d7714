use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

/// World units visible vertically at zoom 1. Horizontal extent follows the
/// window aspect ratio.
pub const VIEW_HEIGHT: f32 = 100.0;
/// World units the camera moves per pixel of left-drag.
const PAN_SPEED: f32 = 0.1;
/// Zoom change per pixel of wheel scroll.
const ZOOM_SPEED: f32 = 0.001;
/// Pixels per wheel "line" on platforms that report lines.
const LINE_PIXELS: f32 = 100.0;
const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 5.0;
/// Duration of the animated switch between view presets.
pub const VIEW_TRANSITION_SECS: f32 = 1.0;
const LEFT_DRAG_THRESHOLD: f32 = 5.0;

// ---------------------------------------------------------------------------
// View presets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPreset {
    #[default]
    TopDown,
    Isometric,
    TwoPointFive,
}

impl ViewPreset {
    /// Camera position for this preset; every preset looks at the origin.
    pub fn position(self) -> Vec3 {
        match self {
            ViewPreset::TopDown => Vec3::new(0.0, 100.0, 0.0),
            ViewPreset::Isometric => Vec3::new(100.0, 100.0, 100.0),
            ViewPreset::TwoPointFive => Vec3::new(50.0, 50.0, 50.0),
        }
    }

    /// TopDown -> Isometric -> TwoPointFive -> TopDown.
    pub fn next(self) -> Self {
        match self {
            ViewPreset::TopDown => ViewPreset::Isometric,
            ViewPreset::Isometric => ViewPreset::TwoPointFive,
            ViewPreset::TwoPointFive => ViewPreset::TopDown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewPreset::TopDown => "2D",
            ViewPreset::Isometric => "Isometric",
            ViewPreset::TwoPointFive => "2.5D",
        }
    }

    /// Camera rotation for this preset. Straight down has no usable Y-up, so
    /// the top-down view keeps -Z at the top of the screen.
    pub fn rotation(self) -> Quat {
        let up = match self {
            ViewPreset::TopDown => Vec3::NEG_Z,
            _ => Vec3::Y,
        };
        Transform::from_translation(self.position())
            .looking_at(Vec3::ZERO, up)
            .rotation
    }
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// Quadratic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// A timed move of camera position and zoom between two states.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransition {
    pub from: Vec3,
    pub to: Vec3,
    pub from_zoom: f32,
    pub to_zoom: f32,
    pub elapsed: f32,
    pub duration: f32,
}

impl ViewTransition {
    pub fn new(from: Vec3, to: Vec3, from_zoom: f32, to_zoom: f32) -> Self {
        Self {
            from,
            to,
            from_zoom,
            to_zoom,
            elapsed: 0.0,
            duration: VIEW_TRANSITION_SECS,
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ease_in_out_quad(self.elapsed / self.duration)
    }

    /// Current position and zoom.
    pub fn sample(&self) -> (Vec3, f32) {
        let p = self.progress();
        (
            self.from.lerp(self.to, p),
            self.from_zoom + (self.to_zoom - self.from_zoom) * p,
        )
    }

    /// Advance by `dt` seconds. Returns true once the end state is reached.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.elapsed >= self.duration
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Logical camera state. `apply_editor_camera` pushes it to the camera entity.
#[derive(Resource, Debug, Clone)]
pub struct EditorCamera {
    pub view: ViewPreset,
    pub position: Vec3,
    /// Magnification; 1.0 shows [`VIEW_HEIGHT`] world units vertically.
    pub zoom: f32,
    pub transition: Option<ViewTransition>,
}

impl Default for EditorCamera {
    fn default() -> Self {
        let view = ViewPreset::default();
        Self {
            view,
            position: view.position(),
            zoom: 1.0,
            transition: None,
        }
    }
}

impl EditorCamera {
    /// Switch to the next preset, animating from wherever the camera is now.
    /// Zoom is kept.
    pub fn toggle_view(&mut self) {
        self.view = self.view.next();
        self.transition = Some(ViewTransition::new(
            self.position,
            self.view.position(),
            self.zoom,
            self.zoom,
        ));
    }

    /// Move along the ground plane by a drag delta in pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.position.x -= delta.x * PAN_SPEED;
        self.position.z -= delta.y * PAN_SPEED;
    }

    /// Apply a zoom delta in pixels; positive zooms in.
    pub fn zoom_by(&mut self, pixels: f32) {
        self.zoom = (self.zoom + pixels * ZOOM_SPEED).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }
}

/// Message fired by the toolbar button or the `V` key.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ToggleView;

/// Tracks left-click drag state: differentiates click from drag.
/// Once the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the press
/// it becomes a camera pan and the release no longer counts as a click.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    pub is_dragging: bool,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn setup_camera(mut commands: Commands, editor_camera: Res<EditorCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            scale: 1.0 / editor_camera.zoom,
            ..OrthographicProjection::default_3d()
        }),
        Transform {
            translation: editor_camera.position,
            rotation: editor_camera.view.rotation(),
            ..default()
        },
    ));
}

pub fn toggle_view(mut toggles: EventReader<ToggleView>, mut editor_camera: ResMut<EditorCamera>) {
    for _ in toggles.read() {
        editor_camera.toggle_view();
        info!("Camera view: {}", editor_camera.view.label());
    }
}

pub fn animate_view_transition(time: Res<Time>, mut editor_camera: ResMut<EditorCamera>) {
    let Some(transition) = editor_camera.transition.as_mut() else {
        return;
    };
    let done = transition.advance(time.delta_secs());
    let (position, zoom) = transition.sample();
    editor_camera.position = position;
    editor_camera.zoom = zoom;
    if done {
        editor_camera.transition = None;
    }
}

/// Left-mouse drag: pan (with threshold to distinguish from clicks).
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut left_drag: ResMut<LeftClickDrag>,
    mut editor_camera: ResMut<EditorCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if !left_drag.pressed {
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };
    if !left_drag.is_dragging && (pos - left_drag.start_pos).length() > LEFT_DRAG_THRESHOLD {
        left_drag.is_dragging = true;
    }
    if left_drag.is_dragging {
        let delta = pos - left_drag.last_pos;
        left_drag.last_pos = pos;
        if delta != Vec2::ZERO && !editor_camera.is_animating() {
            editor_camera.pan(delta);
        }
    }
}

/// Zoom-in pixels for one wheel event. Scrolling down (negative `y`) zooms
/// in, matching the browser editor.
pub fn wheel_zoom_pixels(unit: MouseScrollUnit, y: f32) -> f32 {
    let pixels = match unit {
        MouseScrollUnit::Line => y * LINE_PIXELS,
        MouseScrollUnit::Pixel => y,
    };
    -pixels
}

/// Scroll wheel: orthographic zoom.
pub fn camera_zoom(mut scroll_evts: EventReader<MouseWheel>, mut editor_camera: ResMut<EditorCamera>) {
    for evt in scroll_evts.read() {
        editor_camera.zoom_by(wheel_zoom_pixels(evt.unit, evt.y));
    }
}

/// Push [`EditorCamera`] to the camera transform and projection.
pub fn apply_editor_camera(
    editor_camera: Res<EditorCamera>,
    mut query: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
) {
    if !editor_camera.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    transform.translation = editor_camera.position;
    transform.rotation = editor_camera.view.rotation();
    if let Projection::Orthographic(ortho) = projection.as_mut() {
        ortho.scale = 1.0 / editor_camera.zoom;
    }
}
