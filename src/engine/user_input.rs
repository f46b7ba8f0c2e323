//! Input handling (winit -> engine state).
//!
//! Goal: keep `Windowing` focused on window lifecycle, while `UserInput`
//! owns interpreting window events into a small, reusable `InputState`.
//! Physical keys are mapped to a closed set of logical actions exactly once,
//! here; everything downstream reasons in `Action` terms.

use std::collections::HashSet;

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, NamedKey};

/// Logical avatar actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    Sprint,
}

/// Snapshot of user input.
///
/// Supports:
/// - current action state (`down`)
/// - per-frame transitions (`pressed`/`released`)
/// - cursor position and wheel delta
/// - mouse movement delta
#[derive(Default, Debug, Clone)]
pub struct InputState {
    pub down: HashSet<Action>,
    pub pressed: HashSet<Action>,
    pub released: HashSet<Action>,

    /// Cursor position in physical pixels (as reported by winit).
    pub cursor_pos: Option<(f32, f32)>,

    /// Previous cursor position (updated at `begin_frame`).
    prev_cursor_pos: Option<(f32, f32)>,

    /// Mouse movement delta since last frame (current - previous).
    mouse_movement: (f32, f32),

    /// Accumulated wheel delta since last `begin_frame`.
    pub wheel_delta: (f32, f32),
}

impl InputState {
    /// Clears per-frame transition state.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.wheel_delta = (0.0, 0.0);

        // Update mouse movement delta
        self.mouse_movement = match (self.cursor_pos, self.prev_cursor_pos) {
            (Some((cx, cy)), Some((px, py))) => (cx - px, cy - py),
            _ => (0.0, 0.0),
        };
        self.prev_cursor_pos = self.cursor_pos;
    }

    #[inline]
    pub fn is_down(&self, action: Action) -> bool {
        self.down.contains(&action)
    }

    #[inline]
    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    #[inline]
    pub fn just_released(&self, action: Action) -> bool {
        self.released.contains(&action)
    }

    /// Returns the mouse movement delta (dx, dy) since the last frame.
    /// Returns (0, 0) if cursor position is not available.
    #[inline]
    pub fn mouse_movement(&self) -> (f32, f32) {
        self.mouse_movement
    }

    /// Drive an action down directly (headless hosts and tests).
    pub fn press(&mut self, action: Action) {
        if self.down.insert(action) {
            self.pressed.insert(action);
        }
    }

    /// Release an action directly (headless hosts and tests).
    pub fn release(&mut self, action: Action) {
        if self.down.remove(&action) {
            self.released.insert(action);
        }
    }
}

/// Stateful input event processor.
#[derive(Default, Debug, Clone)]
pub struct UserInput {
    state: InputState,
}

impl UserInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    pub fn begin_frame(&mut self) {
        self.state.begin_frame();
    }

    /// Feed a winit event into this input handler.
    ///
    /// Returns `true` if the event was recognized/consumed as input.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(action) = map_key(&event.logical_key) else {
                    return false;
                };
                match event.state {
                    ElementState::Pressed => self.state.press(action),
                    ElementState::Released => self.state.release(action),
                }
                true
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.state.cursor_pos = Some((position.x as f32, position.y as f32));
                true
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                self.state.wheel_delta.0 += dx;
                self.state.wheel_delta.1 += dy;
                true
            }

            _ => false,
        }
    }
}

/// WASD + arrows, Space to jump, Shift to sprint.
fn map_key(key: &Key) -> Option<Action> {
    match key {
        Key::Character(c) => match c.to_lowercase().as_str() {
            "w" => Some(Action::Forward),
            "s" => Some(Action::Backward),
            "a" => Some(Action::Left),
            "d" => Some(Action::Right),
            _ => None,
        },
        Key::Named(NamedKey::ArrowUp) => Some(Action::Forward),
        Key::Named(NamedKey::ArrowDown) => Some(Action::Backward),
        Key::Named(NamedKey::ArrowLeft) => Some(Action::Left),
        Key::Named(NamedKey::ArrowRight) => Some(Action::Right),
        Key::Named(NamedKey::Space) => Some(Action::Jump),
        Key::Named(NamedKey::Shift) => Some(Action::Sprint),
        _ => None,
    }
}
