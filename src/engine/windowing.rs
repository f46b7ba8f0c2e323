//! Minimal winit wrapper (2025 winit style: ApplicationHandler).
//!
//! The shell owns the OS surface and event pump; everything per-frame goes
//! through `AnimationLoop::step`. `Escape` quits, `E` dismisses whichever
//! overlay a portal opened.

use std::sync::Arc;

use crate::engine::animation_loop::AnimationLoop;
use crate::engine::clock::SystemClock;
use crate::engine::overlay::OverlayPanels;
use crate::engine::room::Room;
use crate::engine::scene::SceneModel;
use crate::engine::user_input::UserInput;
use crate::engine::{EngineError, EngineResult};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

pub struct Windowing;

impl Windowing {
    pub fn run_app(room: Room, scene: SceneModel, user_input: UserInput) -> EngineResult<()> {
        let event_loop = EventLoop::new().map_err(|e| EngineError::EventLoop(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App {
            window: None,
            room,
            scene,
            overlay: OverlayPanels::new(),
            user_input,
            frame_loop: AnimationLoop::new(),
            clock: SystemClock,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| EngineError::EventLoop(e.to_string()))?;

        Ok(())
    }
}

struct App {
    window: Option<Arc<Window>>,
    room: Room,
    scene: SceneModel,
    overlay: OverlayPanels,
    user_input: UserInput,
    frame_loop: AnimationLoop,
    clock: SystemClock,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs: WindowAttributes = Window::default_attributes()
            .with_title("webroom")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0));

        let window = event_loop
            .create_window(attrs)
            .expect("failed to create window");
        let window = Arc::new(window);

        self.room.attach_scene(&mut self.scene);

        self.window = Some(window);
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        ref logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } if matches!(logical_key, Key::Character(c) if c.eq_ignore_ascii_case("e")) => {
                self.overlay.close_all();
            }

            WindowEvent::Resized(_) => {
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame_loop.step(
                    &mut self.clock,
                    &mut self.room,
                    &mut self.user_input,
                    &mut self.scene,
                    &mut self.overlay,
                );

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            other => {
                self.user_input.handle_window_event(&other);
            }
        }
    }
}
