//! Explicit frame loop: dt from an injected clock, termination via a stop
//! token. The winit shell calls `step` from its redraw handler; headless
//! hosts and tests call `run` or `step` directly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::clock::{Clock, FrameTimer};
use crate::engine::overlay::Overlay;
use crate::engine::room::Room;
use crate::engine::scene::Scene;
use crate::engine::user_input::UserInput;

/// Cooperative cancellation for `AnimationLoop::run`. Clone it and raise it
/// from wherever shutdown is decided.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct AnimationLoop {
    timer: FrameTimer,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            timer: FrameTimer::new(),
        }
    }

    /// One frame: dt, room update, scene sync, draw, then clear the input
    /// transitions so the next batch of events starts fresh.
    pub fn step(
        &mut self,
        clock: &mut dyn Clock,
        room: &mut Room,
        user_input: &mut UserInput,
        scene: &mut dyn Scene,
        overlay: &mut dyn Overlay,
    ) {
        let dt = self.timer.tick(clock);
        room.update(dt, user_input.state(), overlay);
        room.sync_scene(scene);
        scene.render();
        user_input.begin_frame();
    }

    /// Run frames until the token is raised.
    pub fn run(
        &mut self,
        clock: &mut dyn Clock,
        room: &mut Room,
        user_input: &mut UserInput,
        scene: &mut dyn Scene,
        overlay: &mut dyn Overlay,
        token: &StopToken,
    ) {
        while !token.is_stopped() {
            self.step(clock, room, user_input, scene, overlay);
        }
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}
