//! The room context: one struct owning everything a frame touches.
//!
//! Replaces the module-level `keys`/`scene`/`camera` globals the original
//! rooms shared. Per-frame order is fixed: integrate (unless an overlay
//! blocks input), portal triggers, camera follow.

use glam::Vec3;
use log::{debug, info};

use crate::engine::config::{AvatarKind, RoomConfig};
use crate::engine::overlay::Overlay;
use crate::engine::scene::{AvatarHandle, Scene};
use crate::engine::system::{AvatarState, CameraFollower, CameraState, Mover, PortalSet};
use crate::engine::user_input::InputState;

/// Grounded walk-bob, visual only: amplitude and angular rate lifted from
/// the original rooms (0.03 * |sin(t / 320ms)|).
const BOB_AMPLITUDE: f32 = 0.03;
const BOB_RATE: f32 = 3.125;

pub struct Room {
    mover: Mover,
    follower: CameraFollower,
    portals: PortalSet,

    pub avatar: AvatarState,
    pub camera: CameraState,

    avatar_handle: Option<AvatarHandle>,
    bob_phase: f32,
}

impl Room {
    pub fn new(config: RoomConfig) -> Self {
        let avatar = AvatarState::at_spawn(&config.mover);
        let camera = CameraState::behind(&avatar, &config.camera);
        let mouse_orbit = config.avatar == AvatarKind::Walker;

        Self {
            mover: Mover::new(config.avatar, config.mover),
            follower: CameraFollower::new(config.camera_mode, mouse_orbit, config.camera),
            portals: PortalSet::from_configs(&config.portals),
            avatar,
            camera,
            avatar_handle: None,
            bob_phase: 0.0,
        }
    }

    /// Register the avatar with the scene once at startup.
    pub fn attach_scene(&mut self, scene: &mut dyn Scene) {
        self.avatar_handle = Some(scene.create_avatar(self.mover.kind()));
    }

    /// One frame of room logic.
    pub fn update(&mut self, dt: f32, input: &InputState, overlay: &mut dyn Overlay) {
        if !overlay.is_any_open() {
            let yaw = self.follower.movement_yaw(&self.camera, &self.avatar);
            self.mover.integrate(&mut self.avatar, input, dt, yaw);
            if self.avatar.grounded {
                self.bob_phase += BOB_RATE * dt;
            }
        }

        if let Some(portal) = self.portals.check(self.avatar.position) {
            let name = portal.name.clone();
            info!("portal '{name}' entered");
            overlay.open(&name);
            self.reset_avatar();
        }

        self.follower
            .update(&mut self.camera, &self.avatar, input.mouse_movement(), input.wheel_delta.1);
    }

    /// Snap the avatar back to spawn with motion zeroed.
    pub fn reset_avatar(&mut self) {
        self.avatar.reset(self.mover.tuning());
        debug!("avatar reset to spawn");
    }

    /// Push the current avatar transform to the scene. Skipped gracefully if
    /// the scene was never attached.
    pub fn sync_scene(&mut self, scene: &mut dyn Scene) {
        let Some(handle) = self.avatar_handle else {
            return;
        };
        let mut position = self.avatar.position;
        if self.avatar.grounded {
            position.y += BOB_AMPLITUDE * self.bob_phase.sin().abs();
        }
        scene.set_transform(handle, position, self.avatar.yaw);
    }

    pub fn portals(&self) -> &PortalSet {
        &self.portals
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn spawn_point(&self) -> Vec3 {
        Vec3::from(self.mover.tuning().spawn)
    }
}
