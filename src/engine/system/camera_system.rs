//! Camera follower: third-person boom smoothing and first-person mouselook.

use glam::Vec3;

use super::mover_system::{AvatarState, wrap_angle};
use crate::engine::config::{CameraMode, CameraTuning};

/// Current camera pose plus the orientation state mouselook accumulates into.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Wheel-zoomable boom length (third person).
    pub follow_distance: f32,
}

impl CameraState {
    /// Start at the ideal third-person pose so the first frames don't swoop
    /// in from the origin.
    pub fn behind(avatar: &AvatarState, tuning: &CameraTuning) -> Self {
        Self {
            position: boom_position(avatar.position, avatar.yaw, tuning.follow_distance, tuning.follow_height),
            look_at: avatar.position + Vec3::Y * tuning.look_height,
            yaw: avatar.yaw,
            pitch: 0.0,
            follow_distance: tuning.follow_distance,
        }
    }
}

/// Per-frame camera pose update.
#[derive(Debug)]
pub struct CameraFollower {
    mode: CameraMode,
    /// Walkers orbit the camera with the mouse; vehicles hang the boom off
    /// the vehicle's own heading.
    mouse_orbit: bool,
    tuning: CameraTuning,
}

impl CameraFollower {
    pub fn new(mode: CameraMode, mouse_orbit: bool, tuning: CameraTuning) -> Self {
        Self {
            mode,
            mouse_orbit,
            tuning,
        }
    }

    /// Yaw the walker integrator should move relative to.
    pub fn movement_yaw(&self, cam: &CameraState, avatar: &AvatarState) -> f32 {
        if self.mouse_orbit || self.mode == CameraMode::FirstPerson {
            cam.yaw
        } else {
            avatar.yaw
        }
    }

    /// Advance the camera one frame. `mouse_delta` is pointer counts since
    /// the last frame; `wheel` is vertical wheel lines.
    pub fn update(
        &self,
        cam: &mut CameraState,
        avatar: &AvatarState,
        mouse_delta: (f32, f32),
        wheel: f32,
    ) {
        match self.mode {
            CameraMode::ThirdPerson => self.update_third_person(cam, avatar, mouse_delta, wheel),
            CameraMode::FirstPerson => self.update_first_person(cam, avatar, mouse_delta),
        }
    }

    fn update_third_person(
        &self,
        cam: &mut CameraState,
        avatar: &AvatarState,
        mouse_delta: (f32, f32),
        wheel: f32,
    ) {
        let t = &self.tuning;

        if wheel != 0.0 {
            cam.follow_distance = (cam.follow_distance - wheel * t.zoom_step)
                .clamp(t.min_follow_distance, t.max_follow_distance);
        }

        if self.mouse_orbit {
            cam.yaw = wrap_angle(cam.yaw + mouse_delta.0 * t.sensitivity.to_radians());
        } else {
            cam.yaw = avatar.yaw;
        }

        let desired = boom_position(avatar.position, cam.yaw, cam.follow_distance, t.follow_height);
        let desired_look = avatar.position + Vec3::Y * t.look_height;

        // Exponential smoothing with a fixed per-frame alpha: monotone
        // convergence, no overshoot.
        let alpha = t.lerp_alpha.clamp(0.0, 1.0);
        cam.position = cam.position.lerp(desired, alpha);
        cam.look_at = cam.look_at.lerp(desired_look, alpha);
    }

    fn update_first_person(
        &self,
        cam: &mut CameraState,
        avatar: &AvatarState,
        mouse_delta: (f32, f32),
    ) {
        let t = &self.tuning;
        let to_rad = t.sensitivity.to_radians();
        let limit = t.pitch_limit_deg.to_radians();

        cam.yaw = wrap_angle(cam.yaw + mouse_delta.0 * to_rad);
        cam.pitch = (cam.pitch - mouse_delta.1 * to_rad).clamp(-limit, limit);

        // Eye snaps to the avatar, no smoothing in first person.
        cam.position = avatar.position + Vec3::Y * t.eye_height;

        let dir = Vec3::new(
            cam.pitch.cos() * cam.yaw.sin(),
            cam.pitch.sin(),
            cam.pitch.cos() * cam.yaw.cos(),
        );
        if dir.length_squared() > 1e-8 {
            cam.look_at = cam.position + dir.normalize();
        }
    }
}

fn boom_position(target: Vec3, yaw: f32, distance: f32, height: f32) -> Vec3 {
    let (s, c) = yaw.sin_cos();
    target - Vec3::new(s, 0.0, c) * distance + Vec3::Y * height
}
