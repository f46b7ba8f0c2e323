//! Per-room configuration: mover/camera tuning and portal layout.
//!
//! Each room used to be a hand-tweaked copy of the same logic with different
//! constants baked in. Those constants live here instead, so one engine runs
//! any room from a small JSON document. All fields default, so a room file
//! only needs to spell out what it changes.

use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, EngineResult};

/// Which flavor of avatar the room drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarKind {
    /// Camera-relative WASD movement with jump and sprint.
    #[default]
    Walker,
    /// Throttle/steer movement with per-frame friction on a signed speed.
    Vehicle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    #[default]
    ThirdPerson,
    FirstPerson,
}

/// Kinematic tuning for the avatar integrator.
///
/// Vehicle speed accumulates `acceleration` per frame and decays by the
/// multiplicative `friction` factor per frame; only position integration is
/// time-scaled. That matches the feel the original rooms were tuned for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverTuning {
    pub acceleration: f32,
    pub friction: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Steering rate in rad/s at low speed.
    pub steer_gain: f32,
    /// How much steering flattens out toward max speed, in [0, 1].
    pub steer_damping: f32,

    pub walk_speed: f32,
    pub sprint_multiplier: f32,
    pub stamina_max: f32,
    /// Stamina per second while sprint-moving.
    pub stamina_drain: f32,
    /// Stamina per second otherwise.
    pub stamina_regen: f32,

    pub gravity: f32,
    pub jump_impulse: f32,
    pub ground_height: f32,

    /// XZ world bounds; position is hard-clamped inside every frame.
    pub bounds_min: [f32; 2],
    pub bounds_max: [f32; 2],

    pub spawn: [f32; 3],
    pub spawn_yaw: f32,
}

impl Default for MoverTuning {
    fn default() -> Self {
        Self {
            acceleration: 11.0,
            friction: 0.95,
            min_speed: -4.0,
            max_speed: 8.0,
            steer_gain: 2.2,
            steer_damping: 0.6,

            walk_speed: 4.2,
            sprint_multiplier: 1.63,
            stamina_max: 100.0,
            stamina_drain: 35.0,
            stamina_regen: 25.0,

            gravity: 18.0,
            jump_impulse: 7.3,
            ground_height: 0.43,

            bounds_min: [-32.0, -32.0],
            bounds_max: [32.0, 32.0],

            spawn: [0.0, 0.43, 8.0],
            spawn_yaw: 0.0,
        }
    }
}

/// Camera follower tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub follow_distance: f32,
    pub follow_height: f32,
    /// Vertical offset of the look-at point above the avatar.
    pub look_height: f32,
    /// Per-frame exponential smoothing factor in (0, 1).
    pub lerp_alpha: f32,

    /// First-person eye height above the avatar origin.
    pub eye_height: f32,
    /// Mouselook sensitivity in degrees per pointer count.
    pub sensitivity: f32,
    /// Pitch clamp in degrees (applied symmetrically).
    pub pitch_limit_deg: f32,

    /// Follow-distance change per wheel line.
    pub zoom_step: f32,
    pub min_follow_distance: f32,
    pub max_follow_distance: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_distance: 6.0,
            follow_height: 2.4,
            look_height: 0.8,
            lerp_alpha: 0.15,

            eye_height: 1.35,
            sensitivity: 0.15,
            pitch_limit_deg: 80.0,

            zoom_step: 0.6,
            min_follow_distance: 2.5,
            max_follow_distance: 14.0,
        }
    }
}

/// One portal: a named trigger disc on the ground plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub name: String,
    /// XZ center of the trigger disc.
    pub position: [f32; 2],
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub avatar: AvatarKind,
    pub camera_mode: CameraMode,
    pub mover: MoverTuning,
    pub camera: CameraTuning,
    pub portals: Vec<PortalConfig>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        let portal = |name: &str, x: f32, z: f32| PortalConfig {
            name: name.to_string(),
            position: [x, z],
            radius: 3.5,
        };
        Self {
            avatar: AvatarKind::Walker,
            camera_mode: CameraMode::ThirdPerson,
            mover: MoverTuning::default(),
            camera: CameraTuning::default(),
            portals: vec![
                portal("about", -18.0, -18.0),
                portal("art", 18.0, -18.0),
                portal("contact", 18.0, 18.0),
                portal("playground", -18.0, 18.0),
            ],
        }
    }
}

impl RoomConfig {
    pub fn load(path: &str) -> EngineResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| EngineError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }

    pub fn save(&self, path: &str) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| EngineError::ConfigWrite {
            path: path.to_string(),
            source,
        })
    }
}
