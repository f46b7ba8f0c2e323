//! Scene collaborator: the engine writes avatar transforms; a renderer
//! (out of scope here) draws them.

use glam::Vec3;
use slotmap::SlotMap;

use crate::engine::config::AvatarKind;

slotmap::new_key_type! {
    /// Handle to an avatar registered with a scene.
    pub struct AvatarHandle;
}

pub trait Scene {
    fn create_avatar(&mut self, kind: AvatarKind) -> AvatarHandle;
    fn set_transform(&mut self, handle: AvatarHandle, position: Vec3, yaw: f32);
    fn render(&mut self);
}

/// Placement of one scene prop, as last written by the engine.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub kind: AvatarKind,
    pub position: Vec3,
    pub yaw: f32,
}

/// Headless scene model: a handle-indexed store of placements.
///
/// Rendering backends attach behind the `Scene` trait; this store is what
/// they would read from, and what tests observe.
#[derive(Debug, Default)]
pub struct SceneModel {
    props: SlotMap<AvatarHandle, Placement>,
    frames: u64,
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placement(&self, handle: AvatarHandle) -> Option<&Placement> {
        self.props.get(handle)
    }

    /// Iterate placements (a render backend would walk these each frame).
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.props.values()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl Scene for SceneModel {
    fn create_avatar(&mut self, kind: AvatarKind) -> AvatarHandle {
        self.props.insert(Placement {
            kind,
            position: Vec3::ZERO,
            yaw: 0.0,
        })
    }

    fn set_transform(&mut self, handle: AvatarHandle, position: Vec3, yaw: f32) {
        match self.props.get_mut(handle) {
            Some(placement) => {
                placement.position = position;
                placement.yaw = yaw;
            }
            // Stale handle: skip the write, keep the frame going.
            None => log::warn!("set_transform on unknown avatar handle, skipping"),
        }
    }

    fn render(&mut self) {
        self.frames += 1;
    }
}
