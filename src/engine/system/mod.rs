pub mod camera_system;
pub mod mover_system;
pub mod portal_system;

pub use camera_system::{CameraFollower, CameraState};
pub use mover_system::{AvatarState, Mover};
pub use portal_system::{Portal, PortalSet};
