//! Portal triggers: fixed discs on the ground plane that open portfolio
//! panels when the avatar walks in.

use glam::{Vec2, Vec3};

use crate::engine::config::PortalConfig;

/// Immutable, load-time-constant trigger zone.
#[derive(Debug, Clone)]
pub struct Portal {
    pub name: String,
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Debug, Default)]
pub struct PortalSet {
    portals: Vec<Portal>,
}

impl PortalSet {
    pub fn from_configs(configs: &[PortalConfig]) -> Self {
        Self {
            portals: configs
                .iter()
                .map(|c| Portal {
                    name: c.name.clone(),
                    position: Vec2::from(c.position),
                    radius: c.radius,
                })
                .collect(),
        }
    }

    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    /// First portal whose XZ disc contains `position`, if any.
    ///
    /// At most one portal per call; list order breaks ties (portals are
    /// spatially separated by construction, so this is a don't-care).
    /// Non-finite positions never match.
    pub fn check(&self, position: Vec3) -> Option<&Portal> {
        if !position.is_finite() {
            return None;
        }
        let p = Vec2::new(position.x, position.z);
        self.portals
            .iter()
            .find(|portal| p.distance_squared(portal.position) < portal.radius * portal.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> PortalSet {
        PortalSet::from_configs(&[
            PortalConfig {
                name: "about".to_string(),
                position: [-18.0, -18.0],
                radius: 3.5,
            },
            PortalConfig {
                name: "art".to_string(),
                position: [18.0, -18.0],
                radius: 3.5,
            },
        ])
    }

    #[test]
    fn fires_just_inside_the_radius_and_not_outside() {
        let portals = set();

        let inside = Vec3::new(-18.0 + 3.5 - 0.01, 0.43, -18.0);
        assert_eq!(portals.check(inside).unwrap().name, "about");

        let outside = Vec3::new(-18.0 + 3.5 + 0.01, 0.43, -18.0);
        assert!(portals.check(outside).is_none());

        // Exactly on the rim does not count (strict inequality).
        let rim = Vec3::new(-18.0 + 3.5, 0.43, -18.0);
        assert!(portals.check(rim).is_none());
    }

    #[test]
    fn first_portal_in_list_order_wins() {
        let overlapping = PortalSet::from_configs(&[
            PortalConfig {
                name: "first".to_string(),
                position: [0.0, 0.0],
                radius: 5.0,
            },
            PortalConfig {
                name: "second".to_string(),
                position: [1.0, 0.0],
                radius: 5.0,
            },
        ]);
        assert_eq!(
            overlapping.check(Vec3::new(0.5, 0.0, 0.0)).unwrap().name,
            "first"
        );
    }

    #[test]
    fn trigger_is_radial_not_boxy() {
        let portals = set();
        // A corner point inside the bounding box but outside the disc.
        let d = 3.5 / std::f32::consts::SQRT_2 + 0.05;
        let corner = Vec3::new(-18.0 + d, 0.43, -18.0 + d);
        assert!(portals.check(corner).is_none());
    }

    #[test]
    fn non_finite_positions_never_match() {
        let portals = set();
        assert!(portals.check(Vec3::new(f32::NAN, 0.0, -18.0)).is_none());
        assert!(portals.check(Vec3::new(f32::INFINITY, 0.0, 0.0)).is_none());
    }

    #[test]
    fn altitude_does_not_affect_the_trigger() {
        let portals = set();
        let above = Vec3::new(-18.0, 50.0, -18.0);
        assert_eq!(portals.check(above).unwrap().name, "about");
    }
}
