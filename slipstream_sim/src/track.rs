// slipstream_sim/src/track.rs

//! Track prefabs: a start pose plus a list of static cuboid colliders
//! (ground slab, perimeter walls). The visual track mesh is a rendering
//! concern and does not exist here; the colliders are the whole track as far
//! as the motion model cares.

use nalgebra::Vector3;
use serde::Deserialize;
use tracing::info;

use crate::config::Pose;
use crate::physics::PhysicsContext;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackPrefab {
    pub name: String,
    pub start_pose: Pose,
    #[serde(default)]
    pub colliders: Vec<StaticCollider>,
}

/// One axis-aligned static cuboid.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticCollider {
    pub half_extents: [f64; 3],
    #[serde(default)]
    pub translation: [f64; 3],
}

impl TrackPrefab {
    /// Insert every collider into the physics world. Called once at startup.
    pub fn build(&self, physics: &mut PhysicsContext) {
        info!(track = %self.name, colliders = self.colliders.len(), "building track");
        for collider in &self.colliders {
            physics.add_static_cuboid(
                Vector3::new(
                    collider.half_extents[0],
                    collider.half_extents[1],
                    collider.half_extents[2],
                ),
                Vector3::new(
                    collider.translation[0],
                    collider.translation[1],
                    collider.translation[2],
                ),
            );
        }
    }
}
