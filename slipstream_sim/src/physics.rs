// slipstream_sim/src/physics.rs

//! Rapier physics context for the kart simulation. One struct owns the whole
//! pipeline (sets, phases, solver, query pipeline) and exposes the handful of
//! operations the motion model consumes: stepping, spawning the kart body,
//! static track colliders, and the downward ground ray.

use nalgebra::Vector3;
use rapier3d::prelude::*;

/// The physics world and every piece of rapier state needed to step it.
/// Positions inside rapier are `f32`; the motion model is `f64` and converts
/// at this boundary.
pub struct PhysicsContext {
    pub gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    island_manager: IslandManager,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsContext {
    /// Fresh world with the given gravity and fixed timestep.
    pub fn new(gravity: Vector3<f64>, timestep: f64) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: timestep as Real,
            ..IntegrationParameters::default()
        };
        Self {
            gravity: vector![gravity.x as Real, gravity.y as Real, gravity.z as Real],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            island_manager: IslandManager::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Perform one simulation step. The query pipeline is refreshed in the
    /// same call so ray casts in the following frame see the stepped state.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Rebuild the query acceleration structure. Needed once after spawning
    /// geometry, before the first frame's ray casts.
    pub fn refresh_queries(&mut self) {
        self.query_pipeline.update(&self.colliders);
    }

    /// Spawn the kart's dynamic ball body with CCD, at `translation` with a
    /// yaw rotation of `heading` about +Y. Returns the body handle; exactly
    /// one body per kart, created once.
    pub fn spawn_kart_body(
        &mut self,
        translation: Vector3<f64>,
        heading: f64,
        radius: f64,
        mass: f64,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .ccd_enabled(true)
            .translation(vector![
                translation.x as Real,
                translation.y as Real,
                translation.z as Real
            ])
            .rotation(vector![0.0, heading as Real, 0.0]);
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::ball(radius as Real).mass(mass as Real);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    /// Add one static cuboid (track ground, wall) as a parentless collider.
    pub fn add_static_cuboid(&mut self, half_extents: Vector3<f64>, translation: Vector3<f64>) {
        let collider = ColliderBuilder::cuboid(
            half_extents.x as Real,
            half_extents.y as Real,
            half_extents.z as Real,
        )
        .translation(vector![
            translation.x as Real,
            translation.y as Real,
            translation.z as Real
        ]);
        self.colliders.insert(collider);
    }

    /// Downward ground probe: a ray of length `max_distance` from the body's
    /// translation, excluding the body itself. Returns whether anything was
    /// hit; no hit is a perfectly normal airborne state.
    pub fn is_grounded(&self, body: RigidBodyHandle, max_distance: f64) -> bool {
        let origin = *self.bodies[body].translation();
        let ray = Ray::new(origin.into(), vector![0.0, -1.0, 0.0]);
        let filter = QueryFilter::default().exclude_rigid_body(body);
        self.query_pipeline
            .cast_ray(&self.bodies, &self.colliders, &ray, max_distance as Real, false, filter)
            .is_some()
    }

    /// Apply an impulse to a body, waking it. `f64` at the call site, `f32`
    /// inside rapier.
    pub fn apply_impulse(&mut self, body: RigidBodyHandle, impulse: Vector3<f64>) {
        self.bodies[body].apply_impulse(
            vector![impulse.x as Real, impulse.y as Real, impulse.z as Real],
            true,
        );
    }

    /// Body translation in `f64`.
    pub fn body_translation(&self, body: RigidBodyHandle) -> Vector3<f64> {
        let t = self.bodies[body].translation();
        Vector3::new(f64::from(t.x), f64::from(t.y), f64::from(t.z))
    }

    /// Body linear velocity in `f64`.
    pub fn body_linvel(&self, body: RigidBodyHandle) -> Vector3<f64> {
        let v = self.bodies[body].linvel();
        Vector3::new(f64::from(v.x), f64::from(v.y), f64::from(v.z))
    }

    /// Mass of a body as rapier computed it from its colliders.
    pub fn body_mass(&self, body: RigidBodyHandle) -> f64 {
        f64::from(self.bodies[body].mass())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DT: f64 = 1.0 / 60.0;

    fn world_with_ground() -> PhysicsContext {
        let mut physics = PhysicsContext::new(Vector3::new(0.0, -9.81, 0.0), DT);
        physics.add_static_cuboid(Vector3::new(50.0, 0.5, 50.0), Vector3::new(0.0, -0.5, 0.0));
        physics
    }

    #[test]
    fn test_dynamic_body_falls_under_gravity() {
        let mut physics = world_with_ground();
        let body = physics.spawn_kart_body(Vector3::new(0.0, 5.0, 0.0), 0.0, 0.26, 0.5);
        physics.refresh_queries();
        for _ in 0..30 {
            physics.step();
        }
        assert!(physics.body_translation(body).y < 5.0);
    }

    #[test]
    fn test_ground_ray_hits_plane_half_a_unit_below() {
        let mut physics = world_with_ground();
        // Plane top is y = 0; body center at 0.5 puts the surface 0.5 away.
        let body = physics.spawn_kart_body(Vector3::new(0.0, 0.5, 0.0), 0.0, 0.26, 0.5);
        physics.refresh_queries();
        assert!(physics.is_grounded(body, 1.0));
    }

    #[test]
    fn test_ground_ray_misses_plane_two_units_below() {
        let mut physics = world_with_ground();
        let body = physics.spawn_kart_body(Vector3::new(0.0, 2.0, 0.0), 0.0, 0.26, 0.5);
        physics.refresh_queries();
        assert!(!physics.is_grounded(body, 1.0));
    }

    #[test]
    fn test_ground_ray_excludes_the_body_itself() {
        // No ground at all: the only collider under the ray origin is the
        // kart's own ball, which must not count as a hit.
        let mut physics = PhysicsContext::new(Vector3::new(0.0, -9.81, 0.0), DT);
        let body = physics.spawn_kart_body(Vector3::new(0.0, 10.0, 0.0), 0.0, 0.26, 0.5);
        physics.refresh_queries();
        assert!(!physics.is_grounded(body, 1.0));
    }

    #[test]
    fn test_impulse_moves_translation_only_after_a_step() {
        let mut physics = world_with_ground();
        let body = physics.spawn_kart_body(Vector3::new(0.0, 0.26, 0.0), 0.0, 0.26, 0.5);
        physics.refresh_queries();

        let before = physics.body_translation(body);
        physics.apply_impulse(body, Vector3::new(0.0, 0.0, 2.0));

        // The impulse lags one step behind its visible effect.
        let after_apply = physics.body_translation(body);
        assert_abs_diff_eq!(before.z, after_apply.z, epsilon = 1e-9);

        physics.step();
        assert!(physics.body_translation(body).z > before.z);
    }

    #[test]
    fn test_ball_mass_matches_collider_setting() {
        let mut physics = world_with_ground();
        let body = physics.spawn_kart_body(Vector3::new(0.0, 0.5, 0.0), 0.0, 0.26, 0.5235987901687622);
        assert_abs_diff_eq!(physics.body_mass(body), 0.5235987901687622, epsilon = 1e-6);
    }
}
