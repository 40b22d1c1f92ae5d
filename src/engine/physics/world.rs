use glam::Vec2;
use rapier2d::prelude::*;

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Gravity in pixels per second squared; +y points down the screen
pub const DEFAULT_GRAVITY: Real = 1200.0;

/// How far inside each bottom corner the side ground rays start
const GROUND_RAY_INSET: Real = 0.5;

/// Physics world that manages all physics simulation
///
/// World space is screen space: x grows to the right, y grows downward, units are pixels.
pub struct PhysicsWorld {
    /// Gravity vector
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    /// Create a new physics world with platformer gravity
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, DEFAULT_GRAVITY])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        ray_origin: Vector<Real>,
        ray_dir: Vector<Real>,
        max_toi: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![ray_origin.x, ray_origin.y], ray_dir);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            solid,
            filter,
        )
    }

    /// Whether solid geometry lies within `probe` pixels below the body's bottom edge
    ///
    /// Three rays start at the body's center height: one through the middle and one just inside
    /// each bottom corner, so a body overhanging a ledge still stands on it. The body's own
    /// colliders are ignored.
    pub fn is_blocked_below(
        &self,
        handle: RigidBodyHandle,
        half_extents: Vec2,
        probe: Real,
    ) -> bool {
        let Some(body) = self.get_rigid_body(handle) else {
            return false;
        };

        let center = *body.translation();
        let corner = (half_extents.x - GROUND_RAY_INSET).max(0.0);
        [-corner, 0.0, corner].into_iter().any(|dx| {
            self.raycast(
                center + vector![dx, 0.0],
                vector![0.0, 1.0],
                half_extents.y + probe,
                true,
                QueryFilter::default().exclude_rigid_body(handle),
            )
            .is_some()
        })
    }

    /// Clamp a body's linear velocity component-wise to `max`
    pub fn clamp_velocity(&mut self, handle: RigidBodyHandle, max: Vec2) {
        if let Some(body) = self.get_rigid_body_mut(handle) {
            let vel = *body.linvel();
            let clamped = vector![vel.x.clamp(-max.x, max.x), vel.y.clamp(-max.y, max.y)];
            if clamped != vel {
                body.set_linvel(clamped, true);
            }
        }
    }

    /// Slow a body's horizontal velocity toward zero by `amount` without changing its sign
    pub fn decelerate_x(&mut self, handle: RigidBodyHandle, amount: Real) {
        if let Some(body) = self.get_rigid_body_mut(handle) {
            let vel = *body.linvel();
            if vel.x != 0.0 {
                let vx = vel.x.signum() * (vel.x.abs() - amount).max(0.0);
                body.set_linvel(vector![vx, vel.y], true);
            }
        }
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Get the current timestep
    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
