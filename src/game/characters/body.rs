// Physical body the controller reads from and writes velocity to

use crate::engine::physics::{PhysicsWorld, RigidBodyHandle, Vector};
use glam::Vec2;

/// Narrow view of a simulated body
pub trait PhysicalBody {
    /// Whether the body is standing on something
    fn is_ground_contact(&self) -> bool;

    fn velocity(&self) -> Vec2;

    fn set_velocity_x(&mut self, vx: f32);

    fn set_velocity_y(&mut self, vy: f32);

    /// Center of the body in world pixels
    fn position(&self) -> Vec2;
}

/// [`PhysicalBody`] backed by a rapier rigid body
pub struct RapierBody<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
    half_extents: Vec2,
    probe: f32,
}

impl<'w> RapierBody<'w> {
    /// `half_extents` is half the collider size; ground within `probe` pixels below the
    /// collider's bottom edge counts as contact
    pub fn new(
        world: &'w mut PhysicsWorld,
        handle: RigidBodyHandle,
        half_extents: Vec2,
        probe: f32,
    ) -> Self {
        Self {
            world,
            handle,
            half_extents,
            probe,
        }
    }

    fn set_component(&mut self, x: Option<f32>, y: Option<f32>) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            let vel = *body.linvel();
            body.set_linvel(Vector::new(x.unwrap_or(vel.x), y.unwrap_or(vel.y)), true);
        }
    }
}

impl PhysicalBody for RapierBody<'_> {
    fn is_ground_contact(&self) -> bool {
        self.world
            .is_blocked_below(self.handle, self.half_extents, self.probe)
    }

    fn velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.set_component(Some(vx), None);
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.set_component(None, Some(vy));
    }

    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or(Vec2::ZERO)
    }
}
