// Static level layout: world bounds, platforms and the spawn point

use crate::engine::physics::{presets, PhysicsWorld, RigidBodyHandle};
use glam::Vec2;
use log::info;

/// An axis-aligned static platform, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub center: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Y of the walkable top edge
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }
}

/// Layout of the level
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// World size in pixels
    pub bounds: Vec2,
    pub platforms: Vec<Platform>,
    /// Solid walls along the left and right world edges
    pub side_walls: bool,
    pub spawn: Vec2,
}

const WALL_THICKNESS: f32 = 32.0;

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(1600.0, 600.0),
            platforms: vec![
                // Ground strip, wider than the world
                Platform::new(Vec2::new(800.0, 590.0), Vec2::new(10000.0, 16.0)),
                // Floating block
                Platform::new(Vec2::new(800.0, 400.0), Vec2::new(200.0, 16.0)),
            ],
            side_walls: true,
            spawn: Vec2::new(100.0, 450.0),
        }
    }
}

impl SceneConfig {
    /// Every solid the scene adds, walls included
    pub fn solids(&self) -> Vec<Platform> {
        let mut solids = self.platforms.clone();
        if self.side_walls {
            let size = Vec2::new(WALL_THICKNESS, self.bounds.y);
            let y = self.bounds.y * 0.5;
            solids.push(Platform::new(Vec2::new(-WALL_THICKNESS * 0.5, y), size));
            solids.push(Platform::new(
                Vec2::new(self.bounds.x + WALL_THICKNESS * 0.5, y),
                size,
            ));
        }
        solids
    }

    /// Add the scene's fixed bodies to the physics world
    pub fn build(&self, physics: &mut PhysicsWorld) -> Vec<RigidBodyHandle> {
        let handles: Vec<RigidBodyHandle> = self
            .solids()
            .iter()
            .map(|solid| {
                let handle =
                    physics.add_rigid_body(presets::platform_body(solid.center.x, solid.center.y));
                physics.add_collider(presets::platform_collider(solid.size.x, solid.size.y), handle);
                handle
            })
            .collect();

        info!(
            "Scene built: {}x{} world, {} solids",
            self.bounds.x,
            self.bounds.y,
            handles.len()
        );
        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let scene = SceneConfig::default();
        assert_eq!(scene.bounds, Vec2::new(1600.0, 600.0));
        assert_eq!(scene.platforms[0].top(), 582.0);
        assert_eq!(scene.platforms[1].top(), 392.0);
        assert!(scene.spawn.y < scene.platforms[0].top());
    }

    #[test]
    fn test_walls_are_optional() {
        let mut scene = SceneConfig::default();
        assert_eq!(scene.solids().len(), 4);

        scene.side_walls = false;
        assert_eq!(scene.solids().len(), 2);
    }

    #[test]
    fn test_spawned_body_lands_on_ground() {
        let scene = SceneConfig::default();
        let mut physics = PhysicsWorld::new();
        scene.build(&mut physics);

        let handle = physics.add_rigid_body(presets::player_body(scene.spawn.x, scene.spawn.y));
        physics.add_collider(presets::player_collider(36.0, 52.0), handle);
        for _ in 0..120 {
            physics.step();
        }

        assert!(physics.is_blocked_below(handle, Vec2::new(18.0, 26.0), 2.0));
    }
}
