// Player character entity

use crate::engine::input::InputSnapshot;
use crate::engine::physics::{presets, ColliderHandle, PhysicsWorld, RigidBodyHandle, Vector};
use crate::game::effects::EffectSpawner;
use glam::Vec2;
use std::rc::Rc;

use super::action::AnimationKeys;
use super::animation::{AnimationLibrary, AnimationPlayer};
use super::body::RapierBody;
use super::controller::PlayerController;
use super::direction::Direction;
use super::state::TickCommands;
use super::stats::MovementStats;

/// The player: a rigid body, its controller and its sprite animation
#[derive(Debug)]
pub struct Character {
    // Physics
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the character's collider
    pub collider_handle: ColliderHandle,

    pub controller: PlayerController,
    /// Animation player for sprite animations
    pub animation: AnimationPlayer,
}

impl Character {
    /// Create a new character and add it to the physics world
    pub fn spawn(
        physics: &mut PhysicsWorld,
        library: Rc<AnimationLibrary>,
        stats: MovementStats,
        keys: AnimationKeys,
        spawn: Vec2,
        depth: i32,
    ) -> Self {
        let body_handle = physics.add_rigid_body(presets::player_body(spawn.x, spawn.y));
        let collider = presets::player_collider(stats.collider_size.x, stats.collider_size.y);
        let collider_handle = physics.add_collider(collider, body_handle);

        Self {
            body_handle,
            collider_handle,
            controller: PlayerController::new(stats, keys, depth),
            animation: AnimationPlayer::new(library),
        }
    }

    /// Run the controller for one tick against this character's body
    ///
    /// Horizontal drag slows the body on ticks where the controller leaves vx alone.
    pub fn tick(
        &mut self,
        physics: &mut PhysicsWorld,
        input: &InputSnapshot,
        effects: &mut impl EffectSpawner,
    ) -> TickCommands {
        let stats = *self.controller.stats();
        let mut body = RapierBody::new(
            physics,
            self.body_handle,
            stats.half_extents(),
            stats.ground_probe,
        );
        let commands = self
            .controller
            .tick(input, &mut body, &mut self.animation, effects);

        if commands.velocity_x.is_none() {
            physics.decelerate_x(self.body_handle, stats.drag_x * physics.timestep());
        }

        self.animation
            .set_flip_horizontal(self.controller.facing() == Direction::Left);
        commands
    }

    /// Apply the per-axis velocity clamp, after the physics step
    pub fn clamp_velocity(&self, physics: &mut PhysicsWorld) {
        physics.clamp_velocity(self.body_handle, self.controller.stats().max_velocity);
    }

    /// Update animation timing (called every tick)
    pub fn update_animation_timing(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    /// Get character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// Set character position (for respawning)
    pub fn set_position(&self, physics: &mut PhysicsWorld, position: Vec2) {
        if let Some(body) = physics.get_rigid_body_mut(self.body_handle) {
            body.set_translation(Vector::new(position.x, position.y), true);
            body.set_linvel(Vector::new(0.0, 0.0), true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetManager, TextureInfo};
    use crate::game::characters::{
        register_character_animations, AnimationPlayback, JumpKind, BASE_STATS,
    };
    use crate::game::effects::{EffectPool, DUST_CLOUD};
    use approx::assert_relative_eq;

    struct NoEffects;

    impl EffectSpawner for NoEffects {
        fn spawn_dust_cloud(&mut self, _feet: Vec2, _depth: i32) {}
    }

    fn library() -> Rc<AnimationLibrary> {
        let mut assets = AssetManager::new(".");
        for key in ["player_idle", "player_walk", "player_jump"] {
            assets.insert_texture(key, TextureInfo::new(256, 256));
        }
        for key in DUST_CLOUD.frame_keys {
            assets.insert_texture(key, TextureInfo::new(64, 64));
        }
        let mut library = AnimationLibrary::new();
        register_character_animations(&mut library, &assets, &AnimationKeys::default(), "player");
        DUST_CLOUD.register(&mut library, &assets);
        Rc::new(library)
    }

    /// Ground spanning x 0..800 with its top edge at y = 492
    fn world_with_ground() -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        let ground = world.add_rigid_body(presets::platform_body(400.0, 500.0));
        world.add_collider(presets::platform_collider(800.0, 16.0), ground);
        world
    }

    #[test]
    fn test_jump_from_ground_in_rapier_world() {
        let mut world = world_with_ground();
        let spawn = Vec2::new(200.0, 492.0 - BASE_STATS.half_height());
        let mut player =
            Character::spawn(&mut world, library(), BASE_STATS, AnimationKeys::default(), spawn, 10);
        world.step();

        let idle = InputSnapshot::default();
        player.tick(&mut world, &idle, &mut NoEffects);
        assert_eq!(player.animation.current_key().map(|k| k.as_str()), Some("idle_right"));

        let jump = InputSnapshot::new(true, false, true);
        let commands = player.tick(&mut world, &jump, &mut NoEffects);
        assert_eq!(commands.velocity_y, Some(-400.0));
        assert!(player.animation.is_flipped_horizontal());
        assert_eq!(player.animation.current_key().map(|k| k.as_str()), Some("jump_left"));

        world.step();
        player.clamp_velocity(&mut world);
        assert!(player.position(&world).unwrap().y < spawn.y);
    }

    fn spawn_resting(world: &mut PhysicsWorld, x: f32) -> Character {
        let spawn = Vec2::new(x, 492.0 - BASE_STATS.half_height());
        let player =
            Character::spawn(world, library(), BASE_STATS, AnimationKeys::default(), spawn, 10);
        world.step();
        player
    }

    /// One controller tick followed by one physics step
    fn run(player: &mut Character, world: &mut PhysicsWorld, input: InputSnapshot) -> TickCommands {
        let commands = player.tick(world, &input, &mut NoEffects);
        world.step();
        player.clamp_velocity(world);
        commands
    }

    #[test]
    fn test_air_jump_dust_sits_at_the_feet() {
        let mut world = world_with_ground();
        let library = library();
        let spawn = Vec2::new(200.0, 492.0 - BASE_STATS.half_height());
        let mut player = Character::spawn(
            &mut world,
            Rc::clone(&library),
            BASE_STATS,
            AnimationKeys::default(),
            spawn,
            10,
        );
        let mut effects = EffectPool::new(library, DUST_CLOUD);
        world.step();

        let jump = InputSnapshot::new(false, false, true);
        let commands = player.tick(&mut world, &jump, &mut effects);
        assert_eq!(commands.jump, Some(JumpKind::Ground));
        world.step();
        run(&mut player, &mut world, jump);
        run(&mut player, &mut world, InputSnapshot::default());

        let center = player.position(&world).unwrap();
        let commands = player.tick(&mut world, &jump, &mut effects);
        assert_eq!(commands.jump, Some(JumpKind::Air));

        assert_eq!(effects.len(), 1);
        let dust = &effects.effects()[0];
        let collider_bottom = center.y + BASE_STATS.half_height();
        assert_relative_eq!(dust.position.x, center.x);
        assert_relative_eq!(dust.position.y, collider_bottom + 2.0, epsilon = 1e-3);
        assert_eq!(dust.depth, 9);
    }

    #[test]
    fn test_can_jump_while_overhanging_a_ledge() {
        // Collider spans x 794..830, overlapping the ground by 6 px
        let mut world = world_with_ground();
        let mut player = spawn_resting(&mut world, 812.0);
        for _ in 0..60 {
            run(&mut player, &mut world, InputSnapshot::default());
        }

        let commands = run(&mut player, &mut world, InputSnapshot::new(false, false, true));
        assert_eq!(commands.jump, Some(JumpKind::Ground));
        assert!(player.position(&world).unwrap().y < 492.0 - BASE_STATS.half_height());
    }

    #[test]
    fn test_drag_stops_a_body_walking_off_a_ledge() {
        let mut world = world_with_ground();
        let mut player = spawn_resting(&mut world, 780.0);
        let right = InputSnapshot::new(false, true, false);

        let mut airborne_ticks = 0;
        for _ in 0..120 {
            let commands = run(&mut player, &mut world, right);
            if commands.velocity_x.is_none() {
                airborne_ticks += 1;
                if airborne_ticks == 6 {
                    break;
                }
            } else {
                assert_eq!(commands.velocity_x, Some(BASE_STATS.walk_speed));
            }
        }

        assert_eq!(airborne_ticks, 6);
        let vel = world.get_rigid_body(player.body_handle).unwrap().linvel();
        assert_relative_eq!(vel.x, 0.0);
        assert!(vel.y > 0.0);
    }

    #[test]
    fn test_drag_leaves_controller_velocity_alone() {
        let mut world = world_with_ground();
        let mut player = spawn_resting(&mut world, 200.0);

        player.tick(&mut world, &InputSnapshot::new(true, false, false), &mut NoEffects);
        let vel = world.get_rigid_body(player.body_handle).unwrap().linvel();
        assert_eq!(vel.x, -BASE_STATS.walk_speed);
    }

    #[test]
    fn test_set_position_stops_the_body() {
        let mut world = PhysicsWorld::new();
        let mut player =
            Character::spawn(&mut world, library(), BASE_STATS, AnimationKeys::default(), Vec2::ZERO, 0);
        player.update_animation_timing(0.1);

        player.set_position(&mut world, Vec2::new(100.0, 450.0));
        assert_eq!(player.position(&world), Some(Vec2::new(100.0, 450.0)));
    }
}
