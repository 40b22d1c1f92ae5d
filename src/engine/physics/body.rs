use super::collision::CollisionGroups;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Rigid bodies and colliders for the player and the level
pub mod presets {
    use super::*;

    /// Player body: dynamic, upright, never asleep so velocity writes always apply
    pub fn player_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .locked_axes(LockedAxes::ROTATION_LOCKED)
            .can_sleep(false)
            .build()
    }

    /// Player collider: `width` x `height` box with no friction and no bounce
    pub fn player_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Player.to_interaction_groups())
            .friction(0.0)
            .restitution(0.0)
            .density(1.0)
            .build()
    }

    /// Platform body, fixed in place and centered at (x, y)
    pub fn platform_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::fixed().translation(vector![x, y]).build()
    }

    pub fn platform_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Platform.to_interaction_groups())
            .friction(0.3)
            .restitution(0.0)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_preset() {
        let body = presets::player_body(10.0, 20.0);
        let collider = presets::player_collider(36.0, 52.0);

        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert_eq!(body.translation().x, 10.0);
        assert_eq!(body.translation().y, 20.0);
        assert!(body.is_rotation_locked());
        assert!(!body.is_sleeping());
        assert_eq!(collider.friction(), 0.0);
        assert_eq!(collider.restitution(), 0.0);
        assert!(!collider.is_sensor());
    }

    #[test]
    fn test_player_collider_matches_size() {
        let collider = presets::player_collider(36.0, 52.0);
        let cuboid = collider.shape().as_cuboid().unwrap();
        assert_eq!(cuboid.half_extents.x, 18.0);
        assert_eq!(cuboid.half_extents.y, 26.0);
    }

    #[test]
    fn test_player_and_platform_collide() {
        let player = presets::player_collider(36.0, 52.0).collision_groups();
        let platform = presets::platform_collider(800.0, 16.0).collision_groups();
        assert!(player.test(platform));
    }

    #[test]
    fn test_platform_preset_is_fixed() {
        let body = presets::platform_body(800.0, 590.0);
        let collider = presets::platform_collider(800.0, 16.0);
        assert_eq!(body.body_type(), RigidBodyType::Fixed);
        assert_eq!(collider.friction(), 0.3);
    }
}
