// Movement tuning for the player character

use glam::Vec2;

/// Fixed movement stats for the player
///
/// World space is in pixels with y pointing down, so upward velocities are negative.
#[derive(Debug, Clone, Copy)]
pub struct MovementStats {
    // Movement
    /// Horizontal walk speed (pixels/second)
    pub walk_speed: f32,
    /// Vertical velocity applied on every jump
    pub jump_velocity: f32,
    /// Factor applied to upward velocity when jump is released early
    pub jump_cut: f32,
    /// Jumps allowed before touching the ground again
    pub max_jump_charges: u8,
    /// Horizontal speed above which the walk animation plays
    pub walk_anim_threshold: f32,

    // Physics
    /// Per-axis velocity clamp applied after each step
    pub max_velocity: Vec2,
    /// Horizontal deceleration (pixels/second²) on ticks the controller leaves vx alone
    pub drag_x: f32,

    // Dimensions
    /// Physics collider size (smaller than the 64px frame)
    pub collider_size: Vec2,
    /// How far below the collider the ground probe reaches
    pub ground_probe: f32,
}

/// The player's stats
pub const BASE_STATS: MovementStats = MovementStats {
    walk_speed: 160.0,
    jump_velocity: -400.0,
    jump_cut: 0.35,
    max_jump_charges: 2,
    walk_anim_threshold: 5.0,

    max_velocity: Vec2::new(250.0, 600.0),
    drag_x: 2000.0,

    collider_size: Vec2::new(36.0, 52.0),
    ground_probe: 2.0,
};

impl Default for MovementStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl MovementStats {
    /// Half the collider height, the distance from body center to feet
    pub fn half_height(&self) -> f32 {
        self.collider_size.y * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        self.collider_size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_stats() {
        let stats = MovementStats::default();
        assert_eq!(stats.walk_speed, 160.0);
        assert_eq!(stats.jump_velocity, -400.0);
        assert_eq!(stats.max_jump_charges, 2);
    }

    #[test]
    fn test_jump_is_upward_and_within_clamp() {
        let stats = MovementStats::default();
        assert!(stats.jump_velocity < 0.0);
        assert!(stats.jump_velocity.abs() <= stats.max_velocity.y);
        assert!(stats.walk_speed <= stats.max_velocity.x);
    }

    #[test]
    fn test_half_height() {
        assert_relative_eq!(BASE_STATS.half_height(), 26.0);
        assert_eq!(BASE_STATS.half_extents(), Vec2::new(18.0, 26.0));
    }
}
