// Chooses the clip a character should be showing from its physical state

use super::action::{Action, AnimationKey, AnimationKeys};
use super::animation::AnimationPlayback;
use super::direction::Direction;

/// Pick the action for the current physical state
///
/// Airborne always shows the jump pose, including while falling.
pub fn select_action(grounded: bool, velocity_x: f32, walk_threshold: f32) -> Action {
    if !grounded {
        Action::Jump
    } else if velocity_x.abs() > walk_threshold {
        Action::Walk
    } else {
        Action::Idle
    }
}

/// Key of the clip for the current physical state and facing
pub fn select_animation<'k>(
    keys: &'k AnimationKeys,
    grounded: bool,
    velocity_x: f32,
    walk_threshold: f32,
    facing: Direction,
) -> &'k AnimationKey {
    keys.get(select_action(grounded, velocity_x, walk_threshold), facing)
}

/// Play `key` unless it is unregistered or already the current clip
///
/// Returns whether a playback command was issued.
pub fn apply_animation(playback: &mut impl AnimationPlayback, key: &AnimationKey) -> bool {
    if !playback.exists(key) || playback.current_key() == Some(key) {
        return false;
    }
    playback.play(key, true);
    true
}
