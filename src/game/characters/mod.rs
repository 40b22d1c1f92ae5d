// Character system
//
// This module contains everything related to the player character:
// - Directions, actions and the animation keys built from them
// - Clip registration from sprite sheets, and clip playback
// - The movement and jump state machine
// - Animation selection from physical state
// - The controller that ties them to a physical body

pub mod action;
pub mod animation;
pub mod body;
pub mod character;
pub mod controller;
pub mod direction;
pub mod registry;
pub mod selector;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use action::{Action, AnimationKey, AnimationKeys};
pub use animation::{
    AnimationClip, AnimationLibrary, AnimationPlayback, AnimationPlayer, AnimationRegistry, Frame,
    Repeat,
};
pub use body::{PhysicalBody, RapierBody};
pub use character::Character;
pub use controller::PlayerController;
pub use direction::Direction;
pub use registry::{register_character_animations, SheetSource, FRAME_SIZE};
pub use selector::{apply_animation, select_action, select_animation};
pub use state::{BodySample, CharacterState, JumpKind, MotionPhase, TickCommands};
pub use stats::{MovementStats, BASE_STATS};

/// Errors from parsing character data
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
