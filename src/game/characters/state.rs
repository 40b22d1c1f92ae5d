// Character movement and jump state machine

use super::direction::Direction;
use super::stats::MovementStats;
use crate::engine::input::{Control, InputSnapshot};
use glam::Vec2;

/// Which kind of jump fired this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Take-off from the ground
    Ground,
    /// Second jump while airborne
    Air,
}

/// Physical state read from the body at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodySample {
    pub blocked_below: bool,
    pub velocity: Vec2,
}

impl BodySample {
    pub fn new(blocked_below: bool, velocity: Vec2) -> Self {
        Self {
            blocked_below,
            velocity,
        }
    }
}

/// Velocity writes and events produced by one tick
///
/// `None` means the axis is left as the physics produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickCommands {
    pub velocity_x: Option<f32>,
    pub velocity_y: Option<f32>,
    pub jump: Option<JumpKind>,
}

/// Coarse motion state, used for transition logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    Grounded,
    Airborne { charges_used: u8 },
}

/// Per-character controller state, updated once per tick by [`CharacterState::step`]
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    facing: Direction,
    jump_charges_used: u8,
    /// Horizontal velocity held for the whole of an airborne jump
    airborne_velocity_x: Option<f32>,
    /// Jump input on the previous tick, for edge detection
    was_jump_held: bool,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl CharacterState {
    pub fn new(facing: Direction) -> Self {
        Self {
            facing,
            jump_charges_used: 0,
            airborne_velocity_x: None,
            was_jump_held: false,
        }
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn jump_charges_used(&self) -> u8 {
        self.jump_charges_used
    }

    pub fn airborne_velocity_x(&self) -> Option<f32> {
        self.airborne_velocity_x
    }

    pub fn was_jump_held(&self) -> bool {
        self.was_jump_held
    }

    pub fn phase(&self, grounded: bool) -> MotionPhase {
        if grounded {
            MotionPhase::Grounded
        } else {
            MotionPhase::Airborne {
                charges_used: self.jump_charges_used,
            }
        }
    }

    /// Advance one tick
    ///
    /// Order matters: grounded movement, then the airborne lock, then the jump trigger, then the
    /// jump cut. The returned commands are to be written to the body in that order.
    pub fn step(
        &mut self,
        input: &InputSnapshot,
        body: BodySample,
        stats: &MovementStats,
    ) -> TickCommands {
        let mut commands = TickCommands::default();
        let grounded = body.blocked_below;
        let lateral = lateral_direction(input);

        if grounded {
            // Both or neither held: stop and keep facing
            match lateral {
                Some(direction) => {
                    commands.velocity_x = Some(direction.sign_x() * stats.walk_speed);
                    self.facing = direction;
                }
                None => commands.velocity_x = Some(0.0),
            }
            self.jump_charges_used = 0;
            self.airborne_velocity_x = None;
        } else if let Some(locked) = self.airborne_velocity_x {
            commands.velocity_x = Some(locked);
        }

        let mut velocity_y = body.velocity.y;
        let jump_pressed = input.jump_held && !self.was_jump_held;

        if jump_pressed {
            if grounded {
                velocity_y = stats.jump_velocity;
                commands.velocity_y = Some(velocity_y);

                match lateral {
                    Some(direction) => {
                        let locked = direction.sign_x() * stats.walk_speed;
                        self.airborne_velocity_x = Some(locked);
                        commands.velocity_x = Some(locked);
                        self.facing = direction;
                    }
                    None => {
                        self.airborne_velocity_x = None;
                        commands.velocity_x = Some(0.0);
                    }
                }

                self.jump_charges_used = 1;
                commands.jump = Some(JumpKind::Ground);
            } else if self.jump_charges_used < stats.max_jump_charges {
                velocity_y = stats.jump_velocity;
                commands.velocity_y = Some(velocity_y);
                self.jump_charges_used = stats.max_jump_charges;
                commands.jump = Some(JumpKind::Air);
            }
        }

        // Early release while rising shortens the arc
        if !input.jump_held && self.was_jump_held && velocity_y < 0.0 {
            commands.velocity_y = Some(velocity_y * stats.jump_cut);
        }

        self.was_jump_held = input.jump_held;
        commands
    }
}

fn lateral_direction(input: &InputSnapshot) -> Option<Direction> {
    match input.single_direction()? {
        Control::Left => Some(Direction::Left),
        Control::Right => Some(Direction::Right),
        _ => None,
    }
}
