// Runs one character tick end to end: input, state machine, body writes, animation

use super::action::{Action, AnimationKeys};
use super::animation::AnimationPlayback;
use super::body::PhysicalBody;
use super::direction::Direction;
use super::selector::{apply_animation, select_animation};
use super::state::{BodySample, CharacterState, JumpKind, MotionPhase, TickCommands};
use super::stats::MovementStats;
use crate::engine::input::InputSnapshot;
use crate::game::effects::EffectSpawner;
use glam::Vec2;
use log::debug;

/// Drives one player-controlled character
#[derive(Debug, Clone)]
pub struct PlayerController {
    state: CharacterState,
    stats: MovementStats,
    keys: AnimationKeys,
    /// Draw depth of the character's sprite
    depth: i32,
    last_phase: Option<MotionPhase>,
}

impl PlayerController {
    pub fn new(stats: MovementStats, keys: AnimationKeys, depth: i32) -> Self {
        Self {
            state: CharacterState::default(),
            stats,
            keys,
            depth,
            last_phase: None,
        }
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn stats(&self) -> &MovementStats {
        &self.stats
    }

    pub fn keys(&self) -> &AnimationKeys {
        &self.keys
    }

    pub fn facing(&self) -> Direction {
        self.state.facing()
    }

    /// Run one tick against the body, the character's animation and the effect layer
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        body: &mut impl PhysicalBody,
        animation: &mut impl AnimationPlayback,
        effects: &mut impl EffectSpawner,
    ) -> TickCommands {
        let sample = BodySample::new(body.is_ground_contact(), body.velocity());
        let commands = self.state.step(input, sample, &self.stats);

        if let Some(vx) = commands.velocity_x {
            body.set_velocity_x(vx);
        }
        if let Some(vy) = commands.velocity_y {
            body.set_velocity_y(vy);
        }

        if let Some(kind) = commands.jump {
            let key = self.keys.get(Action::Jump, self.state.facing());
            if animation.exists(key) {
                animation.play(key, true);
            }

            if kind == JumpKind::Air {
                let feet = body.position() + Vec2::new(0.0, self.stats.half_height());
                effects.spawn_dust_cloud(feet, self.depth - 1);
            }
            debug!("{:?} jump facing {}", kind, self.state.facing());
        }

        // A take-off tick still samples as grounded
        let grounded = sample.blocked_below && commands.jump.is_none();
        self.log_phase(grounded);

        let key = select_animation(
            &self.keys,
            grounded,
            body.velocity().x,
            self.stats.walk_anim_threshold,
            self.state.facing(),
        );
        apply_animation(animation, key);

        commands
    }

    fn log_phase(&mut self, grounded: bool) {
        let phase = self.state.phase(grounded);
        match (self.last_phase, phase) {
            (Some(MotionPhase::Airborne { charges_used }), MotionPhase::Grounded) => {
                debug!("Landed after {} jump(s)", charges_used);
            }
            (Some(MotionPhase::Grounded), MotionPhase::Airborne { charges_used: 0 }) => {
                debug!("Walked off a ledge");
            }
            _ => {}
        }
        self.last_phase = Some(phase);
    }
}
