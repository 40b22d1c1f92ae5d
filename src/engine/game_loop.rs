/// Fixed timestep driver for the simulation tick
///
/// The character controller, physics and animation all advance in the same fixed tick; rendering
/// and event handling run at whatever rate the window delivers frames.
use std::time::{Duration, Instant};

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    tick_count: u64,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame using the wall clock, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Feed `frame_time` into the accumulator, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Drop the backlog instead of carrying it into the next frame
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Get the fixed timestep (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert!((game_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_short_frame_runs_no_tick() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(5)), 0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_time_accumulates_across_frames() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 0);
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 1);
        assert_eq!(game_loop.tick_count(), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game_loop = GameLoop::new();

        // 300ms would allow 18 ticks
        assert_eq!(game_loop.advance(Duration::from_millis(300)), MAX_TICKS_PER_FRAME);

        // The backlog is dropped
        assert_eq!(game_loop.advance(Duration::from_millis(1)), 0);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }
}
