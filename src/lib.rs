// Side-scrolling platformer character controller
//
// - `core`: small math helpers
// - `engine`: input devices, physics, assets and the fixed-timestep loop
// - `game`: the player character, its controller, effects and the level

pub mod core;
pub mod engine;
pub mod game;
