// Engine modules: input, physics, assets, timing

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
