// Game layer: the player character, its effects and the level it runs in

pub mod characters;
pub mod effects;
pub mod scene;
