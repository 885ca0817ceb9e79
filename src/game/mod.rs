// Game layer: characters and combat

pub mod characters;
pub mod combat;
