// Tile-based collision: static maps and per-axis movement resolution

pub mod collision;
pub mod map;

pub use collision::{CollisionResolver, Direction};
pub use map::{CollisionMap, MapError};
