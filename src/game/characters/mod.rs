// Character system
//
// This module contains everything related to the player character:
// - Character controller (movement, actions, collision)
// - Character stats and tunables
// - Action states and facing
// - Timed cooldowns
// - Animation sequencing and transient effects

pub mod animation;
pub mod character;
pub mod cooldown;
pub mod effect;
pub mod state;
pub mod stats;

use thiserror::Error;

// Re-export commonly used types
pub use character::Character;
pub use state::Facing;
pub use stats::CharacterStats;

/// Errors raised while creating a character
#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("Invalid character stats: {0}")]
    InvalidStats(String),

    #[error("Spawn position ({x}, {y}) overlaps an obstacle")]
    SpawnObstructed { x: i32, y: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CharacterError::SpawnObstructed { x: 4, y: -2 };
        assert_eq!(err.to_string(), "Spawn position (4, -2) overlaps an obstacle");

        let err = CharacterError::InvalidStats("gravity must be positive".into());
        assert!(err.to_string().contains("gravity must be positive"));
    }
}
