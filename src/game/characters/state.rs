// Character action states

use crate::engine::physics::Direction;

/// The single behaviour a character is engaged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Running on ground
    Moving,
    /// Airborne after a jump or a fall
    Jumping,
    /// Airborne after kicking off a wall, while the wall-jump animation plays
    WallJumping,
    /// Rolling; invincible and moving fast
    Rolling,
    /// Swinging an attack
    Attacking,
    /// Out of health; terminal
    Dead,
}

impl ActionState {
    /// Whether a new intent (move, jump, roll, attack) may be accepted
    pub fn can_act(&self) -> bool {
        !matches!(self, Self::Rolling | Self::Attacking | Self::Dead)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Dead)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Moving => "moving",
            Self::Jumping => "jumping",
            Self::WallJumping => "wall_jumping",
            Self::Rolling => "rolling",
            Self::Attacking => "attacking",
            Self::Dead => "dead",
        }
    }
}

/// Which way the character looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Left,
            Self::Right => Direction::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(ActionState::default(), ActionState::Idle);
        assert_eq!(Facing::default(), Facing::Right);
    }

    #[test]
    fn test_actions_block_each_other() {
        for state in [ActionState::Rolling, ActionState::Attacking] {
            assert!(!state.can_act());
        }
    }

    #[test]
    fn test_free_states_allow_everything() {
        for state in [
            ActionState::Idle,
            ActionState::Moving,
            ActionState::Jumping,
            ActionState::WallJumping,
        ] {
            assert!(state.can_act());
        }
    }

    #[test]
    fn test_dead_allows_nothing() {
        let dead = ActionState::Dead;
        assert!(dead.is_dead());
        assert!(!dead.can_act());
    }

    #[test]
    fn test_facing_helpers() {
        assert_eq!(Facing::Left.direction(), Direction::Left);
        assert_eq!(ActionState::WallJumping.name(), "wall_jumping");
    }
}
