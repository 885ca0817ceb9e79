// Character tuning - every number the controller needs lives here

use glam::IVec2;

use super::CharacterError;

/// Movement, combat and timing parameters for a character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Movement
    /// Horizontal run speed (pixels/second)
    pub run_speed: f32,
    /// Multiplier applied to run speed while rolling
    pub roll_speed_modifier: f32,
    /// Upward velocity set by a jump (pixels/tick)
    pub jump_impulse: f32,
    /// Velocity lost per second while airborne (pixels/tick per second)
    pub gravity: f32,
    /// Vertical velocity is clamped to [-max_vertical_speed, max_vertical_speed]
    pub max_vertical_speed: f32,
    /// Vertical velocity ceiling applied when the head touches something
    pub ceiling_nudge: f32,
    /// Height a horizontal move may climb instead of being blocked (pixels)
    pub step_up_margin: i32,

    // Collision box
    /// Hit box size (pixels)
    pub hitbox_size: IVec2,
    /// Horizontal inset of the hit box from the sprite's left edge
    pub hitbox_margin_x: i32,

    // Timers (seconds)
    pub jump_cooldown: f32,
    pub roll_time: f32,
    pub attack_time: f32,
    pub invincible_time: f32,
    pub recoil_time: f32,
    /// Knockback speed at the start of recoil (pixels/second), decays linearly
    pub recoil_speed: f32,

    // Combat
    pub max_health: i32,
    pub attack_damage: i32,
    /// Hit indicator / attack hitbox size
    pub attack_effect_size: IVec2,
    /// How far left of the sprite the hitbox sits when facing left
    pub attack_reach_left: i32,
    /// How far above the sprite top the hitbox starts
    pub attack_rise: i32,
    pub attack_effect_frames: u32,
    pub attack_effect_frame_time: f32,

    // Animation
    /// Time each animation frame stays on screen
    pub animation_frame_time: f32,
}

/// Default tuning for the player character
pub const BASE_STATS: CharacterStats = CharacterStats {
    run_speed: 300.0,
    roll_speed_modifier: 1.5,
    jump_impulse: 12.0,
    gravity: 40.0,
    max_vertical_speed: 20.0,
    ceiling_nudge: -1.0,
    step_up_margin: 8,

    hitbox_size: IVec2::new(44, 64),
    hitbox_margin_x: 10,

    jump_cooldown: 0.3,
    roll_time: 0.4,
    attack_time: 0.35,
    invincible_time: 1.0,
    recoil_time: 0.25,
    recoil_speed: 400.0,

    max_health: 3,
    attack_damage: 1,
    attack_effect_size: IVec2::new(100, 100),
    attack_reach_left: 36,
    attack_rise: 36,
    attack_effect_frames: 6,
    attack_effect_frame_time: 0.05,

    animation_frame_time: 0.06,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Reject tunings the controller cannot run with
    pub fn validate(&self) -> Result<(), CharacterError> {
        let invalid = |msg: &str| Err(CharacterError::InvalidStats(msg.to_string()));

        if self.hitbox_size.x <= 0 || self.hitbox_size.y <= 0 {
            return invalid("hit box size must be positive");
        }
        if self.attack_effect_size.x <= 0 || self.attack_effect_size.y <= 0 {
            return invalid("attack effect size must be positive");
        }
        if self.step_up_margin < 0 {
            return invalid("step-up margin must not be negative");
        }
        if self.max_vertical_speed <= 0.0 {
            return invalid("max vertical speed must be positive");
        }
        let timers = [
            self.jump_cooldown,
            self.roll_time,
            self.attack_time,
            self.invincible_time,
            self.recoil_time,
        ];
        if timers.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return invalid("timers must be finite and non-negative");
        }
        if self.animation_frame_time <= 0.0 || self.attack_effect_frame_time <= 0.0 {
            return invalid("frame times must be positive");
        }
        if self.max_health <= 0 {
            return invalid("max health must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_are_valid() {
        let stats = CharacterStats::default();
        assert_eq!(stats, BASE_STATS);
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_hitbox() {
        let stats = CharacterStats {
            hitbox_size: IVec2::new(0, 64),
            ..BASE_STATS
        };
        assert!(matches!(
            stats.validate(),
            Err(CharacterError::InvalidStats(_))
        ));
    }

    #[test]
    fn test_rejects_negative_timer() {
        let stats = CharacterStats {
            roll_time: -0.1,
            ..BASE_STATS
        };
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_frame_time() {
        let stats = CharacterStats {
            animation_frame_time: 0.0,
            ..BASE_STATS
        };
        assert!(stats.validate().is_err());
    }
}
