// Countdown timers gating character actions

/// A countdown in seconds that never goes below zero
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    /// (Re)start the countdown
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    /// Count down by `dt`. Returns true on the tick the timer reaches zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        self.remaining == 0.0
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Remaining time as a fraction of `duration`, in [0, 1]
    pub fn fraction_of(&self, duration: f32) -> f32 {
        if duration <= 0.0 {
            0.0
        } else {
            (self.remaining / duration).clamp(0.0, 1.0)
        }
    }
}

/// Which action timers hit zero during one bank tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expired {
    pub roll: bool,
    pub attack: bool,
}

/// The independent timers a character carries
#[derive(Debug, Clone, Default)]
pub struct CooldownBank {
    pub jump: Cooldown,
    pub roll: Cooldown,
    pub attack: Cooldown,
    pub invincible: Cooldown,
    pub recoil: Cooldown,
}

impl CooldownBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every timer down by the same elapsed time
    pub fn tick(&mut self, dt: f32) -> Expired {
        self.jump.tick(dt);
        self.invincible.tick(dt);
        self.recoil.tick(dt);
        Expired {
            roll: self.roll.tick(dt),
            attack: self.attack.tick(dt),
        }
    }

    /// Snapshot of remaining times, in field order
    #[allow(dead_code)]
    pub fn remaining(&self) -> [f32; 5] {
        [
            self.jump.remaining(),
            self.roll.remaining(),
            self.attack.remaining(),
            self.invincible.remaining(),
            self.recoil.remaining(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cooldown_counts_down_without_truncation() {
        let mut cd = Cooldown::default();
        cd.start(0.3);
        assert!(!cd.tick(0.004));
        assert_relative_eq!(cd.remaining(), 0.296, epsilon = 1e-6);
        assert!(cd.is_active());
    }

    #[test]
    fn test_cooldown_clamps_and_reports_expiry_once() {
        let mut cd = Cooldown::default();
        cd.start(0.1);
        assert!(cd.tick(0.5));
        assert_eq!(cd.remaining(), 0.0);
        assert!(!cd.is_active());
        assert!(!cd.tick(0.5));
        assert_eq!(cd.remaining(), 0.0);
    }

    #[test]
    fn test_cooldown_ignores_negative_input() {
        let mut cd = Cooldown::default();
        cd.start(-3.0);
        assert!(!cd.is_active());
        cd.start(1.0);
        cd.tick(-1.0);
        assert_eq!(cd.remaining(), 1.0);
    }

    #[test]
    fn test_fraction_of() {
        let mut cd = Cooldown::default();
        cd.start(0.25);
        cd.tick(0.125);
        assert_relative_eq!(cd.fraction_of(0.25), 0.5);
        assert_eq!(cd.fraction_of(0.0), 0.0);
    }

    #[test]
    fn test_bank_timers_are_independent() {
        let mut bank = CooldownBank::new();
        bank.jump.start(0.1);
        bank.roll.start(0.15);
        bank.attack.start(0.3);
        let expired = bank.tick(0.2);
        assert!(expired.roll);
        assert!(!expired.attack);
        assert!(bank.attack.is_active());
        assert!(!bank.jump.is_active());
    }

    #[test]
    fn test_bank_is_monotonic() {
        let mut bank = CooldownBank::new();
        bank.roll.start(0.4);
        bank.invincible.start(1.0);
        bank.recoil.start(0.25);
        let mut previous = bank.remaining();
        for _ in 0..100 {
            bank.tick(1.0 / 60.0);
            let now = bank.remaining();
            for (before, after) in previous.iter().zip(now.iter()) {
                assert!(after <= before);
                assert!(*after >= 0.0);
            }
            previous = now;
        }
        assert_eq!(bank.remaining(), [0.0; 5]);
    }
}
