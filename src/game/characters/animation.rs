// Character animation sequencing over a fixed sprite sheet

use super::state::Facing;

/// Every animation on the player sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationId {
    IdleRight,
    IdleLeft,
    MoveRight,
    MoveLeft,
    JumpRight,
    JumpLeft,
    RollRight,
    RollLeft,
    AttackRight,
    AttackLeft,
    WallJumpRight,
    WallJumpLeft,
    DeathIdle,
    DeathRight,
    DeathLeft,
}

/// Frame range of an animation on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDescriptor {
    /// First frame (inclusive)
    pub start: u32,
    /// Last frame (inclusive)
    pub end: u32,
    /// Hand off to the fallback after one cycle instead of looping
    pub play_once: bool,
}

impl AnimationDescriptor {
    const fn looping(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            play_once: false,
        }
    }

    const fn one_shot(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            play_once: true,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, frame: u32) -> bool {
        (self.start..=self.end).contains(&frame)
    }
}

impl AnimationId {
    /// Frame range and playback mode
    pub const fn descriptor(self) -> AnimationDescriptor {
        match self {
            Self::IdleRight => AnimationDescriptor::looping(0, 0),
            Self::IdleLeft => AnimationDescriptor::looping(8, 8),
            Self::MoveRight => AnimationDescriptor::looping(16, 23),
            Self::MoveLeft => AnimationDescriptor::looping(24, 31),
            Self::JumpRight => AnimationDescriptor::looping(32, 32),
            Self::JumpLeft => AnimationDescriptor::looping(40, 40),
            Self::RollRight => AnimationDescriptor::one_shot(48, 55),
            Self::RollLeft => AnimationDescriptor::one_shot(56, 63),
            Self::AttackRight => AnimationDescriptor::one_shot(64, 69),
            Self::AttackLeft => AnimationDescriptor::one_shot(72, 77),
            Self::WallJumpRight => AnimationDescriptor::one_shot(80, 85),
            Self::WallJumpLeft => AnimationDescriptor::one_shot(88, 93),
            Self::DeathIdle => AnimationDescriptor::looping(96, 102),
            Self::DeathRight => AnimationDescriptor::one_shot(104, 109),
            Self::DeathLeft => AnimationDescriptor::one_shot(112, 117),
        }
    }

    pub fn idle(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::IdleRight,
            Facing::Left => Self::IdleLeft,
        }
    }

    pub fn moving(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::MoveRight,
            Facing::Left => Self::MoveLeft,
        }
    }

    pub fn jump(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::JumpRight,
            Facing::Left => Self::JumpLeft,
        }
    }

    pub fn roll(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::RollRight,
            Facing::Left => Self::RollLeft,
        }
    }

    pub fn attack(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::AttackRight,
            Facing::Left => Self::AttackLeft,
        }
    }

    pub fn wall_jump(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::WallJumpRight,
            Facing::Left => Self::WallJumpLeft,
        }
    }

    pub fn death(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::DeathRight,
            Facing::Left => Self::DeathLeft,
        }
    }

    pub fn is_wall_jump(self) -> bool {
        matches!(self, Self::WallJumpRight | Self::WallJumpLeft)
    }

    #[allow(dead_code)]
    pub fn is_death(self) -> bool {
        matches!(self, Self::DeathIdle | Self::DeathRight | Self::DeathLeft)
    }
}

/// Steps through the frames of the current animation.
///
/// Looping animations cycle forever. A one-shot animation plays one full
/// cycle and then switches to the fallback animation.
#[derive(Debug, Clone)]
pub struct AnimationSequencer {
    current: AnimationId,
    frame: u32,
    /// Time accumulated toward the next frame
    elapsed: f32,
    /// Where a finished one-shot animation goes
    fallback: AnimationId,
    frame_time: f32,
}

impl AnimationSequencer {
    pub fn new(initial: AnimationId, frame_time: f32) -> Self {
        Self {
            current: initial,
            frame: initial.descriptor().start,
            elapsed: 0.0,
            fallback: initial,
            frame_time,
        }
    }

    /// Switch animations; switching to the current one changes nothing
    pub fn change_state(&mut self, id: AnimationId) {
        if id == self.current {
            return;
        }
        self.current = id;
        self.frame = id.descriptor().start;
    }

    pub fn set_fallback(&mut self, id: AnimationId) {
        self.fallback = id;
    }

    /// Start `id` and set where it goes once finished
    pub fn play(&mut self, id: AnimationId, fallback: AnimationId) {
        self.change_state(id);
        self.set_fallback(fallback);
    }

    /// Advance by `dt`. Returns the fallback when a one-shot just finished.
    pub fn tick(&mut self, dt: f32) -> Option<AnimationId> {
        self.elapsed += dt.max(0.0);
        if self.elapsed <= self.frame_time {
            return None;
        }
        self.elapsed = 0.0;
        self.frame += 1;

        let descriptor = self.current.descriptor();
        if self.frame <= descriptor.end {
            return None;
        }

        self.frame = descriptor.start;
        if descriptor.play_once {
            let fallback = self.fallback;
            self.change_state(fallback);
            Some(fallback)
        } else {
            None
        }
    }

    pub fn current(&self) -> AnimationId {
        self.current
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn fallback(&self) -> AnimationId {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AnimationId; 15] = [
        AnimationId::IdleRight,
        AnimationId::IdleLeft,
        AnimationId::MoveRight,
        AnimationId::MoveLeft,
        AnimationId::JumpRight,
        AnimationId::JumpLeft,
        AnimationId::RollRight,
        AnimationId::RollLeft,
        AnimationId::AttackRight,
        AnimationId::AttackLeft,
        AnimationId::WallJumpRight,
        AnimationId::WallJumpLeft,
        AnimationId::DeathIdle,
        AnimationId::DeathRight,
        AnimationId::DeathLeft,
    ];

    const FRAME: f32 = 0.06;
    // Slightly more than one frame interval, so every tick advances a frame
    const STEP: f32 = 0.061;

    #[test]
    fn test_descriptor_table_is_well_formed() {
        for id in ALL {
            let d = id.descriptor();
            assert!(d.start <= d.end, "{:?} has an inverted range", id);
            assert!(d.end < 120, "{:?} is outside the sheet", id);
        }
        assert_eq!(AnimationId::MoveRight.descriptor().frame_count(), 8);
        assert!(AnimationId::AttackLeft.descriptor().play_once);
        assert!(!AnimationId::DeathIdle.descriptor().play_once);
    }

    #[test]
    fn test_change_state_resets_frame() {
        let mut seq = AnimationSequencer::new(AnimationId::IdleRight, FRAME);
        seq.change_state(AnimationId::MoveLeft);
        assert_eq!(seq.current(), AnimationId::MoveLeft);
        assert_eq!(seq.frame(), 24);
    }

    #[test]
    fn test_change_to_same_state_is_noop() {
        let mut seq = AnimationSequencer::new(AnimationId::MoveRight, FRAME);
        seq.tick(STEP);
        seq.tick(STEP);
        assert_eq!(seq.frame(), 18);
        seq.change_state(AnimationId::MoveRight);
        assert_eq!(seq.frame(), 18);
    }

    #[test]
    fn test_frame_waits_for_interval() {
        let mut seq = AnimationSequencer::new(AnimationId::MoveRight, FRAME);
        assert_eq!(seq.tick(0.02), None);
        assert_eq!(seq.tick(0.02), None);
        assert_eq!(seq.frame(), 16);
        seq.tick(0.03);
        assert_eq!(seq.frame(), 17);
    }

    #[test]
    fn test_looping_animation_wraps_forever() {
        let mut seq = AnimationSequencer::new(AnimationId::MoveRight, FRAME);
        for _ in 0..8 {
            assert_eq!(seq.tick(STEP), None);
        }
        assert_eq!(seq.current(), AnimationId::MoveRight);
        assert_eq!(seq.frame(), 16);
    }

    #[test]
    fn test_one_shot_hands_off_once_after_full_cycle() {
        let mut seq = AnimationSequencer::new(AnimationId::IdleRight, FRAME);
        seq.play(AnimationId::AttackRight, AnimationId::IdleRight);

        // Frames 65..=69 play without a hand-off
        for expected in 65..=69 {
            assert_eq!(seq.tick(STEP), None);
            assert_eq!(seq.frame(), expected);
            assert_eq!(seq.current(), AnimationId::AttackRight);
        }

        assert_eq!(seq.tick(STEP), Some(AnimationId::IdleRight));
        assert_eq!(seq.current(), AnimationId::IdleRight);
        assert_eq!(seq.frame(), 0);

        for _ in 0..20 {
            assert_eq!(seq.tick(STEP), None);
        }
    }

    #[test]
    fn test_frame_stays_in_range() {
        let mut seq = AnimationSequencer::new(AnimationId::IdleLeft, FRAME);
        seq.play(AnimationId::DeathLeft, AnimationId::DeathIdle);
        for _ in 0..200 {
            seq.tick(0.037);
            assert!(seq.current().descriptor().contains(seq.frame()));
        }
        assert_eq!(seq.current(), AnimationId::DeathIdle);
    }

    #[test]
    fn test_facing_helpers() {
        assert_eq!(AnimationId::idle(Facing::Left), AnimationId::IdleLeft);
        assert_eq!(AnimationId::roll(Facing::Right), AnimationId::RollRight);
        assert!(AnimationId::wall_jump(Facing::Left).is_wall_jump());
        assert!(AnimationId::death(Facing::Right).is_death());
        assert!(!AnimationId::jump(Facing::Right).is_wall_jump());
    }
}
