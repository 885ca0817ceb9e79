// Attack messages passed from attackers to whatever resolves hits

use crate::core::Rect;
use crate::game::characters::Facing;

/// Who an attack is meant to hurt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    // Only enemy swings aim at the player, and the demo level has none yet
    #[allow(dead_code)]
    Player,
    Enemy,
}

/// One landed swing: what it can hit, for how much, and which way it knocks back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackMessage {
    pub target: Target,
    pub damage: i32,
    pub hitbox: Rect,
    pub knockback: Facing,
}

/// Receives attack messages for a combat resolver to process later
pub trait AttackSink {
    fn add_message(&mut self, message: AttackMessage);
}

/// Queue of pending attack messages
#[derive(Debug, Default)]
pub struct AttackQueue {
    messages: Vec<AttackMessage>,
}

impl AttackQueue {
    pub fn new() -> Self {
        Self {
            messages: Vec::with_capacity(8),
        }
    }

    /// Take every pending message, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = AttackMessage> + '_ {
        self.messages.drain(..)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl AttackSink for AttackQueue {
    fn add_message(&mut self, message: AttackMessage) {
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swing(target: Target) -> AttackMessage {
        AttackMessage {
            target,
            damage: 1,
            hitbox: Rect::new(0, 0, 100, 100),
            knockback: Facing::Right,
        }
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = AttackQueue::new();
        queue.add_message(swing(Target::Enemy));
        queue.add_message(swing(Target::Player));
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().map(|m| m.target).collect();
        assert_eq!(drained, vec![Target::Enemy, Target::Player]);
        assert!(queue.is_empty());
    }
}
