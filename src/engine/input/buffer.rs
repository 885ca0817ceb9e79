// Input buffering so presses made slightly early are not lost

use super::action::Action;
use std::collections::VecDeque;

/// Maximum number of buffered inputs to store
const MAX_BUFFER_SIZE: usize = 8;

/// How long a press stays in the buffer (in fixed updates)
pub const BUFFER_TICKS: u32 = 6;

/// A single buffered press
#[derive(Debug, Clone, Copy)]
pub struct BufferedInput {
    pub action: Action,
    pub ticks_remaining: u32,
}

impl BufferedInput {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            ticks_remaining: BUFFER_TICKS,
        }
    }

    pub fn age(&mut self) {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.ticks_remaining == 0
    }
}

/// Buffered presses of jump, roll and attack.
///
/// A press is held here until the controller accepts it or it ages out, so a
/// jump pressed a few ticks before landing still happens.
#[derive(Debug)]
pub struct InputBuffer {
    buffer: VecDeque<BufferedInput>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_BUFFER_SIZE),
        }
    }

    /// Buffer a press; pressing again refreshes its age
    pub fn push(&mut self, action: Action) {
        if let Some(input) = self.buffer.iter_mut().find(|input| input.action == action) {
            input.ticks_remaining = BUFFER_TICKS;
            return;
        }
        self.buffer.push_back(BufferedInput::new(action));
        if self.buffer.len() > MAX_BUFFER_SIZE {
            self.buffer.pop_front();
        }
    }

    pub fn has(&self, action: Action) -> bool {
        self.buffer.iter().any(|input| input.action == action)
    }

    /// Remove a buffered press. Returns true if it was there.
    pub fn consume(&mut self, action: Action) -> bool {
        if let Some(pos) = self.buffer.iter().position(|input| input.action == action) {
            self.buffer.remove(pos);
            true
        } else {
            false
        }
    }

    /// Age all presses by one tick and drop the expired ones
    pub fn update(&mut self) {
        for input in &mut self.buffer {
            input.age();
        }
        self.buffer.retain(|input| !input.is_expired());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
