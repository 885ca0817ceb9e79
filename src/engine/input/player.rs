// Player input state

use super::action::Action;
use super::buffer::InputBuffer;
use std::collections::HashSet;

/// Pressed and buffered actions for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Jump/roll/attack presses waiting to be accepted
    buffer: InputBuffer,
}

impl PlayerInput {
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn is_buffered(&self, action: Action) -> bool {
        self.buffer.has(action)
    }

    /// Consume a buffered action
    /// Returns true if the action was buffered and consumed
    pub fn consume_buffered(&mut self, action: Action) -> bool {
        self.buffer.consume(action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) && action.is_buffered() {
            self.buffer.push(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Advance one fixed update
    pub(crate) fn update(&mut self) {
        self.buffer.update();
    }

    /// Reset all input state, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.buffer.clear();
    }

    /// Horizontal direction held: -1 left, 1 right, 0 for neither or both
    pub fn horizontal(&self) -> i32 {
        let mut horizontal = 0;
        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1;
        }
        horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = PlayerInput::default();
        input.press(Action::MoveLeft);
        assert!(input.is_pressed(Action::MoveLeft));

        input.update();
        assert!(input.is_pressed(Action::MoveLeft));

        input.release(Action::MoveLeft);
        assert!(!input.is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_only_timed_actions_are_buffered() {
        let mut input = PlayerInput::default();
        input.press(Action::Jump);
        input.press(Action::MoveRight);
        assert!(input.is_buffered(Action::Jump));
        assert!(!input.is_buffered(Action::MoveRight));
    }

    #[test]
    fn test_buffered_press_outlives_release() {
        let mut input = PlayerInput::default();
        input.press(Action::Attack);
        input.update();
        input.release(Action::Attack);

        assert!(input.consume_buffered(Action::Attack));
        assert!(!input.consume_buffered(Action::Attack));
    }

    #[test]
    fn test_holding_does_not_rebuffer() {
        let mut input = PlayerInput::default();
        input.press(Action::Jump);
        assert!(input.consume_buffered(Action::Jump));
        input.press(Action::Jump);
        assert!(!input.is_buffered(Action::Jump));
    }

    #[test]
    fn test_horizontal() {
        let mut input = PlayerInput::default();
        assert_eq!(input.horizontal(), 0);
        input.press(Action::MoveRight);
        assert_eq!(input.horizontal(), 1);
        input.press(Action::MoveLeft);
        assert_eq!(input.horizontal(), 0);
        input.release(Action::MoveRight);
        assert_eq!(input.horizontal(), -1);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::default();
        input.press(Action::Jump);
        input.press(Action::MoveLeft);
        input.reset();
        assert!(!input.is_pressed(Action::MoveLeft));
        assert!(!input.is_buffered(Action::Jump));
    }
}
