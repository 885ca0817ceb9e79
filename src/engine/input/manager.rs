// Input manager - turns winit events into player actions

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Routes raw window input through the bindings into the player's input state
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    /// Process a keyboard event from winit. Returns the bound action, if any.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<Action> {
        // Only process physical key presses
        match event.physical_key {
            PhysicalKey::Code(key_code) => {
                self.process_source(InputSource::key(key_code), event.state, event.repeat)
            }
            PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_event(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state, false);
    }

    /// Apply a press or release of `source`. Returns the bound action, if any.
    pub fn process_source(
        &mut self,
        source: InputSource,
        state: ElementState,
        repeat: bool,
    ) -> Option<Action> {
        let action = self.config.get_action(source)?;
        match state {
            // Key repeats are not new presses
            ElementState::Pressed if !repeat => self.player.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(action),
        }
        Some(action)
    }

    /// Advance input state by one fixed update
    pub fn update(&mut self) {
        self.player.update();
    }

    #[allow(dead_code)]
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    #[allow(dead_code)]
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    pub fn reset(&mut self) {
        self.player.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn press(manager: &mut InputManager, key: KeyCode) -> Option<Action> {
        manager.process_source(InputSource::key(key), ElementState::Pressed, false)
    }

    #[test]
    fn test_bound_key_presses_action() {
        let mut manager = InputManager::default();
        assert_eq!(press(&mut manager, KeyCode::KeyD), Some(Action::MoveRight));
        assert!(manager.player().is_pressed(Action::MoveRight));
        assert_eq!(manager.player().horizontal(), 1);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::default();
        assert_eq!(press(&mut manager, KeyCode::KeyZ), None);
    }

    #[test]
    fn test_key_repeat_does_not_rebuffer() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::Space);
        assert!(manager.player_mut().consume_buffered(Action::Jump));

        manager.process_source(
            InputSource::key(KeyCode::Space),
            ElementState::Pressed,
            true,
        );
        assert!(!manager.player().is_buffered(Action::Jump));
    }

    #[test]
    fn test_release_stops_movement() {
        let mut manager = InputManager::default();
        press(&mut manager, KeyCode::ArrowLeft);
        manager.update();
        manager.process_source(
            InputSource::key(KeyCode::ArrowLeft),
            ElementState::Released,
            false,
        );
        assert_eq!(manager.player().horizontal(), 0);
    }

    #[test]
    fn test_mouse_attack() {
        let mut manager = InputManager::default();
        manager.process_mouse_event(MouseButton::Left, ElementState::Pressed);
        assert!(manager.player().is_buffered(Action::Attack));
    }

    #[test]
    fn test_runtime_rebinding() {
        let mut manager = InputManager::default();
        manager
            .config_mut()
            .bind(InputSource::key(KeyCode::KeyL), Action::Roll);
        assert_eq!(press(&mut manager, KeyCode::KeyL), Some(Action::Roll));
        assert!(manager.player().is_buffered(Action::Roll));
    }
}
