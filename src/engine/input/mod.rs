// Input handling system
//
// Keyboard and mouse input for the local player, with buffering of timed
// presses and runtime remapping.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `buffer`: Input buffering so early presses are not lost
// - `player`: Pressed/buffered state for the player
// - `config`: Key bindings and remapping
// - `manager`: Routes winit events through the bindings
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::default();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per fixed update, read and then age the state
// if input.player_mut().consume_buffered(Action::Jump) { /* jump */ }
// input.update();
// ```

pub mod action;
pub mod buffer;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
