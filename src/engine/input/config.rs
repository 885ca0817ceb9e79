// Key bindings and remapping

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// An empty configuration with nothing bound
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind a source to an action, replacing whatever it was bound to
    pub fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            if previous != action {
                log::debug!("Rebound {:?} from {:?} to {:?}", source, previous, action);
            }
        }
    }

    /// Unbind all sources for an action
    #[allow(dead_code)]
    pub fn unbind_action(&mut self, action: Action) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// All sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(source, _)| *source)
            .collect()
    }

    #[allow(dead_code)]
    pub fn has_binding(&self, action: Action) -> bool {
        self.bindings.values().any(|bound| *bound == action)
    }

    #[allow(dead_code)]
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_defaults_bound() {
        let config = InputConfig::default();
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Space)),
            Some(Action::Jump)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Escape)),
            Some(Action::Quit)
        );
        assert!(config.get_sources(Action::MoveLeft).len() >= 2);
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::default();
        let key = InputSource::key(KeyCode::KeyJ);
        config.bind(key, Action::Roll);
        assert_eq!(config.get_action(key), Some(Action::Roll));
        assert!(!config.get_sources(Action::Attack).contains(&key));
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::default();
        config.unbind_action(Action::Jump);
        assert!(!config.has_binding(Action::Jump));
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyW)), None);

        config.reset_to_defaults();
        assert!(config.has_binding(Action::Jump));
    }
}
