//! Gameplay actions and the key bindings that trigger them

use std::collections::HashMap;

use bitflags::bitflags;
use frame_engine::input::KeyCode;
use serde::{Deserialize, Serialize};

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Walk towards -Z
    MoveUp,
    /// Walk towards +Z
    MoveDown,
    /// Walk towards +X
    MoveLeft,
    /// Walk towards -X
    MoveRight,
    /// Jump if standing on something
    Jump,
    /// Teleport back to spawn
    Reset,
}

bitflags! {
    /// Directional keys currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Directions: u8 {
        /// Up held
        const UP = 1 << 0;
        /// Down held
        const DOWN = 1 << 1;
        /// Left held
        const LEFT = 1 << 2;
        /// Right held
        const RIGHT = 1 << 3;
    }
}

impl Action {
    /// Direction flag for movement actions; `None` for one-shot actions
    pub fn direction(self) -> Option<Directions> {
        match self {
            Self::MoveUp => Some(Directions::UP),
            Self::MoveDown => Some(Directions::DOWN),
            Self::MoveLeft => Some(Directions::LEFT),
            Self::MoveRight => Some(Directions::RIGHT),
            Self::Jump | Self::Reset => None,
        }
    }
}

/// One key bound to one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Physical key
    pub key: KeyCode,
    /// Action it triggers
    pub action: Action,
}

impl KeyBinding {
    /// Bind `key` to `action`
    pub const fn new(key: KeyCode, action: Action) -> Self {
        Self { key, action }
    }
}

/// The stock layout: WASD and arrows to move, space to jump, R to reset
pub fn default_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new(KeyCode::Space, Action::Jump),
        KeyBinding::new(KeyCode::W, Action::MoveUp),
        KeyBinding::new(KeyCode::Up, Action::MoveUp),
        KeyBinding::new(KeyCode::S, Action::MoveDown),
        KeyBinding::new(KeyCode::Down, Action::MoveDown),
        KeyBinding::new(KeyCode::A, Action::MoveLeft),
        KeyBinding::new(KeyCode::Left, Action::MoveLeft),
        KeyBinding::new(KeyCode::D, Action::MoveRight),
        KeyBinding::new(KeyCode::Right, Action::MoveRight),
        KeyBinding::new(KeyCode::R, Action::Reset),
    ]
}

/// Key to action lookup, resolved once from bindings
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    actions: HashMap<KeyCode, Action>,
}

impl ActionMap {
    /// Build from a binding list; later bindings for the same key win
    pub fn from_bindings(bindings: &[KeyBinding]) -> Self {
        let mut actions = HashMap::with_capacity(bindings.len());
        for binding in bindings {
            if let Some(previous) = actions.insert(binding.key, binding.action) {
                log::warn!(
                    "{:?} was bound to {previous:?}; rebinding to {:?}",
                    binding.key,
                    binding.action
                );
            }
        }
        Self { actions }
    }

    /// Action bound to a named key
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.actions.get(&key).copied()
    }

    /// Action bound to a raw virtual-key code
    pub fn resolve(&self, code: u32) -> Option<Action> {
        KeyCode::from_raw(code).and_then(|key| self.action_for(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_resolve_raw_codes() {
        let map = ActionMap::from_bindings(&default_bindings());

        assert_eq!(map.resolve(32), Some(Action::Jump));
        assert_eq!(map.resolve(87), Some(Action::MoveUp));
        assert_eq!(map.resolve(38), Some(Action::MoveUp));
        assert_eq!(map.resolve(83), Some(Action::MoveDown));
        assert_eq!(map.resolve(40), Some(Action::MoveDown));
        assert_eq!(map.resolve(65), Some(Action::MoveLeft));
        assert_eq!(map.resolve(37), Some(Action::MoveLeft));
        assert_eq!(map.resolve(68), Some(Action::MoveRight));
        assert_eq!(map.resolve(39), Some(Action::MoveRight));
        assert_eq!(map.resolve(82), Some(Action::Reset));
    }

    #[test]
    fn test_unbound_keys() {
        let map = ActionMap::from_bindings(&default_bindings());
        assert_eq!(map.resolve(81), None); // Q
        assert_eq!(map.resolve(1000), None);
    }

    #[test]
    fn test_rebinding_last_wins() {
        let map = ActionMap::from_bindings(&[
            KeyBinding::new(KeyCode::J, Action::Reset),
            KeyBinding::new(KeyCode::J, Action::Jump),
        ]);
        assert_eq!(map.action_for(KeyCode::J), Some(Action::Jump));
    }

    #[test]
    fn test_direction_flags() {
        assert_eq!(Action::MoveLeft.direction(), Some(Directions::LEFT));
        assert_eq!(Action::Jump.direction(), None);
        assert_eq!(Action::Reset.direction(), None);
    }
}
