//! Keyboard input
//!
//! Input sources deliver raw virtual-key codes; [`KeyCode::from_raw`] turns
//! them into a closed set of named keys once, at the boundary. Mapping keys
//! to gameplay actions is left to the game.

use serde::{Deserialize, Serialize};

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Left arrow
    Left,
    /// Up arrow
    Up,
    /// Right arrow
    Right,
    /// Down arrow
    Down,
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::A,
    KeyCode::B,
    KeyCode::C,
    KeyCode::D,
    KeyCode::E,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::I,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::M,
    KeyCode::N,
    KeyCode::O,
    KeyCode::P,
    KeyCode::Q,
    KeyCode::R,
    KeyCode::S,
    KeyCode::T,
    KeyCode::U,
    KeyCode::V,
    KeyCode::W,
    KeyCode::X,
    KeyCode::Y,
    KeyCode::Z,
];

impl KeyCode {
    /// Translate a virtual-key code (ASCII upper-case letters, 13 Enter,
    /// 27 Escape, 32 Space, 37..=40 arrows). Unknown codes yield `None`.
    pub fn from_raw(code: u32) -> Option<Self> {
        match code {
            13 => Some(Self::Enter),
            27 => Some(Self::Escape),
            32 => Some(Self::Space),
            37 => Some(Self::Left),
            38 => Some(Self::Up),
            39 => Some(Self::Right),
            40 => Some(Self::Down),
            65..=90 => usize::try_from(code - 65).ok().map(|i| LETTERS[i]),
            _ => None,
        }
    }

    /// Virtual-key code for this key
    pub fn to_raw(self) -> u32 {
        match self {
            Self::Enter => 13,
            Self::Escape => 27,
            Self::Space => 32,
            Self::Left => 37,
            Self::Up => 38,
            Self::Right => 39,
            Self::Down => 40,
            letter => {
                let index = LETTERS.iter().position(|&k| k == letter).unwrap_or(0);
                65 + u32::try_from(index).unwrap_or(0)
            }
        }
    }
}

/// A single key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Raw virtual-key code as delivered by the input source
    pub code: u32,
    /// `true` on press, `false` on release
    pub pressed: bool,
}

impl KeyEvent {
    /// A press of `key`
    pub fn press(key: KeyCode) -> Self {
        Self {
            code: key.to_raw(),
            pressed: true,
        }
    }

    /// A release of `key`
    pub fn release(key: KeyCode) -> Self {
        Self {
            code: key.to_raw(),
            pressed: false,
        }
    }

    /// Named key, if the code is known
    pub fn key(&self) -> Option<KeyCode> {
        KeyCode::from_raw(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(KeyCode::from_raw(32), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_raw(87), Some(KeyCode::W));
        assert_eq!(KeyCode::from_raw(65), Some(KeyCode::A));
        assert_eq!(KeyCode::from_raw(90), Some(KeyCode::Z));
        assert_eq!(KeyCode::from_raw(38), Some(KeyCode::Up));
        assert_eq!(KeyCode::from_raw(82), Some(KeyCode::R));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(KeyCode::from_raw(0), None);
        assert_eq!(KeyCode::from_raw(64), None);
        assert_eq!(KeyCode::from_raw(97), None);
    }

    #[test]
    fn test_key_event() {
        let event = KeyEvent::press(KeyCode::D);
        assert_eq!(event.code, 68);
        assert!(event.pressed);
        assert_eq!(event.key(), Some(KeyCode::D));
        assert!(!KeyEvent::release(KeyCode::D).pressed);
    }
}
