//! Keyboard state
//!
//! Key events arrive between ticks. `KeyState` remembers which logical keys
//! are held and latches presses until the next tick takes a snapshot, so a
//! tap shorter than a frame still registers and a held key fires once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::{Direction, TickInput};

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Serve,
    Quit,
    ToggleDebug,
}

impl Key {
    pub const COUNT: usize = 7;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Physical `KeyboardEvent.code` -> logical key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    codes: HashMap<String, Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let codes = [
            ("KeyW", Key::LeftUp),
            ("KeyS", Key::LeftDown),
            ("KeyI", Key::RightUp),
            ("KeyK", Key::RightDown),
            ("ArrowUp", Key::RightUp),
            ("ArrowDown", Key::RightDown),
            ("Space", Key::Serve),
            ("KeyQ", Key::Quit),
            ("KeyZ", Key::ToggleDebug),
        ]
        .into_iter()
        .map(|(code, key)| (code.to_string(), key))
        .collect();
        Self { codes }
    }
}

impl KeyBindings {
    pub fn lookup(&self, code: &str) -> Option<Key> {
        self.codes.get(code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Held and freshly-pressed state for every logical key
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: [bool; Key::COUNT],
    pressed: [bool; Key::COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down; auto-repeat of an already held key is not a new press
    pub fn key_down(&mut self, key: Key) {
        let i = key.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Forget held keys (window lost focus, key-up events will not arrive)
    pub fn release_all(&mut self) {
        self.held = [false; Key::COUNT];
    }

    /// Take the input for one tick and consume pending presses
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            left: Direction::from_keys(self.is_held(Key::LeftUp), self.is_held(Key::LeftDown)),
            right: Direction::from_keys(self.is_held(Key::RightUp), self.is_held(Key::RightDown)),
            serve: self.pressed[Key::Serve.index()],
            quit: self.pressed[Key::Quit.index()],
            toggle_debug: self.pressed[Key::ToggleDebug.index()],
        };
        self.pressed = [false; Key::COUNT];
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("KeyW"), Some(Key::LeftUp));
        assert_eq!(bindings.lookup("KeyK"), Some(Key::RightDown));
        assert_eq!(bindings.lookup("Space"), Some(Key::Serve));
        assert_eq!(bindings.lookup("KeyZ"), Some(Key::ToggleDebug));
        assert_eq!(bindings.lookup("KeyX"), None);
    }

    #[test]
    fn test_bindings_from_json_replace_defaults() {
        let bindings: KeyBindings = serde_json::from_str(r#"{"Enter":"Serve"}"#).unwrap();
        assert_eq!(bindings.lookup("Enter"), Some(Key::Serve));
        assert_eq!(bindings.lookup("Space"), None);
    }

    #[test]
    fn test_held_keys_drive_paddles() {
        let mut keys = KeyState::new();
        keys.key_down(Key::LeftUp);
        keys.key_down(Key::RightDown);
        let input = keys.snapshot();
        assert_eq!(input.left, Direction::Up);
        assert_eq!(input.right, Direction::Down);

        // Still held next tick
        let input = keys.snapshot();
        assert_eq!(input.left, Direction::Up);

        keys.key_up(Key::LeftUp);
        assert_eq!(keys.snapshot().left, Direction::Idle);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut keys = KeyState::new();
        keys.key_down(Key::LeftUp);
        keys.key_down(Key::LeftDown);
        assert_eq!(keys.snapshot().left, Direction::Idle);
    }

    #[test]
    fn test_press_fires_once_while_held() {
        let mut keys = KeyState::new();
        keys.key_down(Key::Serve);
        // Auto-repeat
        keys.key_down(Key::Serve);
        assert!(keys.snapshot().serve);
        keys.key_down(Key::Serve);
        assert!(!keys.snapshot().serve);

        keys.key_up(Key::Serve);
        keys.key_down(Key::Serve);
        assert!(keys.snapshot().serve);
    }

    #[test]
    fn test_tap_between_ticks_is_not_lost() {
        let mut keys = KeyState::new();
        keys.key_down(Key::Quit);
        keys.key_up(Key::Quit);
        let input = keys.snapshot();
        assert!(input.quit);
        assert!(!keys.is_held(Key::Quit));
    }

    #[test]
    fn test_release_all_stops_paddles() {
        let mut keys = KeyState::new();
        keys.key_down(Key::RightUp);
        keys.release_all();
        assert_eq!(keys.snapshot().right, Direction::Idle);
    }

    #[test]
    fn test_bindings_json_shape() {
        let bindings = KeyBindings {
            codes: HashMap::from([("KeyA".to_string(), Key::LeftUp)]),
        };
        let json = serde_json::to_string(&bindings).unwrap();
        assert_eq!(json, r#"{"KeyA":"LeftUp"}"#);
    }
}
