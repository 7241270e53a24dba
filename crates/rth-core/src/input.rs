//! Pointer and keyboard input abstraction

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    fn index(&self) -> usize {
        match self {
            PointerButton::Primary => 0,
            PointerButton::Secondary => 1,
            PointerButton::Middle => 2,
        }
    }
}

/// A keyboard key, identified by its character
///
/// Letters are stored uppercase so `KeyCode::new('w') == KeyCode::new('W')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(char);

impl KeyCode {
    pub fn new(c: char) -> Self {
        Self(c.to_ascii_uppercase())
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

/// Source of per-frame input
///
/// Pointer positions are in screen pixels with the origin at the top left.
pub trait InputProvider {
    fn pointer_position(&self) -> Vec2;
    /// Button went down this frame
    fn button_down(&self, button: PointerButton) -> bool;
    /// Button is currently held
    fn button_held(&self, button: PointerButton) -> bool;
    /// Button was released this frame
    fn button_up(&self, button: PointerButton) -> bool;
    /// Key went down this frame
    fn key_down(&self, key: KeyCode) -> bool;
}

/// Snapshot of one frame of input
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub pointer: Vec2,
    down: [bool; 3],
    held: [bool; 3],
    up: [bool; 3],
    keys: Vec<KeyCode>,
}

impl InputState {
    pub fn new(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }

    /// Start a new frame: edge flags and keys are cleared, held buttons persist
    pub fn next_frame(&mut self) {
        self.down = [false; 3];
        self.up = [false; 3];
        self.keys.clear();
    }

    pub fn move_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    pub fn press(&mut self, button: PointerButton) {
        let i = button.index();
        self.down[i] = true;
        self.held[i] = true;
    }

    pub fn release(&mut self, button: PointerButton) {
        let i = button.index();
        self.held[i] = false;
        self.up[i] = true;
    }

    pub fn press_key(&mut self, key: impl Into<KeyCode>) {
        self.keys.push(key.into());
    }
}

impl InputProvider for InputState {
    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn button_down(&self, button: PointerButton) -> bool {
        self.down[button.index()]
    }

    fn button_held(&self, button: PointerButton) -> bool {
        self.held[button.index()]
    }

    fn button_up(&self, button: PointerButton) -> bool {
        self.up[button.index()]
    }

    fn key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_case_insensitive() {
        assert_eq!(KeyCode::new('w'), KeyCode::new('W'));
        assert_eq!(KeyCode::from('x').as_char(), 'X');
    }

    #[test]
    fn test_press_release_cycle() {
        let mut input = InputState::new(Vec2::new(10.0, 20.0));
        input.press(PointerButton::Primary);
        assert!(input.button_down(PointerButton::Primary));
        assert!(input.button_held(PointerButton::Primary));

        input.next_frame();
        assert!(!input.button_down(PointerButton::Primary));
        assert!(input.button_held(PointerButton::Primary));

        input.release(PointerButton::Primary);
        assert!(input.button_up(PointerButton::Primary));
        assert!(!input.button_held(PointerButton::Primary));
        assert!(!input.button_held(PointerButton::Secondary));
    }

    #[test]
    fn test_keys_cleared_each_frame() {
        let mut input = InputState::default();
        input.press_key('e');
        assert!(input.key_down(KeyCode::new('E')));
        input.next_frame();
        assert!(!input.key_down(KeyCode::new('E')));
    }
}
