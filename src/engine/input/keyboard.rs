// Keyboard key state

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which physical keys are currently held
#[derive(Debug, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_event(&mut self, event: &KeyEvent) {
        // Only physical key codes are tracked; layout-independent like the default bindings
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                if !event.repeat {
                    self.press(code);
                }
            }
            ElementState::Released => self.release(code),
        }
    }

    /// Register a key press
    pub fn press(&mut self, code: KeyCode) {
        self.pressed.insert(code);
    }

    /// Register a key release
    pub fn release(&mut self, code: KeyCode) {
        self.pressed.remove(&code);
    }

    /// Check if a key is currently held
    pub fn is_down(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// Check if any of the given keys is held
    pub fn any_down(&self, mut codes: impl Iterator<Item = KeyCode>) -> bool {
        codes.any(|code| self.is_down(code))
    }

    /// Release every key (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
