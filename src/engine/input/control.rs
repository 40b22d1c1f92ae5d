// Logical controls and their default device bindings

use gilrs::Button;
use winit::keyboard::KeyCode;

/// The five logical controls a player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Left,
    Down,
    Right,
    Jump,
}

impl Control {
    /// Every control, in binding-table order
    pub const ALL: [Control; 5] = [
        Control::Up,
        Control::Left,
        Control::Down,
        Control::Right,
        Control::Jump,
    ];
}

/// Represents an input source (keyboard key or gamepad button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    GamepadButton(Button),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a gamepad button input source
    pub fn button(button: Button) -> Self {
        Self::GamepadButton(button)
    }
}

/// Default keyboard bindings: arrow keys and WASD side by side, Space to jump
pub fn default_keyboard_bindings() -> Vec<(InputSource, Control)> {
    vec![
        (InputSource::key(KeyCode::ArrowUp), Control::Up),
        (InputSource::key(KeyCode::ArrowLeft), Control::Left),
        (InputSource::key(KeyCode::ArrowDown), Control::Down),
        (InputSource::key(KeyCode::ArrowRight), Control::Right),
        (InputSource::key(KeyCode::KeyW), Control::Up),
        (InputSource::key(KeyCode::KeyA), Control::Left),
        (InputSource::key(KeyCode::KeyS), Control::Down),
        (InputSource::key(KeyCode::KeyD), Control::Right),
        (InputSource::key(KeyCode::Space), Control::Jump),
    ]
}

/// Default gamepad bindings: D-pad for directions, the bottom face button (cross / A) to jump
pub fn default_gamepad_bindings() -> Vec<(InputSource, Control)> {
    vec![
        (InputSource::button(Button::DPadUp), Control::Up),
        (InputSource::button(Button::DPadLeft), Control::Left),
        (InputSource::button(Button::DPadDown), Control::Down),
        (InputSource::button(Button::DPadRight), Control::Right),
        (InputSource::button(Button::South), Control::Jump),
    ]
}
