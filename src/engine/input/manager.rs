// Input manager - coordinates keyboard, gamepad and bindings

use super::config::InputConfig;
use super::control::Control;
use super::gamepad::{GamepadPoller, GamepadState};
use super::keyboard::KeyboardState;
use super::sampler::{self, DeviceInput, InputSnapshot};
use winit::event::KeyEvent;
use winit::keyboard::KeyCode;

/// Owns all device state for the single local player
pub struct InputManager {
    /// Binding table
    config: InputConfig,

    /// Physical keys currently held
    keyboard: KeyboardState,

    /// gilrs context
    gamepads: GamepadPoller,

    /// Gamepad state read by the last `poll_gamepads` call
    gamepad: Option<GamepadState>,
}

impl InputManager {
    /// Create an input manager with gamepad support
    pub fn new(config: InputConfig) -> Self {
        Self::with_poller(config, GamepadPoller::new())
    }

    /// Create an input manager that only listens to the keyboard
    pub fn keyboard_only(config: InputConfig) -> Self {
        Self::with_poller(config, GamepadPoller::disabled())
    }

    fn with_poller(config: InputConfig, gamepads: GamepadPoller) -> Self {
        Self {
            config,
            keyboard: KeyboardState::new(),
            gamepads,
            gamepad: None,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.keyboard.process_event(event);
    }

    /// Press a key directly (scripted input)
    pub fn press_key(&mut self, code: KeyCode) {
        self.keyboard.press(code);
    }

    /// Release a key directly (scripted input)
    pub fn release_key(&mut self, code: KeyCode) {
        self.keyboard.release(code);
    }

    /// Refresh the gamepad state; call once per tick before sampling
    pub fn poll_gamepads(&mut self) {
        self.gamepad = self.gamepads.poll(&self.config);
    }

    /// Reduce current device state to a snapshot
    pub fn snapshot(&self) -> InputSnapshot {
        sampler::sample(self)
    }

    /// Release everything, e.g. on focus loss
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.gamepad = None;
    }

    /// Get the binding table
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Get the mutable binding table
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}

impl DeviceInput for InputManager {
    fn is_down(&self, control: Control) -> bool {
        self.keyboard.any_down(self.config.keys(control))
    }

    fn gamepad(&self) -> Option<&GamepadState> {
        self.gamepad.as_ref()
    }

    fn axis_dead_zone(&self) -> f32 {
        self.config.axis_dead_zone()
    }
}
