// Gamepad polling through gilrs

use super::config::InputConfig;
use super::control::Control;
use gilrs::{Axis, Event, EventType, Gamepad, GamepadId, Gilrs};
use log::{info, warn};
use std::collections::HashSet;

/// Snapshot of the one gamepad consulted this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadState {
    /// Controls whose bound buttons are held
    held: HashSet<Control>,
    /// Horizontal stick position in [-1, 1]
    axis_x: f32,
}

impl GamepadState {
    /// Build a state directly (used by tests and by non-gilrs backends)
    pub fn new(held: impl IntoIterator<Item = Control>, axis_x: f32) -> Self {
        Self {
            held: held.into_iter().collect(),
            axis_x: axis_x.clamp(-1.0, 1.0),
        }
    }

    /// Read the digital buttons bound in `config` and the left stick's X axis
    fn read(pad: &Gamepad<'_>, config: &InputConfig) -> Self {
        let held = Control::ALL
            .into_iter()
            .filter(|control| config.buttons(*control).any(|b| pad.is_pressed(b)));
        Self::new(held, pad.value(Axis::LeftStickX))
    }

    /// Check if any button bound to the control is held
    pub fn is_down(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Horizontal stick position
    pub fn axis_x(&self) -> f32 {
        self.axis_x
    }
}

/// Owns the gilrs context and picks the first connected gamepad each tick
pub struct GamepadPoller {
    gilrs: Option<Gilrs>,
    active: Option<GamepadId>,
}

impl GamepadPoller {
    /// Initialise gilrs; a missing backend leaves the poller permanently empty
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(e) => {
                warn!("Gamepad support unavailable: {}", e);
                None
            }
        };
        Self {
            gilrs,
            active: None,
        }
    }

    /// A poller that never reports a gamepad
    pub fn disabled() -> Self {
        Self {
            gilrs: None,
            active: None,
        }
    }

    /// Drain pending gamepad events and read the first connected pad, if any
    pub fn poll(&mut self, config: &InputConfig) -> Option<GamepadState> {
        let gilrs = self.gilrs.as_mut()?;

        // Draining events keeps gilrs' cached button/axis state current
        while let Some(Event { id, event, .. }) = gilrs.next_event() {
            match event {
                EventType::Connected => info!("Gamepad {} connected", id),
                EventType::Disconnected => info!("Gamepad {} disconnected", id),
                _ => {}
            }
        }

        let Some((id, pad)) = gilrs.gamepads().find(|(_, pad)| pad.is_connected()) else {
            self.active = None;
            return None;
        };

        if self.active != Some(id) {
            info!("Using gamepad \"{}\" for player input", pad.name());
            self.active = Some(id);
        }

        Some(GamepadState::read(&pad, config))
    }

    /// Whether a gilrs backend is available at all
    pub fn is_available(&self) -> bool {
        self.gilrs.is_some()
    }
}

impl Default for GamepadPoller {
    fn default() -> Self {
        Self::new()
    }
}
