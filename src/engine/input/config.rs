// Input binding table

use super::control::{default_gamepad_bindings, default_keyboard_bindings, Control, InputSource};
use gilrs::Button;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Dead zone applied to the gamepad's horizontal stick
pub const DEFAULT_AXIS_DEAD_ZONE: f32 = 0.2;

/// Maps input sources (keys/buttons) to logical controls
///
/// Several sources may drive the same control; a control counts as held when any of
/// its sources is held.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to controls
    bindings: HashMap<InputSource, Control>,

    /// Reverse mapping for quick lookups (control -> all sources)
    control_to_sources: HashMap<Control, Vec<InputSource>>,

    /// Horizontal stick values at or inside this magnitude are ignored
    axis_dead_zone: f32,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            control_to_sources: HashMap::new(),
            axis_dead_zone: DEFAULT_AXIS_DEAD_ZONE,
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Control)>) -> Self {
        let mut config = Self::new();
        for (source, control) in bindings {
            config.bind(source, control);
        }
        config
    }

    /// Keyboard and gamepad defaults
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }

    /// Bind an input source to a control, replacing any previous binding of that source
    pub fn bind(&mut self, source: InputSource, control: Control) {
        self.unbind_source(source);
        self.bindings.insert(source, control);
        self.control_to_sources
            .entry(control)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(control) = self.bindings.remove(&source) {
            if let Some(sources) = self.control_to_sources.get_mut(&control) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.control_to_sources.remove(&control);
                }
            }
        }
    }

    /// Get the control bound to an input source
    pub fn control_for(&self, source: InputSource) -> Option<Control> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to a control
    pub fn sources(&self, control: Control) -> &[InputSource] {
        self.control_to_sources
            .get(&control)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keyboard keys bound to a control
    pub fn keys(&self, control: Control) -> impl Iterator<Item = KeyCode> + '_ {
        self.sources(control).iter().filter_map(|s| match s {
            InputSource::Keyboard(code) => Some(*code),
            InputSource::GamepadButton(_) => None,
        })
    }

    /// Gamepad buttons bound to a control
    pub fn buttons(&self, control: Control) -> impl Iterator<Item = Button> + '_ {
        self.sources(control).iter().filter_map(|s| match s {
            InputSource::GamepadButton(button) => Some(*button),
            InputSource::Keyboard(_) => None,
        })
    }

    /// Check if a control has any bindings
    pub fn has_binding(&self, control: Control) -> bool {
        self.control_to_sources.contains_key(&control)
    }

    /// Dead zone for the horizontal stick
    pub fn axis_dead_zone(&self) -> f32 {
        self.axis_dead_zone
    }

    /// Override the horizontal stick dead zone
    pub fn set_axis_dead_zone(&mut self, dead_zone: f32) {
        self.axis_dead_zone = dead_zone.abs();
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.control_to_sources.clear();
    }

    /// Reset to default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, control) in default_keyboard_bindings()
            .into_iter()
            .chain(default_gamepad_bindings())
        {
            self.bind(source, control);
        }
        self.axis_dead_zone = DEFAULT_AXIS_DEAD_ZONE;
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
