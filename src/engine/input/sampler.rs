// Reduces raw device state to the per-tick snapshot the character controller reads

use super::control::Control;
use super::gamepad::GamepadState;
use crate::core::math::exceeds_dead_zone;

/// Direction-agnostic input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_held: bool,
}

impl InputSnapshot {
    pub fn new(move_left: bool, move_right: bool, jump_held: bool) -> Self {
        Self {
            move_left,
            move_right,
            jump_held,
        }
    }

    /// Exactly one lateral control is held
    pub fn single_direction(&self) -> Option<Control> {
        match (self.move_left, self.move_right) {
            (true, false) => Some(Control::Left),
            (false, true) => Some(Control::Right),
            _ => None,
        }
    }
}

/// Read-only view of the input devices
pub trait DeviceInput {
    /// Whether any keyboard key bound to `control` is held
    fn is_down(&self, control: Control) -> bool;

    /// The one connected gamepad consulted this tick
    fn gamepad(&self) -> Option<&GamepadState>;

    /// Horizontal stick values at or inside this magnitude are ignored
    fn axis_dead_zone(&self) -> f32;
}

/// Sample keyboard and gamepad into one snapshot
///
/// Each field is the logical OR of both sources; neither source takes priority.
pub fn sample(devices: &impl DeviceInput) -> InputSnapshot {
    let dead_zone = devices.axis_dead_zone();
    let pad = devices.gamepad();

    let pad_left = pad.is_some_and(|p| {
        p.is_down(Control::Left) || (p.axis_x() < 0.0 && exceeds_dead_zone(p.axis_x(), dead_zone))
    });
    let pad_right = pad.is_some_and(|p| {
        p.is_down(Control::Right) || (p.axis_x() > 0.0 && exceeds_dead_zone(p.axis_x(), dead_zone))
    });
    let pad_jump = pad.is_some_and(|p| p.is_down(Control::Jump));

    InputSnapshot {
        move_left: devices.is_down(Control::Left) || pad_left,
        move_right: devices.is_down(Control::Right) || pad_right,
        jump_held: devices.is_down(Control::Jump) || pad_jump,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::config::DEFAULT_AXIS_DEAD_ZONE;
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeDevices {
        keys: HashSet<Control>,
        pad: Option<GamepadState>,
    }

    impl DeviceInput for FakeDevices {
        fn is_down(&self, control: Control) -> bool {
            self.keys.contains(&control)
        }

        fn gamepad(&self) -> Option<&GamepadState> {
            self.pad.as_ref()
        }

        fn axis_dead_zone(&self) -> f32 {
            DEFAULT_AXIS_DEAD_ZONE
        }
    }

    fn keys(controls: &[Control]) -> FakeDevices {
        FakeDevices {
            keys: controls.iter().copied().collect(),
            pad: None,
        }
    }

    #[test]
    fn test_no_devices_is_all_false() {
        assert_eq!(sample(&FakeDevices::default()), InputSnapshot::default());
    }

    #[test]
    fn test_keyboard_only() {
        let snapshot = sample(&keys(&[Control::Right, Control::Jump]));
        assert_eq!(snapshot, InputSnapshot::new(false, true, true));
    }

    #[test]
    fn test_up_and_down_are_not_sampled() {
        let snapshot = sample(&keys(&[Control::Up, Control::Down]));
        assert_eq!(snapshot, InputSnapshot::default());
    }

    #[test]
    fn test_gamepad_buttons_or_with_keyboard() {
        let mut devices = keys(&[Control::Left]);
        devices.pad = Some(GamepadState::new([Control::Right, Control::Jump], 0.0));

        let snapshot = sample(&devices);
        assert!(snapshot.move_left);
        assert!(snapshot.move_right);
        assert!(snapshot.jump_held);
    }

    #[test]
    fn test_axis_dead_zone() {
        let mut devices = FakeDevices::default();

        devices.pad = Some(GamepadState::new([], 0.2));
        assert_eq!(sample(&devices), InputSnapshot::default());

        devices.pad = Some(GamepadState::new([], -0.2));
        assert_eq!(sample(&devices), InputSnapshot::default());

        devices.pad = Some(GamepadState::new([], 0.35));
        assert_eq!(sample(&devices), InputSnapshot::new(false, true, false));

        devices.pad = Some(GamepadState::new([], -0.8));
        assert_eq!(sample(&devices), InputSnapshot::new(true, false, false));
    }

    #[test]
    fn test_single_direction() {
        assert_eq!(
            InputSnapshot::new(true, false, false).single_direction(),
            Some(Control::Left)
        );
        assert_eq!(
            InputSnapshot::new(false, true, true).single_direction(),
            Some(Control::Right)
        );
        assert_eq!(InputSnapshot::new(true, true, false).single_direction(), None);
        assert_eq!(InputSnapshot::new(false, false, true).single_direction(), None);
    }
}
