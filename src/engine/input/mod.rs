// Input handling system
//
// Turns keyboard and gamepad state into the per-tick `InputSnapshot` the character
// controller consumes.
//
// ## Architecture
//
// - `control`: Logical controls and default key/button bindings
// - `config`: Binding table and gamepad dead zone
// - `keyboard`: Physical key state fed from winit events
// - `gamepad`: gilrs polling, first connected pad only
// - `sampler`: `DeviceInput` trait and the OR-reduction into a snapshot
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use rusted_platformer::engine::input::{InputConfig, InputManager};
//
// let mut input = InputManager::new(InputConfig::with_defaults());
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per fixed tick
// input.poll_gamepads();
// let snapshot = input.snapshot();
// if snapshot.jump_held {
//     // ...
// }
// ```

pub mod config;
pub mod control;
pub mod gamepad;
pub mod keyboard;
pub mod manager;
pub mod sampler;

// Re-export commonly used types
pub use config::InputConfig;
pub use control::{Control, InputSource};
pub use gamepad::{GamepadPoller, GamepadState};
pub use manager::InputManager;
pub use sampler::{DeviceInput, InputSnapshot};
