// Math utilities and helper functions

/// Index of a frame inside a row-major sprite sheet
pub fn frame_index(row: u32, col: u32, cols: u32) -> u32 {
    row * cols + col
}

/// Whether an analog axis value is outside the dead zone around zero
///
/// The comparison is strict: a value sitting exactly on the threshold does not count.
pub fn exceeds_dead_zone(value: f32, dead_zone: f32) -> bool {
    value.abs() > dead_zone
}
