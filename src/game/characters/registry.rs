// Builds the character's clips from its loaded sprite sheets
//
// Each action has its own sheet: one row per direction (see `Direction::row_ordinal`), square
// frames of `FRAME_SIZE` pixels, as many columns as fit the sheet width.

use super::action::{Action, AnimationKeys};
use super::animation::{AnimationClip, AnimationRegistry};
use super::direction::Direction;
use crate::core::math::frame_index;
use crate::engine::assets::AssetManager;
use log::{info, warn};

/// Edge length of one square frame in a character sheet
pub const FRAME_SIZE: u32 = 64;

/// Anything that knows the pixel width of a loaded sheet
pub trait SheetSource {
    fn sheet_width(&self, texture_key: &str) -> Option<u32>;
}

impl SheetSource for AssetManager {
    fn sheet_width(&self, texture_key: &str) -> Option<u32> {
        self.texture(texture_key).map(|info| info.width)
    }
}

/// Texture key of an action's sheet, e.g. `player_walk`
pub fn texture_key(sheet_prefix: &str, action: Action) -> String {
    format!("{}_{}", sheet_prefix, action)
}

/// Whole frames that fit across a sheet
pub fn column_count(sheet_width: u32) -> u32 {
    sheet_width / FRAME_SIZE
}

/// Clip for one (action, direction) pair, given the sheet's column count
fn build_clip(
    keys: &AnimationKeys,
    texture: &str,
    action: Action,
    direction: Direction,
    cols: u32,
) -> AnimationClip {
    let row = direction.row_ordinal();
    let key = keys.get(action, direction).clone();
    let columns = |count: u32| -> Vec<u32> {
        (0..count).map(|col| frame_index(row, col, cols)).collect()
    };

    match action {
        // Slow two-frame breathing cycle
        Action::Idle => AnimationClip::looping(key, texture, columns(cols.min(2)), 1.0),
        Action::Walk => AnimationClip::looping(key, texture, columns(cols), 12.0),
        Action::Jump => {
            AnimationClip::one_shot(key, texture, columns(cols), 16.0).with_hide_on_complete(false)
        }
    }
}

/// Register idle, walk and jump clips for the side-scrolling directions
///
/// A missing sheet, or one narrower than a frame, skips that action. Registering again replaces
/// the earlier clips. Returns the number of clips registered.
pub fn register_character_animations(
    registry: &mut impl AnimationRegistry,
    sheets: &impl SheetSource,
    keys: &AnimationKeys,
    sheet_prefix: &str,
) -> usize {
    let mut registered = 0;

    for action in Action::ALL {
        let texture = texture_key(sheet_prefix, action);
        let cols = sheets.sheet_width(&texture).map(column_count).unwrap_or(0);
        if cols == 0 {
            warn!("No usable sheet \"{}\", skipping {} animations", texture, action);
            continue;
        }

        for direction in Direction::SIDESCROLLER {
            registry.register(build_clip(keys, &texture, action, direction, cols));
            registered += 1;
        }
    }

    info!("Registered {} character animations", registered);
    registered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::TextureInfo;
    use crate::game::characters::animation::{AnimationLibrary, Repeat};
    use approx::assert_relative_eq;

    fn sheets(widths: &[(&str, u32)]) -> AssetManager {
        let mut assets = AssetManager::new(".");
        for &(key, width) in widths {
            assets.insert_texture(key, TextureInfo::new(width, FRAME_SIZE * 4));
        }
        assets
    }

    fn full_set() -> AssetManager {
        sheets(&[("player_idle", 128), ("player_walk", 576), ("player_jump", 320)])
    }

    #[test]
    fn test_column_count_floors() {
        assert_eq!(column_count(576), 9);
        assert_eq!(column_count(100), 1);
        assert_eq!(column_count(63), 0);
    }

    #[test]
    fn test_registers_six_clips() {
        let mut library = AnimationLibrary::new();
        let keys = AnimationKeys::default();

        let count = register_character_animations(&mut library, &full_set(), &keys, "player");

        assert_eq!(count, 6);
        assert_eq!(library.len(), 6);
        assert!(library.exists(keys.get(Action::Walk, Direction::Left)));
        assert!(!library.exists(keys.get(Action::Walk, Direction::Up)));
    }

    #[test]
    fn test_clip_parameters_per_action() {
        let mut library = AnimationLibrary::new();
        let keys = AnimationKeys::default();
        register_character_animations(&mut library, &full_set(), &keys, "player");

        // Idle: first two columns of the right row (row 3, 2 columns)
        let idle = library.get(keys.get(Action::Idle, Direction::Right)).unwrap();
        assert_eq!(idle.indices(), vec![6, 7]);
        assert_eq!(idle.frames[0].texture, "player_idle");
        assert_relative_eq!(idle.frame_duration, 1.0);
        assert_eq!(idle.repeat, Repeat::Forever);

        // Walk: full left row (row 1, 9 columns)
        let walk = library.get(keys.get(Action::Walk, Direction::Left)).unwrap();
        assert_eq!(walk.indices(), (9..18).collect::<Vec<u32>>());
        assert_relative_eq!(walk.frame_duration, 1.0 / 12.0);
        assert_eq!(walk.repeat, Repeat::Forever);

        // Jump: full right row (row 3, 5 columns), plays once and stays visible
        let jump = library.get(keys.get(Action::Jump, Direction::Right)).unwrap();
        assert_eq!(jump.indices(), vec![15, 16, 17, 18, 19]);
        assert_relative_eq!(jump.frame_duration, 1.0 / 16.0);
        assert_eq!(jump.repeat, Repeat::Once);
        assert!(!jump.hide_on_complete);
    }

    #[test]
    fn test_idle_with_single_column() {
        let mut library = AnimationLibrary::new();
        let keys = AnimationKeys::default();
        register_character_animations(&mut library, &sheets(&[("player_idle", 64)]), &keys, "player");

        let idle = library.get(keys.get(Action::Idle, Direction::Left)).unwrap();
        assert_eq!(idle.indices(), vec![1]);
    }

    #[test]
    fn test_missing_or_narrow_sheet_is_skipped() {
        let mut library = AnimationLibrary::new();
        let keys = AnimationKeys::default();
        let assets = sheets(&[("player_idle", 128), ("player_walk", 40)]);

        let count = register_character_animations(&mut library, &assets, &keys, "player");

        assert_eq!(count, 2);
        assert!(library.exists(keys.get(Action::Idle, Direction::Left)));
        assert!(!library.exists(keys.get(Action::Walk, Direction::Left)));
        assert!(!library.exists(keys.get(Action::Jump, Direction::Right)));
    }

    #[test]
    fn test_registering_twice_is_idempotent() {
        let mut library = AnimationLibrary::new();
        let keys = AnimationKeys::new("wolf");
        let assets = full_set();

        register_character_animations(&mut library, &assets, &keys, "player");
        let count = register_character_animations(&mut library, &assets, &keys, "player");

        assert_eq!(count, 6);
        assert_eq!(library.len(), 6);
        assert!(library.exists(&"wolf_jump_left".into()));
    }
}
