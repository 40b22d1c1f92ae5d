// Facing directions and their sprite-sheet rows

use super::CharacterError;
use std::fmt;
use std::str::FromStr;

/// One of the four directions a character sheet has a row for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Left,
    Down,
    #[default]
    Right,
}

impl Direction {
    /// All four directions, in sheet-row order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// The two directions a side-scrolling character can face
    pub const SIDESCROLLER: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Row of this direction in a character sprite sheet
    ///
    /// This indexes sheet rows; it carries no facing semantics.
    pub fn row_ordinal(self) -> u32 {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }

    /// Lower-case name used in animation keys
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }

    /// Sign of horizontal motion in this direction (0 for up/down)
    pub fn sign_x(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
            Direction::Up | Direction::Down => 0.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "left" => Ok(Direction::Left),
            "down" => Ok(Direction::Down),
            "right" => Ok(Direction::Right),
            other => Err(CharacterError::UnknownDirection(other.to_string())),
        }
    }
}

impl TryFrom<u32> for Direction {
    type Error = CharacterError;

    /// Inverse of [`Direction::row_ordinal`]
    fn try_from(row: u32) -> Result<Self, Self::Error> {
        Direction::ALL
            .into_iter()
            .find(|d| d.row_ordinal() == row)
            .ok_or_else(|| CharacterError::UnknownDirection(format!("row {}", row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ordinals_are_fixed() {
        assert_eq!(Direction::Up.row_ordinal(), 0);
        assert_eq!(Direction::Left.row_ordinal(), 1);
        assert_eq!(Direction::Down.row_ordinal(), 2);
        assert_eq!(Direction::Right.row_ordinal(), 3);
    }

    #[test]
    fn test_default_faces_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }

    #[test]
    fn test_parse_names() {
        for direction in Direction::ALL {
            assert_eq!(direction.as_str().parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert!(matches!(err, CharacterError::UnknownDirection(ref s) if s == "diagonal"));
    }

    #[test]
    fn test_row_roundtrip_and_out_of_range() {
        assert_eq!(Direction::try_from(3).unwrap(), Direction::Right);
        assert_eq!(Direction::try_from(1).unwrap(), Direction::Left);
        assert!(matches!(
            Direction::try_from(4),
            Err(CharacterError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_sign_x() {
        assert_eq!(Direction::Left.sign_x(), -1.0);
        assert_eq!(Direction::Right.sign_x(), 1.0);
        assert_eq!(Direction::Up.sign_x(), 0.0);
    }
}
