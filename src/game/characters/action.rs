// Character actions and the animation keys derived from them

use super::direction::Direction;
use super::CharacterError;
use std::fmt;
use std::str::FromStr;

/// What the character is visibly doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Idle,
    Walk,
    Jump,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Idle, Action::Walk, Action::Jump];

    /// Lower-case name used in animation and texture keys
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Walk => "walk",
            Action::Jump => "jump",
        }
    }

    fn index(self) -> usize {
        match self {
            Action::Idle => 0,
            Action::Walk => 1,
            Action::Jump => 2,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Action::Idle),
            "walk" => Ok(Action::Walk),
            "jump" => Ok(Action::Jump),
            other => Err(CharacterError::UnknownAction(other.to_string())),
        }
    }
}

/// Name of a registered animation clip
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationKey(String);

impl AnimationKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// `{action}_{direction}`, or `{prefix}_{action}_{direction}` with a non-empty prefix
    pub fn for_action(prefix: &str, action: Action, direction: Direction) -> Self {
        if prefix.is_empty() {
            Self(format!("{}_{}", action, direction))
        } else {
            Self(format!("{}_{}_{}", prefix, action, direction))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnimationKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Every (action, direction) key for one character, built once
#[derive(Debug, Clone)]
pub struct AnimationKeys {
    keys: [[AnimationKey; 4]; 3],
}

impl AnimationKeys {
    pub fn new(prefix: &str) -> Self {
        let row = |action| Direction::ALL.map(|direction| AnimationKey::for_action(prefix, action, direction));
        Self {
            keys: Action::ALL.map(row),
        }
    }

    pub fn get(&self, action: Action, direction: Direction) -> &AnimationKey {
        &self.keys[action.index()][direction.row_ordinal() as usize]
    }
}

impl Default for AnimationKeys {
    fn default() -> Self {
        Self::new("")
    }
}
