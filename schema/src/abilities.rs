use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The six ability scores a creature can have. Every derived combat number
/// starts from one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Ability {
    Might,
    Perception,
    Vitality,
    Willpower,
    Agility,
    Social,
}

impl Ability {
    /// Stable index used by raw creature snapshots to store ability bytes.
    pub fn index(self) -> usize {
        match self {
            Ability::Might => 0,
            Ability::Perception => 1,
            Ability::Vitality => 2,
            Ability::Willpower => 3,
            Ability::Agility => 4,
            Ability::Social => 5,
        }
    }

    pub const COUNT: usize = 6;
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
