use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Trained proficiencies. Combat skills gate the attack/accuracy/evasion
/// formulas; crafting skills key the control/craftsmanship bonus tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Skill {
    OneHanded,
    TwoHanded,
    MartialArts,
    Ranged,
    Force,
    Armor,
    Engineering,
    Fabrication,
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
