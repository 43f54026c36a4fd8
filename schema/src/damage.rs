use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Categories of combat damage. Defense is tracked per type; the elemental
/// types (fire, poison, electrical, ice) share a reduced effect-scaling rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum DamageType {
    Physical,
    Force,
    Fire,
    Poison,
    Electrical,
    Ice,
}

impl DamageType {
    /// The elemental types whose effect-derived defense is applied at a
    /// reduced rate compared to physical.
    pub fn is_elemental(self) -> bool {
        matches!(
            self,
            DamageType::Fire | DamageType::Poison | DamageType::Electrical | DamageType::Ice
        )
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
