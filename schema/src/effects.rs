use serde::{Deserialize, Serialize};

/// Status effects granted by the status-effect subsystem that feed the
/// combat formulas. Tiered effects stack additively when multiple tiers are
/// present at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum StatusEffectKind {
    Food,
    IronShell,
    Shielding1,
    Shielding2,
    Shielding3,
    Shielding4,
    ForceValor1,
    ForceValor2,
    ForceRage1,
    ForceRage2,
}

/// Engine-applied effect types read off a creature's active effect list.
/// These carry a stack count rather than a fixed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum EffectType {
    AttackIncrease,
    AttackDecrease,
    AcIncrease,
    AcDecrease,
}

/// One entry of a creature's active effect list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub effect_type: EffectType,
    pub stacks: i32,
}

impl ActiveEffect {
    pub fn new(effect_type: EffectType, stacks: i32) -> Self {
        ActiveEffect {
            effect_type,
            stacks,
        }
    }
}

/// Numeric payload of an active Food effect: temporary bonuses to the three
/// resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FoodEffect {
    pub hp: i32,
    pub fp: i32,
    pub stamina: i32,
}
