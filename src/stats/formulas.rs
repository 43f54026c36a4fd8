//! The pure formula core.
//!
//! Every rating is computed from a small resolved-inputs value type with a
//! `rating()` method. Both the handle-based path (`stats::ratings`) and the
//! raw-state path (`stats::raw`) build these values from their own sources
//! and share the arithmetic, so the two paths cannot drift apart.

use schema::{ActiveEffect, DamageType, EffectType, StatusEffectKind};

/// Flat base added to attack and defense ratings.
pub const BASE_RATING: i32 = 8;

/// Scaling applied to the effect-derived defense component for elemental
/// damage types (fire, poison, electrical, ice).
pub const ELEMENTAL_EFFECT_RATE: f32 = 0.7;

/// Natural armor class granted to every entity by the host engine.
pub const NATURAL_ARMOR_CLASS: i32 = 10;

/// Modifier derived from an ability score, floored for odd scores below 10.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Rate applied to the effect-derived defense component for a damage type.
/// Equipment bonuses are never scaled.
pub fn effect_rate(damage_type: DamageType) -> f32 {
    if damage_type.is_elemental() {
        ELEMENTAL_EFFECT_RATE
    } else {
        1.0
    }
}

/// Resolved inputs for the attack rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackInputs {
    pub ability_score: i32,
    pub skill_rank: i32,
    pub attack_bonus: i32,
}

impl AttackInputs {
    pub fn rating(&self) -> i32 {
        BASE_RATING + 2 * self.skill_rank + self.ability_score + self.attack_bonus
    }
}

/// Resolved inputs for the defense rating. `effect_bonus` is scaled by
/// `rate` and truncated before the unscaled `equipment_bonus` is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefenseInputs {
    pub ability_score: i32,
    pub skill_rank: i32,
    pub effect_bonus: i32,
    pub equipment_bonus: i32,
    pub rate: f32,
}

impl DefenseInputs {
    pub fn rating(&self) -> i32 {
        let defense_bonus = (self.effect_bonus as f32 * self.rate) as i32 + self.equipment_bonus;
        (BASE_RATING as f32
            + self.ability_score as f32 * 1.5
            + self.skill_rank as f32
            + defense_bonus as f32) as i32
    }
}

/// Resolved inputs for the accuracy rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccuracyInputs {
    pub ability_score: i32,
    pub skill_rank: i32,
    pub accuracy_bonus: i32,
}

impl AccuracyInputs {
    pub fn rating(&self) -> i32 {
        3 * self.ability_score + self.skill_rank + self.accuracy_bonus
    }
}

/// Resolved inputs for the evasion rating. `armor_class` is expected with
/// the natural 10 already subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvasionInputs {
    pub ability_score: i32,
    pub skill_rank: i32,
    pub effect_evasion: i32,
    pub armor_class: i32,
    pub evasion_bonus: i32,
}

impl EvasionInputs {
    pub fn rating(&self) -> i32 {
        3 * self.ability_score
            + self.skill_rank
            + self.effect_evasion
            + self.armor_class
            + self.evasion_bonus
    }
}

/// Defense granted by active status effects. All tiers stack additively.
pub fn effect_defense_bonus(has: impl Fn(StatusEffectKind) -> bool) -> i32 {
    let mut defense = 0;

    if has(StatusEffectKind::IronShell) {
        defense += 20;
    }
    if has(StatusEffectKind::Shielding1) {
        defense += 5;
    }
    if has(StatusEffectKind::Shielding2) {
        defense += 10;
    }
    if has(StatusEffectKind::Shielding3) {
        defense += 15;
    }
    if has(StatusEffectKind::Shielding4) {
        defense += 20;
    }
    if has(StatusEffectKind::ForceValor1) {
        defense += 10;
    }
    if has(StatusEffectKind::ForceValor2) {
        defense += 20;
    }

    defense
}

/// Attack granted by active rage-class effects, stacking across tiers.
pub fn effect_attack_bonus(has: impl Fn(StatusEffectKind) -> bool) -> i32 {
    let mut attack = 0;

    if has(StatusEffectKind::ForceRage1) {
        attack += 10;
    }
    if has(StatusEffectKind::ForceRage2) {
        attack += 20;
    }

    attack
}

/// Accuracy delta from attack increase/decrease effects: ±2 per stack.
pub fn effect_accuracy_bonus(effects: &[ActiveEffect]) -> i32 {
    let mut accuracy = 0;

    for effect in effects {
        match effect.effect_type {
            EffectType::AttackIncrease => accuracy += 2 * effect.stacks,
            EffectType::AttackDecrease => accuracy -= 2 * effect.stacks,
            _ => {}
        }
    }

    accuracy
}

/// Evasion delta from AC increase/decrease effects: ±2 per stack.
pub fn effect_evasion_bonus(effects: &[ActiveEffect]) -> i32 {
    let mut evasion = 0;

    for effect in effects {
        match effect.effect_type {
            EffectType::AcIncrease => evasion += 2 * effect.stacks,
            EffectType::AcDecrease => evasion -= 2 * effect.stacks,
            _ => {}
        }
    }

    evasion
}
