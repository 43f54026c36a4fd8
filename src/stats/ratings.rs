//! Handle-based evaluation path.
//!
//! These entry points resolve an entity handle against the host, record
//! store and NPC defense cache, then defer to the pure formula core. The
//! raw-state path in `stats::raw` must stay numerically identical; both
//! build the same resolved-input values.

use crate::host::{CombatHost, ObjectId};
use crate::stats::cache::{npc_stats, NpcDefenseCache};
use crate::stats::formulas::{
    effect_accuracy_bonus, effect_attack_bonus, effect_defense_bonus, effect_evasion_bonus,
    effect_rate, AccuracyInputs, AttackInputs, DefenseInputs, EvasionInputs, NATURAL_ARMOR_CLASS,
};
use crate::stats::player_record;
use crate::store::RecordStore;
use schema::{Ability, DamageType, ItemPropertyType, Skill};
use tracing::debug;

/// Attack rating: `8 + 2*skill + ability + attack bonus`.
///
/// A positive `attack_bonus_override` replaces the stored attack/force
/// attack bonus (used by other combat modes that bring their own numbers);
/// negative overrides are floored to 0. Rage-class effects add on top
/// either way. NPCs substitute their cached level for the skill rank.
pub fn attack<H: CombatHost, S: RecordStore>(
    host: &H,
    store: &S,
    creature: ObjectId,
    ability: Ability,
    skill: Option<Skill>,
    attack_bonus_override: i32,
) -> i32 {
    let attack_bonus_override = attack_bonus_override.max(0);

    let mut attack_bonus = attack_bonus_override;
    let mut skill_rank = 0;
    let stat = host.ability_score(creature, ability);

    if host.is_tracked_player(creature) {
        if let Some(record) = player_record(host, store, creature) {
            if let Some(skill) = skill {
                skill_rank = record.skill_rank(skill);
            }

            if attack_bonus_override <= 0 {
                attack_bonus += if skill == Some(Skill::Force) {
                    record.force_attack
                } else {
                    record.attack
                };
            }
        }
    } else {
        skill_rank = npc_stats(host, creature).level;
    }

    attack_bonus += effect_attack_bonus(|kind| host.has_status_effect(creature, kind));

    AttackInputs {
        ability_score: stat,
        skill_rank,
        attack_bonus,
    }
    .rating()
}

/// Defense rating toward one damage type.
///
/// Physical defense includes the shielding/valor effect stack; elemental
/// types scale the effect component by 0.7. The equipment component comes
/// from the live record table for players and from the spawn cache for
/// NPCs, unless a positive override replaces it.
pub fn defense<H: CombatHost, S: RecordStore>(
    host: &H,
    store: &S,
    cache: &NpcDefenseCache,
    creature: ObjectId,
    damage_type: DamageType,
    ability: Ability,
    defense_bonus_override: i32,
) -> i32 {
    let defense_bonus_override = defense_bonus_override.max(0);

    let mut effect_bonus = 0;
    let mut equipment_defense = defense_bonus_override;
    let mut skill_rank = 0;
    let stat = host.ability_score(creature, ability);
    let rate = effect_rate(damage_type);

    if host.is_tracked_player(creature) {
        if let Some(record) = player_record(host, store, creature) {
            skill_rank = record.skill_rank(Skill::Armor);

            if defense_bonus_override <= 0 {
                equipment_defense += record.defense(damage_type);
            }
        }
    } else {
        if defense_bonus_override <= 0 {
            equipment_defense += cache.lookup(creature, damage_type);
        }

        skill_rank = npc_stats(host, creature).level;
    }

    if damage_type == DamageType::Physical {
        effect_bonus = effect_defense_bonus(|kind| host.has_status_effect(creature, kind));
    }

    DefenseInputs {
        ability_score: stat,
        skill_rank,
        effect_bonus,
        equipment_bonus: equipment_defense,
        rate,
    }
    .rating()
}

/// Accuracy rating with a wielded weapon: `3*ability + skill + bonus`.
///
/// The weapon type selects both the ability and the skill unless overridden.
/// Attack/enhancement property records on the weapon contribute twice their
/// cost value; attack increase/decrease effects contribute ±2 per stack.
pub fn accuracy<H: CombatHost, S: RecordStore>(
    host: &H,
    store: &S,
    creature: ObjectId,
    weapon: Option<ObjectId>,
    stat_override: Option<Ability>,
    skill_override: Option<Skill>,
) -> i32 {
    let base_item = weapon.and_then(|weapon| host.base_item_type(weapon));

    let stat_type = stat_override.or_else(|| base_item.map(|item| item.accuracy_ability()));
    let stat = stat_type
        .map(|stat_type| host.ability_score(creature, stat_type))
        .unwrap_or(0);
    let skill_type = skill_override.or_else(|| base_item.map(|item| item.combat_skill()));

    let mut skill_rank = 0;
    let mut accuracy_bonus = 0;

    // Attack / enhancement bonus properties found on the weapon.
    if let Some(weapon) = weapon {
        for prop in host.item_properties(weapon) {
            if matches!(
                prop.property_type,
                ItemPropertyType::AttackBonus | ItemPropertyType::EnhancementBonus
            ) {
                accuracy_bonus += prop.cost_value * 2;
            }
        }
    }

    if host.is_tracked_player(creature) {
        if let Some(record) = player_record(host, store, creature) {
            if let Some(skill_type) = skill_type {
                skill_rank = record.skill_rank(skill_type);
            }
        }
    } else {
        skill_rank = npc_stats(host, creature).level;
    }

    accuracy_bonus += effect_accuracy_bonus(&host.active_effects(creature));

    AccuracyInputs {
        ability_score: stat,
        skill_rank,
        accuracy_bonus,
    }
    .rating()
}

/// Evasion rating: `3*agility + skill + effect evasion + (AC - 10) +
/// stored evasion bonus`. The natural 10 AC every entity receives is
/// subtracted before the armor class contributes.
pub fn evasion<H: CombatHost, S: RecordStore>(
    host: &H,
    store: &S,
    creature: ObjectId,
    skill_override: Option<Skill>,
) -> i32 {
    let stat = host.ability_score(creature, Ability::Agility);
    let ac = host.armor_class(creature) - NATURAL_ARMOR_CLASS;
    let skill_type = skill_override.unwrap_or(Skill::Armor);

    let mut skill_rank = 0;
    let mut evasion_bonus = 0;

    debug!(creature = %creature, ac, "evasion armor class");

    if host.is_tracked_player(creature) {
        if let Some(record) = player_record(host, store, creature) {
            skill_rank = record.skill_rank(skill_type);
            evasion_bonus = record.evasion;
        }
    } else {
        skill_rank = npc_stats(host, creature).level;
    }

    let effect_evasion = effect_evasion_bonus(&host.active_effects(creature));

    EvasionInputs {
        ability_score: stat,
        skill_rank,
        effect_evasion,
        armor_class: ac,
        evasion_bonus,
    }
    .rating()
}
