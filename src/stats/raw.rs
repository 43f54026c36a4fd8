//! Raw-state evaluation path.
//!
//! The per-swing combat loop resolves many participants at once and cannot
//! afford a handle lookup per call. These entry points take an
//! already-resolved [`RawCreature`] snapshot instead of an entity handle,
//! build the same resolved-input values as `stats::ratings`, and call the
//! same `rating()` arithmetic, so the two paths agree by construction.

use crate::host::ObjectId;
use crate::record::RecordId;
use crate::stats::cache::{NpcDefenseCache, NpcStats};
use crate::stats::formulas::{
    effect_accuracy_bonus, effect_attack_bonus, effect_defense_bonus, effect_evasion_bonus,
    effect_rate, AccuracyInputs, AttackInputs, DefenseInputs, EvasionInputs,
};
use crate::store::RecordStore;
use schema::{
    Ability, ActiveEffect, BaseItem, DamageType, ItemProperty, ItemPropertyType, Skill,
    StatusEffectKind,
};
use tracing::debug;

/// An item as seen by the raw path: its weapon category (if any) and its
/// attached property records.
#[derive(Debug, Clone, Default)]
pub struct RawItem {
    pub base_item: Option<BaseItem>,
    pub properties: Vec<ItemProperty>,
}

/// A low-level combat participant snapshot, resolved once by the combat
/// loop and reused across checks within a tick.
///
/// Ability scores are stored as the host engine stores them: one unsigned
/// byte each, with negative values wrapped (254 means -2). See
/// [`decode_stat_byte`].
#[derive(Debug, Clone)]
pub struct RawCreature {
    pub object_id: ObjectId,
    pub player_character: bool,
    pub record_id: Option<RecordId>,
    pub ability_bytes: [u8; Ability::COUNT],
    pub ac_armor_base: i32,
    pub ac_natural_base: i32,
    pub statuses: Vec<StatusEffectKind>,
    pub active_effects: Vec<ActiveEffect>,
    pub skin: Option<RawItem>,
}

impl RawCreature {
    /// Decoded ability score.
    pub fn ability_score(&self, ability: Ability) -> i32 {
        decode_stat_byte(self.ability_bytes[ability.index()])
    }

    fn has_status(&self, kind: StatusEffectKind) -> bool {
        self.statuses.contains(&kind)
    }
}

/// Reinterpret a wrapped unsigned ability byte as a signed score: raw
/// values above 128 encode negatives (254 -> -2).
pub fn decode_stat_byte(raw: u8) -> i32 {
    let value = raw as i32;
    if value > 128 {
        value - 256
    } else {
        value
    }
}

/// NPC stats scanned from a raw skin snapshot; the counterpart of
/// [`crate::stats::cache::npc_stats`] for this path.
pub fn npc_stats_from_skin(skin: Option<&RawItem>) -> NpcStats {
    let mut stats = NpcStats::default();

    let Some(skin) = skin else {
        return stats;
    };

    for prop in &skin.properties {
        match prop.property_type {
            ItemPropertyType::NpcLevel => stats.level = prop.cost_value,
            ItemPropertyType::Defense => {
                if let Some(damage_type) = prop.sub_type {
                    *stats.defenses.entry(damage_type).or_insert(0) += prop.cost_value;
                }
            }
            _ => {}
        }
    }

    stats
}

/// Attack rating from raw state. The weapon category selects the ability
/// that drives damage; players take their skill rank and stored attack or
/// force attack bonus from the record.
pub fn attack_raw<S: RecordStore>(
    store: &S,
    creature: &RawCreature,
    item_type: Option<BaseItem>,
) -> i32 {
    let stat = item_type
        .map(|item| creature.ability_score(item.damage_ability()))
        .unwrap_or(0);
    let skill_type = item_type.map(|item| item.combat_skill());

    let mut attack_bonus = 0;
    let mut skill_rank = 0;

    if creature.player_character {
        if let Some(record) = load_record(store, creature) {
            if let Some(skill_type) = skill_type {
                skill_rank = record.skill_rank(skill_type);
            }

            attack_bonus += if skill_type == Some(Skill::Force) {
                record.force_attack
            } else {
                record.attack
            };
        }
    } else {
        skill_rank = npc_stats_from_skin(creature.skin.as_ref()).level;
    }

    attack_bonus += effect_attack_bonus(|kind| creature.has_status(kind));

    AttackInputs {
        ability_score: stat,
        skill_rank,
        attack_bonus,
    }
    .rating()
}

/// Defense rating from raw state. NPC equipment defense still comes from
/// the spawn cache; the snapshot does not rescan the skin for it.
pub fn defense_raw<S: RecordStore>(
    store: &S,
    cache: &NpcDefenseCache,
    creature: &RawCreature,
    damage_type: DamageType,
    ability: Ability,
) -> i32 {
    let mut effect_bonus = 0;
    let mut equipment_defense = 0;
    let mut skill_rank = 0;
    let stat = creature.ability_score(ability);
    let rate = effect_rate(damage_type);

    if creature.player_character {
        if let Some(record) = load_record(store, creature) {
            skill_rank = record.skill_rank(Skill::Armor);
            equipment_defense += record.defense(damage_type);
        }
    } else {
        equipment_defense += cache.lookup(creature.object_id, damage_type);
        skill_rank = npc_stats_from_skin(creature.skin.as_ref()).level;
    }

    if damage_type == DamageType::Physical {
        effect_bonus = effect_defense_bonus(|kind| creature.has_status(kind));
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

/// Accuracy rating from raw state.
pub fn accuracy_raw<S: RecordStore>(
    store: &S,
    creature: &RawCreature,
    weapon: Option<&RawItem>,
    stat_override: Option<Ability>,
) -> i32 {
    let base_item = weapon.and_then(|weapon| weapon.base_item);

    let stat_type = stat_override.or_else(|| base_item.map(|item| item.accuracy_ability()));
    let stat = stat_type
        .map(|stat_type| creature.ability_score(stat_type))
        .unwrap_or(0);
    let skill_type = base_item.map(|item| item.combat_skill());

    let mut skill_rank = 0;
    let mut accuracy_bonus = 0;

    // Attack / enhancement bonus properties found on the weapon.
    if let Some(weapon) = weapon {
        for prop in &weapon.properties {
            if matches!(
                prop.property_type,
                ItemPropertyType::AttackBonus | ItemPropertyType::EnhancementBonus
            ) {
                accuracy_bonus += prop.cost_value * 2;
            }
        }
    }

    if creature.player_character {
        if let Some(record) = load_record(store, creature) {
            if let Some(skill_type) = skill_type {
                skill_rank = record.skill_rank(skill_type);
            }
        }
    } else {
        skill_rank = npc_stats_from_skin(creature.skin.as_ref()).level;
    }

    accuracy_bonus += effect_accuracy_bonus(&creature.active_effects);

    AccuracyInputs {
        ability_score: stat,
        skill_rank,
        accuracy_bonus,
    }
    .rating()
}

/// Evasion rating from raw state. The snapshot carries the armor and
/// natural AC bases separately; their sum is the handle path's
/// `armor_class - 10`.
pub fn evasion_raw<S: RecordStore>(store: &S, creature: &RawCreature) -> i32 {
    let stat = creature.ability_score(Ability::Agility);
    let ac = creature.ac_armor_base + creature.ac_natural_base;

    let mut skill_rank = 0;
    let mut evasion_bonus = 0;

    debug!(creature = %creature.object_id, ac, "evasion armor class");

    if creature.player_character {
        if let Some(record) = load_record(store, creature) {
            skill_rank = record.skill_rank(Skill::Armor);
            evasion_bonus = record.evasion;
        }
    } else {
        skill_rank = npc_stats_from_skin(creature.skin.as_ref()).level;
    }

    let effect_evasion = effect_evasion_bonus(&creature.active_effects);

    EvasionInputs {
        ability_score: stat,
        skill_rank,
        effect_evasion,
        armor_class: ac,
        evasion_bonus,
    }
    .rating()
}

fn load_record<S: RecordStore>(store: &S, creature: &RawCreature) -> Option<crate::record::PlayerRecord> {
    creature
        .record_id
        .as_deref()
        .and_then(|id| store.load(id))
}
