//! Mutations of the persistent record and their reapplication to the live
//! entity: max-HP bucket distribution, movement rate, ability scores, and
//! the scalar/table bonus adjusters.
//!
//! None of these persist the record themselves; callers save once at the
//! end of their event, exactly like every other record mutation.

use crate::host::{CombatHost, ObjectId};
use crate::record::PlayerRecord;
use crate::stats::player_record;
use crate::store::RecordStore;
use schema::{Ability, DamageType, Skill, StatusEffectKind};
use tracing::debug;

/// Hard ceiling on the HP any single level bucket can hold.
pub const MAX_HP_PER_LEVEL: i32 = 255;

/// Adjust a player's maximum health and redistribute it across level
/// buckets.
///
/// Every bucket (one per character level across all three advancement
/// tracks) first receives a floor of 1 HP; the remainder is then poured
/// bucket-by-bucket up to the 255 ceiling, the last partially filled bucket
/// taking what is left. A stored maximum beyond `255 * levels` is silently
/// capped by the distribution. If current HP ends up above the new maximum
/// it is clamped down, which the host engine perceives as damage.
pub fn adjust_player_max_hp<H: CombatHost>(
    host: &mut H,
    record: &mut PlayerRecord,
    creature: ObjectId,
    delta: i32,
) {
    record.max_hp += delta;

    let level_count: i32 = (1..=3).map(|track| host.class_level(creature, track)).sum();
    let mut hp_to_apply = record.max_hp;

    // Floor of 1 HP per bucket, applied unconditionally. The stored maximum
    // can be negative after aggressive downward adjustments; the floor still
    // holds.
    for level in 1..=level_count {
        hp_to_apply -= 1;
        host.set_max_hp_by_level(creature, level, 1);
    }

    if hp_to_apply > 0 {
        for level in 1..=level_count {
            if hp_to_apply > MAX_HP_PER_LEVEL {
                // The floor already granted 1, so a full bucket consumes 254
                // more.
                host.set_max_hp_by_level(creature, level, MAX_HP_PER_LEVEL);
                hp_to_apply -= MAX_HP_PER_LEVEL - 1;
            } else {
                host.set_max_hp_by_level(creature, level, hp_to_apply + 1);
                break;
            }
        }
    }

    let current = host.current_hp(creature);
    let max = host.max_hp(creature);
    if current > max {
        host.set_current_hp(creature, max);
    }
}

/// Adjust the stored movement-rate multiplier and reapply it to the live
/// entity immediately.
pub fn adjust_movement_rate<H: CombatHost>(
    host: &mut H,
    record: &mut PlayerRecord,
    creature: ObjectId,
    delta: f32,
) {
    record.movement_rate += delta;
    host.set_movement_rate_factor(creature, record.movement_rate);
}

/// Push a player's effective ability score (base + upgrades) onto the live
/// entity.
pub fn apply_player_ability<H: CombatHost>(
    host: &mut H,
    record: &PlayerRecord,
    creature: ObjectId,
    ability: Ability,
) {
    if !host.is_tracked_player(creature) {
        return;
    }
    host.set_raw_ability_score(creature, ability, record.ability_score(ability));
}

/// When a player enters the module, reapply the non-persistent pieces of
/// their stats. A missing record means a brand-new character; defaults
/// apply.
pub fn on_module_enter<H: CombatHost, S: RecordStore>(
    host: &mut H,
    store: &S,
    player: ObjectId,
) {
    if !host.is_tracked_player(player) {
        return;
    }

    let record = player_record(host, store, player).unwrap_or_default();
    host.set_movement_rate_factor(player, record.movement_rate);
}

/// After status effects are reassociated, drop any temporary food HP whose
/// Food effect did not survive (e.g. across a host restart). Persists the
/// record when a change is made.
pub fn reapply_food_hp<H: CombatHost, S: RecordStore>(
    host: &mut H,
    store: &mut S,
    player: ObjectId,
) {
    if !host.is_tracked_player(player) {
        return;
    }

    let Some(mut record) = player_record(host, store, player) else {
        return;
    };

    if record.temporary_food_hp > 0 && !host.has_status_effect(player, StatusEffectKind::Food) {
        debug!(player = %player, food_hp = record.temporary_food_hp, "removing stale food hp");
        let food_hp = record.temporary_food_hp;
        adjust_player_max_hp(host, &mut record, player, -food_hp);
        record.temporary_food_hp = 0;
        store.save(&record);
    }
}

/// Adjust a player's defense toward one damage type.
pub fn adjust_defense(record: &mut PlayerRecord, damage_type: DamageType, delta: i32) {
    *record.defense_mut(damage_type) += delta;
}

pub fn adjust_evasion(record: &mut PlayerRecord, delta: i32) {
    record.evasion += delta;
}

/// Adjust a player's attack bonus. Attack affects damage output.
pub fn adjust_attack(record: &mut PlayerRecord, delta: i32) {
    record.attack += delta;
}

/// Adjust a player's force attack bonus, used when attacking with the force
/// skill.
pub fn adjust_force_attack(record: &mut PlayerRecord, delta: i32) {
    record.force_attack += delta;
}

pub fn adjust_recast_reduction(record: &mut PlayerRecord, delta: i32) {
    record.ability_recast_reduction += delta;
}

// Regen rates may drop negative while stacked adjustments unwind; that is
// expected and kept in sync with the matching maximum adjustments.

pub fn adjust_hp_regen(record: &mut PlayerRecord, delta: i32) {
    record.hp_regen += delta;
}

pub fn adjust_fp_regen(record: &mut PlayerRecord, delta: i32) {
    record.fp_regen += delta;
}

pub fn adjust_stamina_regen(record: &mut PlayerRecord, delta: i32) {
    record.stamina_regen += delta;
}

pub fn adjust_control(record: &mut PlayerRecord, skill: Skill, delta: i32) {
    *record.control_mut(skill) += delta;
}

pub fn adjust_craftsmanship(record: &mut PlayerRecord, skill: Skill, delta: i32) {
    *record.craftsmanship_mut(skill) += delta;
}

pub fn adjust_cp_bonus(record: &mut PlayerRecord, skill: Skill, delta: i32) {
    *record.cp_bonus_mut(skill) += delta;
}
