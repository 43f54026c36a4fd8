//! Resource pool manager: maximums, current values, and clamped mutation of
//! force points and stamina.
//!
//! Player pools live on the persistent record; NPC pools live in scratch
//! tags on the entity and derive their maximums from skin properties. Every
//! operation accepts an optionally pre-loaded record so a call chain does
//! not reload the same character twice.

use crate::host::{CombatHost, ObjectId};
use crate::record::PlayerRecord;
use crate::stats::formulas::ability_modifier;
use crate::stats::player_record;
use crate::store::RecordStore;
use schema::{Ability, FoodEffect, InventorySlot, ItemPropertyType};

/// The two mutable resource pools this manager owns. Health follows its own
/// per-level bucket rules in `stats::modifiers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    ForcePoints,
    Stamina,
}

impl ResourceKind {
    /// The ability whose modifier raises this pool's maximum.
    pub fn ability(self) -> Ability {
        match self {
            ResourceKind::ForcePoints => Ability::Willpower,
            ResourceKind::Stamina => Ability::Agility,
        }
    }

    /// Maximum gained per point of ability modifier.
    pub fn scale(self) -> i32 {
        match self {
            ResourceKind::ForcePoints => 10,
            ResourceKind::Stamina => 5,
        }
    }

    fn npc_property(self) -> ItemPropertyType {
        match self {
            ResourceKind::ForcePoints => ItemPropertyType::NpcForcePoints,
            ResourceKind::Stamina => ItemPropertyType::NpcStamina,
        }
    }

    fn scratch_tag(self) -> &'static str {
        match self {
            ResourceKind::ForcePoints => "FP",
            ResourceKind::Stamina => "STAMINA",
        }
    }

    fn food_bonus(self, food: &FoodEffect) -> i32 {
        match self {
            ResourceKind::ForcePoints => food.fp,
            ResourceKind::Stamina => food.stamina,
        }
    }

    fn stored_max(self, record: &PlayerRecord) -> i32 {
        match self {
            ResourceKind::ForcePoints => record.max_fp,
            ResourceKind::Stamina => record.max_stamina,
        }
    }

    fn adjust_stored_max(self, record: &mut PlayerRecord, delta: i32) {
        match self {
            ResourceKind::ForcePoints => record.max_fp += delta,
            ResourceKind::Stamina => record.max_stamina += delta,
        }
    }

    fn current(self, record: &PlayerRecord) -> i32 {
        match self {
            ResourceKind::ForcePoints => record.fp,
            ResourceKind::Stamina => record.stamina,
        }
    }

    fn set_current(self, record: &mut PlayerRecord, value: i32) {
        match self {
            ResourceKind::ForcePoints => record.fp = value,
            ResourceKind::Stamina => record.stamina = value,
        }
    }
}

/// Maximum pool value for an entity.
///
/// Players: stored maximum + ability modifier * pool scale + food bonus.
/// NPCs: the sum of matching property records on the skin slot.
pub fn max_pool<H: CombatHost, S: RecordStore>(
    kind: ResourceKind,
    host: &H,
    store: &S,
    creature: ObjectId,
    record: Option<&PlayerRecord>,
) -> i32 {
    if host.is_tracked_player(creature) {
        let loaded;
        let record = match record {
            Some(record) => record,
            None => {
                loaded = expect_player_record(host, store, creature);
                &loaded
            }
        };

        let modifier = ability_modifier(host.ability_score(creature, kind.ability()));
        let food_bonus = host
            .food_effect(creature)
            .map(|food| kind.food_bonus(&food))
            .unwrap_or(0);

        kind.stored_max(record) + modifier * kind.scale() + food_bonus
    } else {
        let mut total = 0;
        if let Some(skin) = host.item_in_slot(creature, InventorySlot::CreatureArmor) {
            for prop in host.item_properties(skin) {
                if prop.property_type == kind.npc_property() {
                    total += prop.cost_value;
                }
            }
        }
        total
    }
}

/// Current pool value: the stored value for players, the scratch tag for
/// NPCs.
pub fn current_pool<H: CombatHost, S: RecordStore>(
    kind: ResourceKind,
    host: &H,
    store: &S,
    creature: ObjectId,
    record: Option<&PlayerRecord>,
) -> i32 {
    if host.is_tracked_player(creature) {
        match record {
            Some(record) => kind.current(record),
            None => kind.current(&expect_player_record(host, store, creature)),
        }
    } else {
        host.local_int(creature, kind.scratch_tag())
    }
}

/// Restore a pool by `amount`, the result clamped into `[0, max]`.
/// Non-positive amounts are ignored. Player changes are persisted.
pub fn restore<H: CombatHost, S: RecordStore>(
    kind: ResourceKind,
    host: &mut H,
    store: &mut S,
    creature: ObjectId,
    amount: i32,
    record: Option<&mut PlayerRecord>,
) {
    if amount <= 0 {
        return;
    }

    if host.is_tracked_player(creature) {
        let mut loaded;
        let record = match record {
            Some(record) => record,
            None => {
                loaded = expect_player_record(host, store, creature);
                &mut loaded
            }
        };

        // The effective maximum can be negative (stored max under stacked
        // downward adjustments, or a low ability score); current still may
        // not drop below 0.
        let max = max_pool(kind, host, store, creature, Some(&*record));
        let current = (kind.current(record) + amount).min(max).max(0);
        kind.set_current(record, current);
        store.save(record);
    } else {
        let max = max_pool(kind, host, store, creature, None);
        let current = (host.local_int(creature, kind.scratch_tag()) + amount)
            .min(max)
            .max(0);
        host.set_local_int(creature, kind.scratch_tag(), current);
    }
}

/// Reduce a pool by `amount`, floored at 0. Non-positive amounts are
/// ignored. Player changes are persisted.
pub fn reduce<H: CombatHost, S: RecordStore>(
    kind: ResourceKind,
    host: &mut H,
    store: &mut S,
    creature: ObjectId,
    amount: i32,
    record: Option<&mut PlayerRecord>,
) {
    if amount <= 0 {
        return;
    }

    if host.is_tracked_player(creature) {
        let mut loaded;
        let record = match record {
            Some(record) => record,
            None => {
                loaded = expect_player_record(host, store, creature);
                &mut loaded
            }
        };

        let current = (kind.current(record) - amount).max(0);
        kind.set_current(record, current);
        store.save(record);
    } else {
        let current = (host.local_int(creature, kind.scratch_tag()) - amount).max(0);
        host.set_local_int(creature, kind.scratch_tag(), current);
    }
}

/// Adjust a player's stored pool maximum by `delta`.
///
/// The stored maximum may go negative so stacked adjustments stay
/// reversible; the current value is re-clamped into `[0, effective max]`.
/// Does not persist; the caller saves the record.
pub fn adjust_max_pool<H: CombatHost, S: RecordStore>(
    kind: ResourceKind,
    host: &H,
    store: &S,
    record: &mut PlayerRecord,
    creature: ObjectId,
    delta: i32,
) {
    kind.adjust_stored_max(record, delta);

    let max = max_pool(kind, host, store, creature, Some(&*record));
    if kind.current(record) > max {
        kind.set_current(record, max);
    }
    if kind.current(record) < 0 {
        kind.set_current(record, 0);
    }
}

/// A player-controlled entity with no backing record is a caller contract
/// violation, not a state this engine can recover from.
fn expect_player_record<H: CombatHost, S: RecordStore>(
    host: &H,
    store: &S,
    creature: ObjectId,
) -> PlayerRecord {
    player_record(host, store, creature)
        .expect("player-controlled entity has no backing player record")
}
