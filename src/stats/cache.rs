//! Equipment-derived stats for computer-controlled participants.
//!
//! NPC defenses are scanned from the creature-armor ("skin") slot once at
//! spawn and cached by object handle; every subsequent defense query is a
//! plain map lookup. Because handles are reused by the host engine, the
//! death hook is mandatory: a surviving entry would leak this participant's
//! defense table into whatever reuses the handle.

use crate::host::{CombatHost, ObjectId};
use schema::{DamageType, InventorySlot, ItemPropertyType};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::debug;

/// Transient stats of a computer-controlled participant, sourced entirely
/// from the property records on its skin. An empty value is returned when
/// no skin is equipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NpcStats {
    pub level: i32,
    pub defenses: HashMap<DamageType, i32>,
}

impl NpcStats {
    pub fn defense(&self, damage_type: DamageType) -> i32 {
        self.defenses.get(&damage_type).copied().unwrap_or(0)
    }
}

/// Scan an NPC's skin for its level and per-damage-type defenses. Uncached;
/// the defense formulas go through [`NpcDefenseCache`] instead for the
/// per-swing lookups.
pub fn npc_stats<H: CombatHost>(host: &H, npc: ObjectId) -> NpcStats {
    let mut stats = NpcStats::default();

    let Some(skin) = host.item_in_slot(npc, InventorySlot::CreatureArmor) else {
        return stats;
    };

    for prop in host.item_properties(skin) {
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

/// Process-wide cache of per-damage-type defense tables for live NPCs.
///
/// Lifecycle contract (owed by the surrounding event wiring):
/// `on_spawn` before any `lookup` for an entity, `on_death` before the
/// entity's handle can be reused. `lookup` never rescans equipment.
#[derive(Debug, Default)]
pub struct NpcDefenseCache {
    defenses: HashMap<ObjectId, HashMap<DamageType, i32>>,
}

impl NpcDefenseCache {
    pub fn new() -> Self {
        NpcDefenseCache {
            defenses: HashMap::new(),
        }
    }

    /// Build the defense table for a freshly spawned NPC from its skin.
    pub fn on_spawn<H: CombatHost>(&mut self, host: &H, creature: ObjectId) {
        let mut table: HashMap<DamageType, i32> = HashMap::new();
        for damage_type in DamageType::iter() {
            table.insert(damage_type, 0);
        }

        if let Some(skin) = host.item_in_slot(creature, InventorySlot::CreatureArmor) {
            for prop in host.item_properties(skin) {
                if prop.property_type == ItemPropertyType::Defense {
                    let Some(damage_type) = prop.sub_type else {
                        continue;
                    };
                    *table.entry(damage_type).or_insert(0) += prop.cost_value;
                }
            }
        }

        debug!(creature = %creature, "cached npc defense table");
        self.defenses.insert(creature, table);
    }

    /// Drop the defense table for a dead or removed NPC. Idempotent.
    pub fn on_death(&mut self, creature: ObjectId) {
        if self.defenses.remove(&creature).is_some() {
            debug!(creature = %creature, "cleared npc defense table");
        }
    }

    /// Cached defense toward one damage type; 0 when the entity or type is
    /// unknown.
    pub fn lookup(&self, creature: ObjectId, damage_type: DamageType) -> i32 {
        self.defenses
            .get(&creature)
            .and_then(|table| table.get(&damage_type))
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, creature: ObjectId) -> bool {
        self.defenses.contains_key(&creature)
    }
}
