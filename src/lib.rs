// In: src/lib.rs

//! Starfall Combat Attribute Resolution Engine
//!
//! Derived combat attributes (attack, per-damage-type defense, accuracy,
//! evasion and the resource pools) for every combat participant, player or
//! computer-controlled. The engine folds persistent character records,
//! equipment-derived bonuses and time-limited status effects into single
//! numbers on every combat check, with a spawn-scoped equipment cache for
//! NPCs and two evaluation paths (handle-based and raw-state) that agree
//! bit for bit.

// --- MODULE DECLARATIONS ---
pub mod errors;
pub mod host;
pub mod record;
pub mod stats;
pub mod store;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the static combat vocabulary.
pub use schema::{
    Ability, ActiveEffect, BaseItem, DamageType, EffectType, FoodEffect, InventorySlot,
    ItemProperty, ItemPropertyType, Skill, StatusEffectKind,
};

// --- From this crate's modules (`src/`) ---

// Collaborator contracts and the persistent data model.
pub use host::{CombatHost, ObjectId};
pub use record::{PlayerRecord, RecordId};
pub use store::{MemoryStore, RecordStore};

// The NPC equipment cache and skin-derived stats.
pub use stats::cache::{npc_stats, NpcDefenseCache, NpcStats};

// Handle-based attribute formulas.
pub use stats::ratings::{accuracy, attack, defense, evasion};

// Raw-state attribute formulas for the hot combat loop.
pub use stats::raw::{
    accuracy_raw, attack_raw, decode_stat_byte, defense_raw, evasion_raw, npc_stats_from_skin,
    RawCreature, RawItem,
};

// Resource pool management.
pub use stats::pools::{
    adjust_max_pool, current_pool, max_pool, reduce, restore, ResourceKind,
};

// Record adjusters and lifecycle reapplication.
pub use stats::modifiers::{
    adjust_attack, adjust_control, adjust_cp_bonus, adjust_craftsmanship, adjust_defense,
    adjust_evasion, adjust_force_attack, adjust_fp_regen, adjust_hp_regen, adjust_movement_rate,
    adjust_player_max_hp, adjust_recast_reduction, adjust_stamina_regen, apply_player_ability,
    on_module_enter, reapply_food_hp, MAX_HP_PER_LEVEL,
};

// Pure formula core, exposed for balance tooling and tests.
pub use stats::formulas::{
    ability_modifier, effect_rate, AccuracyInputs, AttackInputs, DefenseInputs, EvasionInputs,
};

// Crate-specific error types (persistence edge only).
pub use errors::{StoreError, StoreResult};
