use crate::record::RecordId;
use schema::{Ability, ActiveEffect, BaseItem, FoodEffect, InventorySlot, ItemProperty, StatusEffectKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ephemeral handle to a live game object (creature or item).
///
/// Handles are assigned by the host engine and may be reused after the
/// object is destroyed. Anything keyed by `ObjectId` must therefore be torn
/// down on the death/removal event, before the handle can come back as an
/// unrelated object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The host-engine collaborator: everything the combat formulas need to ask
/// about a live entity. Mutating methods exist for the operations that push
/// derived values back onto the live object (per-level HP, movement factor,
/// raw ability scores, scratch tags).
///
/// The execution model is single-threaded and event-driven; no method is
/// expected to block or reenter the engine.
pub trait CombatHost {
    /// Whether this entity is player-controlled.
    fn is_player(&self, entity: ObjectId) -> bool;

    /// Whether this entity is an observer (staff) character. Observers are
    /// excluded from the player branch of every formula.
    fn is_observer(&self, entity: ObjectId) -> bool;

    /// The persistent record identifier backing a player-controlled entity.
    fn record_id(&self, entity: ObjectId) -> Option<RecordId>;

    /// Current ability score of a live entity.
    fn ability_score(&self, entity: ObjectId, ability: Ability) -> i32;

    /// Current total armor class, including the natural 10 every entity has.
    fn armor_class(&self, entity: ObjectId) -> i32;

    /// Levels held in one advancement track (1 through 3).
    fn class_level(&self, entity: ObjectId, position: u8) -> i32;

    fn item_in_slot(&self, entity: ObjectId, slot: InventorySlot) -> Option<ObjectId>;

    /// Weapon category of an item, `None` for non-weapon items.
    fn base_item_type(&self, item: ObjectId) -> Option<BaseItem>;

    /// The ordered property records attached to an item.
    fn item_properties(&self, item: ObjectId) -> Vec<ItemProperty>;

    fn has_status_effect(&self, entity: ObjectId, kind: StatusEffectKind) -> bool;

    /// Payload of an active Food effect, if one is present.
    fn food_effect(&self, entity: ObjectId) -> Option<FoodEffect>;

    /// The ordered list of engine-applied effects on an entity.
    fn active_effects(&self, entity: ObjectId) -> Vec<ActiveEffect>;

    /// Scratch numeric tag on an entity; absent tags read as 0. Used for
    /// the current resource pools of computer-controlled participants.
    fn local_int(&self, entity: ObjectId, tag: &str) -> i32;

    fn set_local_int(&mut self, entity: ObjectId, tag: &str, value: i32);

    fn current_hp(&self, entity: ObjectId) -> i32;

    fn max_hp(&self, entity: ObjectId) -> i32;

    fn set_current_hp(&mut self, entity: ObjectId, hp: i32);

    /// Assign the HP held by one level bucket.
    fn set_max_hp_by_level(&mut self, entity: ObjectId, level: i32, hp: i32);

    fn set_movement_rate_factor(&mut self, entity: ObjectId, factor: f32);

    fn set_raw_ability_score(&mut self, entity: ObjectId, ability: Ability, score: i32);

    /// A player-controlled, non-observer entity: the population whose
    /// modifiers come from the persistent record.
    fn is_tracked_player(&self, entity: ObjectId) -> bool {
        self.is_player(entity) && !self.is_observer(entity)
    }
}
