use crate::host::{CombatHost, ObjectId};
use crate::record::{PlayerRecord, RecordId};
use crate::stats::raw::{RawCreature, RawItem};
use crate::store::{MemoryStore, RecordStore};
use schema::{
    Ability, ActiveEffect, BaseItem, DamageType, FoodEffect, InventorySlot, ItemProperty,
    ItemPropertyType, StatusEffectKind,
};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// An item held by the simulated host.
#[derive(Debug, Clone, Default)]
pub struct SimItem {
    pub base_item: Option<BaseItem>,
    pub properties: Vec<ItemProperty>,
}

/// A live entity held by the simulated host.
#[derive(Debug, Clone)]
pub struct SimEntity {
    pub player: bool,
    pub observer: bool,
    pub record_id: Option<RecordId>,
    pub abilities: HashMap<Ability, i32>,
    pub armor_class: i32,
    pub class_levels: [i32; 3],
    pub equipment: HashMap<InventorySlot, ObjectId>,
    pub statuses: Vec<StatusEffectKind>,
    pub food: Option<FoodEffect>,
    pub effects: Vec<ActiveEffect>,
    pub locals: HashMap<String, i32>,
    pub current_hp: i32,
    pub level_hp: HashMap<i32, i32>,
    pub movement_factor: f32,
}

impl Default for SimEntity {
    fn default() -> Self {
        SimEntity {
            player: false,
            observer: false,
            record_id: None,
            abilities: HashMap::new(),
            armor_class: 10,
            class_levels: [0; 3],
            equipment: HashMap::new(),
            statuses: Vec::new(),
            food: None,
            effects: Vec::new(),
            locals: HashMap::new(),
            current_hp: 0,
            level_hp: HashMap::new(),
            movement_factor: 1.0,
        }
    }
}

/// In-memory stand-in for the host game engine: entities, items, effects
/// and scratch state, enough to exercise every collaborator query the
/// engine makes.
#[derive(Debug, Default)]
pub struct SimHost {
    next_id: u32,
    pub entities: HashMap<ObjectId, SimEntity>,
    pub items: HashMap<ObjectId, SimItem>,
}

impl SimHost {
    pub fn new() -> Self {
        SimHost::default()
    }

    fn allocate(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId(self.next_id)
    }

    pub fn add_item(&mut self, item: SimItem) -> ObjectId {
        let id = self.allocate();
        self.items.insert(id, item);
        id
    }

    pub fn spawn(&mut self, entity: SimEntity) -> ObjectId {
        let id = self.allocate();
        self.entities.insert(id, entity);
        id
    }

    pub fn entity(&self, id: ObjectId) -> &SimEntity {
        &self.entities[&id]
    }

    pub fn entity_mut(&mut self, id: ObjectId) -> &mut SimEntity {
        self.entities.get_mut(&id).expect("unknown entity")
    }

    pub fn equip(&mut self, entity: ObjectId, slot: InventorySlot, item: ObjectId) {
        self.entity_mut(entity).equipment.insert(slot, item);
    }

    /// Snapshot an entity into the raw-path representation, the way the
    /// host combat loop would.
    pub fn raw_snapshot(&self, id: ObjectId) -> RawCreature {
        let entity = self.entity(id);

        let mut ability_bytes = [0u8; Ability::COUNT];
        for ability in Ability::iter() {
            let score = entity.abilities.get(&ability).copied().unwrap_or(0);
            ability_bytes[ability.index()] = score as i8 as u8;
        }

        let skin = entity
            .equipment
            .get(&InventorySlot::CreatureArmor)
            .map(|item_id| {
                let item = &self.items[item_id];
                RawItem {
                    base_item: item.base_item,
                    properties: item.properties.clone(),
                }
            });

        RawCreature {
            object_id: id,
            player_character: entity.player && !entity.observer,
            record_id: entity.record_id.clone(),
            ability_bytes,
            ac_armor_base: entity.armor_class - 10,
            ac_natural_base: 0,
            statuses: entity.statuses.clone(),
            active_effects: entity.effects.clone(),
            skin,
        }
    }

    pub fn raw_item(&self, id: ObjectId) -> RawItem {
        let item = &self.items[&id];
        RawItem {
            base_item: item.base_item,
            properties: item.properties.clone(),
        }
    }
}

impl CombatHost for SimHost {
    fn is_player(&self, entity: ObjectId) -> bool {
        self.entity(entity).player
    }

    fn is_observer(&self, entity: ObjectId) -> bool {
        self.entity(entity).observer
    }

    fn record_id(&self, entity: ObjectId) -> Option<RecordId> {
        self.entity(entity).record_id.clone()
    }

    fn ability_score(&self, entity: ObjectId, ability: Ability) -> i32 {
        self.entity(entity).abilities.get(&ability).copied().unwrap_or(0)
    }

    fn armor_class(&self, entity: ObjectId) -> i32 {
        self.entity(entity).armor_class
    }

    fn class_level(&self, entity: ObjectId, position: u8) -> i32 {
        self.entity(entity).class_levels[(position - 1) as usize]
    }

    fn item_in_slot(&self, entity: ObjectId, slot: InventorySlot) -> Option<ObjectId> {
        self.entity(entity).equipment.get(&slot).copied()
    }

    fn base_item_type(&self, item: ObjectId) -> Option<BaseItem> {
        self.items.get(&item).and_then(|item| item.base_item)
    }

    fn item_properties(&self, item: ObjectId) -> Vec<ItemProperty> {
        self.items
            .get(&item)
            .map(|item| item.properties.clone())
            .unwrap_or_default()
    }

    fn has_status_effect(&self, entity: ObjectId, kind: StatusEffectKind) -> bool {
        self.entity(entity).statuses.contains(&kind)
    }

    fn food_effect(&self, entity: ObjectId) -> Option<FoodEffect> {
        self.entity(entity).food
    }

    fn active_effects(&self, entity: ObjectId) -> Vec<ActiveEffect> {
        self.entity(entity).effects.clone()
    }

    fn local_int(&self, entity: ObjectId, tag: &str) -> i32 {
        self.entity(entity).locals.get(tag).copied().unwrap_or(0)
    }

    fn set_local_int(&mut self, entity: ObjectId, tag: &str, value: i32) {
        self.entity_mut(entity).locals.insert(tag.to_string(), value);
    }

    fn current_hp(&self, entity: ObjectId) -> i32 {
        self.entity(entity).current_hp
    }

    fn max_hp(&self, entity: ObjectId) -> i32 {
        self.entity(entity).level_hp.values().sum()
    }

    fn set_current_hp(&mut self, entity: ObjectId, hp: i32) {
        self.entity_mut(entity).current_hp = hp;
    }

    fn set_max_hp_by_level(&mut self, entity: ObjectId, level: i32, hp: i32) {
        self.entity_mut(entity).level_hp.insert(level, hp);
    }

    fn set_movement_rate_factor(&mut self, entity: ObjectId, factor: f32) {
        self.entity_mut(entity).movement_factor = factor;
    }

    fn set_raw_ability_score(&mut self, entity: ObjectId, ability: Ability, score: i32) {
        self.entity_mut(entity).abilities.insert(ability, score);
    }
}

/// A builder for player-controlled test entities with a backing record.
pub struct PlayerBuilder {
    record: PlayerRecord,
    entity: SimEntity,
}

impl PlayerBuilder {
    pub fn new(record_id: &str) -> Self {
        PlayerBuilder {
            record: PlayerRecord::new(record_id),
            entity: SimEntity {
                player: true,
                record_id: Some(record_id.to_string()),
                class_levels: [1, 0, 0],
                ..SimEntity::default()
            },
        }
    }

    /// Mutate the backing record before it is stored.
    pub fn with_record(mut self, build: impl FnOnce(&mut PlayerRecord)) -> Self {
        build(&mut self.record);
        self
    }

    /// Set a live ability score on the entity.
    pub fn with_ability(mut self, ability: Ability, score: i32) -> Self {
        self.entity.abilities.insert(ability, score);
        self
    }

    pub fn with_armor_class(mut self, ac: i32) -> Self {
        self.entity.armor_class = ac;
        self
    }

    pub fn with_class_levels(mut self, levels: [i32; 3]) -> Self {
        self.entity.class_levels = levels;
        self
    }

    pub fn with_status(mut self, kind: StatusEffectKind) -> Self {
        self.entity.statuses.push(kind);
        self
    }

    pub fn with_food(mut self, food: FoodEffect) -> Self {
        self.entity.food = Some(food);
        self
    }

    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.entity.effects.push(effect);
        self
    }

    pub fn with_current_hp(mut self, hp: i32) -> Self {
        self.entity.current_hp = hp;
        self
    }

    pub fn spawn(self, host: &mut SimHost, store: &mut MemoryStore) -> ObjectId {
        store.save(&self.record);
        host.spawn(self.entity)
    }
}

/// A builder for computer-controlled test entities whose stats live on a
/// skin item.
pub struct NpcBuilder {
    entity: SimEntity,
    skin_properties: Vec<ItemProperty>,
    with_skin: bool,
}

impl NpcBuilder {
    pub fn new() -> Self {
        NpcBuilder {
            entity: SimEntity::default(),
            skin_properties: Vec::new(),
            with_skin: true,
        }
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.skin_properties
            .push(ItemProperty::new(ItemPropertyType::NpcLevel, level));
        self
    }

    pub fn with_defense(mut self, damage_type: DamageType, value: i32) -> Self {
        self.skin_properties.push(ItemProperty::defense(damage_type, value));
        self
    }

    pub fn with_skin_property(mut self, property: ItemProperty) -> Self {
        self.skin_properties.push(property);
        self
    }

    pub fn with_ability(mut self, ability: Ability, score: i32) -> Self {
        self.entity.abilities.insert(ability, score);
        self
    }

    pub fn with_armor_class(mut self, ac: i32) -> Self {
        self.entity.armor_class = ac;
        self
    }

    pub fn with_status(mut self, kind: StatusEffectKind) -> Self {
        self.entity.statuses.push(kind);
        self
    }

    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.entity.effects.push(effect);
        self
    }

    pub fn without_skin(mut self) -> Self {
        self.with_skin = false;
        self
    }

    pub fn spawn(self, host: &mut SimHost) -> ObjectId {
        let skin = self.with_skin.then(|| {
            host.add_item(SimItem {
                base_item: None,
                properties: self.skin_properties,
            })
        });

        let id = host.spawn(self.entity);
        if let Some(skin) = skin {
            host.equip(id, InventorySlot::CreatureArmor, skin);
        }
        id
    }
}

/// Add a weapon item to the host and hand it to no one; ratings take the
/// wielded weapon explicitly.
pub fn add_weapon(host: &mut SimHost, base_item: BaseItem, properties: Vec<ItemProperty>) -> ObjectId {
    host.add_item(SimItem {
        base_item: Some(base_item),
        properties,
    })
}
