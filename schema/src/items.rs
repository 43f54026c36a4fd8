use crate::abilities::Ability;
use crate::damage::DamageType;
use crate::skills::Skill;
use serde::{Deserialize, Serialize};

/// Equipment slots the engine cares about. `CreatureArmor` is the "skin"
/// slot from which computer-controlled participant stats are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum InventorySlot {
    CreatureArmor,
    RightHand,
    LeftHand,
    Head,
    Chest,
}

/// Weapon categories, used to select which ability score and skill drive
/// accuracy and attack for a wielded weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum BaseItem {
    Vibroblade,
    FinesseVibroblade,
    Baton,
    Lightsaber,
    Saberstaff,
    TwinBlade,
    Knuckles,
    Staff,
    Pistol,
    Rifle,
}

impl BaseItem {
    /// The ability score that drives damage (attack) with this weapon type.
    pub fn damage_ability(self) -> Ability {
        match self {
            BaseItem::Vibroblade | BaseItem::Baton | BaseItem::TwinBlade | BaseItem::Staff => {
                Ability::Might
            }
            BaseItem::FinesseVibroblade | BaseItem::Knuckles => Ability::Perception,
            BaseItem::Lightsaber | BaseItem::Saberstaff => Ability::Willpower,
            BaseItem::Pistol | BaseItem::Rifle => Ability::Agility,
        }
    }

    /// The ability score that drives accuracy with this weapon type.
    pub fn accuracy_ability(self) -> Ability {
        match self {
            BaseItem::Pistol | BaseItem::Rifle => Ability::Agility,
            _ => Ability::Perception,
        }
    }

    /// The combat skill trained by use of this weapon type.
    pub fn combat_skill(self) -> Skill {
        match self {
            BaseItem::Vibroblade | BaseItem::FinesseVibroblade | BaseItem::Baton => {
                Skill::OneHanded
            }
            BaseItem::TwinBlade | BaseItem::Staff => Skill::TwoHanded,
            BaseItem::Knuckles => Skill::MartialArts,
            BaseItem::Pistol | BaseItem::Rifle => Skill::Ranged,
            BaseItem::Lightsaber | BaseItem::Saberstaff => Skill::Force,
        }
    }
}

/// Tags carried by item property records. Only the kinds consumed by the
/// combat formulas are listed; the item subsystem owns the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum ItemPropertyType {
    Defense,
    NpcLevel,
    NpcForcePoints,
    NpcStamina,
    AttackBonus,
    EnhancementBonus,
}

/// A discrete numeric bonus attached to an item or creature skin.
/// `sub_type` is only meaningful for `Defense` properties, where it names
/// the damage type; `None` marks an invalid sub-type and is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProperty {
    pub property_type: ItemPropertyType,
    pub sub_type: Option<DamageType>,
    pub cost_value: i32,
}

impl ItemProperty {
    pub fn new(property_type: ItemPropertyType, cost_value: i32) -> Self {
        ItemProperty {
            property_type,
            sub_type: None,
            cost_value,
        }
    }

    pub fn defense(damage_type: DamageType, cost_value: i32) -> Self {
        ItemProperty {
            property_type: ItemPropertyType::Defense,
            sub_type: Some(damage_type),
            cost_value,
        }
    }
}
