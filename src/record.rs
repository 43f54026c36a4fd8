use schema::{Ability, DamageType, Skill};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable identifier for a logical character across sessions. Distinct from
/// [`crate::host::ObjectId`], which is an ephemeral in-engine handle.
pub type RecordId = String;

/// The persistent character record owned by the record store.
///
/// All per-key tables are lazy: reading an absent key yields 0 and writing
/// creates the key. The `version` field is owned by the external migration
/// collaborator and carried opaquely here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub id: RecordId,
    pub version: i32,

    // Effective ability score = base + upgraded.
    pub base_abilities: HashMap<Ability, i32>,
    pub upgraded_abilities: HashMap<Ability, i32>,

    // Resource pools. Maximums may legitimately go negative while stacked
    // adjustments are being unwound; current values never do.
    pub max_hp: i32,
    pub temporary_food_hp: i32,
    pub fp: i32,
    pub max_fp: i32,
    pub stamina: i32,
    pub max_stamina: i32,
    pub hp_regen: i32,
    pub fp_regen: i32,
    pub stamina_regen: i32,

    pub skills: HashMap<Skill, i32>,
    pub defenses: HashMap<DamageType, i32>,

    pub evasion: i32,
    pub attack: i32,
    pub force_attack: i32,
    pub ability_recast_reduction: i32,
    pub movement_rate: f32,

    // Crafting-adjacent bonus tables, keyed by skill.
    pub control: HashMap<Skill, i32>,
    pub craftsmanship: HashMap<Skill, i32>,
    pub cp_bonus: HashMap<Skill, i32>,
}

impl PlayerRecord {
    pub fn new(id: impl Into<RecordId>) -> Self {
        PlayerRecord {
            id: id.into(),
            version: 1,
            base_abilities: HashMap::new(),
            upgraded_abilities: HashMap::new(),
            max_hp: 0,
            temporary_food_hp: 0,
            fp: 0,
            max_fp: 0,
            stamina: 0,
            max_stamina: 0,
            hp_regen: 0,
            fp_regen: 0,
            stamina_regen: 0,
            skills: HashMap::new(),
            defenses: HashMap::new(),
            evasion: 0,
            attack: 0,
            force_attack: 0,
            ability_recast_reduction: 0,
            movement_rate: 1.0,
            control: HashMap::new(),
            craftsmanship: HashMap::new(),
            cp_bonus: HashMap::new(),
        }
    }

    /// Effective ability score: base plus upgrades.
    pub fn ability_score(&self, ability: Ability) -> i32 {
        self.base_abilities.get(&ability).copied().unwrap_or(0)
            + self.upgraded_abilities.get(&ability).copied().unwrap_or(0)
    }

    /// Trained rank in a skill, 0 if untrained.
    pub fn skill_rank(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// Accumulated defense bonus toward one damage type.
    pub fn defense(&self, damage_type: DamageType) -> i32 {
        self.defenses.get(&damage_type).copied().unwrap_or(0)
    }

    pub fn defense_mut(&mut self, damage_type: DamageType) -> &mut i32 {
        self.defenses.entry(damage_type).or_insert(0)
    }

    pub fn control_bonus(&self, skill: Skill) -> i32 {
        self.control.get(&skill).copied().unwrap_or(0)
    }

    pub fn control_mut(&mut self, skill: Skill) -> &mut i32 {
        self.control.entry(skill).or_insert(0)
    }

    pub fn craftsmanship_bonus(&self, skill: Skill) -> i32 {
        self.craftsmanship.get(&skill).copied().unwrap_or(0)
    }

    pub fn craftsmanship_mut(&mut self, skill: Skill) -> &mut i32 {
        self.craftsmanship.entry(skill).or_insert(0)
    }

    pub fn cp_bonus(&self, skill: Skill) -> i32 {
        self.cp_bonus.get(&skill).copied().unwrap_or(0)
    }

    pub fn cp_bonus_mut(&mut self, skill: Skill) -> &mut i32 {
        self.cp_bonus.entry(skill).or_insert(0)
    }
}

impl Default for PlayerRecord {
    fn default() -> Self {
        PlayerRecord::new(RecordId::new())
    }
}
