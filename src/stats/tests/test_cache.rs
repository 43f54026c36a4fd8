use crate::stats::cache::{npc_stats, NpcDefenseCache};
use crate::stats::tests::common::NpcBuilder;
use crate::stats::tests::common::SimHost;
use pretty_assertions::assert_eq;
use schema::DamageType;
use strum::IntoEnumIterator;

#[test]
fn lookup_before_spawn_returns_zero() {
    let mut host = SimHost::new();
    let cache = NpcDefenseCache::new();

    let npc = NpcBuilder::new()
        .with_defense(DamageType::Fire, 10)
        .spawn(&mut host);

    for damage_type in DamageType::iter() {
        assert_eq!(cache.lookup(npc, damage_type), 0);
    }
}

#[test]
fn spawn_accumulates_matching_property_values() {
    let mut host = SimHost::new();
    let mut cache = NpcDefenseCache::new();

    let npc = NpcBuilder::new()
        .with_level(6)
        .with_defense(DamageType::Fire, 10)
        .with_defense(DamageType::Fire, 5)
        .with_defense(DamageType::Physical, 3)
        .spawn(&mut host);

    cache.on_spawn(&host, npc);

    assert_eq!(cache.lookup(npc, DamageType::Fire), 15);
    assert_eq!(cache.lookup(npc, DamageType::Physical), 3);
    assert_eq!(cache.lookup(npc, DamageType::Ice), 0);
    assert_eq!(cache.lookup(npc, DamageType::Force), 0);
}

#[test]
fn death_clears_the_table_idempotently() {
    let mut host = SimHost::new();
    let mut cache = NpcDefenseCache::new();

    let npc = NpcBuilder::new()
        .with_defense(DamageType::Electrical, 12)
        .spawn(&mut host);

    cache.on_spawn(&host, npc);
    assert_eq!(cache.lookup(npc, DamageType::Electrical), 12);

    cache.on_death(npc);
    assert_eq!(cache.lookup(npc, DamageType::Electrical), 0);
    assert!(!cache.contains(npc));

    // A second death event for the same handle is a no-op.
    cache.on_death(npc);
    assert!(!cache.contains(npc));
}

#[test]
fn spawn_without_skin_caches_an_empty_table() {
    let mut host = SimHost::new();
    let mut cache = NpcDefenseCache::new();

    let npc = NpcBuilder::new().without_skin().spawn(&mut host);
    cache.on_spawn(&host, npc);

    assert!(cache.contains(npc));
    for damage_type in DamageType::iter() {
        assert_eq!(cache.lookup(npc, damage_type), 0);
    }
}

#[test]
fn respawn_after_death_replaces_the_table() {
    let mut host = SimHost::new();
    let mut cache = NpcDefenseCache::new();

    let first = NpcBuilder::new()
        .with_defense(DamageType::Ice, 8)
        .spawn(&mut host);
    cache.on_spawn(&host, first);
    cache.on_death(first);

    // A later participant with its own skin; the old table must not bleed
    // through.
    let second = NpcBuilder::new()
        .with_defense(DamageType::Poison, 4)
        .spawn(&mut host);
    cache.on_spawn(&host, second);

    assert_eq!(cache.lookup(second, DamageType::Poison), 4);
    assert_eq!(cache.lookup(second, DamageType::Ice), 0);
    assert_eq!(cache.lookup(first, DamageType::Ice), 0);
}

#[test]
fn npc_stats_scan_reads_level_and_defenses() {
    let mut host = SimHost::new();

    let npc = NpcBuilder::new()
        .with_level(9)
        .with_defense(DamageType::Physical, 7)
        .with_defense(DamageType::Physical, 2)
        .spawn(&mut host);

    let stats = npc_stats(&host, npc);
    assert_eq!(stats.level, 9);
    assert_eq!(stats.defense(DamageType::Physical), 9);
    assert_eq!(stats.defense(DamageType::Fire), 0);
}

#[test]
fn npc_stats_without_skin_is_empty() {
    let mut host = SimHost::new();

    let npc = NpcBuilder::new().without_skin().spawn(&mut host);
    let stats = npc_stats(&host, npc);
    assert_eq!(stats.level, 0);
    assert_eq!(stats.defenses.len(), 0);
}
