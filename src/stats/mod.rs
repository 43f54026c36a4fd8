pub mod cache;
pub mod formulas;
pub mod modifiers;
pub mod pools;
pub mod ratings;
pub mod raw;

#[cfg(test)]
mod tests;

use crate::host::{CombatHost, ObjectId};
use crate::record::PlayerRecord;
use crate::store::RecordStore;

/// Load the persistent record behind a player-controlled entity. `None`
/// covers both missing-identifier and missing-record; callers decide how
/// strict to be about it.
pub(crate) fn player_record<H: CombatHost, S: RecordStore>(
    host: &H,
    store: &S,
    creature: ObjectId,
) -> Option<PlayerRecord> {
    host.record_id(creature).and_then(|id| store.load(&id))
}
