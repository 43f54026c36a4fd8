// Starfall Combat Schema - Shared type definitions
// This crate contains the static combat vocabulary shared between the
// starfall-combat engine and any host-side tooling: ability scores, skills,
// damage types, item properties and status/engine effect kinds.

// Re-export the main types
pub use abilities::*;
pub use damage::*;
pub use effects::*;
pub use items::*;
pub use skills::*;

pub mod abilities;
pub mod damage;
pub mod effects;
pub mod items;
pub mod skills;
