//! Board representation and synchronization.
//!
//! Contains the territory and adjacency data structures, the definition
//! dataset loader, and the per-turn state synchronization.

pub mod definitions;
pub mod graph;
pub mod state;
pub mod territory;

pub use definitions::{
    load_definitions, parse_definitions, standard_definitions, ConfigError, Definitions,
    TerritoryDef, STANDARD_MAP,
};
pub use graph::{Adjacency, Board};
pub use state::{extract_owners, synchronize, BotIdentity, Snapshot, TerritoryUpdate, UnitRecord};
pub use territory::{
    MoveKind, Nationality, Territory, TerritoryId, UnitType, ALL_NATIONALITIES,
};
