//! Per-turn board synchronization.
//!
//! Server state arrives as a flat unit list; `extract_owners` folds it into
//! a per-territory snapshot and `synchronize` applies that snapshot onto the
//! board as a delta: territories absent from the snapshot keep their previous
//! state, and missing fields within an entry mean "no update for that field".
//!
//! Unknown territory names in a snapshot are logged and skipped rather than
//! failing the turn; names are validated before any mutation so a bad payload
//! never leaves the board half-applied.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use super::graph::Board;
use super::territory::{Nationality, TerritoryId, UnitType};

/// A single unit in a server state-update payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnitRecord {
    pub province: String,
    pub owner: String,
    pub unit_type: String,
}

/// A per-territory snapshot entry. `None` fields carry no update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerritoryUpdate {
    pub owner: Option<Nationality>,
    pub unit_strength: Option<u32>,
    pub unit_type: Option<UnitType>,
}

/// Snapshot shape consumed by [`synchronize`], keyed by territory short name.
pub type Snapshot = BTreeMap<String, TerritoryUpdate>;

/// The bot's own nationality plus the territories it currently holds.
#[derive(Debug, Clone)]
pub struct BotIdentity {
    pub nationality: Nationality,
    owned: BTreeSet<TerritoryId>,
}

impl BotIdentity {
    /// Creates an identity, deriving the initial `owned` set from the
    /// board's default owners.
    pub fn new(nationality: Nationality, board: &Board) -> Self {
        let mut identity = BotIdentity {
            nationality,
            owned: BTreeSet::new(),
        };
        identity.owned = identity.recompute_owned(board);
        identity
    }

    /// Territories currently owned by the bot, in id order.
    pub fn owned(&self) -> &BTreeSet<TerritoryId> {
        &self.owned
    }

    /// Rebuilds the `owned` set by scanning every territory.
    ///
    /// `synchronize` maintains the set incrementally; this full scan is the
    /// consistency check the incremental path is measured against.
    pub fn recompute_owned(&self, board: &Board) -> BTreeSet<TerritoryId> {
        board
            .ids()
            .filter(|&id| board.territory(id).owner == Some(self.nationality))
            .collect()
    }
}

/// Folds a flat unit list into the per-territory snapshot shape.
///
/// Multiple units in the same province accumulate `unit_strength`; the first
/// record fixes the owner and unit type. Records with an unknown owner or
/// unit type name are logged and dropped.
pub fn extract_owners(units: &[UnitRecord]) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for record in units {
        let owner = match Nationality::from_name(&record.owner) {
            Some(n) => n,
            None => {
                eprintln!(
                    "state update: unknown nationality '{}' at '{}', skipping",
                    record.owner, record.province
                );
                continue;
            }
        };
        let unit_type = match UnitType::from_name(&record.unit_type) {
            Some(u) => u,
            None => {
                eprintln!(
                    "state update: unknown unit type '{}' at '{}', skipping",
                    record.unit_type, record.province
                );
                continue;
            }
        };

        let entry = snapshot
            .entry(record.province.clone())
            .or_insert_with(|| TerritoryUpdate {
                owner: Some(owner),
                unit_strength: Some(0),
                unit_type: Some(unit_type),
            });
        if let Some(strength) = entry.unit_strength.as_mut() {
            *strength += 1;
        }
    }
    snapshot
}

/// Applies a snapshot onto the board, maintaining `identity.owned`
/// incrementally.
///
/// Unknown territory names are logged and skipped; resolution happens before
/// any field is written, so a payload referencing bad names never leaves the
/// board partially corrupted.
pub fn synchronize(board: &mut Board, identity: &mut BotIdentity, snapshot: &Snapshot) {
    let mut resolved: Vec<(TerritoryId, &TerritoryUpdate)> = Vec::with_capacity(snapshot.len());
    for (name, update) in snapshot {
        match board.resolve(name) {
            Some(id) => resolved.push((id, update)),
            None => eprintln!("state update: unknown territory '{}', skipping", name),
        }
    }

    for (id, update) in resolved {
        let territory = board.territory_mut(id);
        if let Some(owner) = update.owner {
            territory.owner = Some(owner);
            if owner == identity.nationality {
                identity.owned.insert(id);
            } else {
                identity.owned.remove(&id);
            }
        }
        if let Some(strength) = update.unit_strength {
            territory.unit_strength = strength;
        }
        if let Some(unit_type) = update.unit_type {
            territory.unit_type = Some(unit_type);
        }
    }
}
