//! The board graph.
//!
//! Built once per bot lifetime from a definition dataset: territory nodes,
//! army/fleet adjacency edges, and the supply-center index. The graph
//! structure never changes after construction; only the per-territory
//! overlay fields (owner, strength, unit type, score) are mutated.

use std::collections::HashMap;

use super::definitions::{standard_definitions, ConfigError, Definitions};
use super::territory::{MoveKind, Nationality, Territory, TerritoryId};

/// A directed adjacency edge tagged with the traversing unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    pub to: TerritoryId,
    pub kind: MoveKind,
}

/// The full board: territories plus the immutable adjacency structure.
#[derive(Debug, Clone)]
pub struct Board {
    territories: Vec<Territory>,
    index: HashMap<String, TerritoryId>,
    /// Outgoing edges per territory, both move kinds, in insertion order.
    edges: Vec<Vec<Adjacency>>,
    /// Neighbor ids per territory, deduplicated across move kinds, ascending.
    neighbors: Vec<Vec<TerritoryId>>,
    supply_centers: Vec<TerritoryId>,
}

impl Board {
    /// Builds a board from a definition dataset.
    ///
    /// Ids are assigned in the dataset's key order (lexicographic, since
    /// `Definitions` is a `BTreeMap`). A neighbor name that does not exist
    /// among the defined territories is fatal.
    pub fn build(defs: &Definitions) -> Result<Board, ConfigError> {
        let mut index = HashMap::with_capacity(defs.len());
        for (i, short_name) in defs.keys().enumerate() {
            index.insert(short_name.clone(), TerritoryId(i));
        }

        let mut territories = Vec::with_capacity(defs.len());
        let mut edges: Vec<Vec<Adjacency>> = vec![Vec::new(); defs.len()];
        let mut supply_centers = Vec::new();

        for (i, (short_name, def)) in defs.iter().enumerate() {
            let owner = match &def.owner {
                Some(name) => Some(Nationality::from_name(name).ok_or_else(|| {
                    ConfigError::UnknownNationality {
                        territory: short_name.clone(),
                        owner: name.clone(),
                    }
                })?),
                None => None,
            };

            territories.push(Territory {
                short_name: short_name.clone(),
                display_name: def.name.clone(),
                is_supply_center: def.supply_center,
                owner,
                unit_strength: 0,
                unit_type: None,
                score: 0.0,
            });

            if def.supply_center {
                supply_centers.push(TerritoryId(i));
            }

            for (list, kind) in [
                (&def.army_moves, MoveKind::Army),
                (&def.fleet_moves, MoveKind::Fleet),
            ] {
                for neighbor in list {
                    let to = *index.get(neighbor).ok_or_else(|| {
                        ConfigError::UnknownNeighbor {
                            territory: short_name.clone(),
                            neighbor: neighbor.clone(),
                        }
                    })?;
                    edges[i].push(Adjacency { to, kind });
                }
            }
        }

        let neighbors = edges
            .iter()
            .map(|out| {
                let mut ids: Vec<TerritoryId> = out.iter().map(|a| a.to).collect();
                ids.sort();
                ids.dedup();
                ids
            })
            .collect();

        Ok(Board {
            territories,
            index,
            edges,
            neighbors,
            supply_centers,
        })
    }

    /// Builds the standard Diplomacy board from the embedded dataset.
    pub fn standard() -> Board {
        Board::build(&standard_definitions()).expect("embedded standard map is consistent")
    }

    /// Looks up a territory id by short name.
    pub fn resolve(&self, short_name: &str) -> Option<TerritoryId> {
        self.index.get(short_name).copied()
    }

    pub fn territory(&self, id: TerritoryId) -> &Territory {
        &self.territories[id.0]
    }

    pub fn territory_mut(&mut self, id: TerritoryId) -> &mut Territory {
        &mut self.territories[id.0]
    }

    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    /// All territory ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = TerritoryId> {
        (0..self.territories.len()).map(TerritoryId)
    }

    /// Supply-center ids in index order.
    pub fn supply_centers(&self) -> &[TerritoryId] {
        &self.supply_centers
    }

    /// Neighbor ids reachable from `id` by either move kind, each once.
    pub fn neighbors(&self, id: TerritoryId) -> &[TerritoryId] {
        &self.neighbors[id.0]
    }

    /// Outgoing edges with their move kinds (the multigraph view).
    pub fn edges(&self, id: TerritoryId) -> &[Adjacency] {
        &self.edges[id.0]
    }
}
