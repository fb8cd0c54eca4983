//! Territory scoring.
//!
//! Assigns every territory a desirability score, highest = most attractive.
//! Supply centers are seeded directly from the threat/strength picture; the
//! rest of the board inherits value outward from the centers, decaying by a
//! constant factor per step of graph distance.
//!
//! The pass is deterministic for a fixed board state: iteration follows the
//! id order fixed at build time and no randomness is involved.

use std::collections::VecDeque;

use crate::board::{Board, Nationality, TerritoryId};

/// Damping applied per propagation step away from the supply centers.
pub const DECAY: f64 = 0.2;

/// Recomputes the score of every territory on the board.
///
/// Seed phase, per supply center:
/// - owned by `nationality`: the total strength of adjacent territories not
///   owned by the bot, minus the center's own strength (threat net of
///   defense);
/// - occupied by anyone else: the occupying strength (contested centers are
///   attractive in proportion to their garrison);
/// - otherwise zero.
///
/// Propagation phase: breadth-first outward from the centers. The frontier
/// starts with every center's neighbors; each territory is visited once and
/// scores `DECAY` times the sum of its already-visited neighbors' scores.
///
/// Must run after every synchronization and after any strength mutation made
/// while simulating reinforcement placement.
pub fn score(board: &mut Board, nationality: Nationality) {
    for id in board.ids() {
        board.territory_mut(id).score = 0.0;
    }

    let centers: Vec<TerritoryId> = board.supply_centers().to_vec();

    for &center in &centers {
        let info = board.territory(center);
        let value = if info.owner == Some(nationality) {
            let threat: f64 = board
                .neighbors(center)
                .iter()
                .map(|&n| board.territory(n))
                .filter(|t| t.owner != Some(nationality))
                .map(|t| f64::from(t.unit_strength))
                .sum();
            threat - f64::from(info.unit_strength)
        } else if info.unit_strength > 0 {
            f64::from(info.unit_strength)
        } else {
            0.0
        };
        board.territory_mut(center).score = value;
    }

    let mut visited = vec![false; board.territory_count()];
    for &center in &centers {
        visited[center.index()] = true;
    }

    // The frontier starts at the centers' neighbors; an empty initial
    // frontier would never carry value off the seeds.
    let mut frontier: VecDeque<TerritoryId> = VecDeque::new();
    for &center in &centers {
        frontier.extend(board.neighbors(center).iter().copied());
    }

    while let Some(id) = frontier.pop_front() {
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;

        let inherited: f64 = board
            .neighbors(id)
            .iter()
            .filter(|n| visited[n.index()])
            .map(|&n| board.territory(n).score)
            .sum();
        board.territory_mut(id).score = DECAY * inherited;

        for &n in board.neighbors(id) {
            if !visited[n.index()] {
                frontier.push_back(n);
            }
        }
    }
}
