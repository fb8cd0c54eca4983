//! Order generation.
//!
//! Converts the current territory scores into the turn's order set (primary
//! phase) or a reinforcement placement list (secondary phase). Candidate
//! selection is randomized but biased toward the top of the score ranking:
//! a half-normal draw over rank position yields "usually the best option,
//! occasionally a deeper one". The RNG is injected so tests can seed it;
//! scoring itself stays fully deterministic.

use std::f64::consts::TAU;

use rand::Rng;

use crate::board::{Board, BotIdentity, Nationality, TerritoryId, UnitType};
use crate::scoring;

/// Spread (in rank positions) of the half-normal candidate draw.
///
/// At 0.9 roughly three quarters of draws land on the top-ranked candidate
/// and almost all of the rest on the next two.
const RANK_SPREAD: f64 = 0.9;

/// One order for a unit-bearing territory, produced fresh each turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Order {
    Hold {
        owner: Nationality,
        unit_type: UnitType,
        territory: TerritoryId,
    },
    Move {
        owner: Nationality,
        unit_type: UnitType,
        from: TerritoryId,
        to: TerritoryId,
    },
    Support {
        owner: Nationality,
        unit_type: UnitType,
        from: TerritoryId,
        to: TerritoryId,
    },
}

impl Order {
    /// The territory whose unit issues this order.
    pub fn issuing_territory(&self) -> TerritoryId {
        match *self {
            Order::Hold { territory, .. } => territory,
            Order::Move { from, .. } => from,
            Order::Support { from, .. } => from,
        }
    }

    /// Formats the order in text notation: `A vie H`, `A bud - rum`,
    /// `F tri S ven`.
    pub fn notation(&self, board: &Board) -> String {
        let name = |id: TerritoryId| board.territory(id).short_name.as_str();
        match *self {
            Order::Hold {
                unit_type,
                territory,
                ..
            } => format!("{} {} H", unit_type.notation_char(), name(territory)),
            Order::Move {
                unit_type, from, to, ..
            } => format!(
                "{} {} - {}",
                unit_type.notation_char(),
                name(from),
                name(to)
            ),
            Order::Support {
                unit_type, from, to, ..
            } => format!(
                "{} {} S {}",
                unit_type.notation_char(),
                name(from),
                name(to)
            ),
        }
    }
}

/// Draws a candidate index from |N(0, RANK_SPREAD)|, clamped to the list.
fn half_normal_index(rng: &mut impl Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    let u1: f64 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    ((z.abs() * RANK_SPREAD) as usize).min(len - 1)
}

/// Candidate destinations for a unit at `from`: itself plus its neighbors,
/// ranked by descending score with ties broken by ascending id.
fn ranked_candidates(board: &Board, from: TerritoryId) -> Vec<TerritoryId> {
    let mut candidates: Vec<TerritoryId> = board.neighbors(from).to_vec();
    candidates.push(from);
    candidates.sort_by(|&a, &b| {
        board
            .territory(b)
            .score
            .total_cmp(&board.territory(a).score)
            .then(a.cmp(&b))
    });
    candidates
}

/// Classifies a selected destination into an order.
fn classify(
    board: &Board,
    identity: &BotIdentity,
    from: TerritoryId,
    selected: TerritoryId,
) -> Order {
    let owner = identity.nationality;
    let unit_type = board.territory(from).unit_type.unwrap_or(UnitType::Army);
    if selected == from {
        return Order::Hold {
            owner,
            unit_type,
            territory: from,
        };
    }
    let target = board.territory(selected);
    if target.owner == Some(owner) && target.unit_strength > 0 {
        Order::Support {
            owner,
            unit_type,
            from,
            to: selected,
        }
    } else {
        Order::Move {
            owner,
            unit_type,
            from,
            to: selected,
        }
    }
}

/// Generates the primary-phase order set: one order per owned territory with
/// a unit in it. Zero-strength territories have nothing to command.
///
/// Expects scores to be current (run [`scoring::score`] after the last
/// synchronization).
pub fn generate_moves(board: &Board, identity: &BotIdentity, rng: &mut impl Rng) -> Vec<Order> {
    let mut orders = Vec::new();
    for &from in identity.owned() {
        if board.territory(from).unit_strength == 0 {
            continue;
        }
        let candidates = ranked_candidates(board, from);
        let selected = candidates[half_normal_index(rng, candidates.len())];
        orders.push(classify(board, identity, from, selected));
    }
    orders
}

/// Greedily allocates `count` reinforcements across the supply centers.
///
/// Each pick takes the highest-scoring center (ties to the lowest id),
/// simulates the placement by incrementing its strength, and re-runs the
/// full scoring pass so the next pick sees the updated picture. The caller
/// is responsible for `count` being consistent with game rules.
pub fn generate_reinforcements(
    board: &mut Board,
    identity: &BotIdentity,
    count: u32,
) -> Vec<TerritoryId> {
    let mut placements = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let best = board
            .supply_centers()
            .iter()
            .copied()
            .max_by(|&a, &b| {
                board
                    .territory(a)
                    .score
                    .total_cmp(&board.territory(b).score)
                    .then(b.cmp(&a))
            });
        let Some(center) = best else { break };
        placements.push(center);
        board.territory_mut(center).unit_strength += 1;
        scoring::score(board, identity.nationality);
    }
    placements
}
