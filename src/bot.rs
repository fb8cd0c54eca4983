//! Bot session state and event dispatch.
//!
//! Owns the board, the bot identity, and the order-selection RNG. Events
//! arrive one at a time from the transport and are processed synchronously:
//! synchronize, then score, then (on request) generate orders. Nothing here
//! blocks; every handler is a bounded computation over the in-memory graph.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{extract_owners, synchronize, Board, BotIdentity, Nationality};
use crate::orders::{generate_moves, generate_reinforcements};
use crate::protocol::{Event, Outbound, TurnPhase};
use crate::scoring;

/// Holds the mutable state of one bot instance between events.
///
/// Each instance owns its board exclusively; running several bots in one
/// process means several independent boards.
pub struct Bot {
    identity: BotIdentity,
    board: Board,
    rng: SmallRng,
}

impl Bot {
    /// Creates a bot for the given nationality on the standard map.
    pub fn new(nationality: Nationality) -> Self {
        Self::with_rng(nationality, SmallRng::from_entropy())
    }

    /// Creates a bot with a fixed RNG seed, for reproducible order draws.
    pub fn from_seed(nationality: Nationality, seed: u64) -> Self {
        Self::with_rng(nationality, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(nationality: Nationality, rng: SmallRng) -> Self {
        let board = Board::standard();
        let identity = BotIdentity::new(nationality, &board);
        Bot {
            identity,
            board,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    /// Processes one inbound event and returns the responses to transmit.
    ///
    /// Events are handled atomically: a payload that fails validation leaves
    /// the board exactly as it was.
    pub fn handle_event(&mut self, event: Event) -> Vec<Outbound> {
        match event {
            Event::Hello => vec![Outbound::Ready],

            Event::Joined { nationality } => {
                // Fresh world model keyed to the new identity.
                self.board = Board::standard();
                self.identity = BotIdentity::new(nationality, &self.board);
                vec![Outbound::Ready]
            }

            Event::StateUpdate { units } => {
                let snapshot = extract_owners(&units);
                synchronize(&mut self.board, &mut self.identity, &snapshot);
                scoring::score(&mut self.board, self.identity.nationality);
                Vec::new()
            }

            Event::OrdersRequested { phase } => match phase {
                TurnPhase::Primary => {
                    let orders = generate_moves(&self.board, &self.identity, &mut self.rng);
                    vec![Outbound::Orders(orders)]
                }
                TurnPhase::Secondary { available } => {
                    let placements =
                        generate_reinforcements(&mut self.board, &self.identity, available);
                    vec![Outbound::Placements(placements)]
                }
            },

            Event::Quit => Vec::new(),
        }
    }
}
