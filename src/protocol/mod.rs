//! Transport-facing event protocol.
//!
//! Parses incoming text lines into tagged [`Event`] variants for the bot to
//! dispatch on, and formats [`Outbound`] responses back into single text
//! lines. The stdin/stdout loop around this lives in `main.rs`; everything
//! session-specific (connection ids, wire framing) is the transport's
//! problem and never reaches the engine.
//!
//! Commands:
//! - `hello`
//! - `join <nationality>`
//! - `state <json unit list>`
//! - `go primary` | `go secondary <count>`
//! - `quit`

use crate::board::{Board, Nationality, TerritoryId, UnitRecord};
use crate::orders::Order;

/// Which order-generation entry point a `go` selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Primary,
    Secondary { available: u32 },
}

/// A parsed inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Connect/login handshake.
    Hello,

    /// Joined a game as the given nationality; rebinds the bot identity and
    /// rebuilds its world model.
    Joined { nationality: Nationality },

    /// Server state update carrying the current unit list.
    StateUpdate { units: Vec<UnitRecord> },

    /// Compute orders now for the given phase.
    OrdersRequested { phase: TurnPhase },

    /// Terminate the process.
    Quit,
}

/// A response handed back to the transport for transmission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    Ready,
    Orders(Vec<Order>),
    Placements(Vec<TerritoryId>),
}

/// Parses a single line of input into an [`Event`].
///
/// Returns `None` for empty lines and unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_event(line: &str) -> Option<Event> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (trimmed, ""),
    };

    match command {
        "hello" => Some(Event::Hello),
        "quit" => Some(Event::Quit),
        "join" => parse_join(rest),
        "state" => parse_state(rest),
        "go" => parse_go(rest),
        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `join <nationality>`.
fn parse_join(rest: &str) -> Option<Event> {
    match Nationality::from_name(rest) {
        Some(nationality) => Some(Event::Joined { nationality }),
        None => {
            eprintln!("malformed join: unknown nationality '{}'", rest);
            None
        }
    }
}

/// Parses `state <json unit list>`.
fn parse_state(rest: &str) -> Option<Event> {
    match serde_json::from_str::<Vec<UnitRecord>>(rest) {
        Ok(units) => Some(Event::StateUpdate { units }),
        Err(e) => {
            eprintln!("malformed state payload: {}", e);
            None
        }
    }
}

/// Parses `go primary` or `go secondary <count>`.
fn parse_go(rest: &str) -> Option<Event> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some("primary"), None) => Some(Event::OrdersRequested {
            phase: TurnPhase::Primary,
        }),
        (Some("secondary"), Some(count)) => match count.parse::<u32>() {
            Ok(available) => Some(Event::OrdersRequested {
                phase: TurnPhase::Secondary { available },
            }),
            Err(_) => {
                eprintln!("malformed go: bad reinforcement count '{}'", count);
                None
            }
        },
        _ => {
            eprintln!("malformed go: expected 'go primary' or 'go secondary <count>'");
            None
        }
    }
}

/// Formats an outbound response as a single protocol line.
pub fn format_outbound(board: &Board, outbound: &Outbound) -> String {
    match outbound {
        Outbound::Ready => "ready".to_string(),
        Outbound::Orders(orders) => {
            if orders.is_empty() {
                "orders".to_string()
            } else {
                let formatted: Vec<String> =
                    orders.iter().map(|o| o.notation(board)).collect();
                format!("orders {}", formatted.join(" ; "))
            }
        }
        Outbound::Placements(placements) => {
            if placements.is_empty() {
                "place".to_string()
            } else {
                let names: Vec<&str> = placements
                    .iter()
                    .map(|&id| board.territory(id).short_name.as_str())
                    .collect();
                format!("place {}", names.join(" "))
            }
        }
    }
}
