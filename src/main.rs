//! Entente -- a territory-valuation Diplomacy bot engine.
//!
//! This binary reads events from stdin and writes responses to stdout, one
//! line each way. The transport layer that speaks to an actual game server
//! is expected to sit on the other side of these pipes.

use std::io::{self, BufRead, Write};

use entente::board::Nationality;
use entente::bot::Bot;
use entente::protocol::{format_outbound, parse_event, Event};

/// Runs the main event loop, reading lines from stdin and writing responses
/// to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    // The identity is provisional until a `join` event rebinds it.
    let mut bot = Bot::new(Nationality::Austria);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let event = match parse_event(&line) {
            Some(e) => e,
            None => continue,
        };

        if event == Event::Quit {
            break;
        }

        for outbound in bot.handle_event(event) {
            if writeln!(out, "{}", format_outbound(bot.board(), &outbound)).is_err() {
                return;
            }
        }
        if out.flush().is_err() {
            return;
        }
    }
}
