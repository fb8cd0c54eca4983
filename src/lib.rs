//! Entente engine library.
//!
//! Exposes the board model, scoring, order generation, bot session, and
//! protocol modules for use by integration tests and the binary entry point.

pub mod board;
pub mod bot;
pub mod orders;
pub mod protocol;
pub mod scoring;
