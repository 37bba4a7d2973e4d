//! # Baseball Sim
//!
//! A toy, turn-based baseball scoring simulator. Each plate appearance is
//! an out or a hit worth one to four bases, drawn uniformly at random; the
//! engine moves runners, credits runs and rolls innings over until both
//! sides have batted nine innings.
//!
//! ## Modules
//!
//! - [`game`] — Core engine: lineups, bases, teams and the inning state machine
//! - [`source`] — Event sources: uniform random and scripted
//! - [`sim`] — Single-game, round-robin and multi-threaded drivers, batch summary
//! - [`store`] — SQLite persistence of final scores
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod sim;
pub mod source;
pub mod store;
