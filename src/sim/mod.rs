//! Driving games to completion: a single game, a round-robin batch sharing
//! one event stream, or a batch spread over worker threads.

mod game;
mod report;
mod round_robin;
mod runner;
mod summary;

pub use game::{play_game, GameRecord};
pub use report::write_report;
pub use round_robin::RoundRobin;
pub use runner::{play_parallel, SimulationConfig, Simulator};
pub use summary::Summary;
