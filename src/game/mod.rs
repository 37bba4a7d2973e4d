//! Core baseball scoring engine: batting orders, base occupancy, team
//! totals and the state machine that resolves each plate appearance.

pub mod bases;
mod event;
mod lineup;
mod side;
mod state;
mod team;

pub use bases::BaseState;
pub use event::{Event, OUT_CODE};
pub use lineup::{BatterId, LineupTracker, LINEUP_SIZE};
pub use side::Side;
pub use state::{FinalScore, GameId, GameOutcome, GameState, PlayOutcome};
pub use team::{Team, INNINGS_PER_GAME, OUTS_PER_INNING};
