use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SimulationError;
use crate::game::{FinalScore, GameId, GameOutcome, GameState};
use crate::source::EventSource;

/// A finished game and how many events it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(flatten)]
    pub score: FinalScore,
    pub outcome: GameOutcome,
    pub events: usize,
}

impl GameRecord {
    pub fn new(score: FinalScore, events: usize) -> Self {
        GameRecord {
            score,
            outcome: score.outcome(),
            events,
        }
    }
}

/// Advance `state` by one event, enforcing the per-game event cap.
/// `events` counts what the game has resolved so far.
pub(crate) fn step(
    state: &mut GameState,
    events: &mut usize,
    source: &mut dyn EventSource,
    max_events: usize,
) -> Result<(), SimulationError> {
    if *events >= max_events {
        return Err(SimulationError::EventLimitExceeded {
            game_id: state.id(),
            limit: max_events,
        });
    }
    state.resolve_event(source.next_event())?;
    *events += 1;
    Ok(())
}

pub(crate) fn finish(state: &GameState, events: usize) -> GameRecord {
    let score = state.final_score();
    info!(
        game = %score.game_id,
        home = score.home,
        away = score.away,
        events,
        "game complete"
    );
    GameRecord::new(score, events)
}

/// Play a fresh game with the given id until both sides have batted nine
/// innings.
pub fn play_game(
    id: GameId,
    source: &mut dyn EventSource,
    max_events: usize,
) -> Result<GameRecord, SimulationError> {
    let mut state = GameState::new(id);
    let mut events = 0;
    while !state.is_complete() {
        step(&mut state, &mut events, source, max_events)?;
    }
    Ok(finish(&state, events))
}
