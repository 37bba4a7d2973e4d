use tracing::debug;

use super::game::{finish, step, GameRecord};
use crate::error::SimulationError;
use crate::game::{GameId, GameState};
use crate::source::EventSource;

struct ActiveGame {
    state: GameState,
    events: usize,
}

/// A batch of independent games advanced in turn. Each pass gives every
/// unfinished game one event, in game-id order, all drawn from the same
/// source.
pub struct RoundRobin {
    games: Vec<ActiveGame>,
    max_events: usize,
    passes: usize,
}

impl RoundRobin {
    /// Games numbered `0..num_games`.
    pub fn new(num_games: u32, max_events: usize) -> Self {
        let games = (0..num_games)
            .map(|i| ActiveGame {
                state: GameState::new(GameId(i)),
                events: 0,
            })
            .collect();
        RoundRobin {
            games,
            max_events,
            passes: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.games.iter().all(|g| g.state.is_complete())
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn games(&self) -> impl Iterator<Item = &GameState> + '_ {
        self.games.iter().map(|g| &g.state)
    }

    /// Advance every unfinished game by one event. Returns how many games
    /// were advanced.
    pub fn pass(&mut self, source: &mut dyn EventSource) -> Result<usize, SimulationError> {
        let mut advanced = 0;
        for game in self.games.iter_mut().filter(|g| !g.state.is_complete()) {
            step(&mut game.state, &mut game.events, source, self.max_events)?;
            advanced += 1;
        }
        self.passes += 1;
        Ok(advanced)
    }

    /// Run passes until every game is over; records come back in game-id
    /// order.
    pub fn run(mut self, source: &mut dyn EventSource) -> Result<Vec<GameRecord>, SimulationError> {
        debug!(games = self.games.len(), source = source.name(), "starting round robin");
        while !self.is_finished() {
            self.pass(source)?;
        }
        debug!(passes = self.passes, "round robin finished");
        Ok(self
            .games
            .iter()
            .map(|g| finish(&g.state, g.events))
            .collect())
    }
}
