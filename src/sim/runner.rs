use std::thread;

use tracing::{debug, info};

use super::game::{play_game, GameRecord};
use super::round_robin::RoundRobin;
use crate::error::SimulationError;
use crate::game::GameId;
use crate::source::{EventSource, UniformEventSource};

/// How a batch of games is played.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_games: u32,
    /// Fixed seed for reproducible runs; OS entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Spread games over worker threads instead of round-robin.
    pub parallel: bool,
    pub threads: usize,
    /// Safety bound on events resolved per game.
    pub max_events_per_game: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 3,
            seed: None,
            parallel: false,
            threads: 4,
            max_events_per_game: 100_000,
        }
    }
}

/// Plays a batch of games according to a [`SimulationConfig`].
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Simulator { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every game to completion. Records are in game-id order.
    pub fn run(&self) -> Result<Vec<GameRecord>, SimulationError> {
        let c = &self.config;
        info!(
            games = c.num_games,
            parallel = c.parallel,
            seed = ?c.seed,
            "starting simulation"
        );
        if c.parallel {
            play_parallel(c.num_games, c.threads, c.seed, c.max_events_per_game)
        } else {
            let mut source = UniformEventSource::from_seed(c.seed);
            self.run_with(&mut source)
        }
    }

    /// Round-robin the batch over a caller-supplied event stream.
    pub fn run_with(&self, source: &mut dyn EventSource) -> Result<Vec<GameRecord>, SimulationError> {
        RoundRobin::new(self.config.num_games, self.config.max_events_per_game).run(source)
    }
}

/// Play `num_games` games on up to `threads` workers. Game `i` draws from
/// its own source seeded with `seed + i`, so results do not depend on the
/// thread count.
pub fn play_parallel(
    num_games: u32,
    threads: usize,
    seed: Option<u64>,
    max_events: usize,
) -> Result<Vec<GameRecord>, SimulationError> {
    let workers = threads.clamp(1, (num_games as usize).max(1));
    debug!(num_games, workers, "spawning simulation workers");

    let per_worker: Vec<Vec<(GameId, Result<GameRecord, SimulationError>)>> =
        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|w| {
                    scope.spawn(move || {
                        (0..num_games)
                            .skip(w)
                            .step_by(workers)
                            .map(|i| {
                                let id = GameId(i);
                                let mut source = UniformEventSource::from_seed(
                                    seed.map(|s| s.wrapping_add(u64::from(i))),
                                );
                                (id, play_game(id, &mut source, max_events))
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .enumerate()
                .map(|(w, h)| {
                    h.join()
                        .map_err(|_| SimulationError::WorkerPanicked(w))
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

    let mut results: Vec<_> = per_worker.into_iter().flatten().collect();
    results.sort_by_key(|(id, _)| *id);
    results.into_iter().map(|(_, r)| r).collect()
}
