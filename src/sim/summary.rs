use std::fmt;

use serde::Serialize;

use super::GameRecord;
use crate::game::{FinalScore, GameOutcome};

/// Totals across a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub home_wins: usize,
    pub away_wins: usize,
    pub draws: usize,
    pub home_runs: u64,
    pub away_runs: u64,
}

impl Summary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut summary = Summary::default();
        for record in records {
            summary.record(&record.score);
        }
        summary
    }

    pub fn record(&mut self, score: &FinalScore) {
        self.games += 1;
        self.home_runs += u64::from(score.home);
        self.away_runs += u64::from(score.away);
        match score.outcome() {
            GameOutcome::HomeWin => self.home_wins += 1,
            GameOutcome::AwayWin => self.away_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn average_home_runs(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.home_runs as f64 / self.games as f64
    }

    pub fn average_away_runs(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.away_runs as f64 / self.games as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games: {} | home wins: {} | away wins: {} | draws: {} | avg runs home {:.2} away {:.2}",
            self.games,
            self.home_wins,
            self.away_wins,
            self.draws,
            self.average_home_runs(),
            self.average_away_runs(),
        )
    }
}
