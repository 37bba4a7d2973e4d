use super::Side;

/// Innings each side bats before the game ends.
pub const INNINGS_PER_GAME: u8 = 9;
pub const OUTS_PER_INNING: u8 = 3;

/// Running totals for one team. Counters only move through
/// [`Team::record_out`] and [`Team::add_runs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    side: Side,
    runs: u32,
    innings_completed: u8,
    outs_this_inning: u8,
}

impl Team {
    pub fn new(side: Side) -> Self {
        Team {
            side,
            runs: 0,
            innings_completed: 0,
            outs_this_inning: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn innings_completed(&self) -> u8 {
        self.innings_completed
    }

    pub fn outs_this_inning(&self) -> u8 {
        self.outs_this_inning
    }

    pub(crate) fn add_runs(&mut self, runs: u8) {
        self.runs += u32::from(runs);
    }

    /// Record an out. Returns true when it was the third, in which case the
    /// out count has been reset and the inning counted as completed.
    pub(crate) fn record_out(&mut self) -> bool {
        self.outs_this_inning += 1;
        if self.outs_this_inning == OUTS_PER_INNING {
            self.outs_this_inning = 0;
            self.innings_completed += 1;
            true
        } else {
            false
        }
    }

    pub fn has_finished_batting(&self) -> bool {
        self.innings_completed >= INNINGS_PER_GAME
    }
}
