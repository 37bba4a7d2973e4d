use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Side;
use crate::error::InvariantViolation;

/// Number of batters in a fresh lineup.
pub const LINEUP_SIZE: u8 = 9;

/// Identifier of a lineup entry. Displayed as a letter, `A` for the leadoff
/// hitter through `I` for the ninth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BatterId(pub u8);

impl fmt::Display for BatterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            n @ 0..=25 => write!(f, "{}", char::from(b'A' + n)),
            n => write!(f, "#{n}"),
        }
    }
}

/// Batting order for both teams. Batters leave the front of the queue to
/// come up to the plate and rejoin at the back once they are out or score,
/// so a team's batters are recycled and never lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupTracker {
    queues: [VecDeque<BatterId>; 2],
}

impl LineupTracker {
    /// Both teams with the standard nine-batter order.
    pub fn new() -> Self {
        let fresh = || (0..LINEUP_SIZE).map(BatterId).collect::<VecDeque<_>>();
        LineupTracker {
            queues: [fresh(), fresh()],
        }
    }

    /// Standard orders with `side`'s leadoff hitter already called up.
    pub fn with_leadoff_up(side: Side) -> (Self, BatterId) {
        let mut tracker = Self::new();
        let leadoff = BatterId(0);
        tracker.queues[side.index()].retain(|&b| b != leadoff);
        (tracker, leadoff)
    }

    #[cfg(test)]
    fn with_size(size: u8) -> Self {
        let fresh = || (0..size).map(BatterId).collect::<VecDeque<_>>();
        LineupTracker {
            queues: [fresh(), fresh()],
        }
    }

    /// Take the batter at the front of `side`'s order.
    pub fn next_batter(&mut self, side: Side) -> Result<BatterId, InvariantViolation> {
        self.queues[side.index()]
            .pop_front()
            .ok_or(InvariantViolation::LineupExhausted(side))
    }

    /// Send a batter to the back of `side`'s order.
    pub fn return_batter(&mut self, side: Side, batter: BatterId) {
        self.queues[side.index()].push_back(batter);
    }

    /// Batters waiting in `side`'s order, front first.
    pub fn waiting(&self, side: Side) -> impl Iterator<Item = BatterId> + '_ {
        self.queues[side.index()].iter().copied()
    }

    pub fn len(&self, side: Side) -> usize {
        self.queues[side.index()].len()
    }
}

impl Default for LineupTracker {
    fn default() -> Self {
        Self::new()
    }
}
