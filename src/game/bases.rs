use super::BatterId;
use crate::error::InvariantViolation;

pub const HOME_PLATE: usize = 0;
pub const FIRST: usize = 1;
pub const SECOND: usize = 2;
pub const THIRD: usize = 3;
pub const SLOTS: usize = 4;

/// Base occupancy. Slot 0 holds the batter at the plate, slots 1..=3 hold
/// runners on first, second and third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseState {
    slots: [Option<BatterId>; SLOTS],
}

impl BaseState {
    /// Create empty bases
    pub fn new() -> Self {
        BaseState::default()
    }

    pub fn get(&self, slot: usize) -> Option<BatterId> {
        self.slots[slot]
    }

    /// The batter currently at the plate
    pub fn at_bat(&self) -> Option<BatterId> {
        self.slots[HOME_PLATE]
    }

    /// Clear a slot, returning whoever stood on it
    pub fn take(&mut self, slot: usize) -> Option<BatterId> {
        self.slots[slot].take()
    }

    /// Bases with only `batter` at the plate
    pub fn with_batter(batter: BatterId) -> Self {
        let mut slots = [None; SLOTS];
        slots[HOME_PLATE] = Some(batter);
        BaseState { slots }
    }

    /// Put a batter on an empty slot. An occupied slot is refused rather
    /// than overwritten.
    pub fn place(&mut self, slot: usize, batter: BatterId) -> Result<(), InvariantViolation> {
        if let Some(occupant) = self.slots[slot] {
            return Err(InvariantViolation::BaseOccupied { slot, occupant });
        }
        self.slots[slot] = Some(batter);
        Ok(())
    }

    /// Runners on first, second and third, in slot order
    pub fn runners(&self) -> impl Iterator<Item = (usize, BatterId)> + '_ {
        (FIRST..=THIRD).filter_map(move |slot| self.slots[slot].map(|b| (slot, b)))
    }

    pub fn runner_count(&self) -> usize {
        self.runners().count()
    }

    /// Everyone holding a slot, the batter included
    pub fn occupants(&self) -> impl Iterator<Item = BatterId> + '_ {
        self.slots.iter().flatten().copied()
    }
}
