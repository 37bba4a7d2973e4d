use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvariantViolation;

/// Raw code the event source uses for an out.
pub const OUT_CODE: u8 = 0;

/// Result of one plate appearance: the batter is out, or reaches base
/// having advanced 1 to 4 bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    Out,
    Advance(u8),
}

impl Event {
    /// The five possible events, in code order.
    pub const ALL: [Event; 5] = [
        Event::Out,
        Event::Advance(1),
        Event::Advance(2),
        Event::Advance(3),
        Event::Advance(4),
    ];

    /// Decode a raw code: 0 is an out, 1..=4 are bases advanced.
    pub fn from_code(code: u8) -> Result<Event, InvariantViolation> {
        match code {
            OUT_CODE => Ok(Event::Out),
            1..=4 => Ok(Event::Advance(code)),
            other => Err(InvariantViolation::UnknownEventCode(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Event::Out => OUT_CODE,
            Event::Advance(n) => n,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Out => f.write_str("out"),
            Event::Advance(1) => f.write_str("single"),
            Event::Advance(2) => f.write_str("double"),
            Event::Advance(3) => f.write_str("triple"),
            Event::Advance(4) => f.write_str("home run"),
            Event::Advance(n) => write!(f, "advance {n}"),
        }
    }
}
