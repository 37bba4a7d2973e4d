use super::EventSource;
use crate::error::InvariantViolation;
use crate::game::Event;

/// Replays a fixed list of events. Used to drive exact scenarios and to
/// feed adversarial streams to the simulator.
pub struct ScriptedEventSource {
    events: Vec<Event>,
    position: usize,
    cycle: bool,
}

impl ScriptedEventSource {
    /// Plays `events` once; asking for more afterwards panics.
    pub fn new(events: Vec<Event>) -> Self {
        ScriptedEventSource {
            events,
            position: 0,
            cycle: false,
        }
    }

    /// Plays `events` over and over.
    pub fn cycling(events: Vec<Event>) -> Self {
        assert!(!events.is_empty(), "cannot cycle an empty script");
        ScriptedEventSource {
            events,
            position: 0,
            cycle: true,
        }
    }

    /// Build a script from raw codes, rejecting anything outside 0..=4.
    pub fn from_codes(codes: &[u8]) -> Result<Self, InvariantViolation> {
        let events = codes
            .iter()
            .map(|&c| Event::from_code(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(events))
    }

    pub fn remaining(&self) -> usize {
        if self.cycle {
            usize::MAX
        } else {
            self.events.len() - self.position
        }
    }
}

impl EventSource for ScriptedEventSource {
    fn next_event(&mut self) -> Event {
        if self.cycle && self.position == self.events.len() {
            self.position = 0;
        }
        let event = *self
            .events
            .get(self.position)
            .unwrap_or_else(|| panic!("event script exhausted after {} events", self.position));
        self.position += 1;
        event
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_in_order() {
        let mut source = ScriptedEventSource::new(vec![Event::Out, Event::Advance(2)]);
        assert_eq!(source.next_event(), Event::Out);
        assert_eq!(source.next_event(), Event::Advance(2));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "event script exhausted")]
    fn test_exhausted_script_panics() {
        let mut source = ScriptedEventSource::new(vec![Event::Out]);
        source.next_event();
        source.next_event();
    }

    #[test]
    fn test_cycling_wraps() {
        let mut source = ScriptedEventSource::cycling(vec![Event::Out, Event::Advance(1)]);
        let drawn: Vec<_> = (0..5).map(|_| source.next_event()).collect();
        assert_eq!(
            drawn,
            vec![
                Event::Out,
                Event::Advance(1),
                Event::Out,
                Event::Advance(1),
                Event::Out
            ]
        );
    }

    #[test]
    fn test_from_codes_rejects_unknown() {
        assert!(ScriptedEventSource::from_codes(&[0, 1, 4]).is_ok());
        assert!(matches!(
            ScriptedEventSource::from_codes(&[0, 9]),
            Err(InvariantViolation::UnknownEventCode(9))
        ));
    }
}
