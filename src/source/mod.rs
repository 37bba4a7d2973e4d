//! Producers of plate-appearance events.

mod scripted;
mod uniform;

pub use scripted::ScriptedEventSource;
pub use uniform::UniformEventSource;

use crate::game::Event;

/// Anything that can decide what happens at the plate next.
pub trait EventSource {
    fn next_event(&mut self) -> Event;

    /// Name used in logs.
    fn name(&self) -> &str;
}
