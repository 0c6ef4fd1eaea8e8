//! Observer seam for the game's notification hooks.
//!
//! The core announces a successful turn, a meal, and death. Whatever a
//! sink does with those moments (audio cues, logging, nothing) must never
//! feed back into the simulation, so every hook is fire-and-forget and
//! returns nothing.

/// Receives fire-and-forget notifications from the simulation
pub trait EventSink {
    /// The heading actually changed in response to an input
    fn direction_changed(&mut self) {}

    /// The snake consumed the food this tick
    fn food_eaten(&mut self) {}

    /// The snake hit a wall or itself
    fn game_over(&mut self) {}
}

/// Sink that ignores every event
pub struct NullSink;

impl EventSink for NullSink {}

/// Sink that forwards events to the `log` facade at debug level
pub struct LogSink;

impl EventSink for LogSink {
    fn direction_changed(&mut self) {
        log::debug!("direction changed");
    }

    fn food_eaten(&mut self) {
        log::debug!("food eaten");
    }

    fn game_over(&mut self) {
        log::debug!("game over");
    }
}
