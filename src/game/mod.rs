//! Core game logic for Snake
//!
//! Everything in here is pure simulation: no I/O, no rendering, no timers.
//! The frontend drives it through `GameEngine` and observes it through
//! `EventSink`.

pub mod action;
pub mod config;
pub mod engine;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use events::{EventSink, LogSink, NullSink};
pub use state::{CollisionType, GameState, Position, Snake};
