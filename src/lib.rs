//! Serpent - classic grid Snake with a pure simulation core
//!
//! This library provides:
//! - Core game logic with no I/O dependencies (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - The timer-driven terminal session (session module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
pub mod session;
