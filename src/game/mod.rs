//! Core game rules: the snake, the arena, and the per-tick update.
//!
//! Nothing in here touches the terminal or the runtime, so the whole module
//! is exercised directly by unit tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome};
pub use state::{CollisionType, GameState, Position, Snake};
