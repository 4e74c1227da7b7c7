//! Classic snake in the terminal.
//!
//! The crate splits into a pure game core (`game`), the Running/Dead state
//! machine that wraps it (`session`), and the thin terminal layers around
//! them (`input`, `render`, `app`).

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
pub mod session;
