use serde::{Deserialize, Serialize};

/// Smallest accepted arena edge. Leaves the spawn column room for the
/// default snake plus a first turn.
pub const MIN_ARENA_SPAN: usize = 5;

/// Tunable parameters for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Arena width in cells.
    pub arena_width: usize,
    /// Arena height in cells.
    pub arena_height: usize,
    /// Snake length at spawn. Must fit inside the arena height, since the
    /// snake spawns along the left edge heading down.
    pub initial_snake_length: usize,
    /// Milliseconds between game ticks (100 = 10 ticks per second).
    pub tick_interval_ms: u64,
    /// How long the game-over pause lasts before the arena resets.
    pub respawn_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 20,
            arena_height: 20,
            initial_snake_length: 3,
            tick_interval_ms: 100,
            respawn_delay_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Build a config for a `width` × `height` arena. Degenerate sizes are
    /// clamped up to [`MIN_ARENA_SPAN`] so the spawned snake always fits
    /// and fruit placement always has a free cell to find.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            arena_width: width.max(MIN_ARENA_SPAN),
            arena_height: height.max(MIN_ARENA_SPAN),
            ..Default::default()
        }
    }

    /// A cramped arena, handy in tests.
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}
