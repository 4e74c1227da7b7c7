//! Session bookkeeping shown in the stats header.

use std::time::{Duration, Instant};

pub struct GameMetrics {
    started_at: Instant,
    pub elapsed: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed clock; called once per render frame.
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Current game time as MM:SS.
    pub fn format_time(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
