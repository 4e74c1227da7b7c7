//! The Running/Dead state machine around the engine.
//!
//! Death does not end the process: the session lingers in [`Phase::Dead`]
//! for the configured pause and then rebuilds the arena from scratch. Time
//! is passed in by the caller so the transitions are unit-testable.

use std::time::{Duration, Instant};

use crate::game::{
    Action, CollisionType, Direction, GameConfig, GameEngine, GameState, StepOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Dead {
        since: Instant,
        collision: CollisionType,
    },
}

/// What a single tick did, for the caller's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The snake moved one cell; fruit and growth are already resolved
    /// inside the state.
    Advanced,
    Died { collision: CollisionType, final_score: u32 },
    /// The death pause elapsed; snake and fruit are back at initial state.
    Respawned,
    /// Still inside the death pause.
    Waiting,
}

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    phase: Phase,
    pending_turn: Option<Direction>,
    respawn_delay: Duration,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let respawn_delay = Duration::from_millis(config.respawn_delay_ms);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        Self {
            engine,
            state,
            phase: Phase::Running,
            pending_turn: None,
            respawn_delay,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    /// Record a turn for the next tick. Only the latest turn within a tick
    /// survives; reversals are filtered by the engine when applied.
    pub fn queue_turn(&mut self, direction: Direction) {
        self.pending_turn = Some(direction);
    }

    /// Advance the session by one tick at time `now`.
    pub fn tick(&mut self, now: Instant) -> TickEvent {
        match self.phase {
            Phase::Running => {
                let action = match self.pending_turn.take() {
                    Some(direction) => Action::Turn(direction),
                    None => Action::Continue,
                };
                match self.engine.step(&mut self.state, action) {
                    StepOutcome::Moved { .. } => TickEvent::Advanced,
                    StepOutcome::Died(collision) => {
                        self.phase = Phase::Dead {
                            since: now,
                            collision,
                        };
                        TickEvent::Died {
                            collision,
                            final_score: self.state.score,
                        }
                    }
                }
            }
            Phase::Dead { since, .. } => {
                if now.duration_since(since) >= self.respawn_delay {
                    self.respawn();
                    TickEvent::Respawned
                } else {
                    TickEvent::Waiting
                }
            }
        }
    }

    /// Reset immediately, without waiting out the death pause.
    pub fn restart(&mut self) {
        self.respawn();
    }

    fn respawn(&mut self) {
        self.state = self.engine.reset();
        self.phase = Phase::Running;
        self.pending_turn = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn new_session() -> GameSession {
        GameSession::new(GameConfig::small())
    }

    /// Turning left on the spawn column walks the head off the arena.
    fn kill(session: &mut GameSession, now: Instant) -> TickEvent {
        session.queue_turn(Direction::Left);
        session.tick(now)
    }

    #[test]
    fn ordinary_ticks_report_advanced() {
        let mut session = new_session();
        assert_eq!(session.tick(Instant::now()), TickEvent::Advanced);
    }

    #[test]
    fn queued_turn_is_consumed_once() {
        let mut session = new_session();
        let now = Instant::now();

        session.queue_turn(Direction::Right);
        session.tick(now);
        assert_eq!(session.state().snake.direction, Direction::Right);

        // No turn queued this time; the heading sticks.
        session.tick(now);
        assert_eq!(session.state().snake.direction, Direction::Right);
    }

    #[test]
    fn death_moves_the_session_to_dead() {
        let mut session = new_session();
        let now = Instant::now();

        let event = kill(&mut session, now);

        assert_eq!(
            event,
            TickEvent::Died {
                collision: CollisionType::Wall,
                final_score: 0
            }
        );
        assert!(!session.is_running());
    }

    #[test]
    fn dead_session_waits_out_the_pause() {
        let mut session = new_session();
        let now = Instant::now();
        kill(&mut session, now);

        let event = session.tick(now + Duration::from_millis(999));
        assert_eq!(event, TickEvent::Waiting);
        assert!(!session.is_running());
    }

    #[test]
    fn respawn_restores_the_initial_state() {
        let mut session = new_session();
        let now = Instant::now();

        // Move away from spawn, then die.
        session.tick(now);
        kill(&mut session, now);

        let event = session.tick(now + Duration::from_secs(1));
        assert_eq!(event, TickEvent::Respawned);
        assert!(session.is_running());

        let state = session.state();
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Position::new(0, 2));
        assert_eq!(state.snake.direction, Direction::Down);
        assert!(!state.is_occupied_by_snake(state.fruit));
    }

    #[test]
    fn queued_turn_does_not_survive_a_respawn() {
        let mut session = new_session();
        let now = Instant::now();

        kill(&mut session, now);
        session.queue_turn(Direction::Right);
        session.tick(now + Duration::from_secs(1));

        // First tick after respawn continues straight down.
        session.tick(now + Duration::from_secs(1));
        assert_eq!(session.state().snake.direction, Direction::Down);
    }

    #[test]
    fn restart_skips_the_pause() {
        let mut session = new_session();
        let now = Instant::now();
        kill(&mut session, now);

        session.restart();

        assert!(session.is_running());
        assert_eq!(session.state().score, 0);
    }
}
