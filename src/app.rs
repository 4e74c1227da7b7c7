//! Terminal lifecycle and the driving loop.
//!
//! One task owns everything: key events, game ticks, and render frames are
//! multiplexed with `select!`, so no state ever crosses a thread boundary.

use std::io::{stderr, Stderr};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::interval;

use crate::game::GameConfig;
use crate::input::{self, Command};
use crate::metrics::GameMetrics;
use crate::render;
use crate::session::{GameSession, TickEvent};

const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct App {
    session: GameSession,
    metrics: GameMetrics,
    tick_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        // A zero period would panic inside `tokio::time::interval`.
        let tick_interval = Duration::from_millis(config.tick_interval_ms.max(1));
        Self {
            session: GameSession::new(config),
            metrics: GameMetrics::new(),
            tick_interval,
            should_quit: false,
        }
    }

    /// Set up the terminal, run the loop, and restore the terminal even
    /// when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = stderr();
        execute!(out, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(out)).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.event_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut keys = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = keys.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    match self.session.tick(Instant::now()) {
                        TickEvent::Died { final_score, .. } => {
                            self.metrics.on_game_over(final_score);
                        }
                        TickEvent::Respawned => self.metrics.on_game_start(),
                        TickEvent::Advanced | TickEvent::Waiting => {}
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal
                        .draw(|frame| render::draw(frame, &self.session, &self.metrics))
                        .context("failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match input::decode_key(key) {
            Some(Command::Turn(direction)) => self.session.queue_turn(direction),
            Some(Command::Restart) => {
                self.session.restart();
                self.metrics.on_game_start();
            }
            Some(Command::Quit) => self.should_quit = true,
            None => {}
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use crate::game::Direction;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn starts_running_with_a_fresh_game() {
        let app = App::new(GameConfig::default());
        assert!(app.session.is_running());
        assert_eq!(app.session.state().score, 0);
        assert_eq!(app.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn zero_tick_interval_is_floored() {
        let mut config = GameConfig::default();
        config.tick_interval_ms = 0;
        let app = App::new(config);
        assert!(app.tick_interval >= Duration::from_millis(1));
    }

    #[test]
    fn direction_keys_queue_a_turn() {
        let mut app = App::new(GameConfig::default());
        app.handle_event(press(KeyCode::Right));
        app.session.tick(Instant::now());
        assert_eq!(app.session.state().snake.direction, Direction::Right);
    }

    #[test]
    fn quit_key_flags_the_loop() {
        let mut app = App::new(GameConfig::default());
        app.handle_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut app = App::new(GameConfig::default());
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        app.handle_event(release);
        assert!(!app.should_quit);
    }
}
