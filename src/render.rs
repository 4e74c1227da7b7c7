//! ratatui rendering: stats header, the arena grid, key help, and the
//! game-over screen shown while the death pause runs down.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as Dir, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CollisionType, GameState, Position};
use crate::metrics::GameMetrics;
use crate::session::{GameSession, Phase};

pub fn draw(frame: &mut Frame, session: &GameSession, metrics: &GameMetrics) {
    let rows = Layout::default()
        .direction(Dir::Vertical)
        .constraints([
            Constraint::Length(3), // stats
            Constraint::Min(0),    // arena
            Constraint::Length(3), // key help
        ])
        .split(frame.area());

    frame.render_widget(stats_line(session.state(), metrics), rows[0]);

    let arena_area = centered(rows[1]);
    match session.phase() {
        Phase::Running => frame.render_widget(arena(session.state()), arena_area),
        Phase::Dead { collision, .. } => {
            frame.render_widget(game_over(session.state(), collision), arena_area)
        }
    }

    frame.render_widget(key_help(), rows[2]);
}

fn centered(area: Rect) -> Rect {
    Layout::default()
        .direction(Dir::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area)[1]
}

fn arena(state: &GameState) -> Paragraph<'_> {
    let head_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let body_style = Style::default().fg(Color::Green);
    let fruit_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let empty_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(state.arena_height);
    for y in 0..state.arena_height {
        let mut spans = Vec::with_capacity(state.arena_width);
        for x in 0..state.arena_width {
            let pos = Position::new(x as i32, y as i32);
            let span = if pos == state.snake.head() {
                Span::styled("■ ", head_style)
            } else if state.snake.collides_with_body(pos) {
                Span::styled("□ ", body_style)
            } else if pos == state.fruit {
                Span::styled("● ", fruit_style)
            } else {
                Span::styled("· ", empty_style)
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(" snake "),
    )
}

fn stats_line<'a>(state: &GameState, metrics: &GameMetrics) -> Paragraph<'a> {
    let label = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        Span::raw("    "),
        Span::styled("Length: ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::raw("    "),
        Span::styled("Best: ", label),
        Span::styled(metrics.high_score.max(state.score).to_string(), value),
        Span::raw("    "),
        Span::styled("Time: ", label),
        Span::styled(metrics.format_time(), value),
    ]);

    Paragraph::new(line).alignment(Alignment::Center)
}

fn game_over<'a>(state: &GameState, collision: CollisionType) -> Paragraph<'a> {
    let cause = match collision {
        CollisionType::Wall => "The snake hit the wall.",
        CollisionType::SelfCollision => "The snake bit itself.",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("Final score: {}", state.score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Restarting shortly... (R to restart now, Q to quit)",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
}

fn key_help<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" to steer | "),
        Span::styled("R", Style::default().fg(Color::Green)),
        Span::raw(" to restart | "),
        Span::styled("Q", Style::default().fg(Color::Red)),
        Span::raw(" to quit"),
    ]);

    Paragraph::new(line).alignment(Alignment::Center)
}
