use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::Rng;

/// Outcome of advancing the game by one tick. Death is an ordinary return
/// value here; the caller decides what a death means (pause, reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake advanced one cell, growing when it landed on the fruit.
    Moved { ate_fruit: bool },
    /// The move would have left the arena or crossed the body.
    Died(CollisionType),
}

/// Owns the rules and the randomness; the state itself stays a plain value.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build a fresh initial state: the snake along the left edge heading
    /// down, the fruit somewhere outside it.
    pub fn reset(&mut self) -> GameState {
        let length = self.config.initial_snake_length;
        let snake = Snake::new(Position::new(0, length as i32 - 1), Direction::Down, length);
        let fruit = self.place_fruit(&snake);
        GameState::new(snake, fruit, self.config.arena_width, self.config.arena_height)
    }

    /// Advance one tick: apply the turn (reversals are ignored), move the
    /// head, and resolve collisions and fruit consumption.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepOutcome {
        if let Action::Turn(heading) = action {
            if !state.snake.direction.is_opposite(heading) {
                state.snake.direction = heading;
            }
        }

        state.ticks += 1;

        let next_head = state.snake.head().moved_in(state.snake.direction);
        if let Some(collision) = self.collision_at(state, next_head) {
            return StepOutcome::Died(collision);
        }

        let ate_fruit = next_head == state.fruit;
        state.snake.advance(ate_fruit);

        if ate_fruit {
            state.score += 1;
            state.fruit = self.place_fruit(&state.snake);
        }

        StepOutcome::Moved { ate_fruit }
    }

    fn collision_at(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            Some(CollisionType::Wall)
        } else if state.snake.collides_with_body(pos) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        }
    }

    /// Uniform rejection sampling over the arena until a cell outside the
    /// snake comes up. The arena never gets close to full, so this
    /// terminates quickly in practice.
    fn place_fruit(&mut self, snake: &Snake) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.config.arena_width) as i32,
                self.rng.gen_range(0..self.config.arena_height) as i32,
            );
            if !snake.body.contains(&pos) {
                return pos;
            }
        }
    }
}
