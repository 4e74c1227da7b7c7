use super::action::Direction;

/// A cell on the arena grid, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved_by(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn moved_in(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The player's snake: ordered body segments with the head at index 0,
/// plus the current heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Lay out a snake of `length` segments with `head` in front and the
    /// rest of the body trailing opposite to the heading.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();
        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        *self.body.last().expect("snake body is never empty")
    }

    /// Body segments behind the head.
    pub fn trailing_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.trailing_segments().contains(&pos)
    }

    /// Prepend a new head one cell along the current heading. The tail is
    /// retained when `grow` is set, so the body gains one segment.
    ///
    /// Callers must rule out wall and body collisions first; advancing is
    /// unconditional.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.head().moved_in(self.direction);
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What the snake ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    Wall,
    SelfCollision,
}

/// Everything the game tracks between ticks: the snake, the fruit, the
/// arena bounds, and the running counters.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Position,
    pub arena_width: usize,
    pub arena_height: usize,
    pub score: u32,
    pub ticks: u32,
}

impl GameState {
    pub fn new(snake: Snake, fruit: Position, arena_width: usize, arena_height: usize) -> Self {
        Self {
            snake,
            fruit,
            arena_width,
            arena_height,
            score: 0,
            ticks: 0,
        }
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.arena_width as i32
            && pos.y >= 0
            && pos.y < self.arena_height as i32
    }

    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_moves_by_delta() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in(Direction::Left), Position::new(4, 5));
    }

    #[test]
    fn snake_trails_behind_its_head() {
        let snake = Snake::new(Position::new(0, 2), Direction::Down, 3);
        assert_eq!(
            snake.body,
            vec![Position::new(0, 2), Position::new(0, 1), Position::new(0, 0)]
        );
        assert_eq!(snake.head(), Position::new(0, 2));
        assert_eq!(snake.tail(), Position::new(0, 0));
    }

    #[test]
    fn advance_shifts_the_whole_body() {
        // Body [[0,2],[0,1],[0,0]] heading Down advances to [[0,3],[0,2],[0,1]].
        let mut snake = Snake::new(Position::new(0, 2), Direction::Down, 3);
        snake.advance(false);
        assert_eq!(
            snake.body,
            vec![Position::new(0, 3), Position::new(0, 2), Position::new(0, 1)]
        );
    }

    #[test]
    fn advance_with_growth_keeps_the_tail() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let tail = snake.tail();

        snake.advance(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), tail);

        snake.advance(false);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn body_collision_excludes_the_head() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.collides_with_body(Position::new(5, 5)));
        assert!(snake.collides_with_body(Position::new(4, 5)));
        assert!(!snake.collides_with_body(Position::new(9, 9)));
    }

    #[test]
    fn bounds_cover_the_arena_exactly() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(10, 10),
            20,
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(0, -1)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }
}
