/// Cardinal heading of the snake on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector (dx, dy) for this heading; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The geometric opposite of this heading.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether turning onto `other` would reverse the snake into itself.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// One player decision per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Turn onto a new heading before advancing.
    Turn(Direction),
    /// Keep the current heading.
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Turn(direction)
    }
}
