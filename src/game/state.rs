use std::collections::VecDeque;

use super::action::Direction;

/// A cell coordinate on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake: an ordered run of cells stored tail-first, head-last.
///
/// The head is always the back of the deque; advancing pushes the new head
/// to the back and (when not growing) pops the tail off the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub cells: VecDeque<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of `length` cells ending at `head`, laid out opposite
    /// to `direction` so the first move continues straight ahead.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let cells = (0..length)
            .rev()
            .map(|i| head.moved_by(-dx * i as i32, -dy * i as i32))
            .collect();

        Self { cells, direction }
    }

    /// Get the head position (last cell)
    pub fn head(&self) -> Position {
        *self.cells.back().expect("snake has at least one cell")
    }

    /// Get the tail position (first cell)
    pub fn tail(&self) -> Position {
        *self.cells.front().expect("snake has at least one cell")
    }

    /// Change heading unless the request reverses the current heading.
    /// Returns whether the heading actually changed.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.direction.is_opposite(requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Check whether any current cell occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Drop the tail cell (constant-length movement)
    pub fn pop_tail(&mut self) -> Option<Position> {
        self.cells.pop_front()
    }

    /// Append a new head cell
    pub fn push_head(&mut self, pos: Position) {
        self.cells.push_back(pos);
    }

    /// Number of body cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub is_alive: bool,
    pub cause_of_death: Option<CollisionType>,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            is_alive: true,
            cause_of_death: None,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }
}
