use crate::error::SnakeError;
use crate::food::Food;
use crate::geometry::{Bounds, Rect, CELL_SIZE};
use crate::input::Command;
use Direction::*;

use log::{debug, info};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    Paused,
}

impl Direction {
    pub fn opposite(&self) -> Option<Direction> {
        match self {
            Up => Some(Down),
            Down => Some(Up),
            Left => Some(Right),
            Right => Some(Left),
            Paused => None,
        }
    }

    /// One step in this direction, in cells.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
            Paused => (0, 0),
        }
    }
}

/// A body cell together with the direction it moved in when last updated.
/// Only the head's direction steers the snake, the tail's is read when growing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl Segment {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Segment { x, y, direction }
    }

    pub fn rect(&self) -> Rect {
        Rect::cell(self.x, self.y)
    }

    fn same_cell(&self, other: &Segment) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// What the renderer needs to draw one piece of the snake.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub rect: Rect,
    pub is_head: bool,
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Segment>, // head first
    dead: bool,
}

impl Snake {
    /// Lays `length` segments out behind the head, opposite to `direction`.
    pub fn new(head_x: i32, head_y: i32, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();

        let body = (0..length.max(1) as i32)
            .map(|i| Segment::new(head_x - dx * CELL_SIZE * i, head_y - dy * CELL_SIZE * i, direction))
            .collect();
        Snake { body, dead: false }
    }

    pub fn from_segments(body: Vec<Segment>) -> Result<Self, SnakeError> {
        if body.is_empty() {
            return Err(SnakeError::EmptyBody);
        }

        Ok(Snake { body, dead: false })
    }

    pub fn head(&self) -> &Segment {
        &self.body[0]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.head().direction
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn cells(&self) -> impl Iterator<Item = BodyCell> + '_ {
        self.body.iter().enumerate().map(|(i, seg)| BodyCell { rect: seg.rect(), is_head: i == 0 })
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Up => self.handle_direction_input(Up),
            Command::Right => self.handle_direction_input(Right),
            Command::Down => self.handle_direction_input(Down),
            Command::Left => self.handle_direction_input(Left),
            Command::Pause => {
                debug!("snake paused");
                self.body[0].direction = Paused;
            }
            Command::Grow => self.add_segment(),
        }
    }

    /// Turning straight back into the body is silently ignored.
    pub fn handle_direction_input(&mut self, requested: Direction) {
        let head = &mut self.body[0];
        if head.direction.opposite() != Some(requested) {
            head.direction = requested;
        }
    }

    /// One game step. Self-collision is checked against the body as it was
    /// before this step's move, and the move is applied regardless.
    pub fn advance(&mut self, bounds: &Bounds) {
        self.check_self_collision();

        let head = *self.head();
        let (dx, dy) = head.direction.delta();
        let (mut x, mut y) = (head.x + dx * CELL_SIZE, head.y + dy * CELL_SIZE);

        // At most one axis gets wrapped per step
        if x < -CELL_SIZE {
            x = bounds.width() + CELL_SIZE;
        } else if y < -CELL_SIZE {
            y = bounds.height() + CELL_SIZE;
        } else if x > bounds.width() {
            x = 0;
        } else if y > bounds.height() {
            y = 0;
        }

        self.body.pop();
        self.body.insert(0, Segment::new(x, y, head.direction));
    }

    /// Appends a segment one cell behind the tail, never moving the others.
    pub fn add_segment(&mut self) {
        let tail = self.body[self.body.len() - 1];
        let (dx, dy) = tail.direction.delta();

        self.body.push(Segment::new(tail.x - dx * CELL_SIZE, tail.y - dy * CELL_SIZE, tail.direction));
        debug!("snake grew to {} segments", self.body.len());
    }

    pub fn check_food_collision(&mut self, food: &Food) -> bool {
        if self.head().rect().overlaps(&food.rect()) {
            self.add_segment();
            return true;
        }

        false
    }

    pub fn check_self_collision(&mut self) {
        let head = self.body[0];

        for seg in &self.body[1..] {
            if seg.same_cell(&head) {
                if !self.dead {
                    info!("snake ran into itself at ({}, {})", head.x, head.y);
                }
                self.dead = true;
            }
        }
    }
}
