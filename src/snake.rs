use std::collections::{HashSet, VecDeque};

use crate::coords::Coords;
use crate::error::{GameError, Result};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn vector(self) -> Coords {
        match self {
            Up => Coords::new(0, -1),
            Down => Coords::new(0, 1),
            Left => Coords::new(-1, 0),
            Right => Coords::new(1, 0),
        }
    }
}

/// Segment chain stored tail to head, with a companion set so that
/// membership checks don't scan the body.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Coords>,
    occupied: HashSet<Coords>,
    direction: Coords,
}

impl Snake {
    pub fn new(head: Coords, direction: Coords) -> Result<Self> {
        validate_direction(direction)?;

        let mut snake = Snake { body: VecDeque::new(), occupied: HashSet::new(), direction };
        snake.push_head(head);
        Ok(snake)
    }

    pub fn head(&self) -> Coords {
        // The body is never empty: `new` pushes a head and `shorten` keeps one segment.
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Coords {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Coords) -> Result<()> {
        validate_direction(direction)?;
        self.direction = direction;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Segments from tail to head.
    pub fn body(&self) -> impl Iterator<Item = Coords> + '_ {
        self.body.iter().copied()
    }

    /// Moves the head one step forward without dropping the tail.
    /// Returns false, leaving the snake untouched, when the step would land on its own body.
    pub fn grow(&mut self) -> bool {
        let candidate = self.head() + self.direction;
        self.push_head(candidate)
    }

    /// Removes and returns the oldest segment.
    pub fn shorten(&mut self) -> Result<Coords> {
        if self.body.len() == 1 {
            return Err(GameError::CannotShorten);
        }

        let tail = self.body.pop_front().ok_or(GameError::CannotShorten)?;
        self.occupied.remove(&tail);
        Ok(tail)
    }

    pub fn has_body_element_at(&self, point: Coords) -> bool {
        self.occupied.contains(&point)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn push_head(&mut self, point: Coords) -> bool {
        if !self.occupied.insert(point) {
            return false;
        }

        self.body.push_back(point);
        true
    }
}

fn validate_direction(v: Coords) -> Result<()> {
    if v.x.abs() + v.y.abs() != 1 {
        return Err(GameError::InvalidDirection { x: v.x, y: v.y });
    }
    Ok(())
}
