use std::collections::VecDeque;

use crate::consts::{HEAD_DOWN_CHAR, HEAD_LEFT_CHAR, HEAD_RIGHT_CHAR, HEAD_UP_CHAR};
use crate::geometry::{Direction::{self, *}, Point};

/// The segment chain. Head at the front, tail at the back.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    // Direction of the last step taken, drives the head glyph.
    direction: Direction,
    // Direction the next step will take.
    heading: Direction,
}

impl Snake {
    pub fn new(head: Point, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![head]), direction, heading: direction }
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[Point], direction: Direction) -> Self {
        Snake { body: segments.iter().copied().collect(), direction, heading: direction }
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.body.contains(p)
    }

    /// Sets the heading for the next step unless `requested` is its exact
    /// reverse. Several turns inside one tick leave the latest legal one.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested != self.heading.opposite() {
            self.heading = requested;
        }
    }

    /// Where the head lands on the next step.
    pub fn next_head(&self) -> Point {
        self.head().step(self.heading)
    }

    /// Moves the head to `new_head`. The tail is kept when `grow` is set.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
        self.direction = self.heading;
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => HEAD_UP_CHAR,
            Down => HEAD_DOWN_CHAR,
            Left => HEAD_LEFT_CHAR,
            Right => HEAD_RIGHT_CHAR,
        }
    }
}
