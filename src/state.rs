use log::{debug, info};
use rand::Rng;

use crate::error::GameError;
use crate::food::FoodPlacer;
use crate::geometry::{Bounds, Direction, Point};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Ate,
    Collided,
}

/// One game: built at start and on every restart, never reset in place.
#[derive(Clone, Debug)]
pub struct GameState {
    bounds: Bounds,
    snake: Snake,
    food: Point,
    score: u32,
    alive: bool,
}

/// What the renderer gets to see after a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub bounds: Bounds,
    pub body: Vec<Point>,
    pub head_char: char,
    pub food: Point,
    pub score: u32,
    pub alive: bool,
}

impl GameState {
    /// A one-segment snake in the middle of the board heading right.
    pub fn new<R: Rng>(placer: &mut FoodPlacer<R>) -> Result<Self, GameError> {
        let bounds = placer.bounds();
        let snake = Snake::new(bounds.center(), Direction::Right);
        let food = placer.place(|p| snake.contains(p))?;

        Ok(GameState { bounds, snake, food, score: 0, alive: true })
    }

    #[cfg(test)]
    pub fn with_parts(bounds: Bounds, snake: Snake, food: Point) -> Self {
        GameState { bounds, snake, food, score: 0, alive: true }
    }

    #[cfg(test)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_direction(&mut self, requested: Direction) {
        if self.alive {
            self.snake.set_direction(requested);
        }
    }

    /// Advances one tick.
    ///
    /// The self-collision test runs against the whole pre-move body, tail
    /// included, so the head may not enter the cell the tail is about to
    /// leave. Once collided the state is frozen and every further call
    /// returns `Collided` without touching anything.
    pub fn step<R: Rng>(&mut self, placer: &mut FoodPlacer<R>) -> Result<StepOutcome, GameError> {
        if !self.alive {
            return Ok(StepOutcome::Collided);
        }

        let new_head = self.snake.next_head();

        if !self.bounds.in_interior(new_head) || self.snake.contains(&new_head) {
            self.alive = false;
            info!("snake crashed at ({}, {}) with score {}", new_head.x, new_head.y, self.score);
            return Ok(StepOutcome::Collided);
        }

        if new_head == self.food {
            self.score += 1;
            self.snake.advance(new_head, true);
            let snake = &self.snake;
            self.food = placer.place(|p| snake.contains(p))?;
            debug!("food eaten, score {} length {}", self.score, self.snake.len());
            Ok(StepOutcome::Ate)
        } else {
            self.snake.advance(new_head, false);
            Ok(StepOutcome::Continue)
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bounds: self.bounds,
            body: self.snake.body().iter().copied().collect(),
            head_char: self.snake.head_char(),
            food: self.food,
            score: self.score,
            alive: self.alive,
        }
    }
}
