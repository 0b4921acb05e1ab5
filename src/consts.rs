//! Hard-coded configuration
use std::time::Duration;

/// Width of the frame, border included
pub const WIDTH: u16 = 20;

/// Height of the frame, border included. The score line is drawn below it.
pub const HEIGHT: u16 = 10;

/// Time between two steps of the snake
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

pub const BORDER_CHAR: char = '▓';
pub const SNAKE_BODY_CHAR: char = '█';
pub const FOOD_CHAR: char = '■';
pub const DEAD_SNAKE_CHAR: char = 'X';

pub const HEAD_UP_CHAR: char = '^';
pub const HEAD_DOWN_CHAR: char = 'v';
pub const HEAD_LEFT_CHAR: char = '<';
pub const HEAD_RIGHT_CHAR: char = '>';

/// The terminal belongs to the renderer, so logs go here instead
pub const LOG_FILE: &str = "snake.log";
