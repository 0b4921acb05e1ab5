use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no free cell left for food, the snake fills the board")]
    BoardFull,
}
