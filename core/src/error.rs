use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Deck must hold every label exactly twice")]
    InvalidDeck,
}

pub type Result<T> = core::result::Result<T, GameError>;
