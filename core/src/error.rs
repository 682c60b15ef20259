use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mine layout does not match the configured mine count")]
    InvalidMineLayout,
}

impl GameError {
    /// Whether the error rejects a configuration, as opposed to a single move.
    pub const fn is_config_error(self) -> bool {
        !matches!(self, Self::InvalidCoords)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
