#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use board::*;
pub use cell::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use placer::*;
pub use types::*;
pub use view::*;

mod adjacency;
mod board;
mod cell;
mod clock;
mod engine;
mod error;
mod placer;
mod types;
mod view;

/// Shape and mine count of a game, fixed for the lifetime of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// At least one safe cell must remain, otherwise placement cannot finish.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 10)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a single reveal call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Finished game, or the cell was already revealed or flagged.
    NoChange,
    /// At least one safe cell opened and the game goes on.
    Continue,
    Win,
    Lose,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Continue => true,
            Win => true,
            Lose => true,
        }
    }
}

/// Used to merge outcomes when a host reveals several cells for one input
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (Lose, _) => Lose,
            (_, Lose) => Lose,
            (Win, _) => Win,
            (_, Win) => Win,
            (Continue, _) => Continue,
            (_, Continue) => Continue,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new(0, 5, 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new(5, 0, 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_requires_a_safe_cell() {
        assert_eq!(GameConfig::new(3, 3, 9), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 3, 10), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 3, 8).map(|c| c.safe_cells()), Ok(1));
        assert!(GameConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn config_errors_are_flagged_as_such() {
        assert!(GameError::TooManyMines.is_config_error());
        assert!(GameError::EmptyBoard.is_config_error());
        assert!(GameError::InvalidMineLayout.is_config_error());
        assert!(!GameError::InvalidCoords.is_config_error());
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.total_cells(), 100);
    }

    #[test]
    fn config_loads_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows":16,"cols":30,"mines":99}"#).unwrap();

        assert_eq!(config, GameConfig::new(16, 30, 99).unwrap());
    }

    #[test]
    fn reveal_outcomes_merge_by_priority() {
        use RevealOutcome::*;

        assert_eq!(NoChange | NoChange, NoChange);
        assert_eq!(NoChange | Continue, Continue);
        assert_eq!(Continue | Win, Win);
        assert_eq!(Win | Lose, Lose);
        assert!(!NoChange.has_update());
        assert!(Lose.has_update());
        assert!(MarkOutcome::Changed.has_update());
    }
}
