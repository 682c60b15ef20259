use alloc::collections::BTreeSet;

use super::*;

/// Places a predetermined set of mines, for replays and deterministic tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPlacer {
    mines: BTreeSet<Coord2>,
}

impl FixedPlacer {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MinePlacer for FixedPlacer {
    fn place(&mut self, config: GameConfig) -> Result<Vec<Coord2>> {
        config.validate()?;

        if let Some(&(row, col)) = self
            .mines
            .iter()
            .find(|&&(row, col)| row >= config.rows || col >= config.cols)
        {
            log::warn!("Fixed mine at ({}, {}) is outside the board", row, col);
            return Err(GameError::InvalidCoords);
        }

        if self.mines.len() as CellCount != config.mines {
            log::warn!(
                "Fixed layout has {} mines, configuration asks for {}",
                self.mines.len(),
                config.mines
            );
            return Err(GameError::InvalidMineLayout);
        }

        Ok(self.mines.iter().copied().collect())
    }
}
