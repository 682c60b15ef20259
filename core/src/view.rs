use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of one cell.
///
/// Mine identity only shows up once the game is lost. While the game is in
/// progress an unrevealed cell is always `Hidden` or `Flagged`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    /// The mine that ended the game.
    Exploded,
    /// Unflagged mine, shown after a loss.
    Mine,
    /// Flag on a safe cell, shown after a loss.
    IncorrectFlag,
}

impl CellView {
    pub fn of(cell: Cell, status: GameStatus) -> Self {
        use CellView::*;

        let lost = matches!(status, GameStatus::Lost);
        match cell {
            Cell {
                is_revealed: true,
                is_mine: true,
                ..
            } => Exploded,
            Cell {
                is_revealed: true,
                adjacent_mines,
                ..
            } => Revealed(adjacent_mines),
            Cell {
                is_flagged: true,
                is_mine: false,
                ..
            } if lost => IncorrectFlag,
            Cell {
                is_flagged: true, ..
            } => Flagged,
            Cell { is_mine: true, .. } if lost => Mine,
            _ => Hidden,
        }
    }

    /// Whether the cell still looks closed to the player.
    pub const fn is_closed(self) -> bool {
        use CellView::*;
        match self {
            Hidden => true,
            Flagged => true,
            Revealed(_) => false,
            Exploded => false,
            Mine => false,
            IncorrectFlag => true,
        }
    }
}

/// Read-only snapshot of a session for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    status: GameStatus,
    cells: Array2<CellView>,
}

impl BoardView {
    pub(crate) fn new(board: &Board, status: GameStatus) -> Self {
        let mut cells = Array2::default(board.size().to_nd_index());
        for coords in board.iter_coords() {
            cells[coords.to_nd_index()] = CellView::of(board[coords], status);
        }
        Self { status, cells }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn get(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Cells with their coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &view)| ((row as Coord, col as Coord), view))
    }
}
