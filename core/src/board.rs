use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// Fixed-shape grid of [`Cell`]s addressed by `(row, col)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
}

impl Board {
    pub fn new((rows, cols): Coord2) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        Ok(Self {
            cells: Array2::default((rows, cols).to_nd_index()),
            size: (rows, cols),
        })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_mine)
    }

    pub fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // at most `Coord::MAX²` cells, which fits
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }

    /// Marks the given coordinates as mines, returns how many were newly placed.
    pub fn place_mines(&mut self, coords: impl IntoIterator<Item = Coord2>) -> Result<CellCount> {
        let mut placed = 0;
        for coords in coords {
            let coords = self.validate_coords(coords)?;
            let cell = &mut self[coords];
            if !cell.is_mine {
                cell.is_mine = true;
                placed += 1;
            }
        }
        Ok(placed)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn new_rejects_empty_dimensions() {
        assert_eq!(Board::new((0, 3)), Err(GameError::EmptyBoard));
        assert_eq!(Board::new((3, 0)), Err(GameError::EmptyBoard));
    }

    #[test]
    fn every_coordinate_has_one_default_cell() {
        let board = Board::new((2, 3)).unwrap();

        let coords: Vec<_> = board.iter_coords().collect();
        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(board.cells().count(), 6);
        assert!(board.cells().all(|cell| *cell == Cell::default()));
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let board = Board::new((2, 3)).unwrap();

        assert_eq!(board.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(board.validate_coords((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 3)), Err(GameError::InvalidCoords));
        assert!(board.get((5, 5)).is_none());
    }

    #[test]
    fn place_mines_counts_distinct_cells_only() {
        let mut board = Board::new((3, 3)).unwrap();

        let placed = board.place_mines([(0, 0), (1, 1), (0, 0)]).unwrap();

        assert_eq!(placed, 2);
        assert_eq!(board.mine_count(), 2);
        assert!(board[(1, 1)].is_mine);
    }

    #[test]
    fn place_mines_rejects_out_of_range() {
        let mut board = Board::new((3, 3)).unwrap();

        assert_eq!(board.place_mines([(3, 0)]), Err(GameError::InvalidCoords));
    }

    #[test]
    fn non_square_board_uses_rows_then_cols() {
        let mut board = Board::new((2, 5)).unwrap();
        board[(1, 4)].is_flagged = true;

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 5);
        assert!(board[(1, 4)].is_flagged);
        assert_eq!(board.iter_neighbors((1, 4)).count(), 3);
    }
}
