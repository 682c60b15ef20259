use crate::*;

/// Number of mines among the neighbors of `coords`.
pub fn adjacent_mine_count(board: &Board, coords: Coord2) -> u8 {
    // never more than 8 neighbors
    board
        .iter_neighbors(coords)
        .filter(|&pos| board[pos].is_mine)
        .count() as u8
}

/// Fills in `adjacent_mines` for every non-mine cell. Mine cells are left at 0.
pub fn calculate_adjacency(board: &mut Board) {
    for coords in board.iter_coords() {
        if board[coords].is_mine {
            board[coords].adjacent_mines = 0;
            continue;
        }
        board[coords].adjacent_mines = adjacent_mine_count(board, coords);
    }
}
