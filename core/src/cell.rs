use serde::{Deserialize, Serialize};

/// Full per-square state owned by a [`Board`](crate::Board).
///
/// This is the engine's private truth, including mine identity. Renderers
/// should read [`CellView`](crate::CellView) through a session snapshot instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the up-to-8 neighbors, left at 0 on mine cells.
    pub adjacent_mines: u8,
}

impl Cell {
    /// Whether a reveal may open this cell.
    pub const fn is_revealable(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Flips the flag unless the cell is already revealed, returns whether it changed.
    pub fn toggle_flag(&mut self) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_flagged = !self.is_flagged;
        true
    }

    pub const fn is_correctly_flagged(self) -> bool {
        self.is_mine && self.is_flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flag_flips_hidden_cell() {
        let mut cell = Cell::default();

        assert!(cell.toggle_flag());
        assert!(cell.is_flagged);
        assert!(cell.toggle_flag());
        assert!(!cell.is_flagged);
    }

    #[test]
    fn toggle_flag_is_noop_on_revealed_cell() {
        let mut cell = Cell {
            is_revealed: true,
            ..Cell::default()
        };

        assert!(!cell.toggle_flag());
        assert!(!cell.is_flagged);
    }

    #[test]
    fn flagged_cell_is_not_revealable() {
        let cell = Cell {
            is_flagged: true,
            ..Cell::default()
        };

        assert!(!cell.is_revealable());
        assert!(!cell.is_revealed);
    }
}
