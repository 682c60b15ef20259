use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Chooses which cells of a fresh board hold mines.
pub trait MinePlacer {
    /// Returns exactly `config.mines` distinct in-bounds coordinates.
    fn place(&mut self, config: GameConfig) -> Result<Vec<Coord2>>;
}

impl<P: MinePlacer + ?Sized> MinePlacer for &mut P {
    fn place(&mut self, config: GameConfig) -> Result<Vec<Coord2>> {
        (**self).place(config)
    }
}
