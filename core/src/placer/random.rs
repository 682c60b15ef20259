use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement by rejection sampling: draw a cell, retry on collision.
///
/// Dense boards are sampled from the other side, picking the safe cells and
/// mining the rest, so the expected attempt count stays proportional to the
/// smaller of the two sets.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPlacer<R> {
    rng: R,
}

impl<R: Rng> RandomPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPlacer<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinePlacer for RandomPlacer<R> {
    fn place(&mut self, config: GameConfig) -> Result<Vec<Coord2>> {
        // an invalid config would make the sampling loop below spin forever
        config.validate()?;

        let total_cells = config.total_cells();
        let invert = config.mines > total_cells / 2;
        let sample_count = if invert {
            total_cells - config.mines
        } else {
            config.mines
        };

        let mut picked: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut remaining = sample_count;
        let mut attempts: u64 = 0;
        while remaining > 0 {
            let coords: Coord2 = (
                self.rng.random_range(0..config.rows),
                self.rng.random_range(0..config.cols),
            );
            attempts += 1;

            let slot = &mut picked[coords.to_nd_index()];
            if !*slot {
                *slot = true;
                remaining -= 1;
            }
        }
        log::trace!(
            "Sampled {} cells in {} attempts (inverted: {})",
            sample_count,
            attempts,
            invert
        );

        Ok(picked
            .indexed_iter()
            .filter(|&(_, &is_picked)| is_picked != invert)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect())
    }
}
