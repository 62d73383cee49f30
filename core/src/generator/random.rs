use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Places mines uniformly at random, keeping the 3×3 block around the first click free.
///
/// Positions are drawn over the whole grid and redrawn when they land in the excluded block or on
/// a cell that already holds a mine. [`GameConfig::validate`] guarantees enough cells remain outside
/// the block, so the loop always terminates.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionSampler {
    seed: u64,
    exclude: Coord2,
}

impl RejectionSampler {
    pub fn new(seed: u64, exclude: Coord2) -> Self {
        Self { seed, exclude }
    }
}

impl MineGenerator for RejectionSampler {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        config.validate()?;
        if self.exclude.0 >= config.rows || self.exclude.1 >= config.cols {
            return Err(GameError::InvalidCoords);
        }

        let size = config.size();
        let total_cells = config.total_cells();
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut rejected = 0u32;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while mines_placed < config.mines {
            let position: CellCount = rng.random_range(0..total_cells);
            let coords = coords_of(position, size);

            let cell = &mut mine_mask[coords.to_nd_index()];
            if is_within_block(self.exclude, coords) || *cell {
                rejected += 1;
                continue;
            }

            *cell = true;
            mines_placed += 1;
        }

        log::debug!(
            "Placed {} mines around {:?} with seed {}, {} draws rejected",
            mines_placed,
            self.exclude,
            self.seed,
            rejected
        );
        Ok(MineLayout::from_mine_mask(mine_mask))
    }
}

pub(crate) fn next_seed(seed: u64) -> u64 {
    SmallRng::seed_from_u64(seed).random()
}
