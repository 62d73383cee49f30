use serde::{Deserialize, Serialize};

use crate::*;
pub use random::RejectionSampler;

mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// How a game obtains its mine layout when the first cell is revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LayoutSource {
    /// Rejection-sampled around the first click, reproducible from the seed.
    Random { seed: u64 },
    /// A prepared layout, applied as-is regardless of where the first click lands.
    Fixed(MineLayout),
}

impl LayoutSource {
    pub fn layout_for(&self, config: GameConfig, first_click: Coord2) -> Result<MineLayout> {
        match self {
            Self::Random { seed } => RejectionSampler::new(*seed, first_click).generate(config),
            Self::Fixed(layout) => Ok(layout.clone()),
        }
    }

    /// Source for the game after a restart. Random seeds advance deterministically.
    pub fn next(&self) -> Self {
        match self {
            Self::Random { seed } => Self::Random {
                seed: random::next_seed(*seed),
            },
            Self::Fixed(layout) => Self::Fixed(layout.clone()),
        }
    }
}
