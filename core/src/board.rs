use alloc::vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one game. Owns every cell exclusively.
///
/// Mines are placed at most once, after which the layout and adjacency counts never change. The
/// session rules (first click, game over) live in [`PlayEngine`], the board only knows about cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    mines_placed: bool,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_unchecked(config))
    }

    pub(crate) fn new_unchecked(config: GameConfig) -> Self {
        Self {
            cells: Array2::default(config.size().to_nd_index()),
            mine_count: config.mines,
            mines_placed: false,
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.cells.dims()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Marks the layout's mines on this board. Only allowed once per board.
    pub fn place_mines(&mut self, layout: &MineLayout) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::LayoutAlreadyPlaced);
        }
        if layout.size() != self.size() || layout.mine_count() != self.mine_count {
            return Err(GameError::LayoutMismatch);
        }

        for coords in layout.iter_mines() {
            self.cells[coords.to_nd_index()].is_mine = true;
        }
        self.mines_placed = true;
        Ok(())
    }

    /// Stores the number of neighboring mines in every non-mine cell.
    pub fn compute_adjacency(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if self.cell_at(coords).is_mine {
                    continue;
                }
                let count = self
                    .cells
                    .iter_neighbors(coords)
                    .filter(|&pos| self.cell_at(pos).is_mine)
                    .count();
                self.cells[coords.to_nd_index()].adjacent_mines = count as u8;
            }
        }
    }

    /// Reveals `coords`, cascading through zero-count cells.
    ///
    /// Every zero-count cell queues its whole 3×3 block, itself included, and each queued cell goes
    /// through the same checks as a direct reveal: revealed and flagged cells are skipped, a mine
    /// reports [`RevealOutcome::HitMine`]. Each cell is revealed at most once, so the work stack
    /// never holds more than nine entries per grid cell.
    pub(crate) fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let mut outcome = RevealOutcome::NoChange;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if cell.is_revealed || cell.is_flagged {
                continue;
            }

            cell.is_revealed = true;
            self.revealed_count += 1;

            if cell.is_mine {
                log::debug!("Revealed mine at {:?}", visit_coords);
                outcome |= RevealOutcome::HitMine;
                continue;
            }

            outcome |= RevealOutcome::Revealed;
            if cell.adjacent_mines == 0 {
                log::trace!("Expanding zero cell at {:?}", visit_coords);
                to_visit.extend(self.cells.iter_block(visit_coords));
            }
        }

        outcome
    }

    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed {
            return MarkOutcome::NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        MarkOutcome::Changed
    }

    /// True iff the flagged cells are exactly the mine cells.
    ///
    /// Revealed cells play no part: every safe cell can be open without this ever becoming true.
    pub fn check_win(&self) -> bool {
        let (flagged, correct) = self
            .cells
            .iter()
            .filter(|cell| cell.is_flagged)
            .fold((0, 0), |(flagged, correct), cell| {
                (flagged + 1, correct + CellCount::from(cell.is_mine))
            });

        flagged == self.mine_count && correct == self.mine_count
    }
}
