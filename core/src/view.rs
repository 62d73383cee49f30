use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything the presentation layer needs to draw the board, detached from the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub mines_left: isize,
    pub outcome: Outcome,
    pub cells: Array2<CellView>,
}

impl BoardView {
    /// Snapshot of the engine, with every mine shown once the game is lost.
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let size = engine.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);

        let (rows, cols) = size;
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                cells[coords.to_nd_index()] = engine.view_at(coords);
            }
        }
        for coords in engine.display_mines() {
            cells[coords.to_nd_index()] = CellView::Mine;
        }

        Self {
            size,
            mines_left: engine.mines_left(),
            outcome: engine.outcome(),
            cells,
        }
    }

    pub fn view_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_maps_revealed_and_flagged_cells() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2)]).unwrap();
        let mut engine = PlayEngine::with_layout(layout);

        engine.reveal((1, 1)).unwrap();
        engine.toggle_flag((0, 0)).unwrap();

        let view = BoardView::from_engine(&engine);

        assert_eq!(view.mines_left, 1);
        assert_eq!(view.outcome, Outcome::None);
        assert_eq!(view.view_at((1, 1)), CellView::Number(2));
        assert_eq!(view.view_at((0, 0)), CellView::Flagged);
        assert_eq!(view.view_at((1, 2)), CellView::Hidden);
    }

    #[test]
    fn lost_view_overlays_all_mines() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2)]).unwrap();
        let mut engine = PlayEngine::with_layout(layout);
        engine.reveal((1, 1)).unwrap();
        engine.toggle_flag((0, 0)).unwrap();

        engine.reveal((1, 2)).unwrap();
        let view = BoardView::from_engine(&engine);

        assert_eq!(view.outcome, Outcome::Lost);
        assert_eq!(view.view_at((0, 0)), CellView::Mine);
        assert_eq!(view.view_at((1, 2)), CellView::Mine);
        assert!(!engine.cell_at((0, 0)).is_revealed());
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let view = BoardView {
            size: (2, 2),
            mines_left: 1,
            outcome: Outcome::None,
            cells: Array2::from_elem([1, 2], CellView::Hidden),
        };

        assert_eq!(view.validate(), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn view_round_trips_through_json() {
        let engine = PlayEngine::new(GameConfig::default(), 3).unwrap();
        let view = BoardView::from_engine(&engine);

        let json = serde_json::to_string(&view).unwrap();
        let parsed: BoardView = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, view);
        assert_eq!(parsed.validate(), Ok(()));
    }
}
