use serde::{Deserialize, Serialize};

/// Gameplay state of a single grid position, owned by the [`Board`](crate::Board).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    /// Number of mines in the Moore neighborhood. Always 0 for mine cells.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// Render directive for this cell based on gameplay flags only.
    pub const fn view(self) -> CellView {
        match (self.is_revealed, self.is_flagged, self.is_mine) {
            (true, _, true) => CellView::Mine,
            (true, _, false) if self.adjacent_mines == 0 => CellView::Blank,
            (true, _, false) => CellView::Number(self.adjacent_mines),
            (false, true, _) => CellView::Flagged,
            (false, false, _) => CellView::Hidden,
        }
    }
}

/// What the presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Blank,
    Number(u8),
    Mine,
    Flagged,
}
