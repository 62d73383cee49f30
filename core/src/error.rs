use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines, {requested} requested but at most {max} leave room for a safe first click")]
    TooManyMines { requested: u16, max: u16 },
    #[error("Mine layout does not match the board configuration")]
    LayoutMismatch,
    #[error("Mines were already placed on this board")]
    LayoutAlreadyPlaced,
    #[error("Board shape does not match its declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
