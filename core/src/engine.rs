use serde::{Deserialize, Serialize};

use crate::*;

/// Session lifecycle: `Fresh -> Active -> {Won, Lost}`, back to `Fresh` only through a restart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No mines placed yet, waiting for the first reveal.
    #[default]
    Fresh,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_fresh(self) -> bool {
        matches!(self, Self::Fresh)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Board plus session state, driven by reveal, flag and restart actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    config: GameConfig,
    board: Board,
    source: LayoutSource,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    /// New game whose mines get sampled from `seed` on the first reveal.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, LayoutSource::Random { seed })
    }

    /// New game that plays out a prepared layout, ignoring the safe first-click guarantee.
    pub fn with_layout(mine_layout: MineLayout) -> Self {
        let config = mine_layout.game_config();
        Self::from_parts(config, LayoutSource::Fixed(mine_layout))
    }

    pub fn with_source(config: GameConfig, source: LayoutSource) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, source))
    }

    fn from_parts(config: GameConfig, source: LayoutSource) -> Self {
        Self {
            config,
            board: Board::new_unchecked(config),
            source,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        match self.state {
            EngineState::Won => Outcome::Won,
            EngineState::Lost => Outcome::Lost,
            EngineState::Fresh | EngineState::Active => Outcome::None,
        }
    }

    pub fn game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn first_click_pending(&self) -> bool {
        self.state.is_fresh()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.flagged_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.revealed_count()
    }

    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.board.flagged_count() as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board.cell_at(coords)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Seed the current game's layout is or will be sampled from, if it is random.
    pub fn seed(&self) -> Option<u64> {
        match self.source {
            LayoutSource::Random { seed } => Some(seed),
            LayoutSource::Fixed(_) => None,
        }
    }

    pub fn check_win(&self) -> bool {
        self.board.check_win()
    }

    /// Reveals a cell. The first reveal of a session places the mines around it.
    ///
    /// Stale reveals (finished game, revealed or flagged cell) are [`RevealOutcome::NoChange`].
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.board.cell_at(coords);
        if cell.is_revealed() || cell.is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.state.is_fresh() {
            self.populate(coords)?;
        }

        Ok(match self.board.reveal(coords) {
            RevealOutcome::HitMine => {
                self.triggered_mine = self
                    .board
                    .mine_coords()
                    .find(|&pos| self.board.cell_at(pos).is_revealed());
                self.end_game(false);
                RevealOutcome::HitMine
            }
            _ if self.board.check_win() => {
                self.end_game(true);
                RevealOutcome::Won
            }
            outcome => outcome,
        })
    }

    /// Toggles the flag on a hidden cell. Flags can only be placed while the game is active.
    ///
    /// The win condition is only evaluated by [`PlayEngine::reveal`], never here.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if !matches!(self.state, EngineState::Active) {
            return Ok(MarkOutcome::NoChange);
        }

        Ok(self.board.toggle_flag(coords))
    }

    /// Throws away the board and starts over with the same configuration.
    pub fn restart(&mut self) {
        *self = Self::from_parts(self.config, self.source.next());
        log::debug!("Restarted game, layout seed: {:?}", self.seed());
    }

    /// Mine positions to show once the game is lost, without marking them revealed.
    pub fn display_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        let lost = matches!(self.state, EngineState::Lost);
        self.board.mine_coords().filter(move |_| lost)
    }

    /// Render directive from gameplay state alone.
    pub fn view_at(&self, coords: Coord2) -> CellView {
        self.board.cell_at(coords).view()
    }

    /// Render directive with every mine shown once the game is lost.
    pub fn display_at(&self, coords: Coord2) -> CellView {
        let cell = self.board.cell_at(coords);
        if matches!(self.state, EngineState::Lost) && cell.is_mine() {
            CellView::Mine
        } else {
            cell.view()
        }
    }

    fn populate(&mut self, first_click: Coord2) -> Result<()> {
        let layout = self.source.layout_for(self.config, first_click)?;
        self.board.place_mines(&layout)?;
        self.board.compute_adjacency();
        self.state = EngineState::Active;
        log::debug!(
            "Game started at {:?} with {} mines",
            first_click,
            layout.mine_count()
        );
        Ok(())
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        if won {
            self.triggered_mine = None;
        }
        log::debug!("Game ended: {:?}", self.state);
    }
}
