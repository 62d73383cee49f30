use serde::{Deserialize, Serialize};

use crate::*;

/// Inbound events from the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// Primary click, reveals the cell.
    Primary(Coord2),
    /// Secondary click, toggles the flag. The presentation layer must suppress its own context
    /// menu for this action.
    Secondary(Coord2),
    Restart,
}

/// Terminal game result reported to the presentation layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    None,
    Won,
    Lost,
}

/// Result of applying a [`Signal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Whether any cell or session state changed, i.e. the view needs redrawing.
    pub changed: bool,
    pub outcome: Outcome,
}

impl PlayEngine {
    pub fn apply(&mut self, signal: Signal) -> Result<Update> {
        let changed = match signal {
            Signal::Primary(coords) => self.reveal(coords)?.has_update(),
            Signal::Secondary(coords) => self.toggle_flag(coords)?.has_update(),
            Signal::Restart => {
                self.restart();
                true
            }
        };
        log::trace!("Applied {:?}, changed: {}", signal, changed);

        Ok(Update {
            changed,
            outcome: self.outcome(),
        })
    }
}
