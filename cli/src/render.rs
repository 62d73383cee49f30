use std::io::{self, Write};

use sapper_core::{BoardView, CellView, Outcome};

pub fn cell_glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Blank => '.',
        CellView::Number(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => '*',
        CellView::Flagged => 'F',
    }
}

pub fn draw_text(out: &mut impl Write, view: &BoardView) -> io::Result<()> {
    let (rows, cols) = view.size;

    writeln!(out, "Mines left: {}", view.mines_left)?;
    write!(out, "   ")?;
    for col in 0..cols {
        write!(out, "{col:>3}")?;
    }
    writeln!(out)?;

    for row in 0..rows {
        write!(out, "{row:>3}")?;
        for col in 0..cols {
            write!(out, "{:>3}", cell_glyph(view.view_at((row, col))))?;
        }
        writeln!(out)?;
    }

    match view.outcome {
        Outcome::None => {}
        Outcome::Won => writeln!(out, "You won! Type n to play again.")?,
        Outcome::Lost => writeln!(out, "You lost! Type n to play again.")?,
    }
    Ok(())
}

pub fn draw_json(out: &mut impl Write, view: &BoardView) -> io::Result<()> {
    serde_json::to_writer(&mut *out, view)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use sapper_core::{MineLayout, PlayEngine};

    use super::*;

    fn render(engine: &PlayEngine) -> String {
        let mut out = Vec::new();
        draw_text(&mut out, &BoardView::from_engine(engine)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn draws_grid_with_headers() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 2)]).unwrap();
        let mut engine = PlayEngine::with_layout(layout);
        engine.reveal((1, 0)).unwrap();

        assert_eq!(
            render(&engine),
            "Mines left: 1\n     0  1  2\n  0  .  1  #\n  1  .  1  #\n"
        );
    }

    #[test]
    fn lost_board_shows_mines_and_message() {
        let layout = MineLayout::from_mine_coords((1, 3), &[(0, 0), (0, 2)]).unwrap();
        let mut engine = PlayEngine::with_layout(layout);
        engine.reveal((0, 0)).unwrap();

        let text = render(&engine);

        assert!(text.contains("  0  *  #  *\n"));
        assert!(text.ends_with("You lost! Type n to play again.\n"));
    }

    #[test]
    fn json_snapshot_is_one_line() {
        let layout = MineLayout::from_mine_coords((1, 2), &[(0, 0)]).unwrap();
        let engine = PlayEngine::with_layout(layout);
        let mut out = Vec::new();

        draw_json(&mut out, &BoardView::from_engine(&engine)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let parsed: BoardView = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.outcome, Outcome::None);
    }
}
