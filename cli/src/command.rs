use sapper_core::{Coord, Coord2, Signal};
use thiserror::Error;

pub const USAGE: &str = "commands: r ROW COL (reveal), f ROW COL (flag), n (new game), q (quit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Signal(Signal),
    Quit,
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs a row and a column")]
    MissingCoords(String),
    #[error("`{0}` is not a valid coordinate")]
    BadCoord(String),
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Command::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Signal(Signal::Primary(parse_coords(verb, &mut words)?)),
            "f" | "flag" => Command::Signal(Signal::Secondary(parse_coords(verb, &mut words)?)),
            "n" | "new" | "restart" => Command::Signal(Signal::Restart),
            "q" | "quit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    verb: &str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words
            .next()
            .ok_or_else(|| CommandError::MissingCoords(verb.to_owned()))?;
        word.parse()
            .map_err(|_| CommandError::BadCoord(word.to_owned()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}
