//! Tic-tac-toe board and win detection

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

pub const SIZE: usize = 3;

static CELL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-2])\s*,\s*([0-2])\s*$").expect("cell pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'x',
            Symbol::O => 'o',
        }
    }

    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Symbol),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("This cell is filled, please, choose another")]
    CellOccupied { x: usize, y: usize },

    #[error("Cell {x},{y} is outside the board")]
    OutOfBounds { x: usize, y: usize },
}

/// Parse a `x,y` answer with both coordinates in `0..=2`
pub fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let captures = CELL_PATTERN.captures(input)?;
    let x = captures[1].parse().ok()?;
    let y = captures[2].parse().ok()?;
    Some((x, y))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Symbol>; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Symbol> {
        self.cells.get(x).and_then(|row| row.get(y)).copied().flatten()
    }

    /// Mark an empty cell and report how the game stands afterwards
    pub fn place(&mut self, x: usize, y: usize, symbol: Symbol) -> Result<Outcome, BoardError> {
        let cell = self
            .cells
            .get_mut(x)
            .and_then(|row| row.get_mut(y))
            .ok_or(BoardError::OutOfBounds { x, y })?;
        if cell.is_some() {
            return Err(BoardError::CellOccupied { x, y });
        }
        *cell = Some(symbol);
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> Outcome {
        for symbol in [Symbol::X, Symbol::O] {
            if self.has_line(symbol) {
                return Outcome::Win(symbol);
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    fn has_line(&self, symbol: Symbol) -> bool {
        let owns = |x: usize, y: usize| self.cells[x][y] == Some(symbol);

        let row = (0..SIZE).any(|x| (0..SIZE).all(|y| owns(x, y)));
        let column = (0..SIZE).any(|y| (0..SIZE).all(|x| owns(x, y)));
        let diagonal = (0..SIZE).all(|i| owns(i, i));
        let anti_diagonal = (0..SIZE).all(|i| owns(SIZE - 1 - i, i));

        row || column || diagonal || anti_diagonal
    }
}

impl fmt::Display for Board {
    /// Empty cells show their coordinates so players know what to type
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "        +-----+-----+-----+";
        writeln!(f, "{}", BORDER)?;
        for (x, row) in self.cells.iter().enumerate() {
            write!(f, "        |")?;
            for (y, cell) in row.iter().enumerate() {
                match cell {
                    Some(symbol) => write!(f, "  {}  |", symbol.as_char())?,
                    None => write!(f, " {},{} |", x, y)?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", BORDER)?;
        }
        Ok(())
    }
}
