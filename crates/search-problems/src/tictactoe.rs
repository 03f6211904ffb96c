use core::fmt;

use crate::{ProblemError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn from_char(c: char) -> Result<Option<Mark>> {
        match c {
            'X' | 'x' => Ok(Some(Mark::X)),
            'O' | 'o' => Ok(Some(Mark::O)),
            ' ' | '_' | '.' => Ok(None),
            other => Err(ProblemError::InvalidCell(other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

type Line = [(usize, usize); 3];

const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 tic-tac-toe position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TicTacToe {
    cells: [[Option<Mark>; 3]; 3],
}

impl TicTacToe {
    pub fn new(cells: [[Option<Mark>; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Three rows of three cells each: `'X'`, `'O'` or blank (`' '`, `'_'`, `'.'`).
    pub fn parse<S>(rows: &[S]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        if rows.len() != 3 {
            return Err(ProblemError::TicTacToeShape);
        }
        let mut cells = [[None; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.as_ref().chars().collect();
            if chars.len() != 3 {
                return Err(ProblemError::TicTacToeShape);
            }
            for (c, ch) in chars.into_iter().enumerate() {
                cells[r][c] = Mark::from_char(ch)?;
            }
        }
        Ok(Self { cells })
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// A line is open for `player` while the opponent has no mark on it.
    fn open_lines(&self, player: Mark) -> i32 {
        let opponent = player.opponent();
        LINES
            .iter()
            .filter(|line| {
                line.iter()
                    .all(|&(r, c)| self.cells[r][c] != Some(opponent))
            })
            .count() as i32
    }

    /// Lines still open for `player` minus lines still open for the opponent.
    pub fn openness(&self, player: Mark) -> i32 {
        self.open_lines(player) - self.open_lines(player.opponent())
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, " ")?,
                }
            }
        }
        Ok(())
    }
}
