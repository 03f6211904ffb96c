use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use search_core::Problem;

use crate::{ProblemError, Result};

const MAX_SIDE: usize = 15;

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order for successors.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "blank up",
            Direction::Down => "blank down",
            Direction::Left => "blank left",
            Direction::Right => "blank right",
        })
    }
}

/// An n x n sliding-tile board, row-major, with 0 as the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>"))]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Build from `size * size` row-major tiles forming a permutation of `0..size * size`.
    pub fn new(size: usize, tiles: Vec<u8>) -> Result<Self> {
        if !(2..=MAX_SIDE).contains(&size) {
            return Err(ProblemError::BoardSize(size));
        }
        let cells = size * size;
        if tiles.len() != cells {
            return Err(ProblemError::NotAPermutation(cells));
        }
        let mut seen = vec![false; cells];
        for &t in &tiles {
            let t = t as usize;
            if t >= cells || seen[t] {
                return Err(ProblemError::NotAPermutation(cells));
            }
            seen[t] = true;
        }
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(ProblemError::NotAPermutation(cells))?;
        Ok(Self { size, tiles, blank })
    }

    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[u8]>,
    {
        let size = rows.len();
        if !(2..=MAX_SIDE).contains(&size) {
            return Err(ProblemError::BoardSize(size));
        }
        let mut tiles = Vec::with_capacity(size * size);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != size {
                return Err(ProblemError::RaggedRow {
                    row,
                    len: r.len(),
                    expected: size,
                });
            }
            tiles.extend_from_slice(r);
        }
        Self::new(size, tiles)
    }

    /// `1, 2, ..., n*n - 1` followed by the blank.
    pub fn solved(size: usize) -> Result<Self> {
        if !(2..=MAX_SIDE).contains(&size) {
            return Err(ProblemError::BoardSize(size));
        }
        let cells = size * size;
        let tiles = (1..cells).chain(core::iter::once(0)).map(|t| t as u8).collect();
        Self::new(size, tiles)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.tiles[row * self.size + col])
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.size)
    }

    /// Fresh board with the blank swapped with its neighbor in `dir`, if that cell exists.
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let (row, col) = self.blank();
        let (dr, dc) = dir.delta();
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        if nr >= self.size || nc >= self.size {
            return None;
        }
        let target = nr * self.size + nc;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// Whether `goal` can be reached from `self` by sliding.
    ///
    /// Every slide is a transposition with the blank and flips the parity of the blank's
    /// taxicab distance to its goal cell, so the two parities must agree.
    pub fn is_solvable_to(&self, goal: &Board) -> bool {
        if self.size != goal.size {
            return false;
        }
        let cells = self.tiles.len();
        let mut goal_pos = vec![0usize; cells];
        for (i, &t) in goal.tiles.iter().enumerate() {
            goal_pos[t as usize] = i;
        }

        let perm: Vec<usize> = self.tiles.iter().map(|&t| goal_pos[t as usize]).collect();
        let mut seen = vec![false; cells];
        let mut cycles = 0;
        for start in 0..cells {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                i = perm[i];
            }
        }
        let perm_parity = (cells - cycles) % 2;

        let (br, bc) = self.blank();
        let (gr, gc) = goal.blank();
        let blank_parity = (br.abs_diff(gr) + bc.abs_diff(gc)) % 2;

        perm_parity == blank_parity
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = ProblemError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[u8]>::to_vec).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &t) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if t == 0 {
                    write!(f, "{:>width$}", "_")?;
                } else {
                    write!(f, "{t:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

/// Sliding-tile puzzle with unit move cost and the Manhattan-distance heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingTile {
    initial: Board,
    goal: Board,
    /// Goal `(row, col)` of each tile value.
    goal_cells: Vec<(usize, usize)>,
}

impl SlidingTile {
    pub fn new(initial: Board, goal: Board) -> Result<Self> {
        if initial.size != goal.size {
            return Err(ProblemError::BoardSizeMismatch {
                initial: initial.size,
                goal: goal.size,
            });
        }
        let mut goal_cells = vec![(0, 0); goal.tiles.len()];
        for (i, &t) in goal.tiles.iter().enumerate() {
            goal_cells[t as usize] = (i / goal.size, i % goal.size);
        }
        Ok(Self {
            initial,
            goal,
            goal_cells,
        })
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn is_solvable(&self) -> bool {
        self.initial.is_solvable_to(&self.goal)
    }

    /// Sum over non-blank tiles of the grid distance to their goal cell.
    pub fn manhattan(&self, board: &Board) -> u32 {
        board
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, &t)| t != 0)
            .map(|(i, &t)| {
                let (gr, gc) = self.goal_cells[t as usize];
                let (r, c) = (i / board.size, i % board.size);
                (r.abs_diff(gr) + c.abs_diff(gc)) as u32
            })
            .sum()
    }

    pub fn moves(&self, board: &Board) -> Vec<(Direction, Board)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| board.slide(dir).map(|next| (dir, next)))
            .collect()
    }

    pub fn move_between(&self, from: &Board, to: &Board) -> Option<Direction> {
        self.moves(from)
            .into_iter()
            .find_map(|(dir, next)| (next == *to).then_some(dir))
    }
}

impl Problem for SlidingTile {
    type State = Board;

    fn initial(&self) -> Board {
        self.initial.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Board) -> Vec<Board> {
        self.moves(state).into_iter().map(|(_, next)| next).collect()
    }

    fn heuristic(&self, state: &Board) -> u32 {
        self.manhattan(state)
    }
}
