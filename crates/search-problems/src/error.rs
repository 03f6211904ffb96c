use thiserror::Error;

/// Invalid problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("jug capacities must be non-zero, got ({first}, {second})")]
    ZeroCapacity { first: u32, second: u32 },

    #[error("{which} state {state} exceeds jug capacities {capacities}")]
    JugOverflow {
        which: &'static str,
        state: String,
        capacities: String,
    },

    #[error("block world needs at least two stacks, got {0}")]
    TooFewStacks(usize),

    #[error("initial state has {initial} stacks but goal has {goal}")]
    StackCountMismatch { initial: usize, goal: usize },

    #[error("block {0:?} appears more than once")]
    DuplicateBlock(char),

    #[error("board side must be between 2 and 15, got {0}")]
    BoardSize(usize),

    #[error("board row {row} has {len} tiles, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("board tiles must be a permutation of 0..{0}")]
    NotAPermutation(usize),

    #[error("initial board is {initial}x{initial} but goal is {goal}x{goal}")]
    BoardSizeMismatch { initial: usize, goal: usize },

    #[error("invalid tic-tac-toe cell {0:?} (expected 'X', 'O' or ' ')")]
    InvalidCell(char),

    #[error("tic-tac-toe board must be 3 rows of 3 cells")]
    TicTacToeShape,
}

pub type Result<T> = std::result::Result<T, ProblemError>;
