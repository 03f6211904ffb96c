use core::fmt;
use std::collections::{BTreeSet, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use search_core::Problem;

use crate::{ProblemError, Result};

/// A labeled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block(pub char);

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered stacks of blocks. Each stack is listed bottom to top: the last block is the one that
/// can be picked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Stacks(Vec<Vec<Block>>);

impl Stacks {
    pub fn new(stacks: Vec<Vec<Block>>) -> Self {
        Self(stacks)
    }

    /// One string per stack, bottom to top: `["AB", "C", ""]`.
    pub fn from_labels<I, S>(stacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            stacks
                .into_iter()
                .map(|s| s.as_ref().chars().map(Block).collect())
                .collect(),
        )
    }

    pub fn stacks(&self) -> &[Vec<Block>] {
        &self.0
    }

    pub fn num_stacks(&self) -> usize {
        self.0.len()
    }

    pub fn top(&self, stack: usize) -> Option<Block> {
        self.0.get(stack).and_then(|s| s.last().copied())
    }

    /// Fresh arrangement with the top block of `from` moved onto `to`.
    pub fn move_top(&self, from: usize, to: usize) -> Option<Stacks> {
        if from == to || to >= self.0.len() {
            return None;
        }
        let block = self.top(from)?;
        let mut next = self.0.clone();
        next[from].pop();
        next[to].push(block);
        Some(Stacks(next))
    }

    fn check_unique(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for block in self.0.iter().flatten() {
            if !seen.insert(*block) {
                return Err(ProblemError::DuplicateBlock(block.0));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Stacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stack) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: [", i + 1)?;
            for (j, block) in stack.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{block}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// A single block move, stacks numbered from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMove {
    pub block: Block,
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for BlockMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {} from stack {} to stack {}",
            self.block,
            self.from + 1,
            self.to + 1
        )
    }
}

/// Rearrange stacks of blocks into a goal arrangement, one top block at a time.
///
/// The goal may mention blocks that do not exist in the initial arrangement; such a goal is
/// simply unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockWorld {
    initial: Stacks,
    goal: Stacks,
}

impl BlockWorld {
    pub fn new(initial: Stacks, goal: Stacks) -> Result<Self> {
        if initial.num_stacks() < 2 {
            return Err(ProblemError::TooFewStacks(initial.num_stacks()));
        }
        if initial.num_stacks() != goal.num_stacks() {
            return Err(ProblemError::StackCountMismatch {
                initial: initial.num_stacks(),
                goal: goal.num_stacks(),
            });
        }
        initial.check_unique()?;
        goal.check_unique()?;
        Ok(Self { initial, goal })
    }

    pub fn goal(&self) -> &Stacks {
        &self.goal
    }

    /// Every move from `state`: each non-empty source onto each other stack, in index order.
    pub fn moves(&self, state: &Stacks) -> Vec<(BlockMove, Stacks)> {
        let n = state.num_stacks();
        let mut out = Vec::new();
        for from in 0..n {
            let Some(block) = state.top(from) else {
                continue;
            };
            for to in (0..n).filter(|&to| to != from) {
                if let Some(next) = state.move_top(from, to) {
                    out.push((BlockMove { block, from, to }, next));
                }
            }
        }
        out
    }

    pub fn move_between(&self, from: &Stacks, to: &Stacks) -> Option<BlockMove> {
        self.moves(from)
            .into_iter()
            .find_map(|(mv, next)| (next == *to).then_some(mv))
    }
}

impl Problem for BlockWorld {
    type State = Stacks;

    fn initial(&self) -> Stacks {
        self.initial.clone()
    }

    fn is_goal(&self, state: &Stacks) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Stacks) -> Vec<Stacks> {
        self.moves(state).into_iter().map(|(_, next)| next).collect()
    }
}

/// Support-structure score of `state` with respect to `goal`; higher is better.
///
/// For every block resting on another block, the block under it is compared with the block
/// under it in the goal: matching adds the height of the structure from the table up to and
/// including the block, a mismatch subtracts it. Every bottom block adds 1 when it also sits on
/// the table in the goal (or is absent from the goal) and subtracts 1 otherwise.
///
/// Both arrangements are read bottom to top, like every [`Stacks`]. Lists written top block
/// first must be reversed before they are passed in: `[[A, B], [C], []]` written that way is
/// `Stacks::from_labels(["BA", "C", ""])` here.
pub fn support_score(state: &Stacks, goal: &Stacks) -> i32 {
    let mut goal_support: HashMap<Block, Option<Block>> = HashMap::new();
    for stack in goal.stacks() {
        for (i, block) in stack.iter().enumerate() {
            let below = i.checked_sub(1).map(|j| stack[j]);
            goal_support.insert(*block, below);
        }
    }

    let mut score: i32 = 0;
    for stack in state.stacks() {
        for (i, block) in stack.iter().enumerate() {
            match i.checked_sub(1) {
                Some(j) => {
                    let height = (i + 1) as i32;
                    if goal_support.get(block) == Some(&Some(stack[j])) {
                        score += height;
                    } else {
                        score -= height;
                    }
                }
                None => {
                    if goal_support.get(block).copied().flatten().is_none() {
                        score += 1;
                    } else {
                        score -= 1;
                    }
                }
            }
        }
    }
    score
}
