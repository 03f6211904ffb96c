use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use search_core::Problem;

use crate::{ProblemError, Result};

/// Water levels of the two jugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Jugs {
    pub first: u32,
    pub second: u32,
}

impl Jugs {
    pub const fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    fn fits(self, capacities: Jugs) -> bool {
        self.first <= capacities.first && self.second <= capacities.second
    }
}

impl From<(u32, u32)> for Jugs {
    fn from((first, second): (u32, u32)) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for Jugs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// The six transition rules, in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JugMove {
    FillFirst,
    FillSecond,
    EmptyFirst,
    EmptySecond,
    PourFirstToSecond,
    PourSecondToFirst,
}

impl JugMove {
    pub const ALL: [JugMove; 6] = [
        JugMove::FillFirst,
        JugMove::FillSecond,
        JugMove::EmptyFirst,
        JugMove::EmptySecond,
        JugMove::PourFirstToSecond,
        JugMove::PourSecondToFirst,
    ];
}

impl fmt::Display for JugMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JugMove::FillFirst => "fill jug 1",
            JugMove::FillSecond => "fill jug 2",
            JugMove::EmptyFirst => "empty jug 1",
            JugMove::EmptySecond => "empty jug 2",
            JugMove::PourFirstToSecond => "pour jug 1 into jug 2",
            JugMove::PourSecondToFirst => "pour jug 2 into jug 1",
        })
    }
}

/// Two jugs without markings; reach an exact pair of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterJug {
    capacities: Jugs,
    initial: Jugs,
    goal: Jugs,
}

impl WaterJug {
    pub const CLASSIC_CAPACITIES: Jugs = Jugs::new(4, 3);

    pub fn new(capacities: Jugs, initial: Jugs, goal: Jugs) -> Result<Self> {
        if capacities.first == 0 || capacities.second == 0 {
            return Err(ProblemError::ZeroCapacity {
                first: capacities.first,
                second: capacities.second,
            });
        }
        for (which, state) in [("initial", initial), ("goal", goal)] {
            if !state.fits(capacities) {
                return Err(ProblemError::JugOverflow {
                    which,
                    state: state.to_string(),
                    capacities: capacities.to_string(),
                });
            }
        }
        Ok(Self {
            capacities,
            initial,
            goal,
        })
    }

    /// 4 and 3 litre jugs, both empty; get 2 litres into the first one and empty the second.
    pub fn classic() -> Self {
        Self {
            capacities: Self::CLASSIC_CAPACITIES,
            initial: Jugs::new(0, 0),
            goal: Jugs::new(2, 0),
        }
    }

    pub fn capacities(&self) -> Jugs {
        self.capacities
    }

    pub fn goal(&self) -> Jugs {
        self.goal
    }

    /// Result of applying `mv` to `state`, or `None` if the move would not change anything.
    pub fn apply(&self, state: Jugs, mv: JugMove) -> Option<Jugs> {
        let Jugs { first, second } = state;
        let cap = self.capacities;
        let next = match mv {
            JugMove::FillFirst => Jugs::new(cap.first, second),
            JugMove::FillSecond => Jugs::new(first, cap.second),
            JugMove::EmptyFirst => Jugs::new(0, second),
            JugMove::EmptySecond => Jugs::new(first, 0),
            JugMove::PourFirstToSecond => {
                let transfer = first.min(cap.second.saturating_sub(second));
                Jugs::new(first - transfer, second + transfer)
            }
            JugMove::PourSecondToFirst => {
                let transfer = second.min(cap.first.saturating_sub(first));
                Jugs::new(first + transfer, second - transfer)
            }
        };
        (next != state).then_some(next)
    }

    /// Every state-changing move from `state`, in rule order.
    pub fn moves(&self, state: Jugs) -> Vec<(JugMove, Jugs)> {
        JugMove::ALL
            .into_iter()
            .filter_map(|mv| self.apply(state, mv).map(|next| (mv, next)))
            .collect()
    }

    /// The first rule that turns `from` into `to`, if any.
    pub fn move_between(&self, from: Jugs, to: Jugs) -> Option<JugMove> {
        self.moves(from)
            .into_iter()
            .find_map(|(mv, next)| (next == to).then_some(mv))
    }
}

impl Problem for WaterJug {
    type State = Jugs;

    fn initial(&self) -> Jugs {
        self.initial
    }

    fn is_goal(&self, state: &Jugs) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Jugs) -> Vec<Jugs> {
        self.moves(*state).into_iter().map(|(_, next)| next).collect()
    }
}
