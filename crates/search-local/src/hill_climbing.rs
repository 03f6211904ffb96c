#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClimbConfig {
    /// Max number of moves. `None` climbs until no neighbor improves.
    pub max_steps: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbResult<S, C> {
    /// Local optimum (or the state reached when the step budget ran out).
    pub state: S,
    pub cost: C,
    /// Moves taken from the initial state.
    pub steps: usize,
}

/// Steepest-ascent hill climbing that minimizes a cost.
///
/// Every step evaluates all neighbors and moves to the cheapest one; the first neighbor wins ties.
/// The climb stops as soon as the best neighbor is not strictly cheaper than the current state.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimber {
    config: ClimbConfig,
}

impl HillClimber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ClimbConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> ClimbConfig {
        self.config
    }

    pub fn climb<S, C, F, N, I>(&self, initial: S, mut cost: F, mut neighbors: N) -> ClimbResult<S, C>
    where
        C: Ord + Copy + core::fmt::Debug,
        F: FnMut(&S) -> C,
        N: FnMut(&S) -> I,
        I: IntoIterator<Item = S>,
    {
        let mut state = initial;
        let mut current = cost(&state);
        let mut steps = 0usize;

        loop {
            if self.config.max_steps.is_some_and(|limit| steps >= limit) {
                tracing::debug!(steps, cost = ?current, "hill climb hit step limit");
                break;
            }

            let mut best: Option<(S, C)> = None;
            for next in neighbors(&state) {
                let c = cost(&next);
                if best.as_ref().map_or(true, |(_, b)| c < *b) {
                    best = Some((next, c));
                }
            }

            match best {
                Some((next, c)) if c < current => {
                    steps += 1;
                    tracing::trace!(step = steps, cost = ?c, "hill climb move");
                    state = next;
                    current = c;
                }
                _ => {
                    tracing::debug!(steps, cost = ?current, "hill climb reached local optimum");
                    break;
                }
            }
        }

        ClimbResult {
            state,
            cost: current,
            steps,
        }
    }
}

/// Unbounded [`HillClimber::climb`].
pub fn steepest_ascent<S, C, F, N, I>(initial: S, cost: F, neighbors: N) -> ClimbResult<S, C>
where
    C: Ord + Copy + core::fmt::Debug,
    F: FnMut(&S) -> C,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    HillClimber::new().climb(initial, cost, neighbors)
}
