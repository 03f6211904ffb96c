use search_core::DeterministicRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Temperature as a function of the iteration number (starting at 1).
pub trait Schedule {
    fn temperature(&self, t: usize) -> f64;
}

impl<F> Schedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, t: usize) -> f64 {
        self(t)
    }
}

/// `T(t) = initial / (1 + t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InverseTime {
    pub initial: f64,
}

impl Default for InverseTime {
    fn default() -> Self {
        Self { initial: 100.0 }
    }
}

impl Schedule for InverseTime {
    fn temperature(&self, t: usize) -> f64 {
        self.initial / (1.0 + t as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Exclusive upper bound on the iteration number; iterations run `1..max_iterations`.
    pub max_iterations: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnealResult<S> {
    pub state: S,
    pub value: f64,
    /// Iterations actually run.
    pub iterations: usize,
    /// Neighbors that replaced the current state.
    pub accepted: usize,
}

/// Maximize `objective` by simulated annealing.
///
/// Each iteration draws one neighbor. Improvements are always taken; a worse neighbor is taken with
/// probability `exp(delta / T)`, drawing from `rng` only in that case. The run stops early once the
/// schedule yields a non-positive temperature.
pub fn simulated_annealing<S, F, N, T, R>(
    initial: S,
    mut objective: F,
    mut neighbor: N,
    schedule: &T,
    config: &AnnealConfig,
    rng: &mut R,
) -> AnnealResult<S>
where
    F: FnMut(&S) -> f64,
    N: FnMut(&S, &mut R) -> S,
    T: Schedule + ?Sized,
    R: DeterministicRng,
{
    let mut state = initial;
    let mut value = objective(&state);
    let mut iterations = 0usize;
    let mut accepted = 0usize;

    for t in 1..config.max_iterations {
        let temperature = schedule.temperature(t);
        if temperature <= 0.0 {
            break;
        }
        iterations += 1;

        let next = neighbor(&state, rng);
        let next_value = objective(&next);
        let delta = next_value - value;

        if delta > 0.0 || rng.next_f64_unit() < (delta / temperature).exp() {
            state = next;
            value = next_value;
            accepted += 1;
        }

        tracing::trace!(t, temperature, value, delta, "anneal iteration");
    }

    tracing::debug!(iterations, accepted, value, "annealing finished");

    AnnealResult {
        state,
        value,
        iterations,
        accepted,
    }
}
