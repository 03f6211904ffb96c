use core::fmt::Debug;
use core::hash::Hash;

/// A value usable as a search state.
///
/// States are immutable once produced: successor generation builds fresh values and never
/// mutates its input. `Eq` and `Hash` must agree, and the derived `Hash` of a typed state is its
/// canonical form, so two semantically identical states always deduplicate in the visited map.
pub trait SearchState: Clone + Eq + Hash + Debug {}

impl<T> SearchState for T where T: Clone + Eq + Hash + Debug {}

/// A problem definition the engine can explore.
pub trait Problem {
    type State: SearchState;

    fn initial(&self) -> Self::State;

    /// Structural goal test.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Every valid single-step transition from `state`.
    ///
    /// Enumeration order only decides which of several equally good paths is found first.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Cost of moving from `from` to its successor `to`. Must be non-negative (it is unsigned).
    fn step_cost(&self, _from: &Self::State, _to: &Self::State) -> u32 {
        1
    }

    /// Admissible estimate of the remaining cost to the goal.
    ///
    /// The default of zero is admissible for any problem and turns A* into uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> u32 {
        0
    }
}

impl<P> Problem for &P
where
    P: Problem + ?Sized,
{
    type State = P::State;

    fn initial(&self) -> Self::State {
        (**self).initial()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Self::State> {
        (**self).successors(state)
    }

    fn step_cost(&self, from: &Self::State, to: &Self::State) -> u32 {
        (**self).step_cost(from, to)
    }

    fn heuristic(&self, state: &Self::State) -> u32 {
        (**self).heuristic(state)
    }
}
