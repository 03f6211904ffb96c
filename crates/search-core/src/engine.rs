use core::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    reconstruct_path, NodeId, NullTraceSink, Problem, Result, SearchError, Strategy, TraceEvent,
    TraceSink, VisitedMap,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Max number of state expansions before giving up with
    /// [`SearchError::ExpansionLimit`]. `None` explores until the frontier is empty.
    pub max_expansions: Option<usize>,
}

/// A path from the initial state to a goal state, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    pub path: Vec<S>,
    /// Sum of step costs along `path`.
    pub cost: u32,
}

impl<S> Solution<S> {
    /// Number of transitions in the path.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn initial(&self) -> Option<&S> {
        self.path.first()
    }

    pub fn goal(&self) -> Option<&S> {
        self.path.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SearchOutcome<S> {
    Found(Solution<S>),
    /// The frontier emptied without reaching the goal.
    NoSolution,
}

impl<S> SearchOutcome<S> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NoSolution => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution<S>> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NoSolution => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States recorded in the visited map and expanded.
    pub expanded: usize,
    /// Successors pushed onto the frontier.
    pub generated: usize,
    /// Popped entries discarded because their state was already expanded.
    pub skipped: usize,
    pub max_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<S> {
    pub outcome: SearchOutcome<S>,
    pub stats: SearchStats,
}

/// Search `problem` with the given strategy and the default config.
pub fn search<P>(problem: &P, strategy: Strategy) -> Result<SearchReport<P::State>>
where
    P: Problem,
{
    Searcher::new(strategy).run(problem)
}

#[derive(Debug)]
struct Entry<S> {
    state: S,
    parent: Option<NodeId>,
    g: u32,
    f: u32,
    tie: u64,
}

impl<S> Entry<S> {
    fn key(&self) -> (u32, u32, u64) {
        (self.f, self.g, self.tie)
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

trait Frontier<S> {
    fn push(&mut self, entry: Entry<S>);
    fn pop(&mut self) -> Option<Entry<S>>;
    fn len(&self) -> usize;
}

struct Fifo<S>(VecDeque<Entry<S>>);

impl<S> Frontier<S> for Fifo<S> {
    fn push(&mut self, entry: Entry<S>) {
        self.0.push_back(entry);
    }

    fn pop(&mut self) -> Option<Entry<S>> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

struct Lifo<S>(Vec<Entry<S>>);

impl<S> Frontier<S> for Lifo<S> {
    fn push(&mut self, entry: Entry<S>) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<Entry<S>> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

struct Priority<S>(BinaryHeap<Entry<S>>);

impl<S> Frontier<S> for Priority<S> {
    fn push(&mut self, entry: Entry<S>) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<Entry<S>> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Configured search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    strategy: Strategy,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn run<P>(&self, problem: &P) -> Result<SearchReport<P::State>>
    where
        P: Problem,
    {
        self.run_traced(problem, &mut NullTraceSink)
    }

    pub fn run_traced<P>(
        &self,
        problem: &P,
        sink: &mut dyn TraceSink,
    ) -> Result<SearchReport<P::State>>
    where
        P: Problem,
    {
        tracing::debug!(strategy = %self.strategy, "search started");

        let report = match self.strategy {
            Strategy::Bfs => self.explore(problem, Fifo(VecDeque::new()), false, sink),
            Strategy::Dfs => self.explore(problem, Lifo(Vec::new()), false, sink),
            Strategy::AStar => self.explore(problem, Priority(BinaryHeap::new()), true, sink),
        }?;

        tracing::debug!(
            strategy = %self.strategy,
            found = report.outcome.is_found(),
            moves = report.outcome.solution().map(Solution::moves),
            expanded = report.stats.expanded,
            generated = report.stats.generated,
            skipped = report.stats.skipped,
            max_frontier = report.stats.max_frontier,
            "search finished"
        );
        Ok(report)
    }

    /// Shared expansion loop. The frontier decides the order; `informed` adds the heuristic to
    /// each entry's priority.
    fn explore<P, F>(
        &self,
        problem: &P,
        mut frontier: F,
        informed: bool,
        sink: &mut dyn TraceSink,
    ) -> Result<SearchReport<P::State>>
    where
        P: Problem,
        F: Frontier<P::State>,
    {
        let mut visited: VisitedMap<P::State> = VisitedMap::new();
        let mut stats = SearchStats::default();
        let mut tie: u64 = 0;
        let mut step: u64 = 0;

        let initial = problem.initial();
        let f0 = if informed { problem.heuristic(&initial) } else { 0 };
        frontier.push(Entry {
            state: initial,
            parent: None,
            g: 0,
            f: f0,
            tie,
        });
        tie += 1;
        stats.max_frontier = frontier.len();

        while let Some(entry) = frontier.pop() {
            step += 1;

            // Goal check precedes the visited check, so the goal gets its own record.
            if problem.is_goal(&entry.state) {
                visited.insert(entry.state.clone(), entry.parent);
                let node = visited
                    .id_of(&entry.state)
                    .map_or(0, |id| id.index() as u64);
                sink.emit(TraceEvent::new(step, "goal").with_a(node).with_b(entry.g.into()));

                let path = reconstruct_path(&visited, &entry.state)?;
                return Ok(SearchReport {
                    outcome: SearchOutcome::Found(Solution {
                        path,
                        cost: entry.g,
                    }),
                    stats,
                });
            }

            if let Some(id) = visited.id_of(&entry.state) {
                // Stale duplicate: the state was already expanded through an earlier entry.
                stats.skipped += 1;
                sink.emit(TraceEvent::new(step, "skip").with_a(id.index() as u64));
                continue;
            }

            if let Some(limit) = self.config.max_expansions {
                if stats.expanded >= limit {
                    tracing::debug!(limit, "expansion budget exhausted");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            let Some(id) = visited.insert(entry.state, entry.parent) else {
                continue;
            };
            let Some(current) = visited.state(id) else {
                continue;
            };
            stats.expanded += 1;
            sink.emit(
                TraceEvent::new(step, "expand")
                    .with_a(id.index() as u64)
                    .with_b(entry.g.into()),
            );
            tracing::trace!(node = id.index(), g = entry.g, state = ?current, "expand");

            for next in problem.successors(current) {
                if visited.contains(&next) {
                    continue;
                }
                let g = entry.g.saturating_add(problem.step_cost(current, &next));
                let f = if informed {
                    g.saturating_add(problem.heuristic(&next))
                } else {
                    g
                };
                sink.emit(
                    TraceEvent::new(step, "push")
                        .with_a(id.index() as u64)
                        .with_b(f.into()),
                );
                frontier.push(Entry {
                    state: next,
                    parent: Some(id),
                    g,
                    f,
                    tie,
                });
                tie += 1;
                stats.generated += 1;
            }
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        Ok(SearchReport {
            outcome: SearchOutcome::NoSolution,
            stats,
        })
    }
}
