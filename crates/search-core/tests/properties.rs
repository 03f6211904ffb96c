use std::collections::VecDeque;

use proptest::prelude::*;
use search_core::{is_valid_path, search, Problem, Searcher, VecTraceSink};

#[derive(Debug, Clone)]
struct RandomGraph {
    n: usize,
    edges: Vec<(usize, usize, u32)>,
    goal: usize,
}

impl RandomGraph {
    fn out(&self, from: usize) -> impl Iterator<Item = &(usize, usize, u32)> {
        self.edges.iter().filter(move |(f, _, _)| *f == from)
    }

    /// Move counts from node 0 by plain breadth-first flooding.
    fn hops(&self) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.n];
        let mut queue = VecDeque::from([0usize]);
        dist[0] = Some(0);
        while let Some(u) = queue.pop_front() {
            for &(_, v, _) in self.out(u) {
                if dist[v].is_none() {
                    dist[v] = Some(dist[u].unwrap_or(0) + 1);
                    queue.push_back(v);
                }
            }
        }
        dist
    }

    /// Cheapest cost from node 0 by repeated relaxation.
    fn cheapest(&self) -> Vec<Option<u32>> {
        let mut dist: Vec<Option<u32>> = vec![None; self.n];
        dist[0] = Some(0);
        for _ in 0..self.n {
            for &(u, v, c) in &self.edges {
                if let Some(du) = dist[u] {
                    let cand = du + c;
                    if dist[v].map_or(true, |dv| cand < dv) {
                        dist[v] = Some(cand);
                    }
                }
            }
        }
        dist
    }
}

impl Problem for RandomGraph {
    type State = usize;

    fn initial(&self) -> usize {
        0
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &usize) -> Vec<usize> {
        self.out(*state).map(|(_, to, _)| *to).collect()
    }

    fn step_cost(&self, from: &usize, to: &usize) -> u32 {
        self.out(*from)
            .filter(|(_, t, _)| t == to)
            .map(|(_, _, c)| *c)
            .min()
            .unwrap_or(u32::MAX)
    }
}

fn random_graph() -> impl Strategy<Value = RandomGraph> {
    (1usize..9).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1u32..6);
        (
            Just(n),
            proptest::collection::vec(edge, 0..(n * 3)),
            0..n,
        )
            .prop_map(|(n, edges, goal)| RandomGraph { n, edges, goal })
    })
}

proptest! {
    #[test]
    fn every_strategy_finds_a_path_iff_goal_is_reachable(g in random_graph()) {
        let reachable = g.hops()[g.goal].is_some();
        for strategy in search_core::Strategy::ALL {
            let report = search(&g, strategy).unwrap();
            prop_assert_eq!(report.outcome.is_found(), reachable, "{}", strategy);
            if let Some(solution) = report.outcome.solution() {
                prop_assert!(is_valid_path(&g, &solution.path));
            }
        }
    }

    #[test]
    fn bfs_is_minimal_in_moves_and_dfs_is_not_shorter(g in random_graph()) {
        let Some(best) = g.hops()[g.goal] else { return Ok(()) };

        let bfs = search(&g, search_core::Strategy::Bfs).unwrap();
        prop_assert_eq!(bfs.outcome.solution().unwrap().moves(), best);

        let dfs = search(&g, search_core::Strategy::Dfs).unwrap();
        prop_assert!(dfs.outcome.solution().unwrap().moves() >= best);
    }

    #[test]
    fn astar_is_minimal_in_cost(g in random_graph()) {
        let Some(best) = g.cheapest()[g.goal] else { return Ok(()) };

        let astar = search(&g, search_core::Strategy::AStar).unwrap();
        let solution = astar.outcome.solution().unwrap();
        prop_assert_eq!(solution.cost, best);

        let summed: u32 = solution
            .path
            .windows(2)
            .map(|w| g.step_cost(&w[0], &w[1]))
            .sum();
        prop_assert_eq!(summed, best);
    }

    #[test]
    fn no_state_is_expanded_twice(g in random_graph()) {
        for strategy in search_core::Strategy::ALL {
            let mut sink = VecTraceSink::default();
            let report = Searcher::new(strategy).run_traced(&g, &mut sink).unwrap();

            let mut ids: Vec<u64> = sink.tagged("expand").map(|e| e.a).collect();
            let n = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), n);
            prop_assert_eq!(n, report.stats.expanded);
            prop_assert!(n <= g.n);
        }
    }
}
