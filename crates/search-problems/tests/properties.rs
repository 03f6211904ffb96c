use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;
use search_core::{is_valid_path, search, DeterministicRng, Problem, SplitMix64};
use search_problems::{BlockWorld, Board, Jugs, SlidingTile, Stacks, WaterJug};

/// Exhaustive reachability from the problem's initial state.
fn reachable<P: Problem>(problem: &P) -> HashSet<P::State> {
    let mut seen = HashSet::from([problem.initial()]);
    let mut queue = VecDeque::from([problem.initial()]);
    while let Some(s) = queue.pop_front() {
        for n in problem.successors(&s) {
            if seen.insert(n.clone()) {
                queue.push_back(n);
            }
        }
    }
    seen
}

fn scramble(size: usize, steps: usize, seed: u64) -> Board {
    let mut rng = SplitMix64::new(seed);
    let goal = Board::solved(size).unwrap();
    let problem = SlidingTile::new(goal.clone(), goal.clone()).unwrap();
    let mut board = goal;
    for _ in 0..steps {
        let next = problem.successors(&board);
        board = next[rng.next_index(next.len())].clone();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn water_jug_found_iff_reachable(
        cap in (1u32..6, 1u32..6),
        start in (0u32..6, 0u32..6),
        goal in (0u32..6, 0u32..6),
    ) {
        let capacities = Jugs::new(cap.0, cap.1);
        let initial = Jugs::new(start.0.min(cap.0), start.1.min(cap.1));
        let goal = Jugs::new(goal.0.min(cap.0), goal.1.min(cap.1));
        let problem = WaterJug::new(capacities, initial, goal).unwrap();

        let expected = reachable(&problem).contains(&goal);
        for strategy in search_core::Strategy::ALL {
            let report = search(&problem, strategy).unwrap();
            prop_assert_eq!(report.outcome.is_found(), expected);
            if let Some(solution) = report.outcome.solution() {
                prop_assert!(is_valid_path(&problem, &solution.path));
            }
        }
    }

    #[test]
    fn block_world_found_iff_reachable(
        initial in proptest::sample::subsequence(vec!['A', 'B', 'C'], 0..=3),
        split in 0usize..4,
        goal_perm in Just(vec!['A', 'B', 'C']).prop_shuffle(),
    ) {
        let split = split.min(initial.len());
        let (left, right) = initial.split_at(split);
        let initial = Stacks::from_labels([
            left.iter().collect::<String>(),
            right.iter().collect::<String>(),
            String::new(),
        ]);
        let goal = Stacks::from_labels([goal_perm.iter().collect::<String>(), String::new(), String::new()]);
        let problem = BlockWorld::new(initial, goal.clone()).unwrap();

        let expected = reachable(&problem).contains(&goal);
        for strategy in search_core::Strategy::ALL {
            let report = search(&problem, strategy).unwrap();
            prop_assert_eq!(report.outcome.is_found(), expected);
        }
    }

    #[test]
    fn tile_astar_is_optimal_and_heuristic_admissible(steps in 0usize..14, seed in any::<u64>()) {
        let initial = scramble(3, steps, seed);
        let problem = SlidingTile::new(initial.clone(), Board::solved(3).unwrap()).unwrap();
        prop_assert!(problem.is_solvable());

        let astar = search(&problem, search_core::Strategy::AStar).unwrap();
        let bfs = search(&problem, search_core::Strategy::Bfs).unwrap();
        let a = astar.outcome.solution().unwrap();
        let b = bfs.outcome.solution().unwrap();

        prop_assert_eq!(a.moves(), b.moves());
        prop_assert!(a.moves() <= steps);
        prop_assert!(problem.heuristic(&initial) as usize <= a.moves());
        prop_assert!(is_valid_path(&problem, &a.path));
    }

    #[test]
    fn two_by_two_solvability_matches_reachability(perm in Just(vec![0u8, 1, 2, 3]).prop_shuffle()) {
        let initial = Board::new(2, perm).unwrap();
        let goal = Board::solved(2).unwrap();
        let problem = SlidingTile::new(initial.clone(), goal.clone()).unwrap();
        prop_assert_eq!(initial.is_solvable_to(&goal), reachable(&problem).contains(&goal));
    }
}
