use search_core::{is_valid_path, search, SearchOutcome, Strategy};
use search_problems::{JugMove, Jugs, ProblemError, WaterJug};

#[test]
fn classic_bfs_reaches_two_litres_in_six_moves() {
    let problem = WaterJug::classic();
    let report = search(&problem, Strategy::Bfs).unwrap();
    let solution = report.outcome.solution().expect("classic puzzle is solvable");

    assert_eq!(solution.initial(), Some(&Jugs::new(0, 0)));
    assert_eq!(solution.goal().map(|j| j.first), Some(2));
    assert_eq!(solution.moves(), 6);
    assert!(is_valid_path(&problem, &solution.path));
}

#[test]
fn dfs_path_is_valid_and_not_shorter_than_bfs() {
    let problem = WaterJug::classic();
    let dfs = search(&problem, Strategy::Dfs).unwrap();
    let solution = dfs.outcome.solution().expect("classic puzzle is solvable");
    assert!(is_valid_path(&problem, &solution.path));
    assert!(solution.moves() >= 6);
    assert_eq!(solution.moves(), 11);
}

#[test]
fn starting_full_also_takes_six_moves() {
    let problem = WaterJug::new(
        WaterJug::CLASSIC_CAPACITIES,
        Jugs::new(4, 0),
        Jugs::new(2, 0),
    )
    .unwrap();
    let report = search(&problem, Strategy::Bfs).unwrap();
    assert_eq!(report.outcome.solution().unwrap().moves(), 6);
}

#[test]
fn unreachable_levels_yield_no_solution() {
    // Every reachable state has at least one jug empty or full; (1, 1) has neither.
    let problem =
        WaterJug::new(WaterJug::CLASSIC_CAPACITIES, Jugs::new(0, 0), Jugs::new(1, 1)).unwrap();
    for strategy in Strategy::ALL {
        let report = search(&problem, strategy).unwrap();
        assert_eq!(report.outcome, SearchOutcome::NoSolution, "{strategy}");
        assert_eq!(report.stats.expanded, 14, "{strategy}");
    }
}

#[test]
fn moves_are_generated_in_rule_order_and_only_when_they_change_state() {
    let problem = WaterJug::classic();
    let moves = problem.moves(Jugs::new(2, 1));
    assert_eq!(
        moves,
        vec![
            (JugMove::FillFirst, Jugs::new(4, 1)),
            (JugMove::FillSecond, Jugs::new(2, 3)),
            (JugMove::EmptyFirst, Jugs::new(0, 1)),
            (JugMove::EmptySecond, Jugs::new(2, 0)),
            (JugMove::PourFirstToSecond, Jugs::new(0, 3)),
            (JugMove::PourSecondToFirst, Jugs::new(3, 0)),
        ]
    );

    let full = problem.moves(Jugs::new(4, 3));
    assert_eq!(
        full,
        vec![
            (JugMove::EmptyFirst, Jugs::new(0, 3)),
            (JugMove::EmptySecond, Jugs::new(4, 0)),
        ]
    );
}

#[test]
fn move_between_names_the_rule() {
    let problem = WaterJug::classic();
    assert_eq!(
        problem.move_between(Jugs::new(0, 0), Jugs::new(4, 0)),
        Some(JugMove::FillFirst)
    );
    assert_eq!(
        problem.move_between(Jugs::new(4, 0), Jugs::new(1, 3)),
        Some(JugMove::PourFirstToSecond)
    );
    assert_eq!(problem.move_between(Jugs::new(0, 0), Jugs::new(1, 1)), None);
    assert_eq!(JugMove::PourSecondToFirst.to_string(), "pour jug 2 into jug 1");
}

#[test]
fn invalid_instances_are_rejected() {
    assert_eq!(
        WaterJug::new(Jugs::new(0, 3), Jugs::default(), Jugs::default()),
        Err(ProblemError::ZeroCapacity { first: 0, second: 3 })
    );
    assert!(matches!(
        WaterJug::new(Jugs::new(4, 3), Jugs::new(5, 0), Jugs::new(2, 0)),
        Err(ProblemError::JugOverflow { which: "initial", .. })
    ));
    assert!(matches!(
        WaterJug::new(Jugs::new(4, 3), Jugs::new(0, 0), Jugs::new(2, 4)),
        Err(ProblemError::JugOverflow { which: "goal", .. })
    ));
}

#[test]
fn repeated_bfs_runs_agree() {
    let problem = WaterJug::classic();
    let a = search(&problem, Strategy::Bfs).unwrap();
    let b = search(&problem, Strategy::Bfs).unwrap();
    assert_eq!(
        a.outcome.solution().map(|s| s.moves()),
        b.outcome.solution().map(|s| s.moves())
    );
}
