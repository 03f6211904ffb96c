use search_core::{SearchError, Strategy};

#[test]
fn parses_known_tags_case_insensitively() {
    assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::Bfs));
    assert_eq!("DFS".parse::<Strategy>(), Ok(Strategy::Dfs));
    assert_eq!("astar".parse::<Strategy>(), Ok(Strategy::AStar));
    assert_eq!("A*".parse::<Strategy>(), Ok(Strategy::AStar));
    assert_eq!(" a-star ".parse::<Strategy>(), Ok(Strategy::AStar));
}

#[test]
fn rejects_unknown_tags_instead_of_defaulting() {
    assert_eq!(
        "greedy".parse::<Strategy>(),
        Err(SearchError::UnsupportedStrategy("greedy".to_string()))
    );
    assert!("".parse::<Strategy>().is_err());
}

#[test]
fn display_roundtrips_through_from_str() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_lowercase_tags() {
    let json = serde_json::to_string(&Strategy::AStar).expect("serialize");
    assert_eq!(json, "\"astar\"");
    let back: Strategy = serde_json::from_str("\"dfs\"").expect("deserialize");
    assert_eq!(back, Strategy::Dfs);
}
