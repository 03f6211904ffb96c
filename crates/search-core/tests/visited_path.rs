use search_core::{reconstruct_path, SearchError, VisitedMap};

#[test]
fn insert_refuses_duplicates() {
    let mut visited = VisitedMap::new();
    let root = visited.insert("a", None).unwrap();
    assert!(visited.insert("a", Some(root)).is_none());
    assert_eq!(visited.len(), 1);
    assert_eq!(visited.parent(root), None);
}

#[test]
fn reconstruct_walks_parents_root_first() {
    let mut visited = VisitedMap::new();
    let a = visited.insert('a', None).unwrap();
    let b = visited.insert('b', Some(a)).unwrap();
    let _side = visited.insert('x', Some(a)).unwrap();
    let c = visited.insert('c', Some(b)).unwrap();

    assert_eq!(reconstruct_path(&visited, &'c').unwrap(), vec!['a', 'b', 'c']);
    assert_eq!(reconstruct_path(&visited, &'x').unwrap(), vec!['a', 'x']);
    assert_eq!(visited.depth(c), 2);
    assert_eq!(visited.len(), 4);
}

#[test]
fn reconstruct_of_root_is_single_state() {
    let mut visited = VisitedMap::new();
    visited.insert((0, 0), None).unwrap();
    assert_eq!(reconstruct_path(&visited, &(0, 0)).unwrap(), vec![(0, 0)]);
}

#[test]
fn reconstruct_unknown_state_fails() {
    let mut visited = VisitedMap::new();
    visited.insert(1u8, None).unwrap();
    let err = reconstruct_path(&visited, &2u8).unwrap_err();
    assert!(matches!(err, SearchError::UnknownState(_)));
}

#[test]
fn reconstruct_leaves_map_untouched() {
    let mut visited = VisitedMap::new();
    let a = visited.insert(10, None).unwrap();
    visited.insert(20, Some(a)).unwrap();

    let before: Vec<i32> = visited.states().copied().collect();
    let _ = reconstruct_path(&visited, &20).unwrap();
    let after: Vec<i32> = visited.states().copied().collect();
    assert_eq!(before, after);
}
