#![cfg(feature = "serde")]

use search_problems::{Board, Jugs, Stacks};

#[test]
fn board_serializes_as_rows() {
    let board = Board::from_rows(&[[1u8, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap();
    let json = serde_json::to_string(&board).expect("serialize board");
    assert_eq!(json, "[[1,2,3],[4,0,5],[7,8,6]]");

    let back: Board = serde_json::from_str(&json).expect("deserialize board");
    assert_eq!(back, board);
    assert_eq!(back.blank(), (1, 1));
}

#[test]
fn invalid_board_fails_to_deserialize() {
    let err = serde_json::from_str::<Board>("[[1,1],[2,0]]");
    assert!(err.is_err());
}

#[test]
fn jugs_and_stacks_roundtrip() {
    let jugs = Jugs::new(2, 3);
    let json = serde_json::to_string(&jugs).expect("serialize jugs");
    assert_eq!(serde_json::from_str::<Jugs>(&json).expect("deserialize jugs"), jugs);

    let stacks = Stacks::from_labels(["AB", "C", ""]);
    let json = serde_json::to_string(&stacks).expect("serialize stacks");
    assert_eq!(json, r#"[["A","B"],["C"],[]]"#);
    assert_eq!(
        serde_json::from_str::<Stacks>(&json).expect("deserialize stacks"),
        stacks
    );
}
