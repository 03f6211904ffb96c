//! Problem adapters for the search engine, plus standalone evaluation functions.
//!
//! Each adapter owns a typed, immutable state (`Jugs`, `Stacks`, `Board`) whose derived `Hash`
//! is its canonical form, and implements [`search_core::Problem`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blocks;
pub mod error;
pub mod sliding_tile;
pub mod tictactoe;
pub mod water_jug;

pub use blocks::{support_score, Block, BlockMove, BlockWorld, Stacks};
pub use error::{ProblemError, Result};
pub use sliding_tile::{Board, Direction, SlidingTile};
pub use tictactoe::{Mark, TicTacToe};
pub use water_jug::{JugMove, Jugs, WaterJug};
