//! Deterministic, problem-agnostic state-space search.
//!
//! A [`Problem`] supplies an initial state, a goal test and a successor function. The engine
//! ([`search`] / [`Searcher`]) explores it breadth-first, depth-first or with A*, records every
//! expanded state exactly once in a [`VisitedMap`], and rebuilds the initial-to-goal path from the
//! recorded parent links.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod path;
pub mod problem;
pub mod rng;
pub mod strategy;
pub mod trace;
pub mod visited;

pub use engine::{search, SearchConfig, SearchOutcome, SearchReport, SearchStats, Searcher, Solution};
pub use error::{Result, SearchError};
pub use path::{is_valid_path, reconstruct_path};
pub use problem::{Problem, SearchState};
pub use rng::{DeterministicRng, SplitMix64};
pub use strategy::Strategy;
pub use trace::{NullTraceSink, TraceEvent, TraceSink, VecTraceSink};
pub use visited::{NodeId, VisitedMap};
