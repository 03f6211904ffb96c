//! Local optimization over caller-supplied states.
//!
//! Neither routine keeps a frontier or a visited map: they follow a single current state and
//! return where they stopped. Randomness comes from an injected [`DeterministicRng`].
//!
//! [`DeterministicRng`]: search_core::DeterministicRng

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod annealing;
pub mod hill_climbing;

pub use annealing::{simulated_annealing, AnnealConfig, AnnealResult, InverseTime, Schedule};
pub use hill_climbing::{steepest_ascent, ClimbConfig, ClimbResult, HillClimber};
