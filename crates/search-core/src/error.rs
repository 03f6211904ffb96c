use thiserror::Error;

/// Errors reported by the search engine.
///
/// An unreachable goal is not an error: it is reported as
/// [`SearchOutcome::NoSolution`](crate::SearchOutcome::NoSolution).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("unsupported search strategy: {0:?} (expected one of bfs, dfs, astar)")]
    UnsupportedStrategy(String),

    #[error("search stopped after {limit} expansions without reaching the goal")]
    ExpansionLimit { limit: usize },

    #[error("state was never recorded in the visited map: {0}")]
    UnknownState(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
