use crate::{Problem, Result, SearchError, SearchState, VisitedMap};

/// Walk parent links from `terminal` back to the root and return the path root-first.
///
/// The map is only read. Fails if `terminal` was never recorded, which means the caller passed a
/// state from a different search.
pub fn reconstruct_path<S>(visited: &VisitedMap<S>, terminal: &S) -> Result<Vec<S>>
where
    S: SearchState,
{
    let mut current = visited
        .id_of(terminal)
        .ok_or_else(|| SearchError::UnknownState(format!("{terminal:?}")))?;

    let mut out = vec![terminal.clone()];
    while let Some(prev) = visited.parent(current) {
        current = prev;
        if let Some(state) = visited.state(current) {
            out.push(state.clone());
        }
    }
    out.reverse();
    Ok(out)
}

/// Check that `path` is a chain of the problem's transition relation from its initial state to
/// a goal state.
pub fn is_valid_path<P>(problem: &P, path: &[P::State]) -> bool
where
    P: Problem,
{
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return false;
    };
    if *first != problem.initial() || !problem.is_goal(last) {
        return false;
    }
    path.windows(2)
        .all(|pair| problem.successors(&pair[0]).contains(&pair[1]))
}
