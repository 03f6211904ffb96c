use std::collections::HashMap;

use crate::SearchState;

/// Index of a state record inside a [`VisitedMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Record<S> {
    state: S,
    parent: Option<NodeId>,
}

/// Parent map of one search invocation.
///
/// States live in an arena of records; a hash index maps each state to its record. Hashing
/// happens once per insertion or lookup, and parent links are plain indices. A state is inserted
/// at most once, so the records form a tree rooted at the initial state.
#[derive(Debug, Clone)]
pub struct VisitedMap<S> {
    records: Vec<Record<S>>,
    index: HashMap<S, NodeId>,
}

impl<S> Default for VisitedMap<S> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S> VisitedMap<S>
where
    S: SearchState,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    pub fn id_of(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// Record `state` with its parent. Returns `None` (and changes nothing) if the state is
    /// already present.
    pub fn insert(&mut self, state: S, parent: Option<NodeId>) -> Option<NodeId> {
        if self.index.contains_key(&state) {
            return None;
        }
        let id = NodeId(u32::try_from(self.records.len()).ok()?);
        self.index.insert(state.clone(), id);
        self.records.push(Record { state, parent });
        Some(id)
    }

    pub fn state(&self, id: NodeId) -> Option<&S> {
        self.records.get(id.index()).map(|r| &r.state)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.records.get(id.index()).and_then(|r| r.parent)
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(prev) = self.parent(current) {
            depth += 1;
            current = prev;
        }
        depth
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.records.iter().map(|r| &r.state)
    }
}
