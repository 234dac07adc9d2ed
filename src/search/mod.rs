//! # Path Search Engine
//!
//! Breadth-first search over the person graph implied by
//! [`RecordStore::neighbors`]: two people are adjacent when they starred in
//! the same movie.
//!
//! ```text
//! frontier: [source]            visited: {source}     parents: {}
//!   pop current ── current == target? ── yes ──→ walk parents back to source
//!        │ no
//!        └─ for (movie, co_star) in neighbors(current), unvisited:
//!               visited += co_star; parents[co_star] = (movie, current); push
//! ```
//!
//! The frontier is FIFO, so the first time a person is popped they were
//! reached over the fewest possible movies. All search state lives in a
//! `SearchState` allocated per query and dropped when it returns.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::*;
use crate::storage::RecordStore;
use crate::{Error, Result};

// ============================================================================
// Limits and results
// ============================================================================

/// Bounds on a single query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Give up on people further than this many movies away.
    /// `None` searches the whole connected component.
    pub max_degrees: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max_degrees(max: usize) -> Self {
        Self { max_degrees: Some(max) }
    }
}

/// Work done by one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// People popped from the frontier and expanded.
    pub expanded: usize,
    /// People pushed onto the frontier, source included.
    pub enqueued: usize,
}

/// Outcome of a shortest-path query. Not being connected is an ordinary
/// answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separation {
    Connected(Path),
    NotConnected,
}

impl Separation {
    pub fn is_connected(&self) -> bool {
        matches!(self, Separation::Connected(_))
    }

    pub fn degrees(&self) -> Option<usize> {
        self.path().map(Path::degrees)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Separation::Connected(p) => Some(p),
            Separation::NotConnected => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Separation::Connected(p) => Some(p),
            Separation::NotConnected => None,
        }
    }
}

// ============================================================================
// Search state
// ============================================================================

/// BFS tree edge that first reached a person.
#[derive(Debug, Clone)]
struct Parent {
    movie: MovieId,
    prev: PersonId,
}

/// Per-query scratch space. Never shared between queries.
#[derive(Debug)]
struct SearchState {
    /// People awaiting expansion, with their distance from the source.
    frontier: VecDeque<(PersonId, usize)>,
    visited: HashSet<PersonId>,
    parents: HashMap<PersonId, Parent>,
    stats: SearchStats,
}

impl SearchState {
    fn new(source: &PersonId) -> Self {
        let mut state = Self {
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            parents: HashMap::new(),
            stats: SearchStats::default(),
        };
        state.visited.insert(source.clone());
        state.frontier.push_back((source.clone(), 0));
        state.stats.enqueued = 1;
        state
    }

    /// Mark `person` reached from `prev` through `movie`, unless already seen.
    fn discover(&mut self, movie: MovieId, person: PersonId, prev: &PersonId, depth: usize) {
        if self.visited.contains(&person) {
            return;
        }
        self.visited.insert(person.clone());
        self.parents.insert(person.clone(), Parent { movie, prev: prev.clone() });
        self.frontier.push_back((person, depth));
        self.stats.enqueued += 1;
    }

    /// Walk the parent map from `target` back to `source`.
    fn reconstruct(&self, source: &PersonId, target: &PersonId) -> Result<Path> {
        let mut steps = Vec::new();
        let mut current = target;
        while current != source {
            let parent = self.parents.get(current).ok_or_else(|| {
                Error::Search(format!("no parent edge recorded for {current}"))
            })?;
            steps.push(Step::new(parent.movie.clone(), current.clone()));
            current = &parent.prev;
        }
        steps.reverse();
        Ok(Path { source: source.clone(), steps })
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

// ============================================================================
// Query entry points
// ============================================================================

/// Shortest chain of `(movie, person)` steps from `source` to `target`.
///
/// Both ids must be loaded in `store`; an unknown id is reported as
/// [`Error::UnknownPerson`]. `source == target` is zero degrees.
pub fn shortest_path<S>(store: &S, source: &PersonId, target: &PersonId) -> Result<Separation>
where
    S: RecordStore + ?Sized,
{
    shortest_path_with(store, source, target, SearchLimits::unbounded())
}

/// [`shortest_path`] with explicit limits.
pub fn shortest_path_with<S>(
    store: &S,
    source: &PersonId,
    target: &PersonId,
    limits: SearchLimits,
) -> Result<Separation>
where
    S: RecordStore + ?Sized,
{
    for id in [source, target] {
        if !store.contains_person(id) {
            return Err(Error::UnknownPerson(id.clone()));
        }
    }

    let mut state = SearchState::new(source);

    while let Some((current, depth)) = state.frontier.pop_front() {
        if current == *target {
            let path = state.reconstruct(source, target)?;
            let stats = state.stats();
            debug!(
                %source, %target,
                degrees = path.degrees(),
                expanded = stats.expanded,
                enqueued = stats.enqueued,
                "path found"
            );
            return Ok(Separation::Connected(path));
        }

        if limits.max_degrees.is_some_and(|max| depth >= max) {
            continue;
        }

        state.stats.expanded += 1;
        let pairs = store.neighbors(&current);
        trace!(person = %current, depth, neighbors = pairs.len(), "expanding");

        for (movie, co_star) in pairs {
            state.discover(movie, co_star, &current, depth + 1);
        }
    }

    let stats = state.stats();
    debug!(
        %source, %target,
        expanded = stats.expanded,
        enqueued = stats.enqueued,
        "not connected"
    );
    Ok(Separation::NotConnected)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn pid(s: &str) -> PersonId { PersonId::from(s) }
    fn mid(s: &str) -> MovieId { MovieId::from(s) }

    /// A -W1- B -W2- C, plus D -W3- E off on its own.
    fn store() -> MemoryStore {
        MemoryStore::load(
            ["A", "B", "C", "D", "E"].map(|id| PersonRow::new(id, format!("Person {id}"), None)),
            ["W1", "W2", "W3"].map(|id| MovieRow::new(id, format!("Movie {id}"), None)),
            [("A", "W1"), ("B", "W1"), ("B", "W2"), ("C", "W2"), ("D", "W3"), ("E", "W3")]
                .map(|(p, m)| StarRow::new(p, m)),
        )
    }

    #[test]
    fn test_two_degree_path() {
        let sep = shortest_path(&store(), &pid("A"), &pid("C")).unwrap();
        let path = sep.path().unwrap();

        assert_eq!(path.degrees(), 2);
        assert_eq!(path.steps, vec![
            Step::new(mid("W1"), pid("B")),
            Step::new(mid("W2"), pid("C")),
        ]);
    }

    #[test]
    fn test_same_person_is_zero_degrees() {
        let sep = shortest_path(&store(), &pid("A"), &pid("A")).unwrap();
        assert_eq!(sep.degrees(), Some(0));
    }

    #[test]
    fn test_disjoint_components_not_connected() {
        let sep = shortest_path(&store(), &pid("A"), &pid("D")).unwrap();
        assert_eq!(sep, Separation::NotConnected);
    }

    #[test]
    fn test_unknown_person_is_an_error() {
        let err = shortest_path(&store(), &pid("A"), &pid("Z")).unwrap_err();
        assert!(matches!(err, Error::UnknownPerson(id) if id == pid("Z")));
    }

    #[test]
    fn test_max_degrees_cuts_search() {
        let s = store();
        let near = shortest_path_with(&s, &pid("A"), &pid("C"), SearchLimits::max_degrees(1)).unwrap();
        assert!(!near.is_connected());

        let far = shortest_path_with(&s, &pid("A"), &pid("C"), SearchLimits::max_degrees(2)).unwrap();
        assert_eq!(far.degrees(), Some(2));
    }

    #[test]
    fn test_state_counts_source_as_enqueued() {
        let state = SearchState::new(&pid("A"));
        assert_eq!(state.stats(), SearchStats { expanded: 0, enqueued: 1 });
        assert!(state.reconstruct(&pid("A"), &pid("A")).unwrap().is_empty());
    }
}
