//! Path — the chain of movies and co-stars linking two people.

use serde::{Deserialize, Serialize};
use super::{MovieId, PersonId};

/// One hop: `person` starred in `movie` together with the previous person
/// on the path (or the source, for the first step).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub movie: MovieId,
    pub person: PersonId,
}

impl Step {
    pub fn new(movie: MovieId, person: PersonId) -> Self {
        Self { movie, person }
    }
}

impl From<(MovieId, PersonId)> for Step {
    fn from((movie, person): (MovieId, PersonId)) -> Self {
        Self { movie, person }
    }
}

/// A path in the cast graph: source -[movie]- person -[movie]- person ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub source: PersonId,
    /// Steps in order from source to target. Empty when source == target.
    pub steps: Vec<Step>,
}

impl Path {
    pub fn single(source: PersonId) -> Self {
        Self { source, steps: Vec::new() }
    }

    /// Degrees of separation.
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn target(&self) -> &PersonId {
        self.steps.last().map_or(&self.source, |s| &s.person)
    }

    /// Extend path with a movie and the co-star reached through it.
    pub fn append(&mut self, movie: MovieId, person: PersonId) {
        self.steps.push(Step { movie, person });
    }

    /// Consecutive `(from, movie, to)` links, in path order.
    pub fn links(&self) -> impl Iterator<Item = (&PersonId, &MovieId, &PersonId)> {
        let froms = std::iter::once(&self.source).chain(self.steps.iter().map(|s| &s.person));
        froms.zip(self.steps.iter()).map(|(from, step)| (from, &step.movie, &step.person))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_path_targets_source() {
        let path = Path::single(PersonId::from("102"));
        assert_eq!(path.degrees(), 0);
        assert_eq!(path.target(), &PersonId::from("102"));
        assert_eq!(path.links().count(), 0);
    }

    #[test]
    fn test_links_pair_consecutive_people() {
        let mut path = Path::single(PersonId::from("a"));
        path.append(MovieId::from("m1"), PersonId::from("b"));
        path.append(MovieId::from("m2"), PersonId::from("c"));

        let links: Vec<_> = path.links()
            .map(|(f, m, t)| (f.as_str(), m.as_str(), t.as_str()))
            .collect();
        assert_eq!(links, vec![("a", "m1", "b"), ("b", "m2", "c")]);
        assert_eq!(path.target(), &PersonId::from("c"));
    }
}
