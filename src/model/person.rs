//! Person in the cast graph.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use super::MovieId;

/// Opaque person identifier (the `id` column of `people.csv`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A person and the movies they starred in.
///
/// `movies` only ever holds ids of movies known to the store; the store
/// adds the matching back-reference on the movie at the same time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Birth year as it appears in the source data. Empty cells load as `None`.
    pub birth: Option<String>,
    pub movies: BTreeSet<MovieId>,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            birth: None,
            movies: BTreeSet::new(),
        }
    }

    pub fn with_birth(mut self, birth: impl Into<String>) -> Self {
        self.birth = Some(birth.into());
        self
    }

    pub fn starred_in(&self, movie: &MovieId) -> bool {
        self.movies.contains(movie)
    }
}
