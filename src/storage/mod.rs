//! # Record Store Trait
//!
//! This is the contract between the path search engine and the data it
//! walks. The search engine only ever asks for neighbors and membership;
//! rendering asks for the records themselves.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | Relations held in hash maps, loaded once |
//!
//! Tabular input (CSV directories, in-memory readers) lives in [`csv`].

pub mod memory;
pub mod csv;

use crate::model::*;

pub use memory::{MemoryStore, LoadStats};

// ============================================================================
// RecordStore Trait
// ============================================================================

/// Read-only view over people, movies and the star relation between them.
///
/// Implementations are built once and never mutated afterwards, which is
/// what makes `Send + Sync` sharing across concurrent queries sound.
pub trait RecordStore: Send + Sync {
    /// Look up a person. `None` if the id was never loaded.
    fn person(&self, id: &PersonId) -> Option<&Person>;

    /// Look up a movie. `None` if the id was never loaded.
    fn movie(&self, id: &MovieId) -> Option<&Movie>;

    fn person_count(&self) -> usize;

    fn movie_count(&self) -> usize;

    /// People whose display name matches `name`, ignoring case, ordered by
    /// id. Empty when nobody matches; more than one when the name is shared.
    fn resolve_name(&self, name: &str) -> Vec<PersonId>;

    fn contains_person(&self, id: &PersonId) -> bool {
        self.person(id).is_some()
    }

    /// Every `(movie, co-star)` pair for `id`: for each movie the person
    /// starred in, each person credited on that movie.
    ///
    /// This is the literal join, so the person shows up as their own
    /// co-star. Pairs come out ordered by movie id, then person id.
    /// Unknown ids yield no pairs.
    fn neighbors(&self, id: &PersonId) -> Vec<(MovieId, PersonId)> {
        let Some(person) = self.person(id) else {
            return Vec::new();
        };

        let mut pairs = Vec::new();
        for movie_id in &person.movies {
            if let Some(movie) = self.movie(movie_id) {
                for star in &movie.stars {
                    pairs.push((movie_id.clone(), star.clone()));
                }
            }
        }
        pairs
    }
}
