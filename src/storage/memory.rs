//! In-memory record store.
//!
//! This is the reference implementation of `RecordStore`.
//! People and movies live in hash maps keyed by id; the star relation is
//! kept as id sets on both sides.
//!
//! ## Lifecycle
//!
//! - **Load once**: `load_people()`, `load_movies()`, then `load_stars()`.
//!   Stars that mention an id not loaded by the first two calls are dropped.
//! - **Read-only afterwards**: nothing mutates the store once a query runs,
//!   so no locking is needed to share it between threads.

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::index::NameIndex;
use crate::model::*;
use super::RecordStore;

// ============================================================================
// LoadStats
// ============================================================================

/// Counters reported by a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub people: usize,
    pub movies: usize,
    /// Distinct person-movie links. Repeated star rows count once.
    pub stars: usize,
    /// Star rows skipped because they referenced an unknown person or movie.
    pub dropped_stars: usize,
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory cast graph storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: NameIndex,
    stats: LoadStats,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from the three relations in one go.
    pub fn load<P, M, S>(people: P, movies: M, stars: S) -> Self
    where
        P: IntoIterator<Item = PersonRow>,
        M: IntoIterator<Item = MovieRow>,
        S: IntoIterator<Item = StarRow>,
    {
        let mut store = Self::new();
        store.load_people(people);
        store.load_movies(movies);
        store.load_stars(stars);
        info!(
            people = store.stats.people,
            movies = store.stats.movies,
            stars = store.stats.stars,
            dropped_stars = store.stats.dropped_stars,
            "cast graph loaded"
        );
        store
    }

    /// Insert people and register their names.
    ///
    /// A repeated id updates the name and birth of the earlier record and
    /// keeps its movies, so links already loaded stay symmetric. The old
    /// name no longer resolves to the id once it changes.
    pub fn load_people<I: IntoIterator<Item = PersonRow>>(&mut self, rows: I) {
        for row in rows {
            let id = PersonId(row.id);
            if let Some(existing) = self.people.get_mut(&id) {
                if existing.name != row.name {
                    self.names.unregister(&existing.name, &id);
                }
                self.names.register(&row.name, id);
                existing.name = row.name;
                existing.birth = row.birth;
                continue;
            }

            self.names.register(&row.name, id.clone());
            let person = Person {
                id: id.clone(),
                name: row.name,
                birth: row.birth,
                movies: Default::default(),
            };
            self.people.insert(id, person);
            self.stats.people += 1;
        }
    }

    /// Insert movies. A repeated id updates title and year of the earlier
    /// record and keeps its stars.
    pub fn load_movies<I: IntoIterator<Item = MovieRow>>(&mut self, rows: I) {
        for row in rows {
            let id = MovieId(row.id);
            if let Some(existing) = self.movies.get_mut(&id) {
                existing.title = row.title;
                existing.year = row.year;
                continue;
            }

            let movie = Movie {
                id: id.clone(),
                title: row.title,
                year: row.year,
                stars: Default::default(),
            };
            self.movies.insert(id, movie);
            self.stats.movies += 1;
        }
    }

    /// Link people to movies. Rows naming an unknown person or movie are
    /// skipped; both sides of a link are written together or not at all.
    pub fn load_stars<I: IntoIterator<Item = StarRow>>(&mut self, rows: I) {
        for row in rows {
            let person_id = PersonId(row.person_id);
            let movie_id = MovieId(row.movie_id);

            let (Some(person), Some(movie)) =
                (self.people.get_mut(&person_id), self.movies.get_mut(&movie_id))
            else {
                debug!(person = %person_id, movie = %movie_id, "dropping star row with unknown id");
                self.stats.dropped_stars += 1;
                continue;
            };

            movie.stars.insert(person_id);
            if person.movies.insert(movie_id) {
                self.stats.stars += 1;
            }
        }
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }
}

// ============================================================================
// RecordStore impl
// ============================================================================

impl RecordStore for MemoryStore {
    fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    fn person_count(&self) -> usize {
        self.people.len()
    }

    fn movie_count(&self) -> usize {
        self.movies.len()
    }

    fn resolve_name(&self, name: &str) -> Vec<PersonId> {
        self.names.resolve(name).into_vec()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> PersonId { PersonId::from(s) }
    fn mid(s: &str) -> MovieId { MovieId::from(s) }

    fn small_store() -> MemoryStore {
        MemoryStore::load(
            vec![
                PersonRow::new("1", "Ada", Some("1815")),
                PersonRow::new("2", "Bob", None),
                PersonRow::new("3", "Cy", None),
            ],
            vec![
                MovieRow::new("10", "First", Some("1999")),
                MovieRow::new("20", "Second", Some("2001")),
            ],
            vec![
                StarRow::new("1", "10"),
                StarRow::new("2", "10"),
                StarRow::new("2", "20"),
                StarRow::new("3", "20"),
            ],
        )
    }

    #[test]
    fn test_load_links_both_sides() {
        let store = small_store();

        let bob = store.person(&pid("2")).unwrap();
        assert_eq!(bob.movies.len(), 2);
        for movie_id in &bob.movies {
            assert!(store.movie(movie_id).unwrap().has_star(&bob.id));
        }
        assert_eq!(store.person(&pid("1")).unwrap().birth.as_deref(), Some("1815"));
        assert_eq!(store.stats().stars, 4);
    }

    #[test]
    fn test_dangling_star_rows_are_dropped() {
        let mut store = small_store();
        store.load_stars(vec![
            StarRow::new("404", "10"),
            StarRow::new("1", "404"),
        ]);

        assert_eq!(store.stats().dropped_stars, 2);
        assert_eq!(store.movie(&mid("10")).unwrap().stars.len(), 2);
        assert_eq!(store.person(&pid("1")).unwrap().movies.len(), 1);
        assert!(store.person(&pid("404")).is_none());
        assert!(store.movie(&mid("404")).is_none());
    }

    #[test]
    fn test_duplicate_star_rows_are_idempotent() {
        let mut store = small_store();
        store.load_stars(vec![StarRow::new("1", "10")]);

        assert_eq!(store.person(&pid("1")).unwrap().movies.len(), 1);
        assert_eq!(store.movie(&mid("10")).unwrap().stars.len(), 2);
        assert_eq!(store.stats().stars, 4);
    }

    #[test]
    fn test_reloading_records_keeps_links_on_both_sides() {
        let mut store = small_store();
        store.load_people(vec![PersonRow::new("1", "Ada Lovelace", None)]);
        store.load_movies(vec![MovieRow::new("10", "First (Director's Cut)", Some("2000"))]);

        let ada = store.person(&pid("1")).unwrap();
        assert_eq!(ada.name, "Ada Lovelace");
        assert_eq!(ada.birth, None);
        assert!(ada.starred_in(&mid("10")));

        let first = store.movie(&mid("10")).unwrap();
        assert_eq!(first.title, "First (Director's Cut)");
        assert!(first.has_star(&pid("1")));
        assert!(first.has_star(&pid("2")));

        for person in store.people() {
            for movie_id in &person.movies {
                assert!(store.movie(movie_id).unwrap().has_star(&person.id));
            }
        }
        for movie in store.movies() {
            for person_id in &movie.stars {
                assert!(store.person(person_id).unwrap().starred_in(&movie.id));
            }
        }
        assert_eq!(store.stats().people, 3);
        assert_eq!(store.stats().movies, 2);
    }

    #[test]
    fn test_reloaded_person_connects_both_ways() {
        let mut store = small_store();
        store.load_people(vec![PersonRow::new("1", "Ada Lovelace", None)]);

        let there = crate::search::shortest_path(&store, &pid("1"), &pid("2")).unwrap();
        let back = crate::search::shortest_path(&store, &pid("2"), &pid("1")).unwrap();
        assert_eq!(there.degrees(), Some(1));
        assert_eq!(back.degrees(), Some(1));
    }

    #[test]
    fn test_renamed_person_drops_old_name() {
        let mut store = small_store();
        store.load_people(vec![PersonRow::new("1", "Ada Lovelace", None)]);

        assert!(store.resolve_name("ada").is_empty());
        assert_eq!(store.resolve_name("ada lovelace"), vec![pid("1")]);
    }

    #[test]
    fn test_neighbors_include_self_pair() {
        let store = small_store();
        let pairs = store.neighbors(&pid("1"));

        assert_eq!(pairs, vec![(mid("10"), pid("1")), (mid("10"), pid("2"))]);
    }

    #[test]
    fn test_neighbors_of_unknown_person_is_empty() {
        let store = small_store();
        assert!(store.neighbors(&pid("999")).is_empty());
    }

    #[test]
    fn test_resolve_name() {
        let store = small_store();
        assert_eq!(store.resolve_name("ADA"), vec![pid("1")]);
        assert!(store.resolve_name("Zed").is_empty());
    }
}
