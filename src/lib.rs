//! # degrees — Degrees of Separation over a Cast Graph
//!
//! Finds the shortest chain of movies linking two people: person A starred
//! with B in one movie, B starred with C in another, and so on.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `RecordStore` is the contract between search and storage
//! 2. **Ids, not pointers**: people and movies reference each other by id
//! 3. **Load once, read many**: the store is never mutated after loading
//! 4. **Fresh state per query**: search scratch space is never shared
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use degrees::{Graph, LoadConfig};
//!
//! # fn example() -> degrees::Result<()> {
//! let graph = Graph::open_csv(&LoadConfig::new("small"))?;
//!
//! let source = graph.resolve_name("Kevin Bacon");
//! let target = graph.resolve_name("Tom Hanks");
//!
//! let separation = graph.shortest_path(&source[0], &target[0])?;
//! println!("{:?} degrees", separation.degrees());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod index;
pub mod storage;
pub mod search;
pub mod config;
pub mod resolve;
pub mod render;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Person, PersonId, Movie, MovieId, Path, Step,
    PersonRow, MovieRow, StarRow,
};

pub use storage::{RecordStore, MemoryStore, LoadStats};
pub use index::NameIndex;
pub use search::{Separation, SearchLimits, SearchStats};
pub use config::LoadConfig;
pub use resolve::{Resolution, resolve_person};

// ============================================================================
// Top-level Graph handle
// ============================================================================

/// The primary entry point. A `Graph` wraps a loaded record store and
/// answers shortest-path queries against it.
///
/// The store is read-only, so `&Graph` can be shared between threads; each
/// query allocates its own search state.
pub struct Graph<S: RecordStore> {
    store: S,
    limits: SearchLimits,
}

impl<S: RecordStore> Graph<S> {
    /// Create a Graph over an already loaded store.
    pub fn with_store(store: S) -> Self {
        Self { store, limits: SearchLimits::default() }
    }

    /// Apply `limits` to every query made through this handle.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Candidate ids for a display name, ignoring case.
    pub fn resolve_name(&self, name: &str) -> Vec<PersonId> {
        self.store.resolve_name(name)
    }

    /// Shortest path between two loaded people.
    pub fn shortest_path(&self, source: &PersonId, target: &PersonId) -> Result<Separation> {
        search::shortest_path_with(&self.store, source, target, self.limits)
    }

    /// `(movie, co-star)` pairs for one person.
    pub fn neighbors(&self, id: &PersonId) -> Vec<(MovieId, PersonId)> {
        self.store.neighbors(id)
    }

    /// Limits applied to every query made through this handle.
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Access the underlying store (for rendering and lookups).
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Graph loaded from a directory of CSV tables.
impl Graph<MemoryStore> {
    pub fn open_csv(config: &LoadConfig) -> Result<Self> {
        let store = storage::csv::load_directory(config)?;
        Ok(Self::with_store(store))
    }

    /// Graph over in-memory rows.
    pub fn from_rows<P, M, T>(people: P, movies: M, stars: T) -> Self
    where
        P: IntoIterator<Item = PersonRow>,
        M: IntoIterator<Item = MovieRow>,
        T: IntoIterator<Item = StarRow>,
    {
        Self::with_store(MemoryStore::load(people, movies, stars))
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown person id: {0}")]
    UnknownPerson(PersonId),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
