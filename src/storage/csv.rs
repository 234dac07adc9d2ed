//! CSV ingestion — build a `MemoryStore` from the three source tables.
//!
//! ```text
//! people.csv  (id,name,birth)      ─┐
//! movies.csv  (id,title,year)      ─┼─→ MemoryStore + NameIndex
//! stars.csv   (person_id,movie_id) ─┘
//! ```
//!
//! Malformed rows (wrong column count, bad encoding) are errors; star rows
//! that point at unknown ids are not, they are dropped by the store.

use std::fs::File;
use std::io::Read;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::LoadConfig;
use crate::model::{MovieRow, PersonRow, StarRow};
use crate::Result;
use super::MemoryStore;

/// Load the dataset described by `config` from disk.
pub fn load_directory(config: &LoadConfig) -> Result<MemoryStore> {
    info!(directory = %config.directory().display(), "loading cast graph");
    load_from_readers(
        File::open(config.people_path())?,
        File::open(config.movies_path())?,
        File::open(config.stars_path())?,
    )
}

/// Load a dataset from any three readers holding CSV with headers.
pub fn load_from_readers<P, M, S>(people: P, movies: M, stars: S) -> Result<MemoryStore>
where
    P: Read,
    M: Read,
    S: Read,
{
    let people: Vec<PersonRow> = read_rows(people)?;
    let movies: Vec<MovieRow> = read_rows(movies)?;
    let stars: Vec<StarRow> = read_rows(stars)?;
    Ok(MemoryStore::load(people, movies, stars))
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::None)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonId;
    use crate::storage::RecordStore;

    const PEOPLE: &str = "id,name,birth\n102,Kevin Bacon,1958\n129,Tom Cruise,1962\n999,\"Doe, Jane\",\n";
    const MOVIES: &str = "id,title,year\n104257,A Few Good Men,1992\n";
    const STARS: &str = "person_id,movie_id\n102,104257\n129,104257\n555,104257\n";

    #[test]
    fn test_load_from_readers() {
        let store = load_from_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes()).unwrap();

        assert_eq!(store.person_count(), 3);
        assert_eq!(store.movie_count(), 1);
        assert_eq!(store.stats().dropped_stars, 1);

        let jane = store.person(&PersonId::from("999")).unwrap();
        assert_eq!(jane.name, "Doe, Jane");
        assert_eq!(jane.birth, None);
    }

    #[test]
    fn test_cells_keep_surrounding_whitespace() {
        let people = "id,name,birth\n7, Padded Name ,1970\n";
        let store = load_from_readers(people.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes()).unwrap();

        let padded = store.person(&PersonId::from("7")).unwrap();
        assert_eq!(padded.name, " Padded Name ");
        assert_eq!(store.resolve_name(" padded name "), vec![PersonId::from("7")]);
        assert!(store.resolve_name("padded name").is_empty());
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let bad_stars = "person_id\n102\n";
        let result = load_from_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), bad_stars.as_bytes());
        assert!(matches!(result, Err(crate::Error::Csv(_))));
    }
}
