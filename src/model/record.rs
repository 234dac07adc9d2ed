//! Flat input rows, one per line of the source tables.
//!
//! | Table | Columns |
//! |-------|---------|
//! | people | `id,name,birth` |
//! | movies | `id,title,year` |
//! | stars | `person_id,movie_id` |

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRow {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub birth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<String>,
}

/// Membership row linking one person to one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRow {
    pub person_id: String,
    pub movie_id: String,
}

impl PersonRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>, birth: Option<&str>) -> Self {
        Self { id: id.into(), name: name.into(), birth: birth.map(str::to_string) }
    }
}

impl MovieRow {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: Option<&str>) -> Self {
        Self { id: id.into(), title: title.into(), year: year.map(str::to_string) }
    }
}

impl StarRow {
    pub fn new(person_id: impl Into<String>, movie_id: impl Into<String>) -> Self {
        Self { person_id: person_id.into(), movie_id: movie_id.into() }
    }
}

fn empty_as_none<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
