//! Render a separation for people to read (or for scripts to parse).
//!
//! ```text
//! 2 degrees of separation.
//! 1: Jennifer Lawrence and Tom Hanks starred in Ocean's Twelve
//! 2: Tom Hanks and Kevin Bacon starred in Apollo 13
//! ```

use std::io::Write;

use serde::Serialize;

use crate::model::*;
use crate::search::Separation;
use crate::storage::RecordStore;
use crate::Result;

/// Write the plain-text report.
///
/// Ids the store does not know are printed as-is instead of a name or title.
pub fn render_text<S>(store: &S, separation: &Separation, writer: &mut dyn Write) -> Result<()>
where
    S: RecordStore + ?Sized,
{
    let Some(path) = separation.path() else {
        writeln!(writer, "Not connected.")?;
        return Ok(());
    };

    writeln!(writer, "{} degrees of separation.", path.degrees())?;
    for (i, (from, movie, to)) in path.links().enumerate() {
        writeln!(
            writer,
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(store, from),
            person_name(store, to),
            movie_title(store, movie),
        )?;
    }
    Ok(())
}

/// Write the report as a single JSON document.
pub fn render_json<S>(store: &S, separation: &Separation, writer: &mut dyn Write) -> Result<()>
where
    S: RecordStore + ?Sized,
{
    let report = JsonReport::build(store, separation);
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================================
// JSON shape
// ============================================================================

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    connected: bool,
    degrees: Option<usize>,
    steps: Vec<JsonStep<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonStep<'a> {
    movie_id: &'a MovieId,
    title: Option<&'a str>,
    year: Option<&'a str>,
    person_id: &'a PersonId,
    name: Option<&'a str>,
}

impl<'a> JsonReport<'a> {
    fn build<S: RecordStore + ?Sized>(store: &'a S, separation: &'a Separation) -> Self {
        let steps = separation
            .path()
            .map(|path| {
                path.steps
                    .iter()
                    .map(|step| {
                        let movie = store.movie(&step.movie);
                        JsonStep {
                            movie_id: &step.movie,
                            title: movie.map(|m| m.title.as_str()),
                            year: movie.and_then(|m| m.year.as_deref()),
                            person_id: &step.person,
                            name: store.person(&step.person).map(|p| p.name.as_str()),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            connected: separation.is_connected(),
            degrees: separation.degrees(),
            steps,
        }
    }
}

fn person_name<'a, S: RecordStore + ?Sized>(store: &'a S, id: &'a PersonId) -> &'a str {
    store.person(id).map_or(id.as_str(), |p| p.name.as_str())
}

fn movie_title<'a, S: RecordStore + ?Sized>(store: &'a S, id: &'a MovieId) -> &'a str {
    store.movie(id).map_or(id.as_str(), |m| m.title.as_str())
}
