//! Interactive name resolution.
//!
//! Turns a typed name into one person id. When several people share the
//! name, the candidates are listed and the user is asked to pick an id.
//! Input and output are injected so the prompt can be driven from tests.

use std::io::{BufRead, Write};

use crate::Graph;
use crate::model::PersonId;
use crate::storage::RecordStore;
use crate::Result;

/// Outcome of resolving a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(PersonId),
    NotFound,
    /// Several people carry the name and the answer did not pick one of them.
    Ambiguous(Vec<PersonId>),
}

impl Resolution {
    pub fn found(self) -> Option<PersonId> {
        match self {
            Resolution::Found(id) => Some(id),
            _ => None,
        }
    }
}

/// Resolve `name` against the graph, prompting on `output` and reading the
/// chosen id from `input` when the name is shared.
pub fn resolve_person<S, R, W>(
    graph: &Graph<S>,
    name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Resolution>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let candidates = graph.resolve_name(name);
    match candidates.as_slice() {
        [] => Ok(Resolution::NotFound),
        [only] => Ok(Resolution::Found(only.clone())),
        _ => {
            writeln!(output, "Which '{name}'?")?;
            for id in &candidates {
                if let Some(person) = graph.store().person(id) {
                    writeln!(
                        output,
                        "ID: {}, Name: {}, Birth: {}",
                        id,
                        person.name,
                        person.birth.as_deref().unwrap_or(""),
                    )?;
                }
            }
            write!(output, "Intended Person ID: ")?;
            output.flush()?;

            let mut answer = String::new();
            input.read_line(&mut answer)?;
            let answer = answer.trim();

            match candidates.iter().find(|id| id.as_str() == answer) {
                Some(id) => Ok(Resolution::Found(id.clone())),
                None => Ok(Resolution::Ambiguous(candidates.to_vec())),
            }
        }
    }
}
