//! `degrees` — how many movies apart are two people?
//!
//! ```text
//! degrees [DIRECTORY] [--source NAME] [--target NAME] [--max-degrees N] [--json]
//! ```
//!
//! Names not given as flags are prompted for on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use degrees::render::{render_json, render_text};
use degrees::{Error, Graph, LoadConfig, MemoryStore, PersonId, Resolution, SearchLimits, resolve_person};

#[derive(Parser)]
#[command(name = "degrees")]
#[command(version, about = "Degrees of separation between two people through shared movies")]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv.
    #[arg(env = "DEGREES_DATA_DIR", default_value = degrees::config::DEFAULT_DATA_DIR)]
    directory: PathBuf,

    /// Name of the first person (prompted for when missing).
    #[arg(long)]
    source: Option<String>,

    /// Name of the second person (prompted for when missing).
    #[arg(long)]
    target: Option<String>,

    /// Stop searching beyond this many degrees.
    #[arg(long)]
    max_degrees: Option<usize>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> degrees::Result<ExitCode> {
    println!("Loading data...");
    let graph = Graph::open_csv(&LoadConfig::new(&cli.directory))?
        .with_limits(SearchLimits { max_degrees: cli.max_degrees });
    println!("Data loaded.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let Some(source) = pick_person(&graph, cli.source.as_deref(), &mut input, &mut output)? else {
        eprintln!("Person not found.");
        return Ok(ExitCode::FAILURE);
    };
    let Some(target) = pick_person(&graph, cli.target.as_deref(), &mut input, &mut output)? else {
        eprintln!("Person not found.");
        return Ok(ExitCode::FAILURE);
    };

    let separation = graph.shortest_path(&source, &target)?;
    if cli.json {
        render_json(graph.store(), &separation, &mut output)?;
    } else {
        render_text(graph.store(), &separation, &mut output)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve a name given on the command line, or prompt for one.
fn pick_person(
    graph: &Graph<MemoryStore>,
    name: Option<&str>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> degrees::Result<Option<PersonId>> {
    let name = match name {
        Some(name) => name.to_string(),
        None => {
            write!(output, "Name: ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(Error::NotFound("no name given on stdin".into()));
            }
            line.trim().to_string()
        }
    };

    match resolve_person(graph, &name, input, output)? {
        Resolution::Found(id) => Ok(Some(id)),
        Resolution::NotFound | Resolution::Ambiguous(_) => Ok(None),
    }
}
