// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Replay recorded library observations and report what is deduced.
//!
//! ```text
//! library observations.jsonl --find "Soul Journey"
//! library observations.jsonl --find "Dark manuscript 13516"
//! library --json < observations.jsonl
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use kourend_library::catalog::Book;
use kourend_library::replay::{self, Observation};
use kourend_library::{Library, Location, Placement, SolvedState};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "library")]
#[command(about = "Deduce the Kourend library book arrangement from observations")]
struct Args {
    /// JSON-lines observation file; reads stdin when omitted
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Only report the bookcases that may hold this book: a name, an item
    /// id, or "Dark manuscript <id>"
    #[arg(short, long, value_name = "BOOK")]
    find: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct BookReport {
    book: Book,
    name: String,
    locations: Vec<Location>,
}

#[derive(Debug, Serialize)]
struct Report {
    state: SolvedState,
    available_sequences: Option<usize>,
    placements: Vec<Placement>,
    books: Vec<BookReport>,
}

fn build_report(library: &Library, books: &[Book]) -> Report {
    Report {
        state: library.state(),
        available_sequences: library.available_sequences(),
        placements: library.placements().to_vec(),
        books: books
            .iter()
            .map(|&book| BookReport {
                book,
                name: book.to_string(),
                locations: library.locate(book),
            })
            .collect(),
    }
}

fn print_report(library: &Library, report: &Report) {
    println!("state: {}", report.state);
    if let Some(available) = report.available_sequences {
        println!("available placements: {available}");
    }
    for entry in &report.books {
        if entry.locations.is_empty() {
            continue;
        }
        println!("{}:", entry.name);
        for &location in &entry.locations {
            let room = library.describe(location).unwrap_or_default();
            println!("  {location} {room}");
        }
    }
}

fn read_input(args: &Args) -> Result<Vec<Observation>, Box<dyn std::error::Error>> {
    let observations = match &args.input {
        Some(path) => replay::read_observations(BufReader::new(File::open(path)?))?,
        None => replay::read_observations(io::stdin().lock())?,
    };
    Ok(observations)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let books: Vec<Book> = match &args.find {
        Some(name) => {
            let book =
                Book::parse(name).ok_or_else(|| format!("unknown book: {name}"))?;
            vec![book]
        }
        None => Book::iter().collect(),
    };

    let observations = read_input(&args)?;
    let mut library = Library::new();
    replay::apply(&mut library, &observations);

    let report = build_report(&library, &books);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&library, &report);
    }
    Ok(())
}
