// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Replay of recorded observations.
//!
//! Observations are stored one JSON object per line:
//!
//! ```text
//! {"location":{"x":1626,"y":3795,"plane":0},"book":13524}
//! {"location":{"x":1625,"y":3793,"plane":0},"book":null}
//! ```
//!
//! `book` is a game item id, or `null` for an empty shelf. Blank lines and
//! lines starting with `#` are skipped.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Book;
use crate::engine::Library;
use crate::topology::Location;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read observations: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: unknown book item id {item_id}")]
    UnknownBook { line: usize, item_id: u32 },
}

/// One recorded observation, as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub location: Location,
    pub book: Option<u32>,
}

/// A decoded observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub location: Location,
    pub book: Option<Book>,
}

impl Observation {
    pub fn new(location: Location, book: Option<Book>) -> Self {
        Self { location, book }
    }

    pub fn to_record(self) -> Record {
        Record {
            location: self.location,
            book: self.book.map(Book::item_id),
        }
    }
}

/// Parse a single line. `line` is 1-based and only used in errors.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Observation>, ReplayError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let record: Record =
        serde_json::from_str(text).map_err(|source| ReplayError::Json { line, source })?;
    let book = match record.book {
        None => None,
        Some(item_id) => {
            Some(Book::from_item_id(item_id).ok_or(ReplayError::UnknownBook { line, item_id })?)
        }
    };
    Ok(Some(Observation::new(record.location, book)))
}

/// Read every observation from `reader`, stopping at the first bad line.
pub fn read_observations(reader: impl BufRead) -> Result<Vec<Observation>, ReplayError> {
    let mut observations = Vec::new();
    for (i, text) in reader.lines().enumerate() {
        if let Some(observation) = parse_line(&text?, i + 1)? {
            observations.push(observation);
        }
    }
    Ok(observations)
}

/// Feed `observations` to `library` in order.
pub fn apply(library: &mut Library, observations: &[Observation]) {
    for observation in observations {
        library.mark(observation.location, observation.book);
    }
    tracing::debug!(
        count = observations.len(),
        state = %library.state(),
        "replayed observations"
    );
}
