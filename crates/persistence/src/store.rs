// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-collection reads and writes of the two JSON files.
//!
//! Each file is a single object with one key (`clubs` or `competitions`)
//! holding the full list of records. Saving rewrites the file in place; a
//! crash part-way through a write can leave it truncated.

use crate::error::StoreError;
use gudlft_domain::{Club, Competition};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CLUBS_KEY: &str = "clubs";
const COMPETITIONS_KEY: &str = "competitions";

/// Locations of the two collection files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// Path to the clubs file.
    pub clubs: PathBuf,
    /// Path to the competitions file.
    pub competitions: PathBuf,
}

impl StorePaths {
    /// Creates a new set of store paths.
    ///
    /// # Arguments
    ///
    /// * `clubs` - Path to the clubs file
    /// * `competitions` - Path to the competitions file
    #[must_use]
    pub fn new(clubs: impl Into<PathBuf>, competitions: impl Into<PathBuf>) -> Self {
        Self {
            clubs: clubs.into(),
            competitions: competitions.into(),
        }
    }
}

#[derive(Deserialize)]
struct ClubsDocument {
    clubs: Vec<Club>,
}

#[derive(Serialize)]
struct ClubsDocumentRef<'a> {
    clubs: &'a [Club],
}

#[derive(Deserialize)]
struct CompetitionsDocument {
    competitions: Vec<Competition>,
}

#[derive(Serialize)]
struct CompetitionsDocumentRef<'a> {
    competitions: &'a [Competition],
}

/// Loads every club from `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The file is not a `{"clubs": [...]}` document of valid club records
pub fn load_clubs(path: &Path) -> Result<Vec<Club>, StoreError> {
    let document: ClubsDocument = read_document(path, CLUBS_KEY)?;
    debug!("Loaded {} clubs from {}", document.clubs.len(), path.display());
    Ok(document.clubs)
}

/// Loads every competition from `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The file is not a `{"competitions": [...]}` document of valid
///   competition records
pub fn load_competitions(path: &Path) -> Result<Vec<Competition>, StoreError> {
    let document: CompetitionsDocument = read_document(path, COMPETITIONS_KEY)?;
    debug!(
        "Loaded {} competitions from {}",
        document.competitions.len(),
        path.display()
    );
    Ok(document.competitions)
}

/// Overwrites `path` with the given clubs.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_clubs(path: &Path, clubs: &[Club]) -> Result<(), StoreError> {
    write_document(path, CLUBS_KEY, &ClubsDocumentRef { clubs })?;
    info!("Saved {} clubs to {}", clubs.len(), path.display());
    Ok(())
}

/// Overwrites `path` with the given competitions.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_competitions(path: &Path, competitions: &[Competition]) -> Result<(), StoreError> {
    write_document(path, COMPETITIONS_KEY, &CompetitionsDocumentRef { competitions })?;
    info!(
        "Saved {} competitions to {}",
        competitions.len(),
        path.display()
    );
    Ok(())
}

fn read_document<D: DeserializeOwned>(
    path: &Path,
    collection: &'static str,
) -> Result<D, StoreError> {
    let contents: String = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&contents).map_err(|source| StoreError::Format {
        path: path.to_path_buf(),
        collection,
        source,
    })
}

fn write_document<D: Serialize>(
    path: &Path,
    collection: &'static str,
    document: &D,
) -> Result<(), StoreError> {
    let io_error = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file: File = File::create(path).map_err(io_error)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    // Four-space indentation, as the data files are written by hand.
    let formatter: serde_json::ser::PrettyFormatter<'_> =
        serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|source| {
            if source.is_io() {
                io_error(source.into())
            } else {
                StoreError::Format {
                    path: path.to_path_buf(),
                    collection,
                    source,
                }
            }
        })?;

    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)
}
