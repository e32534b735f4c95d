// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gudlft_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, searching or writing the JSON files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection file does not exist.
    #[error("collection file not found: {}", path.display())]
    NotFound {
        /// The missing file.
        path: PathBuf,
    },

    /// The collection file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The collection file does not hold the expected document.
    #[error("{} is not a valid {collection} file: {source}", path.display())]
    Format {
        /// The file being parsed or written.
        path: PathBuf,
        /// The top-level key the document should carry.
        collection: &'static str,
        /// The underlying serialization error.
        source: serde_json::Error,
    },

    /// A record lookup failed.
    #[error(transparent)]
    Lookup(#[from] DomainError),
}
