// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::store::save_competitions;
use gudlft_domain::{Competition, mark_taken_place};
use std::path::Path;
use time::PrimitiveDateTime;
use tracing::info;

/// Recomputes every competition's `taken_place` flag and persists the result.
///
/// The collection is written back even when no flag changed, so the file
/// always reflects the instant of the last refresh.
///
/// # Arguments
///
/// * `competitions` - The competitions to refresh
/// * `path` - Path to the competitions file
/// * `now` - The instant to compare competition dates against
///
/// # Returns
///
/// The refreshed competitions.
///
/// # Errors
///
/// Returns an error if the competitions file cannot be written.
pub fn refresh_taken_place_flags(
    mut competitions: Vec<Competition>,
    path: &Path,
    now: PrimitiveDateTime,
) -> Result<Vec<Competition>, StoreError> {
    let changed: usize = mark_taken_place(&mut competitions, now);
    info!(
        "Refreshed taken_place on {} competitions ({} changed)",
        competitions.len(),
        changed
    );
    save_competitions(path, &competitions)?;
    Ok(competitions)
}
