// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::store::{load_clubs, load_competitions};
use gudlft_domain::{Club, Competition, Found, find_by_field};
use std::path::Path;
use tracing::debug;

/// Loads the clubs file and finds the club whose `field` equals `value`.
///
/// # Arguments
///
/// * `field` - The lookup field name (`name` or `email`)
/// * `value` - The value to match exactly
/// * `path` - Path to the clubs file
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, the field is not a club
/// lookup field, or no club matches.
pub fn search_club(field: &str, value: &str, path: &Path) -> Result<Found<Club>, StoreError> {
    debug!("Searching clubs by {field} = '{value}'");
    let clubs: Vec<Club> = load_clubs(path)?;
    Ok(find_by_field(clubs, field, value)?)
}

/// Loads the competitions file and finds the competition whose `field`
/// equals `value`.
///
/// # Arguments
///
/// * `field` - The lookup field name (`name` or `date`)
/// * `value` - The value to match exactly
/// * `path` - Path to the competitions file
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, the field is not a
/// competition lookup field, or no competition matches.
pub fn search_competition(
    field: &str,
    value: &str,
    path: &Path,
) -> Result<Found<Competition>, StoreError> {
    debug!("Searching competitions by {field} = '{value}'");
    let competitions: Vec<Competition> = load_competitions(path)?;
    Ok(find_by_field(competitions, field, value)?)
}
