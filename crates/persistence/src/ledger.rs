// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Applying an accepted purchase to the club and competition records.

use crate::error::StoreError;
use crate::store::{StorePaths, save_clubs, save_competitions};
use gudlft_domain::{Club, Competition, Found};
use tracing::info;

/// The collections after a purchase has been recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBooking {
    /// Every competition, including the updated one.
    pub competitions: Vec<Competition>,
    /// Every club, including the updated one.
    pub clubs: Vec<Club>,
    /// The club that made the purchase, after the update.
    pub club: Club,
}

/// Records a purchase of `requested` places and persists both collections.
///
/// This performs no validation. It must only be called for a purchase that
/// `run_checks` has just accepted for the same competition, club and
/// quantity; otherwise reservations can pass the per-club cap. Counters
/// saturate at zero rather than wrap.
///
/// Clubs are written first, then competitions. If the second write fails the
/// two files disagree and nothing is rolled back.
///
/// # Arguments
///
/// * `competitions` - The competition collection with the booked competition matched
/// * `clubs` - The club collection with the purchasing club matched
/// * `requested` - The number of places purchased
/// * `paths` - Where to persist both collections
///
/// # Returns
///
/// * `Ok(RecordedBooking)` with both updated collections and the updated club
/// * `Err(StoreError)` if either file could not be written
///
/// # Errors
///
/// Returns an error if either collection file cannot be written.
pub fn record_changes(
    mut competitions: Found<Competition>,
    mut clubs: Found<Club>,
    requested: u32,
    paths: &StorePaths,
) -> Result<RecordedBooking, StoreError> {
    let competition: &mut Competition = competitions.record_mut();
    let club: &mut Club = clubs.record_mut();

    club.points = club.points.saturating_sub(requested);
    let reserved: &mut u32 = club
        .reserved_places
        .entry(competition.name.clone())
        .or_insert(0);
    *reserved = reserved.saturating_add(requested);
    competition.number_of_places = competition.number_of_places.saturating_sub(requested);

    info!(
        "Club '{}' booked {} places at '{}' ({} points left, {} places left)",
        club.name, requested, competition.name, club.points, competition.number_of_places
    );

    let club: Club = club.clone();
    save_clubs(&paths.clubs, clubs.records())?;
    save_competitions(&paths.competitions, competitions.records())?;

    Ok(RecordedBooking {
        competitions: competitions.into_records(),
        clubs: clubs.into_records(),
        club,
    })
}
