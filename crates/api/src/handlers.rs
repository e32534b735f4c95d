// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking operations, one per page of the booking site.
//!
//! Each handler loads what it needs from disk, acts, and writes back before
//! returning. Nothing is cached between calls.

use crate::error::{ApiError, translate_domain_error, translate_store_error};
use crate::request_response::{
    BOOKING_COMPLETE, BookingForm, PurchaseOutcome, PurchaseRequest, Summary,
};
use gudlft_domain::{
    BookingRejection, Club, ClubField, Competition, CompetitionField, Found, MAX_PLACES_PER_CLUB,
    find_by, run_checks,
};
use gudlft_persistence::{
    RecordedBooking, StorePaths, load_clubs, load_competitions, record_changes,
    refresh_taken_place_flags,
};
use time::PrimitiveDateTime;
use tracing::{info, warn};

/// Lists every club, for the sign-in page and the points board.
///
/// # Errors
///
/// Returns an error if the clubs file cannot be loaded.
pub fn list_clubs(paths: &StorePaths) -> Result<Vec<Club>, ApiError> {
    load_clubs(&paths.clubs).map_err(translate_store_error)
}

/// Signs a club in by email and builds its welcome page.
///
/// Competition `taken_place` flags are refreshed against `now` and persisted
/// before the page is built.
///
/// # Arguments
///
/// * `paths` - Locations of the data files
/// * `email` - The email entered at sign-in
/// * `now` - The current instant
///
/// # Errors
///
/// Returns an error if:
/// - No club has this email
/// - Either data file cannot be loaded or the competitions file cannot be written
pub fn show_summary(
    paths: &StorePaths,
    email: &str,
    now: PrimitiveDateTime,
) -> Result<Summary, ApiError> {
    let clubs: Found<Club> = find_club(paths, ClubField::Email, email)?;

    let competitions: Vec<Competition> =
        load_competitions(&paths.competitions).map_err(translate_store_error)?;
    let competitions: Vec<Competition> =
        refresh_taken_place_flags(competitions, &paths.competitions, now)
            .map_err(translate_store_error)?;

    info!("Club '{}' signed in", clubs.record().name);
    Ok(summary_from(clubs, competitions))
}

/// Rebuilds the welcome page for a club already signed in.
///
/// Unlike [`show_summary`] this leaves the stored `taken_place` flags as they are.
///
/// # Errors
///
/// Returns an error if no club has this email or a data file cannot be loaded.
pub fn return_to_summary(paths: &StorePaths, email: &str) -> Result<Summary, ApiError> {
    let clubs: Found<Club> = find_club(paths, ClubField::Email, email)?;
    let competitions: Vec<Competition> =
        load_competitions(&paths.competitions).map_err(translate_store_error)?;
    Ok(summary_from(clubs, competitions))
}

/// Builds the booking form for a club and a competition.
///
/// # Arguments
///
/// * `paths` - Locations of the data files
/// * `competition_name` - The competition to book
/// * `club_name` - The club making the purchase
///
/// # Errors
///
/// Returns an error if either record does not exist or a data file cannot
/// be loaded.
pub fn booking_form(
    paths: &StorePaths,
    competition_name: &str,
    club_name: &str,
) -> Result<BookingForm, ApiError> {
    let competitions: Found<Competition> =
        find_competition(load_competitions_from(paths)?, competition_name)?;
    let clubs: Found<Club> = find_club(paths, ClubField::Name, club_name)?;

    let competition: Competition = competitions.record().clone();
    let club: Club = clubs.record().clone();
    let max_places: u32 = MAX_PLACES_PER_CLUB
        .saturating_sub(club.reserved_for(&competition.name))
        .min(club.points)
        .min(competition.number_of_places);

    Ok(BookingForm {
        club,
        competition,
        max_places,
    })
}

/// Handles a purchase submission.
///
/// The competition's `taken_place` flag is refreshed against `now` first so
/// the elapsed-competition rule sees the current date. A rejected purchase
/// is an ordinary outcome and leaves the club and competition untouched.
///
/// # Arguments
///
/// * `paths` - Locations of the data files
/// * `request` - The submitted form
/// * `now` - The current instant
///
/// # Returns
///
/// * `Ok(PurchaseOutcome::Booked)` when the purchase was recorded
/// * `Ok(PurchaseOutcome::Rejected)` when an admission rule refused it
/// * `Err(ApiError)` for malformed input, unknown records or storage failures
///
/// # Errors
///
/// Returns an error if:
/// - `places` is not a non-negative integer
/// - The competition or club does not exist
/// - A data file cannot be loaded or written
pub fn purchase_places(
    paths: &StorePaths,
    request: &PurchaseRequest,
    now: PrimitiveDateTime,
) -> Result<PurchaseOutcome, ApiError> {
    // Parse the quantity before touching any file
    let requested: u32 = parse_places(&request.places)?;

    // Refresh the elapsed flags, then locate the competition and the club
    let competitions: Vec<Competition> = refresh_taken_place_flags(
        load_competitions_from(paths)?,
        &paths.competitions,
        now,
    )
    .map_err(translate_store_error)?;
    let competitions: Found<Competition> = find_competition(competitions, &request.competition)?;
    let clubs: Found<Club> = find_club(paths, ClubField::Name, &request.club)?;

    // Admission rules
    if let Some(reason) = run_checks(competitions.record(), clubs.record(), requested) {
        log_rejection(reason, &request.club, &request.competition, requested);
        return Ok(PurchaseOutcome::Rejected { reason });
    }

    // Apply and persist
    let booking: RecordedBooking =
        record_changes(competitions, clubs, requested, paths).map_err(translate_store_error)?;

    Ok(PurchaseOutcome::Booked {
        message: String::from(BOOKING_COMPLETE),
        summary: Summary {
            club: booking.club,
            clubs: booking.clubs,
            competitions: booking.competitions,
        },
    })
}

fn parse_places(places: &str) -> Result<u32, ApiError> {
    places
        .trim()
        .parse::<u32>()
        .map_err(|e| ApiError::InvalidInput {
            field: String::from("places"),
            message: format!("'{places}' is not a number of places: {e}"),
        })
}

fn load_competitions_from(paths: &StorePaths) -> Result<Vec<Competition>, ApiError> {
    load_competitions(&paths.competitions).map_err(translate_store_error)
}

fn find_club(paths: &StorePaths, field: ClubField, value: &str) -> Result<Found<Club>, ApiError> {
    let clubs: Vec<Club> = load_clubs(&paths.clubs).map_err(translate_store_error)?;
    find_by(clubs, field, value).map_err(translate_domain_error)
}

fn find_competition(
    competitions: Vec<Competition>,
    name: &str,
) -> Result<Found<Competition>, ApiError> {
    find_by(competitions, CompetitionField::Name, name).map_err(translate_domain_error)
}

fn summary_from(clubs: Found<Club>, competitions: Vec<Competition>) -> Summary {
    let club: Club = clubs.record().clone();
    Summary {
        club,
        clubs: clubs.into_records(),
        competitions,
    }
}

fn log_rejection(reason: BookingRejection, club: &str, competition: &str, requested: u32) {
    warn!(
        rule = reason.rule(),
        "Refused {} places at '{}' for club '{}': {}", requested, competition, club, reason
    );
}
