// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admission rules for place purchases.
//!
//! A failed rule is an ordinary outcome rather than an error: each check
//! returns `Some(BookingRejection)` when it fails and `None` otherwise, and
//! the rejection's reason text is shown to the club verbatim.

use crate::types::{Club, Competition};

/// The most places a single club may hold at one competition.
pub const MAX_PLACES_PER_CLUB: u32 = 12;

/// The reason a purchase was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingRejection {
    /// The club would hold more than [`MAX_PLACES_PER_CLUB`] places.
    OverReservation,
    /// The club has fewer points than places requested.
    InsufficientPoints,
    /// The competition has fewer places left than requested.
    CapacityExceeded,
    /// The competition date has already passed.
    CompetitionElapsed,
}

impl BookingRejection {
    /// Returns the message shown to the club.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::OverReservation => "you required more than 12 places !",
            Self::InsufficientPoints => "you do not have enough points!",
            Self::CapacityExceeded => "there are no more places available !",
            Self::CompetitionElapsed => "the competition already took place !",
        }
    }

    /// Returns a stable identifier for the rule, suitable for logs.
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::OverReservation => "max_places_per_club",
            Self::InsufficientPoints => "enough_points",
            Self::CapacityExceeded => "places_available",
            Self::CompetitionElapsed => "competition_upcoming",
        }
    }
}

impl std::fmt::Display for BookingRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Fails when the club's total at this competition would exceed the cap.
///
/// # Arguments
///
/// * `already_reserved` - Places the club already holds at the competition
/// * `requested` - Places requested now
#[must_use]
pub const fn more_than_max_reserved_places(
    already_reserved: u32,
    requested: u32,
) -> Option<BookingRejection> {
    if already_reserved.saturating_add(requested) > MAX_PLACES_PER_CLUB {
        return Some(BookingRejection::OverReservation);
    }
    None
}

/// Fails when the club cannot pay one point per requested place.
#[must_use]
pub const fn not_enough_points(requested: u32, points: u32) -> Option<BookingRejection> {
    if requested > points {
        return Some(BookingRejection::InsufficientPoints);
    }
    None
}

/// Fails when the competition has fewer places left than requested.
#[must_use]
pub const fn no_more_available_places(
    requested: u32,
    places_available: u32,
) -> Option<BookingRejection> {
    if requested > places_available {
        return Some(BookingRejection::CapacityExceeded);
    }
    None
}

/// Fails when the competition is flagged as already taken place.
///
/// The flag is only as fresh as the last refresh, so callers refresh it
/// before running the checks.
#[must_use]
pub const fn competition_took_place(competition: &Competition) -> Option<BookingRejection> {
    if competition.taken_place {
        return Some(BookingRejection::CompetitionElapsed);
    }
    None
}

/// Runs every admission rule and returns the first failure.
///
/// Rules are evaluated in a fixed order: over-reservation, points,
/// capacity, then elapsed competition. When several rules fail at once the
/// earliest one is reported.
///
/// # Arguments
///
/// * `competition` - The competition being booked
/// * `club` - The club making the purchase
/// * `requested` - The number of places requested
///
/// # Returns
///
/// * `None` if the purchase is admissible
/// * `Some(BookingRejection)` naming the first rule that failed
#[must_use]
pub fn run_checks(
    competition: &Competition,
    club: &Club,
    requested: u32,
) -> Option<BookingRejection> {
    more_than_max_reserved_places(club.reserved_for(&competition.name), requested)
        .or_else(|| not_enough_points(requested, club.points))
        .or_else(|| no_more_available_places(requested, competition.number_of_places))
        .or_else(|| competition_took_place(competition))
}
