// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod lookup;
mod rules;
mod schedule;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use lookup::{ClubField, CompetitionField, Found, Record, find_by, find_by_field};
pub use rules::{
    BookingRejection, MAX_PLACES_PER_CLUB, competition_took_place, more_than_max_reserved_places,
    no_more_available_places, not_enough_points, run_checks,
};
pub use schedule::{has_taken_place, mark_taken_place, now_utc};
pub use types::{COMPETITION_DATE_FORMAT, Club, Competition};
