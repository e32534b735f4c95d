// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Textual layout of a competition date as stored on disk.
pub const COMPETITION_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

time::serde::format_description!(
    competition_date,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);

/// A club able to spend points on competition places.
///
/// Fields not known to the booking system are kept in `extra` and written
/// back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// The club name. Unique within the club collection.
    pub name: String,
    /// The contact email, used to identify the club at sign-in.
    pub email: String,
    /// The remaining point balance.
    pub points: u32,
    /// Places already reserved, keyed by competition name.
    #[serde(default)]
    pub reserved_places: BTreeMap<String, u32>,
    /// Any other fields present in the stored record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Club {
    /// Creates a club with no reservations.
    ///
    /// # Arguments
    ///
    /// * `name` - The club name
    /// * `email` - The club contact email
    /// * `points` - The starting point balance
    #[must_use]
    pub fn new(name: &str, email: &str, points: u32) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            points,
            reserved_places: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Returns the number of places this club holds at a competition.
    ///
    /// Competitions the club never booked count as zero.
    #[must_use]
    pub fn reserved_for(&self, competition_name: &str) -> u32 {
        self.reserved_places
            .get(competition_name)
            .copied()
            .unwrap_or(0)
    }
}

/// A competition with a limited number of places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    /// The competition name. Unique within the competition collection.
    pub name: String,
    /// When the competition starts, in `YYYY-MM-DD HH:MM:SS` form on disk.
    #[serde(with = "competition_date")]
    pub date: PrimitiveDateTime,
    /// Places still available.
    pub number_of_places: u32,
    /// Cached flag, true once `date` is in the past.
    ///
    /// Only meaningful after a refresh against the current instant.
    #[serde(default)]
    pub taken_place: bool,
    /// Any other fields present in the stored record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Competition {
    /// Creates a competition that has not yet been flagged as taken place.
    ///
    /// # Arguments
    ///
    /// * `name` - The competition name
    /// * `date` - When the competition starts
    /// * `number_of_places` - The places initially available
    #[must_use]
    pub fn new(name: &str, date: PrimitiveDateTime, number_of_places: u32) -> Self {
        Self {
            name: name.to_string(),
            date,
            number_of_places,
            taken_place: false,
            extra: Map::new(),
        }
    }

    /// Renders the date the way it is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatter rejects the date.
    pub fn date_text(&self) -> Result<String, time::error::Format> {
        self.date.format(COMPETITION_DATE_FORMAT)
    }
}
