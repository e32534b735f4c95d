// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use gudlft_domain::{BookingRejection, Club, Competition};
use serde::Serialize;

/// Confirmation shown after a successful purchase.
pub const BOOKING_COMPLETE: &str = "Great-booking complete!";

/// API request to purchase places at a competition.
///
/// Fields arrive as submitted by the booking form; `places` is parsed by the
/// handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    /// The name of the competition to book.
    pub competition: String,
    /// The name of the club making the purchase.
    pub club: String,
    /// The number of places requested, as entered.
    pub places: String,
}

/// The data behind a club's welcome page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The signed-in club.
    pub club: Club,
    /// Every club, for the points board.
    pub clubs: Vec<Club>,
    /// Every competition.
    pub competitions: Vec<Competition>,
}

/// The data behind the booking form for one club and competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingForm {
    /// The club making the purchase.
    pub club: Club,
    /// The competition being booked.
    pub competition: Competition,
    /// The most places the club could currently book here.
    pub max_places: u32,
}

/// The result of a purchase submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    /// The purchase was recorded.
    Booked {
        /// The confirmation message.
        message: String,
        /// The club's welcome page after the purchase.
        summary: Summary,
    },
    /// An admission rule refused the purchase. Points and places are unchanged.
    Rejected {
        /// The rule that failed.
        #[serde(serialize_with = "serialize_reason")]
        reason: BookingRejection,
    },
}

impl PurchaseOutcome {
    /// Returns the message to show the club.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Booked { message, .. } => message,
            Self::Rejected { reason } => reason.reason(),
        }
    }
}

fn serialize_reason<S: serde::Serializer>(
    reason: &BookingRejection,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(reason.reason())
}
