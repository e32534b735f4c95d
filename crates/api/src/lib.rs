// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for GUDLFT bookings.
//!
//! Front ends call these operations with already-collected scalar input and
//! render what comes back. Booking rejections are returned as
//! [`PurchaseOutcome::Rejected`]; everything else that goes wrong is an
//! [`ApiError`], shown to users as "invalid request".

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, INVALID_REQUEST, translate_domain_error, translate_store_error};
pub use handlers::{booking_form, list_clubs, purchase_places, return_to_summary, show_summary};
pub use request_response::{
    BOOKING_COMPLETE, BookingForm, PurchaseOutcome, PurchaseRequest, Summary,
};
