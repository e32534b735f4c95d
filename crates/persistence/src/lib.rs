// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON file persistence for GUDLFT.
//!
//! Clubs and competitions live in two flat JSON files. Every operation loads
//! a collection in full, changes it in memory and writes it back in full.
//!
//! ## Files
//!
//! - clubs: `{"clubs": [{"name", "email", "points", "reserved_places"}, ...]}`
//! - competitions: `{"competitions": [{"name", "date", "number_of_places",
//!   "taken_place"}, ...]}`
//!
//! Fields the booking system does not know about are carried through
//! unchanged.
//!
//! ## Limitations
//!
//! - Writes overwrite the file directly. A crash mid-write can corrupt it.
//! - There is no locking. Two processes booking at once can lose an update.
//! - A booking writes two files with no rollback between them.

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
mod ledger;
mod refresh;
mod search;
mod store;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use ledger::{RecordedBooking, record_changes};
pub use refresh::refresh_taken_place_flags;
pub use search::{search_club, search_competition};
pub use store::{StorePaths, load_clubs, load_competitions, save_clubs, save_competitions};
