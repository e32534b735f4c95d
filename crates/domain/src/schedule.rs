// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Competition;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Returns the current instant as a naive UTC date-time.
///
/// Competition dates carry no offset, so they are compared against UTC.
#[must_use]
pub fn now_utc() -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Returns whether a competition's date lies strictly before `now`.
#[must_use]
pub fn has_taken_place(competition: &Competition, now: PrimitiveDateTime) -> bool {
    competition.date < now
}

/// Recomputes `taken_place` on every competition against `now`.
///
/// # Arguments
///
/// * `competitions` - The competitions to update in place
/// * `now` - The instant to compare against
///
/// # Returns
///
/// The number of competitions whose flag changed.
pub fn mark_taken_place(competitions: &mut [Competition], now: PrimitiveDateTime) -> usize {
    let mut changed: usize = 0;
    for competition in competitions.iter_mut() {
        let taken_place: bool = has_taken_place(competition, now);
        if competition.taken_place != taken_place {
            competition.taken_place = taken_place;
            changed += 1;
        }
    }
    changed
}
