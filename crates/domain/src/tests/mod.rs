// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod schedule;

use crate::{Club, Competition};
use time::PrimitiveDateTime;
use time::macros::datetime;

/// The instant every test treats as "now".
pub fn test_now() -> PrimitiveDateTime {
    datetime!(2026-10-17 12:00:00)
}

pub fn create_simply_lift() -> Club {
    let mut club: Club = Club::new("Simply Lift", "john@simplylift.co", 13);
    club.reserved_places
        .insert(String::from("Spring Festival"), 6);
    club
}

pub fn create_iron_temple() -> Club {
    Club::new("Iron Temple", "admin@irontemple.com", 2)
}

pub fn create_she_lifts() -> Club {
    Club::new("She Lifts", "kate@shelifts.co.uk", 12)
}

pub fn create_test_clubs() -> Vec<Club> {
    vec![create_simply_lift(), create_iron_temple(), create_she_lifts()]
}

pub fn create_spring_festival() -> Competition {
    Competition::new("Spring Festival", datetime!(2027-03-27 10:00:00), 25)
}

pub fn create_fall_classic() -> Competition {
    Competition::new("Fall Classic", datetime!(2020-10-22 13:30:00), 13)
}

pub fn create_summer_plates() -> Competition {
    let mut competition: Competition =
        Competition::new("Summer plates", datetime!(2023-07-14 09:00:00), 2);
    competition.taken_place = true;
    competition
}

pub fn create_test_competitions() -> Vec<Competition> {
    vec![
        create_spring_festival(),
        create_fall_classic(),
        create_summer_plates(),
    ]
}
