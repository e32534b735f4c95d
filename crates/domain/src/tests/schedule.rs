// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_fall_classic, create_spring_festival, create_test_competitions, test_now};
use crate::{Competition, has_taken_place, mark_taken_place};
use time::macros::datetime;

#[test]
fn test_has_taken_place() {
    assert!(!has_taken_place(&create_spring_festival(), test_now()));
    assert!(has_taken_place(&create_fall_classic(), test_now()));
}

#[test]
fn test_has_taken_place_is_strict() {
    let competition: Competition = create_spring_festival();
    assert!(!has_taken_place(&competition, competition.date));
    assert!(has_taken_place(
        &competition,
        datetime!(2027-03-27 10:00:01)
    ));
}

#[test]
fn test_mark_taken_place() {
    let mut competitions: Vec<Competition> = create_test_competitions();
    assert!(!competitions[0].taken_place);
    assert!(!competitions[1].taken_place);
    assert!(competitions[2].taken_place);

    let changed: usize = mark_taken_place(&mut competitions, test_now());

    assert_eq!(changed, 1);
    assert!(!competitions[0].taken_place);
    assert!(competitions[1].taken_place);
    assert!(competitions[2].taken_place);
}

#[test]
fn test_mark_taken_place_clears_stale_flag() {
    let mut competitions: Vec<Competition> = vec![create_spring_festival()];
    competitions[0].taken_place = true;

    let changed: usize = mark_taken_place(&mut competitions, test_now());

    assert_eq!(changed, 1);
    assert!(!competitions[0].taken_place);
}
