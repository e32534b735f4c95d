// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use gudlft_persistence::StorePaths;
use serde_json::json;
use tempfile::TempDir;
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::PurchaseRequest;

/// The instant every test treats as "now".
pub fn test_now() -> PrimitiveDateTime {
    datetime!(2026-10-17 12:00:00)
}

/// Data files written into a temporary directory that lives as long as this value.
pub struct TestStore {
    _dir: TempDir,
    pub paths: StorePaths,
}

pub fn create_test_store() -> TestStore {
    let dir: TempDir = tempfile::tempdir().expect("temp dir");
    let paths: StorePaths = StorePaths::new(
        dir.path().join("clubs.json"),
        dir.path().join("competitions.json"),
    );

    let clubs: serde_json::Value = json!({"clubs": [
        {
            "name": "Simply Lift",
            "email": "john@simplylift.co",
            "points": 13,
            "reserved_places": {"Spring Festival": 6}
        },
        {
            "name": "Iron Temple",
            "email": "admin@irontemple.com",
            "points": 4,
            "reserved_places": {}
        },
        {
            "name": "She Lifts",
            "email": "kate@shelifts.co.uk",
            "points": 12,
            "reserved_places": {}
        }
    ]});
    let competitions: serde_json::Value = json!({"competitions": [
        {
            "name": "Spring Festival",
            "date": "2027-03-27 10:00:00",
            "number_of_places": 25,
            "taken_place": false
        },
        {
            "name": "Fall Classic",
            "date": "2020-10-22 13:30:00",
            "number_of_places": 13,
            "taken_place": false
        }
    ]});

    std::fs::write(&paths.clubs, clubs.to_string()).unwrap();
    std::fs::write(&paths.competitions, competitions.to_string()).unwrap();

    TestStore { _dir: dir, paths }
}

pub fn create_purchase_request(competition: &str, club: &str, places: &str) -> PurchaseRequest {
    PurchaseRequest {
        competition: competition.to_string(),
        club: club.to_string(),
        places: places.to_string(),
    }
}
