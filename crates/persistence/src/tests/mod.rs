// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::StorePaths;
use std::path::Path;
use tempfile::TempDir;
use time::PrimitiveDateTime;
use time::macros::datetime;

pub const CLUBS_JSON: &str = r#"{
    "clubs": [
        {
            "name": "Simply Lift",
            "email": "john@simplylift.co",
            "points": 13,
            "reserved_places": {
                "Spring Festival": 6
            }
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
    ]
}
"#;

pub const COMPETITIONS_JSON: &str = r#"{
    "competitions": [
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
        },
        {
            "name": "Summer plates",
            "date": "2023-07-14 09:00:00",
            "number_of_places": 2,
            "taken_place": true
        }
    ]
}
"#;

/// The instant every test treats as "now".
pub fn test_now() -> PrimitiveDateTime {
    datetime!(2026-10-17 12:00:00)
}

/// A temporary directory holding freshly written clubs and competitions files.
pub struct TestFiles {
    _dir: TempDir,
    pub paths: StorePaths,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::with_contents(CLUBS_JSON, COMPETITIONS_JSON)
    }

    pub fn with_contents(clubs: &str, competitions: &str) -> Self {
        let dir: TempDir = tempfile::tempdir().expect("temp dir");
        let paths: StorePaths = StorePaths::new(
            dir.path().join("clubs.json"),
            dir.path().join("competitions.json"),
        );
        std::fs::write(&paths.clubs, clubs).unwrap();
        std::fs::write(&paths.competitions, competitions).unwrap();
        Self { _dir: dir, paths }
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
