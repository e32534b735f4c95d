// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;
use gudlft_api::PurchaseOutcome;
use gudlft_domain::BookingRejection;
use tempfile::TempDir;

const CLUBS_JSON: &str = r#"{"clubs": [
    {"name": "Simply Lift", "email": "john@simplylift.co", "points": 13,
     "reserved_places": {"Spring Festival": 6}},
    {"name": "Iron Temple", "email": "admin@irontemple.com", "points": 4,
     "reserved_places": {}}
]}"#;

const COMPETITIONS_JSON: &str = r#"{"competitions": [
    {"name": "Spring Festival", "date": "2999-03-27 10:00:00", "number_of_places": 25,
     "taken_place": false},
    {"name": "Fall Classic", "date": "2020-10-22 13:30:00", "number_of_places": 13,
     "taken_place": false}
]}"#;

fn create_test_files() -> (TempDir, StorePaths) {
    let dir: TempDir = tempfile::tempdir().expect("temp dir");
    let paths: StorePaths = StorePaths::new(
        dir.path().join("clubs.json"),
        dir.path().join("competitions.json"),
    );
    std::fs::write(&paths.clubs, CLUBS_JSON).unwrap();
    std::fs::write(&paths.competitions, COMPETITIONS_JSON).unwrap();
    (dir, paths)
}

#[test]
fn test_args_definition_is_valid() {
    Args::command().debug_assert();
}

#[test]
fn test_default_paths() {
    let args: Args = Args::try_parse_from(["gudlft", "clubs"]).unwrap();
    assert_eq!(
        args.store_paths(),
        StorePaths::new("clubs.json", "competitions.json")
    );
    assert!(!args.json);
}

#[test]
fn test_paths_after_subcommand() {
    let args: Args = Args::try_parse_from([
        "gudlft",
        "purchase",
        "--competition",
        "Spring Festival",
        "--club",
        "Simply Lift",
        "--places",
        "3",
        "--clubs",
        "/data/clubs.json",
        "--json",
    ])
    .unwrap();

    assert_eq!(args.clubs, PathBuf::from("/data/clubs.json"));
    assert!(args.json);
    assert!(matches!(
        args.command,
        Command::Purchase { ref places, .. } if places == "3"
    ));
}

#[test]
fn test_purchase_requires_places() {
    let result = Args::try_parse_from([
        "gudlft",
        "purchase",
        "--competition",
        "Spring Festival",
        "--club",
        "Simply Lift",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_points_board_text() {
    let (_dir, paths) = create_test_files();
    let output: Output = Command::Points.run(&paths).unwrap();

    assert_eq!(
        output.to_text().unwrap(),
        "Points available per club:\nSimply Lift  13\nIron Temple  4\n"
    );
}

#[test]
fn test_summary_text_marks_past_competitions() {
    let (_dir, paths) = create_test_files();
    let command: Command = Command::Summary {
        email: String::from("john@simplylift.co"),
    };
    let text: String = command.run(&paths).unwrap().to_text().unwrap();

    assert!(text.starts_with("Welcome, john@simplylift.co\nPoints available: 13\n"));
    assert!(text.contains("- Spring Festival\n  Date: 2999-03-27 10:00:00\n"));
    assert!(text.contains("  Reserved by Simply Lift: 6\n"));
    assert!(text.contains("- Fall Classic\n  Date: 2020-10-22 13:30:00\n  Number of places: 13\n  Already took place\n"));
}

#[test]
fn test_purchase_command_books() {
    let (_dir, paths) = create_test_files();
    let command: Command = Command::Purchase {
        competition: String::from("Spring Festival"),
        club: String::from("Iron Temple"),
        places: String::from("2"),
    };
    let output: Output = command.run(&paths).unwrap();

    let text: String = output.to_text().unwrap();
    assert!(text.starts_with("Great-booking complete!\n\nWelcome, admin@irontemple.com\n"));
    assert!(text.contains("Points available: 2\n"));
}

#[test]
fn test_purchase_command_rejection_is_not_an_error() {
    let (_dir, paths) = create_test_files();
    let command: Command = Command::Purchase {
        competition: String::from("Spring Festival"),
        club: String::from("Simply Lift"),
        places: String::from("7"),
    };
    let output: Output = command.run(&paths).unwrap();

    assert!(matches!(
        output,
        Output::Purchase(PurchaseOutcome::Rejected {
            reason: BookingRejection::OverReservation
        })
    ));
    assert_eq!(
        output.to_text().unwrap(),
        "you required more than 12 places !\n"
    );
}

#[test]
fn test_unknown_email_is_invalid_request() {
    let (_dir, paths) = create_test_files();
    let command: Command = Command::Back {
        email: String::from("nobody@example.com"),
    };
    let err: ApiError = command.run(&paths).unwrap_err();

    assert_eq!(err.user_message(), "invalid request");
}

#[test]
fn test_booking_form_json() {
    let (_dir, paths) = create_test_files();
    let command: Command = Command::Booking {
        competition: String::from("Spring Festival"),
        club: String::from("Simply Lift"),
    };
    let json: String = command.run(&paths).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["max_places"], 6);
    assert_eq!(value["competition"]["date"], "2999-03-27 10:00:00");
    assert_eq!(value["club"]["reserved_places"]["Spring Festival"], 6);
}
