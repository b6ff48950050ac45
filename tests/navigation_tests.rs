//! End-to-end navigation through the library API
use std::path::{Path, PathBuf};

use mars_rover::{
    BoundsPhase, Error, FormatErrorKind, Heading, ParseOptions, PlateauBounds, RoverState,
    navigate, navigate_file, read_input,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_sample_file() {
    let finals = navigate_file(&fixture("sample_valid.txt"), &ParseOptions::default())
        .expect("navigate sample");

    assert_eq!(
        finals,
        vec![
            RoverState::new(1, 3, Heading::North),
            RoverState::new(5, 1, Heading::East),
        ]
    );
    let lines: Vec<String> = finals.iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["1 3 N", "5 1 E"]);
}

#[test]
fn test_sample_file_parses() {
    let input = read_input(&fixture("sample_valid.txt"), &ParseOptions::default())
        .expect("read sample");
    assert_eq!(input.bounds, PlateauBounds::new(5, 5));
    assert_eq!(input.commands.len(), 2);
    assert_eq!(input.commands[1].orders.to_string(), "MMRMMRMRRM");
}

#[test]
fn test_move_off_zero_plateau() {
    let err = navigate_file(&fixture("off_plateau.txt"), &ParseOptions::default()).unwrap_err();

    match err {
        Error::OutOfBounds(e) => {
            assert_eq!(e.rover, 1);
            assert_eq!((e.x, e.y), (0, 1));
            assert!(matches!(e.phase, BoundsPhase::Order { index: 1, .. }));
        }
        other => panic!("expected out of bounds, got {other:?}"),
    }
}

#[test]
fn test_malformed_bounds_line() {
    let err = navigate_file(&fixture("bad_bounds.txt"), &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Format(ref e) if e.line == Some(1)));
}

#[test]
fn test_malformed_orders_line() {
    let err = navigate_file(&fixture("bad_orders.txt"), &ParseOptions::default()).unwrap_err();

    match err {
        Error::Format(e) => {
            assert_eq!(e.line, Some(3));
            assert_eq!(e.kind, FormatErrorKind::InvalidOrder { ch: 'D', column: 4 });
        }
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_empty_orders_line() {
    let finals =
        navigate_file(&fixture("empty_orders.txt"), &ParseOptions::default()).expect("navigate");
    assert_eq!(finals, vec![RoverState::new(0, 0, Heading::North)]);
}

#[test]
fn test_no_rovers() {
    let finals =
        navigate_file(&fixture("no_rovers.txt"), &ParseOptions::default()).expect("navigate");
    assert!(finals.is_empty());

    let strict = ParseOptions {
        require_rovers: true,
    };
    let err = navigate_file(&fixture("no_rovers.txt"), &strict).unwrap_err();
    assert!(matches!(err, Error::Format(ref e) if e.kind == FormatErrorKind::NoRovers));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("does_not_exist.txt");

    let err = navigate_file(&path, &ParseOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Format(ref e) if matches!(e.kind, FormatErrorKind::Unreadable { .. })
    ));
}

#[test]
fn test_second_of_three_rovers_fails_whole_run() {
    let input = "5 5\n1 2 N\nLMLMLMLMM\n0 5 N\nM\n3 3 E\nMMRMMRMRRM\n";
    let err = navigate(input, &ParseOptions::default()).unwrap_err();

    match err {
        Error::OutOfBounds(e) => {
            assert_eq!(e.rover, 2);
            assert_eq!((e.x, e.y, e.heading), (0, 6, Heading::North));
        }
        other => panic!("expected out of bounds, got {other:?}"),
    }
}

#[test]
fn test_bad_start_of_later_rover_caught_before_moving() {
    // Rover 1 would fail mid-run; the pre-flight check reports rover 3's start instead
    let input = "2 2\n0 0 S\nM\n1 1 N\n\n9 9 N\n\n";
    let err = navigate(input, &ParseOptions::default()).unwrap_err();

    match err {
        Error::OutOfBounds(e) => {
            assert_eq!(e.rover, 3);
            assert_eq!(e.phase, BoundsPhase::Start);
        }
        other => panic!("expected out of bounds, got {other:?}"),
    }
}

#[test]
fn test_lowercase_input() {
    let finals = navigate("5 5\n1 2 n\nlmlmlmlmm\n", &ParseOptions::default()).expect("navigate");
    assert_eq!(finals, vec![RoverState::new(1, 3, Heading::North)]);
}
