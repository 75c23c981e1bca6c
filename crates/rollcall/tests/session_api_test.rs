//! Integration tests for the Rollcall API
//!
//! These tests drive both engines through the public facade only.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tempfile::tempdir;

use rollcall::{
    Rollcall, RollcallError,
    availability::YearMonth,
    config::{AppConfig, BoardConfig, StyleConfig},
    ranking::{IgnoreReason, Participants, Selection, SlotId},
    user::UserId,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_ranking_game_end_to_end() {
    let rollcall = Rollcall::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let participants = Participants::named(["Ann", "Bo", "Cy", "Di", "Ed"]).unwrap();

    let mut session = rollcall
        .start_ranking(&participants, &mut rng)
        .expect("Failed to start ranking");

    let mut order: Vec<usize> = (0..5).collect();
    order.shuffle(&mut rng);
    for index in order {
        let slot = session.board().slots()[index].clone();
        let selection = session.select_at(slot.position());
        assert!(
            matches!(selection, Selection::Assigned { slot: picked, .. } if picked == slot.id()),
            "unexpected selection {selection:?}"
        );
    }

    assert!(session.is_complete());
    assert_eq!(
        session.select_slot(SlotId::new(0)),
        Selection::Ignored(IgnoreReason::Complete)
    );

    let results = session.results().expect("Session should be complete");
    let names: BTreeSet<&str> = results.iter().map(|entry| entry.name()).collect();
    assert_eq!(names, BTreeSet::from(["Ann", "Bo", "Cy", "Di", "Ed"]));

    let svg = rollcall
        .render_results_svg(&results)
        .expect("Failed to render results");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
}

#[test]
fn test_results_unavailable_until_complete() {
    let rollcall = Rollcall::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = rollcall
        .start_ranking(&Participants::count(3).unwrap(), &mut rng)
        .unwrap();

    session.select_slot(SlotId::new(0));
    session.select_slot(SlotId::new(1));
    assert!(session.results().is_none());
    assert_eq!(session.progress().to_string(), "2/3 (remaining 1)");
}

#[test]
fn test_calendar_end_to_end() {
    let rollcall = Rollcall::default();
    let mut session = rollcall
        .start_calendar(YearMonth::new(2025, 11).unwrap())
        .unwrap();

    for id in [0, 2] {
        session.toggle(date(2025, 11, 15), UserId::new(id)).unwrap();
    }
    for id in [1, 2, 3] {
        session.toggle(date(2025, 11, 20), UserId::new(id)).unwrap();
    }
    assert!(session.toggle(date(2025, 11, 20), UserId::new(4)).is_err());

    let best = session.best_days();
    assert_eq!(best.max, 3);
    assert_eq!(best.dates, BTreeSet::from([date(2025, 11, 20)]));

    let svg = rollcall
        .render_month_svg(&session)
        .expect("Failed to render month");
    assert!(svg.contains("data-highlight"));
}

#[test]
fn test_invalid_palette_is_config_error() {
    let style = StyleConfig::new(None, Some(vec!["not-a-color".to_string()]));
    let rollcall = Rollcall::new(AppConfig::new(BoardConfig::default(), style, Vec::new()));
    let mut rng = StdRng::seed_from_u64(0);

    let result = rollcall.start_ranking(&Participants::count(2).unwrap(), &mut rng);
    assert!(matches!(result, Err(RollcallError::Config(_))));
}

#[test]
fn test_board_too_small_is_invalid_input() {
    let config = AppConfig::new(
        BoardConfig::new(120.0, 120.0),
        StyleConfig::default(),
        Vec::new(),
    );
    let rollcall = Rollcall::new(config);
    let mut rng = StdRng::seed_from_u64(0);

    let result = rollcall.start_ranking(&Participants::count(2).unwrap(), &mut rng);
    assert!(matches!(result, Err(RollcallError::InvalidInput(_))));
}

#[test]
fn test_export_board_writes_file() {
    let rollcall = Rollcall::default();
    let mut rng = StdRng::seed_from_u64(5);
    let session = rollcall
        .start_ranking(&Participants::count(6).unwrap(), &mut rng)
        .unwrap();

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("board.svg");
    rollcall
        .export_board(session.board(), &path)
        .expect("Failed to export board");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("</svg>"));

    let results_path = temp_dir.path().join("results.svg");
    let error = rollcall.export_results(&[], &results_path).unwrap_err();
    assert!(matches!(error, RollcallError::Export(_)));
    assert!(!results_path.exists());
}
