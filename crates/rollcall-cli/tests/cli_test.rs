use std::fs;

use clap::Parser;
use miette::Diagnostic;
use tempfile::tempdir;

use rollcall_cli::{Args, CliError, error_adapter::to_reportables, run_with_io};

/// Runs the CLI with `argv`, feeding `stdin`, and returns stdout.
fn run_cli(argv: &[&str], stdin: &str) -> Result<String, CliError> {
    let args = Args::try_parse_from(argv).expect("Failed to parse arguments");
    let mut out = Vec::new();
    run_with_io(&args, &mut stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("Output should be UTF-8"))
}

#[test]
fn rank_all_picks_completes() {
    let output = run_cli(
        &["rollcall", "rank", "--names", "Ann,Bo,Cy", "--seed", "7"],
        "3\n1\n# last one\n2\n",
    )
    .expect("Rank should succeed");

    assert!(output.contains("Board: 3 slots"));
    assert!(output.contains("Progress: 3/3 (remaining 0)"));
    assert!(output.contains("Results:"));
    assert!(output.contains("  1. "));
    for name in ["Ann", "Bo", "Cy"] {
        assert!(output.contains(name), "missing {name}");
    }
}

#[test]
fn rank_reports_ignored_picks() {
    let output = run_cli(
        &["rollcall", "rank", "--count", "4", "--seed", "1"],
        "2\n2\n9\n",
    )
    .unwrap();

    assert!(output.contains("Pick 2: ignored (slot is already ranked)"));
    assert!(output.contains("Pick 3: ignored (no such slot)"));
    assert!(output.contains("Progress: 1/4 (remaining 3)"));
    assert!(!output.contains("Results:"));
}

#[test]
fn rank_json_output() {
    let output = run_cli(
        &[
            "rollcall", "rank", "--count", "2", "--seed", "3", "--format", "json",
        ],
        "1\n2\n",
    )
    .unwrap();

    let report: serde_json::Value = serde_json::from_str(&output).expect("Output should be JSON");
    assert_eq!(report["slots"], 2);
    assert_eq!(report["progress"]["remaining"], 0);
    assert_eq!(report["results"].as_array().unwrap().len(), 2);
    assert_eq!(report["results"][0]["rank"], 1);
    assert!(!report["results"][0]["name"].as_str().unwrap().is_empty());
}

#[test]
fn rank_writes_svg_files() {
    let dir = tempdir().expect("Failed to create temp directory");
    let picks = dir.path().join("picks.txt");
    let board = dir.path().join("board.svg");
    let results = dir.path().join("results.svg");
    fs::write(&picks, "1\n2\n3\n").unwrap();

    run_cli(
        &[
            "rollcall",
            "rank",
            "-n",
            "3",
            "--seed",
            "11",
            "--picks",
            picks.to_str().unwrap(),
            "--board",
            board.to_str().unwrap(),
            "--results",
            results.to_str().unwrap(),
        ],
        "",
    )
    .unwrap();

    assert!(fs::read_to_string(&board).unwrap().contains("<svg"));
    assert!(fs::read_to_string(&results).unwrap().contains("Results"));
}

#[test]
fn rank_skips_results_file_when_incomplete() {
    let dir = tempdir().unwrap();
    let results = dir.path().join("results.svg");

    run_cli(
        &[
            "rollcall",
            "rank",
            "-n",
            "3",
            "--results",
            results.to_str().unwrap(),
        ],
        "1\n",
    )
    .unwrap();

    assert!(!results.exists());
}

#[test]
fn rank_rejects_bad_picks_with_spans() {
    let err = run_cli(&["rollcall", "rank", "-n", "3"], "1\nfirst\n0\n").unwrap_err();

    match &err {
        CliError::Input { origin, errors, .. } => {
            assert_eq!(origin, "<stdin>");
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].span(), 2..7);
        }
        other => panic!("Expected input error, got {other:?}"),
    }
    assert_eq!(to_reportables(&err).len(), 2);
}

#[test]
fn rank_rejects_name_count_mismatch() {
    let err = run_cli(&["rollcall", "rank", "-n", "3", "--names", "Ann,Bo"], "").unwrap_err();
    assert!(err.to_string().contains("expected 3 participant names, got 2"));
}

#[test]
fn rank_rejects_too_many_participants() {
    let err = run_cli(&["rollcall", "rank", "-n", "31"], "").unwrap_err();
    assert!(matches!(err, CliError::Rollcall(_)));
}

#[test]
fn meet_reports_best_days() {
    let dir = tempdir().unwrap();
    let events = dir.path().join("events.txt");
    let calendar = dir.path().join("calendar.svg");
    fs::write(&events, "2025-11-15 0 2\n2025-11-20 1 2 3\n").unwrap();

    let output = run_cli(
        &[
            "rollcall",
            "meet",
            "--month",
            "2025-11",
            "--events",
            events.to_str().unwrap(),
            "--calendar",
            calendar.to_str().unwrap(),
        ],
        "",
    )
    .unwrap();

    assert!(output.contains("Availability for 2025-11"));
    assert!(output.contains("* 2025-11-20  3  User 2, User 3, User 4"));
    assert!(output.contains("  2025-11-15  2  User 1, User 3"));
    assert!(output.contains("Best days: 2025-11-20 (3 attendees)"));
    assert!(fs::read_to_string(&calendar).unwrap().contains("data-highlight"));
}

#[test]
fn meet_toggles_from_arguments() {
    let output = run_cli(
        &[
            "rollcall",
            "meet",
            "--month",
            "2025-11",
            "--toggle",
            "2025-11-03:1",
            "--toggle",
            "2025-11-03:1",
            "--format",
            "json",
        ],
        "",
    )
    .unwrap();

    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["month"], "2025-11");
    assert_eq!(report["best"]["max"], 0);
    assert!(report["days"].as_array().unwrap().is_empty());
}

#[test]
fn meet_empty_month() {
    let output = run_cli(&["rollcall", "meet", "--month", "2026-02"], "").unwrap();
    assert!(output.contains("No availability in 2026-02"));
}

#[test]
fn meet_rejects_unknown_user_in_events() {
    let dir = tempdir().unwrap();
    let events = dir.path().join("events.txt");
    fs::write(&events, "2025-11-15 0 8\n").unwrap();

    let err = run_cli(
        &[
            "rollcall",
            "meet",
            "--month",
            "2025-11",
            "--events",
            events.to_str().unwrap(),
        ],
        "",
    )
    .unwrap_err();

    match err {
        CliError::Input { errors, src, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(&src[errors[0].span()], "8");
        }
        other => panic!("Expected input error, got {other:?}"),
    }
}

#[test]
fn meet_rejects_bad_month() {
    assert!(Args::try_parse_from(["rollcall", "meet", "--month", "2025-13"]).is_err());
    assert!(Args::try_parse_from(["rollcall", "meet", "--month", "November"]).is_err());
}

#[test]
fn meet_uses_configured_users() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        r#"
[[users]]
id = 10
display_name = "Kim"

[[users]]
id = 11
display_name = "Lee"
"#,
    )
    .unwrap();

    let output = run_cli(
        &[
            "rollcall",
            "--config",
            config.to_str().unwrap(),
            "meet",
            "--month",
            "2025-11",
            "--toggle",
            "2025-11-07:10",
            "--toggle",
            "2025-11-07:11",
        ],
        "",
    )
    .unwrap();
    assert!(output.contains("* 2025-11-07  2  Kim, Lee"));

    let err = run_cli(
        &[
            "rollcall",
            "--config",
            config.to_str().unwrap(),
            "meet",
            "--month",
            "2025-11",
            "--toggle",
            "2025-11-07:0",
        ],
        "",
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown user id 0"));
}

#[test]
fn rank_rejects_infinite_board_width() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[board]\nwidth = inf\n").unwrap();

    let err = run_cli(
        &[
            "rollcall",
            "--config",
            config.to_str().unwrap(),
            "rank",
            "-n",
            "2",
        ],
        "",
    )
    .unwrap_err();

    assert!(err.to_string().contains("board width must be a finite positive number"));
    let reportables = to_reportables(&err);
    assert_eq!(
        reportables[0].help().map(|h| h.to_string()).as_deref(),
        Some("set `width` in the [board] section to a finite number")
    );
}

#[test]
fn meet_rejects_duplicate_configured_users() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[[users]]\nid = 1\ndisplay_name = \"Kim\"\n\n[[users]]\nid = 1\ndisplay_name = \"Lee\"\n",
    )
    .unwrap();

    let err = run_cli(
        &[
            "rollcall",
            "--config",
            config.to_str().unwrap(),
            "meet",
            "--month",
            "2025-11",
        ],
        "",
    )
    .unwrap_err();

    assert!(err.to_string().contains("user id 1 appears more than once"));
    assert_eq!(
        to_reportables(&err)[0].code().map(|c| c.to_string()).as_deref(),
        Some("rollcall::config")
    );
}
