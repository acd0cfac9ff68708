use crate::helpers::{CliRunner, sample_record};

#[test]
fn stats_over_a_plain_file() {
    let cli = CliRunner::new();
    let path = cli.dir().join("games.jsonl");
    let content = format!(
        "{}\n{}\n",
        sample_record(1, 2, Some(1), 12),
        sample_record(2, 2, Some(1), 18)
    );
    std::fs::write(&path, content).unwrap();

    let res = cli.run(&["stats", "--input", &path.to_string_lossy()]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["games"], 2);
    assert_eq!(json["wins_by_seat"], serde_json::json!([0, 2]));
    assert_eq!(json["average_turns"], 15.0);
}

#[test]
fn stats_missing_input_exits_with_two() {
    let cli = CliRunner::new();
    let res = cli.run(&["stats", "--input", "does-not-exist.jsonl"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Failed to read"));
}

#[test]
fn stats_reports_corruption_but_keeps_going() {
    let cli = CliRunner::new();
    let path = cli.dir().join("mixed.jsonl");
    let content = format!("{}\nnot json\n{}\n", sample_record(1, 3, None, 40), sample_record(2, 3, Some(2), 9));
    std::fs::write(&path, content).unwrap();

    let res = cli.run(&["stats", "--input", &path.to_string_lossy()]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Skipped 1 corrupted record(s)"));
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["games"], 2);
    assert_eq!(json["unfinished"], 1);
}
