use crate::helpers::CliRunner;

#[test]
fn play_quits_cleanly_from_piped_stdin() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--players", "3", "--seed", "42"], "q\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("play: players=3 ai=baseline seed=42"));
    assert!(res.stdout.contains("Game abandoned"));
}

#[test]
fn play_survives_garbage_and_eof() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "9"], "bet 10\nplay 99\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Unrecognized action 'bet'"));
    assert!(res.stdout.contains("Game abandoned"));
}

#[test]
fn play_rejects_unknown_opponents() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--ai", "oracle"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("ai must be one of"));
}
