use crate::helpers::CliRunner;
use uno_engine::engine::{apply_action, initialize_game_with_seed};
use uno_engine::logger::GameRecord;

#[test]
fn sim_output_feeds_stats() {
    let cli = CliRunner::new();
    let out = cli.dir().join("runs").join("sim.jsonl");
    let out_str = out.to_string_lossy().into_owned();

    let res = cli.run(&[
        "sim", "--games", "5", "--players", "3", "--seed", "100", "--output", &out_str,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Simulated: 5 games (base seed 100)"));

    let stats = cli.run(&["stats", "--input", &out_str]);
    assert_eq!(stats.exit_code, 0, "stderr={}", stats.stderr);
    let json: serde_json::Value = serde_json::from_str(&stats.stdout).unwrap();
    assert_eq!(json["games"], 5);
}

#[test]
fn recorded_games_replay_through_the_engine() {
    let cli = CliRunner::new();
    let out = cli.dir().join("replay.jsonl");
    let out_str = out.to_string_lossy().into_owned();
    let res = cli.run(&[
        "sim", "--games", "3", "--seed", "7", "--ai", "advisor", "--output", &out_str,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let content = std::fs::read_to_string(&out).unwrap();
    for line in content.lines() {
        let rec: GameRecord = serde_json::from_str(line).unwrap();
        let seed = rec.seed.expect("sim records the seed");
        let mut state = initialize_game_with_seed(&rec.players, seed).unwrap();
        for a in &rec.actions {
            state = apply_action(&state, a.player_index, a.action).unwrap();
        }
        assert_eq!(state.winner(), rec.winner);
        state.check_integrity().unwrap();
    }
}

#[test]
fn break_after_exits_as_interrupted() {
    let cli = CliRunner::new();
    let out = cli.dir().join("partial.jsonl");
    let out_str = out.to_string_lossy().into_owned();
    let res = cli.run_with_env(
        &["sim", "--games", "10", "--seed", "3", "--output", &out_str],
        &[("UNO_SIM_BREAK_AFTER", "4")],
    );
    assert_eq!(res.exit_code, 130);
    assert!(res.stdout.contains("Interrupted: saved 4/10"));
    let lines = std::fs::read_to_string(&out).unwrap().lines().count();
    assert_eq!(lines, 4);
}
