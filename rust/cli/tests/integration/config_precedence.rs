use crate::helpers::CliRunner;

fn cfg_json(cli: &CliRunner, env: &[(&str, &str)]) -> serde_json::Value {
    let res = cli.run_with_env(&["cfg"], env);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
fn defaults_when_nothing_is_set() {
    let cli = CliRunner::new();
    let json = cfg_json(&cli, &[]);
    assert_eq!(json["players"]["source"], "default");
    assert_eq!(json["ai"]["value"], "baseline");
}

#[test]
fn env_overrides_file() {
    let cli = CliRunner::new();
    let path = cli.dir().join("uno.toml");
    std::fs::write(&path, "players = 3\nai = \"advisor\"\nseed = 5\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let json = cfg_json(&cli, &[("UNO_CONFIG", &path_str), ("UNO_PLAYERS", "6")]);
    assert_eq!(json["players"]["value"], 6);
    assert_eq!(json["players"]["source"], "env");
    assert_eq!(json["ai"]["value"], "advisor");
    assert_eq!(json["ai"]["source"], "file");
    assert_eq!(json["seed"]["value"], 5);
}

#[test]
fn flags_override_env() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["deal", "--players", "2", "--seed", "1"],
        &[("UNO_PLAYERS", "5"), ("UNO_SEED", "99")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Seed: 1\n"));
    assert!(!res.stdout.contains("Bot 3"));

    let res = cli.run_with_env(&["deal"], &[("UNO_PLAYERS", "5"), ("UNO_SEED", "99")]);
    assert!(res.stdout.starts_with("Seed: 99\n"));
    assert!(res.stdout.contains("Bot 5"));
}

#[test]
fn invalid_config_file_exits_with_two() {
    let cli = CliRunner::new();
    let path = cli.dir().join("bad.toml");
    std::fs::write(&path, "players = \"many\"\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();
    for cmd in ["cfg", "deal"] {
        let res = cli.run_with_env(&[cmd], &[("UNO_CONFIG", &path_str)]);
        assert_eq!(res.exit_code, 2, "{} should reject the file", cmd);
        assert!(res.stderr.contains("Invalid configuration"));
    }
}
