use crate::helpers::CliRunner;

#[test]
fn help_lists_all_commands() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["play", "sim", "deal", "stats", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn version_prints_something() {
    let cli = CliRunner::new();
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("uno"));
}

#[test]
fn unknown_subcommand_shows_command_list_on_stderr() {
    let cli = CliRunner::new();
    let res = cli.run(&["unknown"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the command list\n---stderr---\n{}",
        res.stderr
    );
    assert!(res.stdout.is_empty());
}

#[test]
fn deal_is_reproducible_across_processes() {
    let cli = CliRunner::new();
    let a = cli.run(&["deal", "--players", "4", "--seed", "2024"]);
    let b = cli.run(&["deal", "--players", "4", "--seed", "2024"]);
    assert_eq!(a.exit_code, 0, "stderr={}", a.stderr);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.contains("Bot 4 (7): "));
}
