//! Shared helpers for the CLI integration tests.
//!
//! - `CliRunner` runs the built `uno` binary in a scratch directory, with
//!   optional stdin and environment, and captures exit code and streams.
//! - `sample_record` builds one JSONL game record line for stats input.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: tempfile::TempDir,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_uno")),
            temp_dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in ["UNO_CONFIG", "UNO_SEED", "UNO_PLAYERS", "UNO_AI", "UNO_MAX_TURNS"] {
            cmd.env_remove(var);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn CLI binary");
        if let Some(payload) = input
            && let Some(mut stdin) = child.stdin.take()
        {
            let _ = stdin.write_all(payload.as_bytes());
        }
        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// One recorded game as a JSONL line.
#[allow(dead_code)]
pub fn sample_record(id: u32, players: usize, winner: Option<usize>, turns: u32) -> String {
    let names: Vec<String> = (0..players).map(|i| format!("Bot {}", i + 1)).collect();
    serde_json::json!({
        "game_id": format!("20250101-{:06}", id),
        "seed": id,
        "players": names,
        "actions": [],
        "winner": winner,
        "turns": turns,
        "result": null,
        "ts": "2025-01-01T00:00:00Z",
        "meta": null
    })
    .to_string()
}
