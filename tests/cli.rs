#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use sota_sweep::{SWEEP_DATASETS, SWEEP_MODELS};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sota-sweep-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_failing_tuner(dir: &Path) -> (PathBuf, PathBuf) {
    let log = dir.join("calls.log");
    let script = dir.join("tune_sota_models.py");
    let body = format!("echo \"$@\" >> \"{}\"\nexit 7\n", log.display());
    fs::write(&script, body).unwrap();
    (script, log)
}

fn driver() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sota-sweep"));
    command.env("RUST_LOG", "off");
    command
}

#[test]
fn sweep_exits_zero_when_every_run_fails() {
    let dir = scratch_dir("sweep");
    let (script, log) = write_failing_tuner(&dir);

    let output = driver()
        .env("SWEEP_TUNER_PATH", &script)
        .env("SWEEP_INTERPRETER", "/bin/sh")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));

    let expected: Vec<String> = SWEEP_MODELS
        .iter()
        .flat_map(|model| {
            SWEEP_DATASETS
                .iter()
                .map(move |dataset| format!("--dataset {} --model {}", dataset, model))
        })
        .collect();
    let calls = fs::read_to_string(&log).unwrap();
    assert_eq!(calls.lines().count(), 32);
    assert_eq!(calls.lines().collect::<Vec<_>>(), expected);

    let exe_dir = Path::new(env!("CARGO_BIN_EXE_sota-sweep")).parent().unwrap();
    let base_path = fs::canonicalize(exe_dir).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some(base_path.to_str().unwrap()));
    assert_eq!(
        stdout
            .lines()
            .filter(|line| *line == base_path.to_str().unwrap())
            .count(),
        1
    );
    assert_eq!(
        stdout
            .lines()
            .filter(|line| line.starts_with("Starting tuning:"))
            .count(),
        32
    );
    assert_eq!(
        stdout.lines().last(),
        Some("==================================================")
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unknown_arguments_are_rejected_before_any_run() {
    let dir = scratch_dir("args");
    let (script, log) = write_failing_tuner(&dir);

    let output = driver()
        .arg("--models")
        .env("SWEEP_TUNER_PATH", &script)
        .env("SWEEP_INTERPRETER", "/bin/sh")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!log.exists());

    let _ = fs::remove_dir_all(&dir);
}
