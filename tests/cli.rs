use assert_cmd::Command;
use predicates::prelude::*;

fn fit() -> Command {
    let mut cmd = Command::cargo_bin("fit").expect("bin");
    cmd.env_remove("FIT_SEED").env_remove("FIT_CONFIG");
    cmd
}

#[test]
fn summary_prints_seeded_totals() {
    fit()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 800 cal, 135 min, 3 workouts"))
        .stdout(predicate::str::contains("Yoga Session"));
}

#[test]
fn summary_json_is_valid() {
    let output = fit()
        .args(["--seed", "42", "summary", "--json"])
        .output()
        .expect("summary");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["total_calories"], 800);
    assert_eq!(value["total_minutes"], 135);
    assert_eq!(value["health"]["steps"], 8432);
}

#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    fit()
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "dark-mode", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark-mode set to: true"));

    fit()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "dark-mode"])
        .assert()
        .success()
        .stdout("true\n");

    fit()
        .env("FIT_CONFIG", &path)
        .args(["config", "reset", "dark-mode"])
        .assert()
        .success();

    fit()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "dark-mode"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn config_rejects_bad_value() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    fit()
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "health-tick", "often"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert!(!path.exists());
}

#[test]
fn unknown_config_key_is_a_usage_error() {
    fit()
        .args(["config", "get", "shoe-size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
