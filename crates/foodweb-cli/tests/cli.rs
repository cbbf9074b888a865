//! End-to-end tests driving the foodweb binary over stdin

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn foodweb() -> Command {
    let mut cmd = Command::cargo_bin("foodweb").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

const SAMPLE_WEB: &str = "Grass Rabbit Fox Bear DONE\n1 0\n2 1\n3 1\n3 0\n-1 -1\n";

#[test]
fn test_basic_quiet_run() {
    foodweb()
        .args(["-b", "-q"])
        .write_stdin(SAMPLE_WEB)
        .assert()
        .success()
        .stdout(predicate::str::contains("  basic mode = ON\n"))
        .stdout(predicate::str::contains("Apex Predators:\n  Fox\n  Bear\n"))
        .stdout(predicate::str::contains("Food Web Heights:\n  Grass: 0\n  Rabbit: 1\n  Fox: 2\n  Bear: 2\n"))
        .stdout(predicate::str::contains("  Omnivores:\n    Bear\n  Carnivores:\n    Fox\n"))
        .stdout(predicate::str::contains("Modifying the food web").not());
}

#[test]
fn test_modify_session() {
    let input = format!("{}x 1\nd\nq\n", SAMPLE_WEB);

    foodweb()
        .arg("-q")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Species Extinction: Rabbit"))
        .stdout(predicate::str::contains(
            "UPDATED Food Web Predators & Prey:\n  (0) Grass\n  (1) Fox\n  (2) Bear eats Grass\n",
        ))
        .stdout(predicate::str::contains("UPDATED Producers:\n  Grass\n  Fox\n"));
}

#[test]
fn test_invalid_argument() {
    foodweb()
        .arg("-z")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Invalid command-line argument. Terminating program...",
        ));
}

#[test]
fn test_repeated_mode_flag() {
    foodweb()
        .args(["-q", "-q"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid command-line argument"));
}

#[test]
fn test_json_format() {
    let output = foodweb()
        .args(["-b", "-q", "--format", "json"])
        .write_stdin("A B DONE 0 1 -1 -1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('{').unwrap();
    let value: serde_json::Value = serde_json::Deserializer::from_str(&stdout[start..])
        .into_iter::<serde_json::Value>()
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(value["updated"], false);
    assert_eq!(value["apex_predators"][0], "A");
    assert_eq!(value["heights"][0]["height"], 1);
}

#[test]
fn test_config_file_sets_modes() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "basic = true\nquiet = true").unwrap();

    foodweb()
        .arg("--config")
        .arg(file.path())
        .write_stdin("A DONE -1 -1")
        .assert()
        .success()
        .stdout(predicate::str::contains("  basic mode = ON\n  debug mode = OFF\n  quiet mode = ON\n"))
        .stdout(predicate::str::contains("Enter the name").not());
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "basic = maybe").unwrap();

    foodweb()
        .arg("--config")
        .arg(file.path())
        .write_stdin("DONE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
