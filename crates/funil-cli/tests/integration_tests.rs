//! End-to-end tests for the `funil` binary.
//!
//! None of these touch the network: they exercise argument parsing, the
//! configuration error path and completion generation, all of which resolve
//! before any HTTP request is made.

use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;

/// A `funil` command isolated from the host environment and pointed at an
/// empty config file, so the machine's real config and env vars never leak in.
fn funil() -> Command {
    let mut cmd = Command::cargo_bin("funil").unwrap();
    cmd.env_remove("FUNIL_API_URL");
    cmd.env_remove("FUNIL_API_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn empty_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# empty").unwrap();
    file
}

#[test]
fn help_flag_shows_subcommands() {
    funil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Funil"))
        .stdout(predicate::str::contains("company"))
        .stdout(predicate::str::contains("cep"));
}

#[test]
fn version_flag_matches_cargo() {
    funil()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    funil()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_exits_two() {
    funil().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn cep_rejects_short_codes_before_any_request() {
    let config = empty_config();
    funil()
        .args(["--config", config.path().to_str().unwrap(), "cep", "0131"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("CEP"));
}

#[test]
fn cep_without_api_url_is_a_configuration_error() {
    let config = empty_config();
    funil()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "cep",
            "01310-100",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("FUNIL_API_URL"));
}

#[test]
fn missing_explicit_config_file_exits_four() {
    funil()
        .args(["--config", "/definitely/not/here.toml", "company", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn lead_move_rejects_unknown_stage() {
    funil()
        .args(["lead", "move", "42", "maybe"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("maybe"));
}

#[test]
fn quiet_and_verbose_conflict() {
    funil()
        .args(["--quiet", "--verbose", "cep", "01310100"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn completions_bash_emits_a_script() {
    funil()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("funil"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn completions_zsh_emits_a_script() {
    funil()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef funil"));
}
