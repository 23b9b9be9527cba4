// lexiclean/tests/cli_integration_tests.rs
use anyhow::Result;
use assert_cmd::Command;
use log::{debug, LevelFilter};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

use lexiclean::logger;

/// A command for the `lexiclean` binary isolated from the caller's
/// environment and from any config file in the usual locations.
fn lexiclean_cmd(sandbox: &TempDir) -> Command {
    logger::init_logger(Some(LevelFilter::Debug));
    let mut cmd = Command::new(assert_cmd::cargo_bin!("lexiclean"));
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("LEXICLEAN_VARIANT")
        .env_remove("LEXICLEAN_ALLOW_DEBUG_WORDS");
    debug!("Command sandbox: {}", sandbox.path().display());
    cmd
}

fn stripped(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes::strip(bytes)).into_owned()
}

#[test]
fn test_sanitize_plain_from_stdin() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .args(["sanitize", "--plain", "--seed", "3", "--no-summary"])
        .write_stdin("Well, damn. That was a crappy day.")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Well, "))
        .stdout(predicate::str::contains("damn").not())
        .stdout(predicate::str::contains("crappy").not())
        .stdout(predicate::str::contains("<mark").not());
    Ok(())
}

#[test]
fn test_sanitize_highlights_by_default() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .args(["sanitize", "--no-summary"])
        .write_stdin("What the hell.")
        .assert()
        .success()
        .stdout(predicate::str::contains("What the <mark"))
        .stdout(predicate::str::contains(">heck</mark>."));
    Ok(())
}

#[test]
fn test_sanitize_prints_summary_on_stderr() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let output = lexiclean_cmd(&sandbox)
        .args(["sanitize", "--plain"])
        .write_stdin("This is bloody stupid. Really bloody stupid!")
        .output()?;

    assert!(output.status.success());
    let stderr = stripped(&output.stderr);
    assert!(stderr.contains("Text Statistics"));
    assert!(stderr.contains("Replaced words"));
    assert!(stderr.contains("Most Replaced Words"));
    assert!(stderr.contains("bloody"));
    assert!(!stripped(&output.stdout).contains("Text Statistics"));
    Ok(())
}

#[test]
fn test_quiet_suppresses_summary() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .args(["--quiet", "sanitize", "--plain"])
        .write_stdin("damn")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_sanitize_file_to_file() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let input = sandbox.path().join("input.txt");
    let output = sandbox.path().join("output.txt");
    fs::write(&input, "Nothing flagged here.\n\nSecond paragraph.")?;

    lexiclean_cmd(&sandbox)
        .args(["sanitize", "--plain", "--no-summary", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Writing sanitized content to file"));

    assert_eq!(
        fs::read_to_string(&output)?,
        "Nothing flagged here.\n\nSecond paragraph.\n"
    );
    Ok(())
}

#[test]
fn test_sanitize_buzzwords_variant() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .args(["sanitize", "--variant", "buzzwords", "--plain", "--no-summary"])
        .write_stdin("We must leverage synergy.")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("We must "))
        .stdout(predicate::str::contains("synergy").not())
        .stdout(predicate::str::contains("leverage").not());
    Ok(())
}

#[test]
fn test_sanitize_dictionary_dir() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let dict_dir = sandbox.path().join("dicts");
    fs::create_dir(&dict_dir)?;
    fs::write(
        dict_dir.join("word_replacements.json"),
        r#"[{"original_word": "rainy", "replacement_options": ["sunny"]}]"#,
    )?;

    lexiclean_cmd(&sandbox)
        .args(["sanitize", "--plain", "--no-summary", "--dictionary-dir"])
        .arg(&dict_dir)
        .write_stdin("A rainy damn day")
        .assert()
        .success()
        .stdout("A sunny damn day\n");
    Ok(())
}

#[test]
fn test_missing_dictionary_fails() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let empty = tempfile::tempdir()?;

    let output = lexiclean_cmd(&sandbox)
        .args(["sanitize", "--dictionary-dir"])
        .arg(empty.path())
        .write_stdin("anything")
        .output()?;

    assert!(!output.status.success());
    let stderr = stripped(&output.stderr);
    assert!(stderr.contains("Failed to load dictionary 'default'"));
    assert!(stderr.contains("word_replacements"));
    Ok(())
}

#[test]
fn test_config_file_sets_markup() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let config = sandbox.path().join("custom.yaml");
    fs::write(&config, "highlight:\n  open_tag: \"[\"\n  close_tag: \"]\"\nseed: 11\n")?;

    lexiclean_cmd(&sandbox)
        .args(["sanitize", "--no-summary", "--config"])
        .arg(&config)
        .write_stdin("go to hell")
        .assert()
        .success()
        .stdout("go to [heck]\n");
    Ok(())
}

#[test]
fn test_discovered_local_config() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    fs::create_dir(sandbox.path().join("config"))?;
    fs::write(
        sandbox.path().join("config").join("lexiclean.yaml"),
        "dictionary:\n  variant: buzzwords\nhighlight:\n  open_tag: \"\"\n  close_tag: \"\"\n",
    )?;

    lexiclean_cmd(&sandbox)
        .args(["sanitize", "--no-summary"])
        .write_stdin("synergy")
        .assert()
        .success()
        .stdout(predicate::str::contains("synergy").not());
    Ok(())
}

#[test]
fn test_stats_json_stdout() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let output = lexiclean_cmd(&sandbox)
        .args(["stats", "--json-stdout"])
        .write_stdin("The cat sat.")
        .output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["total_words"], 3);
    assert_eq!(json["sentence_count"], 1);
    assert_eq!(json["paragraph_count"], 1);
    assert_eq!(json["replaced_words_count"], 0);
    let score = json["readability_score"].as_f64().unwrap();
    assert!((score - 119.19).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_stats_json_file() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let json_path = sandbox.path().join("stats.json");

    lexiclean_cmd(&sandbox)
        .args(["stats", "--json-file"])
        .arg(&json_path)
        .write_stdin("damn damn hell")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    assert_eq!(json["replaced_words_count"], 3);
    assert_eq!(json["replacement_frequency"]["damn"], 2);
    assert_eq!(json["replacement_frequency"]["hell"], 1);
    assert_eq!(json["graph_data"].as_array().unwrap().len(), 3);
    Ok(())
}

#[test]
fn test_stats_json_flags_conflict() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .args(["stats", "--json-stdout", "--json-file", "out.json"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    Ok(())
}

#[test]
fn test_stats_table() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let output = lexiclean_cmd(&sandbox)
        .arg("stats")
        .write_stdin("Clean text only.")
        .output()?;

    assert!(output.status.success());
    let stderr = stripped(&output.stderr);
    assert!(stderr.contains("Readability (Flesch)"));
    assert!(stderr.contains("No replacements made."));
    Ok(())
}

#[test]
fn test_variants_lists_dictionaries() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .arg("variants")
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("buzzwords"))
        .stdout(predicate::str::contains("word_replacements_buzzwords"));
    Ok(())
}

#[test]
fn test_no_arguments_shows_help() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn test_unknown_variant_warns_and_uses_default() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    let output = lexiclean_cmd(&sandbox)
        .args(["sanitize", "--variant", "legalese", "--plain", "--no-summary"])
        .write_stdin("what the hell")
        .output()?;

    assert!(output.status.success());
    assert_eq!(stripped(&output.stdout), "what the heck\n");
    let stderr = stripped(&output.stderr);
    assert!(stderr.contains("Warning: Unknown dictionary variant 'legalese'; using 'default' instead."));
    Ok(())
}

#[test]
fn test_known_variant_does_not_warn() -> Result<()> {
    let sandbox = tempfile::tempdir()?;
    lexiclean_cmd(&sandbox)
        .args(["stats", "--variant", "Buzzwords", "--json-stdout"])
        .write_stdin("synergy")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning").not());
    Ok(())
}
