use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_config_show_defaults() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["config", "show"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("no .lexirc.json found, using defaults"));
    assert!(out.contains("\"baseLocale\": \"es\""));

    Ok(())
}

#[test]
fn test_add_and_remove_base_file() -> Result<()> {
    let test = CliTest::with_file(
        "config/locales/shared.yml",
        "es:\n  common:\n    save: Guardar\n",
    )?;

    let output = test
        .command()
        .args(["config", "add-base-file", "./config/locales/shared.yml"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Added config/locales/shared.yml to .lexirc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".lexirc.json")?)?;
    assert_eq!(config["baseYmlFiles"][0], "config/locales/shared.yml");

    let output = test.command().args(["config", "show"]).output()?;
    assert!(stdout(&output).contains("\u{2713} config/locales/shared.yml"));

    let output = test
        .command()
        .args(["config", "remove-base-file", "config/locales/shared.yml"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let config: Value = serde_json::from_str(&test.read_file(".lexirc.json")?)?;
    assert_eq!(config["baseYmlFiles"].as_array().map(Vec::len), Some(0));

    let output = test
        .command()
        .args(["config", "remove-base-file", "config/locales/shared.yml"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_add_base_file_rejects_missing_and_invalid_files() -> Result<()> {
    let test = CliTest::with_file("config/broken.yml", "es: [unclosed\n")?;

    let output = test
        .command()
        .args(["config", "add-base-file", "config/nope.yml"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("config/nope.yml does not exist"));

    let output = test
        .command()
        .args(["config", "add-base-file", "config/broken.yml"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is not a locale file"));
    assert!(!test.root().join(".lexirc.json").exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".lexirc.json", r#"{ "baseLocale": "../x" }"#)?;

    let output = test.command().args(["config", "show"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid 'baseLocale'"));

    Ok(())
}
