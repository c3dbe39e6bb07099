use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["baseLocale"], "es");
    assert_eq!(parsed["localesDir"], "config/locales");
    assert_eq!(parsed["appMarker"], "app");
    assert_eq!(parsed["packMarker"], "packs");
    assert!(parsed["localeVariants"].is_array());
    assert!(parsed["baseYmlFiles"].is_array());

    assert!(
        content.contains("\n  \"baseLocale\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .lexirc.json"));

    assert!(test.root().join(".lexirc.json").exists());
    let content = test.read_file(".lexirc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lexirc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".lexirc.json already exists"));
    assert_eq!(test.read_file(".lexirc.json")?, "{}");

    Ok(())
}
