use anyhow::Result;

use crate::{CliTest, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "config/locales/es.yml",
        "es:\n  models:\n    user:\n      greeting: Hola\n",
    )?;
    test.write_file(
        "packs/billing/config/locales/es-co.yml",
        "es-co:\n  billing:\n    total: Total a pagar\n",
    )?;
    Ok(test)
}

#[test]
fn test_lookup_with_and_without_locale() -> Result<()> {
    let test = project()?;

    let output = test
        .command()
        .args(["lookup", "models.user.greeting"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("es.models.user.greeting = Hola"));
    assert!(out.contains("--> config/locales/es.yml:4"));

    let output = test
        .command()
        .args(["lookup", "es.models.user.greeting"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_variants() -> Result<()> {
    let test = project()?;

    let output = test.command().args(["lookup", "billing.total"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("es-co.billing.total = Total a pagar"));
    assert!(out.contains("packs/billing/config/locales/es-co.yml:3"));

    Ok(())
}

#[test]
fn test_lookup_missing_key() -> Result<()> {
    let test = project()?;

    let output = test.command().args(["lookup", "nope.nada"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Key \"nope.nada\" not found"));

    Ok(())
}

#[test]
fn test_find_key_for_text() -> Result<()> {
    let test = project()?;

    let output = test.command().args(["find", "Total a pagar"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("billing.total = Total a pagar"));
    assert!(out.contains("packs/billing/config/locales/es-co.yml:3"));

    let output = test.command().args(["find", "Adiós"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Text \"Adiós\" not found"));

    Ok(())
}
