use anyhow::Result;

use crate::{CliTest, stdout};

const LOCALE: &str = "---\nes:\n  models:\n    user:\n      greeting: Hola %{name}\n";

#[test]
fn test_keys_reports_values_and_missing_keys() -> Result<()> {
    let test = CliTest::with_file("config/locales/es.yml", LOCALE)?;
    test.write_file(
        "app/models/user.rb",
        "def greet\n  I18n.t('models.user.greeting', name: name)\n  I18n.t(\"models.user.gone\")\nend\n",
    )?;

    let output = test
        .command()
        .args(["keys", "app/models/user.rb"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("key: models.user.greeting\n"));
    assert!(out.contains("--> app/models/user.rb:2:3"));
    assert!(out.contains("= value: Hola %{name}"));
    assert!(out.contains("= defined: config/locales/es.yml:5"));
    assert!(out.contains("missing: models.user.gone\n"));
    assert!(out.contains("1 of 2 keys not found"));

    Ok(())
}

#[test]
fn test_keys_all_found() -> Result<()> {
    let test = CliTest::with_file("config/locales/es.yml", LOCALE)?;
    test.write_file(
        "app/views/users/show.html.erb",
        "<h1><%= I18n.t('models.user.greeting', name: @user.name) %></h1>\n",
    )?;

    let output = test
        .command()
        .args(["keys", "app/views/users/show.html.erb"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("All 1 key found"));

    Ok(())
}

#[test]
fn test_keys_without_calls() -> Result<()> {
    let test = CliTest::with_file("app/models/user.rb", "class User\nend\n")?;

    let output = test
        .command()
        .args(["keys", "app/models/user.rb"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No I18n.t keys in app/models/user.rb"));

    Ok(())
}
