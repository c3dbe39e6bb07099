use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const USER_MODEL: &str = "class User\n  def greeting\n    \"Hola #{name}\"\n  end\n\n  def save_label\n    'Guardar cambios'\n  end\nend\n";

#[test]
fn test_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::with_file("app/models/user.rb", USER_MODEL)?;

    let output = test
        .extract_command()
        .args(["app/models/user.rb", "--find", "'Guardar cambios'", "--auto-key"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Would extract \"Guardar cambios\""));
    assert!(out.contains("key: models.user.guardar_cambios"));
    assert!(out.contains("file: config/locales/models/user/es.yml"));
    assert!(out.contains("call: I18n.t('models.user.guardar_cambios')"));
    assert!(out.contains("dry run"));

    assert_eq!(test.read_file("app/models/user.rb")?, USER_MODEL);
    assert!(!test.root().join("config/locales").exists());

    Ok(())
}

#[test]
fn test_apply_writes_locale_file_and_source() -> Result<()> {
    let test = CliTest::with_file("app/models/user.rb", USER_MODEL)?;

    let output = test
        .extract_command()
        .args([
            "app/models/user.rb",
            "--find",
            "\"Hola #{name}\"",
            "--key",
            "greeting",
            "--apply",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Extracted \"Hola %{name}\""));
    assert!(out.contains("config/locales/models/user/es.yml (added)"));

    let source = test.read_file("app/models/user.rb")?;
    assert!(source.contains("    I18n.t('models.user.greeting', name: name)\n"));
    assert!(source.contains("'Guardar cambios'"));

    let locale = test.read_file("config/locales/models/user/es.yml")?;
    assert!(locale.starts_with("---\nes:\n  models:\n    user:\n      greeting:"));
    assert!(locale.contains("Hola %{name}"));

    Ok(())
}

#[test]
fn test_existing_value_reuses_key() -> Result<()> {
    let test = CliTest::with_file(
        "config/locales/es.yml",
        "es:\n  common:\n    save: Guardar\n",
    )?;
    test.write_file(
        "app/controllers/users_controller.rb",
        "flash[:notice] = 'Guardar'\n",
    )?;

    let output = test
        .extract_command()
        .args([
            "app/controllers/users_controller.rb",
            "--find",
            "'Guardar'",
            "--apply",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Reused existing key for \"Guardar\""));
    assert_eq!(
        test.read_file("app/controllers/users_controller.rb")?,
        "flash[:notice] = I18n.t('common.save')\n"
    );
    assert_eq!(
        test.read_file("config/locales/es.yml")?,
        "es:\n  common:\n    save: Guardar\n"
    );
    assert!(!test.root().join("config/locales/controllers").exists());

    Ok(())
}

#[test]
fn test_erb_markup_is_wrapped() -> Result<()> {
    let test = CliTest::with_file(
        "app/views/users/show.html.erb",
        "<p>Bienvenido <%= user.name %></p>\n",
    )?;

    let output = test
        .extract_command()
        .args([
            "app/views/users/show.html.erb",
            "--find",
            "Bienvenido <%= user.name %>",
            "--key",
            "welcome",
            "--apply",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        test.read_file("app/views/users/show.html.erb")?,
        "<p><%= I18n.t('views.users.show.html.welcome', user_name: user.name) %></p>\n"
    );
    let locale = test.read_file("config/locales/views/users/show/es.yml")?;
    assert!(locale.contains("welcome:"));
    assert!(locale.contains("Bienvenido %{user_name}"));

    Ok(())
}

#[test]
fn test_span_selects_characters() -> Result<()> {
    let test = CliTest::with_file("app/models/user.rb", "año = 'Hola'\n")?;

    let output = test
        .extract_command()
        .args(["app/models/user.rb", "--span", "6..12", "--auto-key"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("call: I18n.t('models.user.hola')"));

    Ok(())
}

#[test]
fn test_missing_key_answer_cancels() -> Result<()> {
    let test = CliTest::with_file("app/models/user.rb", USER_MODEL)?;

    // stdin is closed, so the prompt reads end of input.
    let output = test
        .extract_command()
        .args(["app/models/user.rb", "--find", "'Guardar cambios'", "--apply"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("extraction cancelled"));
    assert_eq!(test.read_file("app/models/user.rb")?, USER_MODEL);
    assert!(!test.root().join("config/locales").exists());

    Ok(())
}

#[test]
fn test_unsupported_file_type() -> Result<()> {
    let test = CliTest::with_file("app/scripts/hello.py", "print('hola')\n")?;

    let output = test
        .extract_command()
        .args(["app/scripts/hello.py", "--find", "'hola'", "--auto-key"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("file type not supported for extraction: .py"));

    Ok(())
}

#[test]
fn test_occurrence_not_found() -> Result<()> {
    let test = CliTest::with_file("app/models/user.rb", USER_MODEL)?;

    let output = test
        .extract_command()
        .args([
            "app/models/user.rb",
            "--find",
            "'Guardar cambios'",
            "--occurrence",
            "2",
            "--auto-key",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid selection"));

    Ok(())
}

#[test]
fn test_file_outside_app_root_is_an_error() -> Result<()> {
    let test = CliTest::with_file("lib/tasks/seed.rb", "puts 'Listo'\n")?;

    let output = test
        .extract_command()
        .args(["lib/tasks/seed.rb", "--find", "'Listo'", "--auto-key"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("is not inside an application directory"));

    Ok(())
}
