use lexi::mcp::{LexiMcpServer, types::ExtractTextParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture, text: &str) -> ExtractTextParams {
    ExtractTextParams {
        project_root_path: fixture.root(),
        file_path: "app/models/user.rb".to_string(),
        text: Some(text.to_string()),
        occurrence: None,
        start: None,
        end: None,
        key: None,
        apply: None,
    }
}

#[tokio::test]
async fn test_extract_text_dry_run() {
    let fixture =
        McpTestFixture::with_files(&[("app/models/user.rb", "x = \"Hola #{user.name}\"\n")])
            .unwrap();
    let server = LexiMcpServer::new();

    let result = server
        .extract_text(Parameters(params(&fixture, "\"Hola #{user.name}\"")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["key"], "models.user.hola");
    assert_eq!(json_result["value"], "Hola %{user_name}");
    assert_eq!(json_result["reused"], false);
    assert_eq!(json_result["applied"], false);
    assert_eq!(
        json_result["replacement"],
        "I18n.t('models.user.hola', user_name: user.name)"
    );
    assert_eq!(json_result["localeFile"], "config/locales/models/user/es.yml");
    assert_eq!(json_result["placeholders"][0]["slug"], "user_name");
    assert_eq!(json_result["placeholders"][0]["expression"], "user.name");
    assert!(json_result.get("action").is_none());

    assert_eq!(
        fixture.read_file("app/models/user.rb").unwrap(),
        "x = \"Hola #{user.name}\"\n"
    );
    assert!(!fixture.root_path().join("config/locales").exists());
}

#[tokio::test]
async fn test_extract_text_apply_with_key() {
    let fixture =
        McpTestFixture::with_files(&[("app/models/user.rb", "x = 'Bienvenido'\n")]).unwrap();
    let server = LexiMcpServer::new();

    let mut extract = params(&fixture, "'Bienvenido'");
    extract.key = Some("welcome".to_string());
    extract.apply = Some(true);

    let result = server.extract_text(Parameters(extract)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["key"], "models.user.welcome");
    assert_eq!(json_result["action"], "added");
    assert_eq!(
        fixture.read_file("app/models/user.rb").unwrap(),
        "x = I18n.t('models.user.welcome')\n"
    );
    let locale = fixture
        .read_file("config/locales/models/user/es.yml")
        .unwrap();
    assert!(locale.contains("welcome: Bienvenido"));
}

#[tokio::test]
async fn test_extract_text_reuses_base_file_key() {
    let fixture = McpTestFixture::with_files(&[
        ("shared/common.yml", "es:\n  common:\n    accept: Sí\n"),
        ("app/models/user.rb", "label = 'Sí'\n"),
    ])
    .unwrap();
    fixture
        .write_config(&serde_json::json!({ "baseYmlFiles": ["shared/common.yml"] }))
        .unwrap();
    let server = LexiMcpServer::new();

    let result = server
        .extract_text(Parameters(params(&fixture, "'Sí'")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["reused"], true);
    assert_eq!(json_result["key"], "common.accept");
    assert_eq!(json_result["replacement"], "I18n.t('common.accept')");
}

#[tokio::test]
async fn test_extract_text_without_selection_is_rejected() {
    let fixture = McpTestFixture::with_files(&[("app/models/user.rb", "x = 1\n")]).unwrap();
    let server = LexiMcpServer::new();

    let mut extract = params(&fixture, "");
    extract.text = None;

    assert!(server.extract_text(Parameters(extract)).await.is_err());
}

#[tokio::test]
async fn test_extract_text_unsupported_file() {
    let fixture = McpTestFixture::with_files(&[("app/assets/app.js", "alert('Hola')\n")]).unwrap();
    let server = LexiMcpServer::new();

    let mut extract = params(&fixture, "'Hola'");
    extract.file_path = "app/assets/app.js".to_string();

    let err = server.extract_text(Parameters(extract)).await.unwrap_err();
    assert!(err.message.contains("file type not supported"));
}
