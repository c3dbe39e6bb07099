use lexi::mcp::{LexiMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = LexiMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["baseLocale"], "es");
    assert_eq!(json_result["config"]["localesDir"], "config/locales");
    assert_eq!(json_result["variants"][0], "es");
}

#[tokio::test]
async fn test_get_config_from_lexirc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "baseLocale": "pt",
            "localeVariants": ["pt-br", "pt"],
            "localesDir": "i18n"
        }))
        .unwrap();

    let server = LexiMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["localesDir"], "i18n");
    assert_eq!(json_result["variants"], json!(["pt", "pt-br"]));
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "baseLocale": "" })).unwrap();

    let server = LexiMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
