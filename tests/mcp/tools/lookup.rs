use lexi::mcp::{
    LexiMcpServer,
    types::{FindKeyForTextParams, ListFileKeysParams, LookupKeyParams},
};
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, extract_tool_result_json};

fn fixture() -> McpTestFixture {
    McpTestFixture::with_files(&[
        (
            "config/locales/es.yml",
            "es:\n  models:\n    user:\n      greeting: Hola %{name}\n",
        ),
        (
            "app/models/user.rb",
            "def greet\n  I18n.t('models.user.greeting', name: name)\n  I18n.t('models.user.bye')\nend\n",
        ),
    ])
    .unwrap()
}

#[tokio::test]
async fn test_lookup_key() {
    let fixture = fixture();
    let server = LexiMcpServer::new();

    let result = server
        .lookup_key(Parameters(LookupKeyParams {
            project_root_path: fixture.root(),
            key: "models.user.greeting".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["key"], "es.models.user.greeting");
    assert_eq!(json_result["value"], "Hola %{name}");
    assert_eq!(json_result["localeFile"], "config/locales/es.yml");
    assert_eq!(json_result["line"], 4);

    let result = server
        .lookup_key(Parameters(LookupKeyParams {
            project_root_path: fixture.root(),
            key: "models.user.bye".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["found"], false);
    assert!(json_result.get("value").is_none());
}

#[tokio::test]
async fn test_find_key_for_text() {
    let fixture = fixture();
    let server = LexiMcpServer::new();

    let result = server
        .find_key_for_text(Parameters(FindKeyForTextParams {
            project_root_path: fixture.root(),
            text: "Hola %{name}".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["key"], "models.user.greeting");
    assert_eq!(json_result["line"], 4);
}

#[tokio::test]
async fn test_list_file_keys() {
    let fixture = fixture();
    let server = LexiMcpServer::new();

    let result = server
        .list_file_keys(Parameters(ListFileKeysParams {
            project_root_path: fixture.root(),
            file_path: "app/models/user.rb".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filePath"], "app/models/user.rb");
    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["missingCount"], 1);

    let keys = json_result["keys"].as_array().unwrap();
    assert_eq!(keys[0]["key"], "models.user.greeting");
    assert_eq!(keys[0]["line"], 2);
    assert_eq!(keys[0]["col"], 3);
    assert_eq!(keys[0]["found"], true);
    assert_eq!(keys[0]["localeLine"], 4);
    assert_eq!(keys[1]["key"], "models.user.bye");
    assert_eq!(keys[1]["found"], false);
    assert!(keys[1].get("value").is_none());
}
