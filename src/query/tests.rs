//! Tests for the query module

use super::*;
use crate::auth::AuthConfig;
use crate::config::ConnectionConfig;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::GenericType;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SQL_PATH: &str = "/griddb/v2/myCluster/dbs/public/sql";

fn setup(server: &MockServer) -> (HttpClient, ConnectionConfig) {
    let addr = server.address();
    let config = ConnectionConfig::new(
        addr.ip().to_string(),
        addr.port(),
        "myCluster",
        "public",
        "admin",
        "admin",
    );
    let client =
        HttpClient::with_auth(HttpClientConfig::default(), AuthConfig::from_connection(&config))
            .unwrap();
    (client, config)
}

#[tokio::test]
async fn test_execute_reshapes_rows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!([
            {"type": "sql-select", "stmt": "SELECT * FROM sensors"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "columns": [
                {"name": "ts", "type": "TIMESTAMP"},
                {"name": "id", "type": "LONG"},
                {"name": "value", "type": "DOUBLE"},
                {"name": "ok", "type": "BOOL"}
            ],
            "results": [
                ["2024-01-01T00:00:00.000Z", 1, 20.5, true],
                ["2024-01-01T00:01:00.000Z", 2, 21.0, false],
                ["2024-01-01T00:02:00.000Z", 3, null, true]
            ]
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let result = QueryExecutor::new(&client, &config)
        .execute("SELECT * FROM sensors")
        .await
        .unwrap();

    assert_eq!(
        result.columns,
        vec![
            Column::new("ts", Some(GenericType::Datetime)),
            Column::new("id", Some(GenericType::Integer)),
            Column::new("value", Some(GenericType::Float)),
            Column::new("ok", Some(GenericType::Boolean)),
        ]
    );
    assert_eq!(result.row_count(), 3);
    for row in &result.rows {
        let mut keys: Vec<_> = row.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["id", "ok", "ts", "value"]);
    }
    assert_eq!(result.rows[0]["id"], json!(1));
    assert_eq!(result.rows[1]["value"], json!(21.0));
    assert_eq!(result.rows[2]["value"], json!(null));
    assert_eq!(result.rows[2]["ts"], json!("2024-01-01T00:02:00.000Z"));
}

#[tokio::test]
async fn test_execute_unknown_type_is_unset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "columns": [
                {"name": "tags", "type": "STRING_ARRAY"},
                {"name": "amount", "type": "DECIMAL"}
            ],
            "results": [[["a", "b"], "12.50"]]
        }])))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let result = QueryExecutor::new(&client, &config)
        .execute("SELECT tags, amount FROM t")
        .await
        .unwrap();

    assert_eq!(result.columns[0].column_type, Some(GenericType::String));
    assert_eq!(result.columns[1].column_type, None);
    assert_eq!(result.rows[0]["tags"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_execute_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "columns": [{"name": "id", "type": "INTEGER"}],
            "results": []
        }])))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let result = QueryExecutor::new(&client, &config)
        .execute("SELECT id FROM empty")
        .await
        .unwrap();

    assert_eq!(result.columns.len(), 1);
    assert!(result.rows.is_empty());
}

#[tokio::test]
async fn test_execute_duplicate_column_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "columns": [
                {"name": "id", "type": "INTEGER"},
                {"name": "id", "type": "INTEGER"}
            ],
            "results": [[1, 2]]
        }])))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let result = QueryExecutor::new(&client, &config)
        .execute("SELECT a.id, b.id FROM a, b")
        .await
        .unwrap();

    assert_eq!(result.column_names().collect::<Vec<_>>(), vec!["id", "id1"]);
    assert_eq!(result.rows[0]["id"], json!(1));
    assert_eq!(result.rows[0]["id1"], json!(2));
}

#[tokio::test]
async fn test_execute_remote_error_is_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "version": "v2",
            "errorCode": 240008,
            "errorMessage": "[240008:SQL_COMPILE_SYNTAX_ERROR] Parse SQL failed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let err = QueryExecutor::new(&client, &config)
        .execute("SELEC 1")
        .await
        .unwrap_err();

    assert!(err.is_query_error());
    assert_eq!(
        err.to_string(),
        "[240008:SQL_COMPILE_SYNTAX_ERROR] Parse SQL failed"
    );
}

#[tokio::test]
async fn test_execute_error_without_message_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let err = QueryExecutor::new(&client, &config)
        .execute("SELECT 1")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err}");
}

#[tokio::test]
async fn test_execute_empty_envelope_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let err = QueryExecutor::new(&client, &config)
        .execute("SELECT 1")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err}");
}

#[tokio::test]
async fn test_execute_object_envelope_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "columns": [],
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let err = QueryExecutor::new(&client, &config)
        .execute("SELECT 1")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err}");
}

#[tokio::test]
async fn test_execute_short_row_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "columns": [
                {"name": "a", "type": "INTEGER"},
                {"name": "b", "type": "INTEGER"}
            ],
            "results": [[1, 2], [3]]
        }])))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let err = QueryExecutor::new(&client, &config)
        .execute("SELECT a, b FROM t")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("row 1"), "{err}");
}

#[tokio::test]
async fn test_execute_only_first_block_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"columns": [{"name": "x", "type": "STRING"}], "results": [["first"]]},
            {"columns": [{"name": "y", "type": "STRING"}], "results": [["second"]]}
        ])))
        .mount(&mock_server)
        .await;

    let (client, config) = setup(&mock_server);
    let result = QueryExecutor::new(&client, &config)
        .execute("SELECT x FROM t")
        .await
        .unwrap();

    assert_eq!(result.column_names().collect::<Vec<_>>(), vec!["x"]);
    assert_eq!(result.rows[0]["x"], json!("first"));
}

#[test]
fn test_query_result_to_json() {
    let result = QueryResult {
        columns: vec![Column::new("id", Some(GenericType::Integer))],
        rows: vec![[("id".to_string(), json!(7))].into_iter().collect()],
    };

    let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "columns": [{"name": "id", "type": "integer"}],
            "rows": [{"id": 7}]
        })
    );
}
