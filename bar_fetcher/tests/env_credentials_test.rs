use bar_fetcher::{BarFetcher, BarRequest, config::PolygonConfig};
use httpmock::prelude::*;
use serde_json::json;
use serial_test::serial;

const KEY_VAR: &str = "BAR_FETCHER_TEST_POLYGON_KEY";

fn fetcher(server: &MockServer) -> BarFetcher {
    BarFetcher::from_config(&PolygonConfig {
        base_url: server.base_url(),
        api_key_env: KEY_VAR.to_string(),
    })
    .unwrap()
}

#[tokio::test]
#[serial]
async fn key_is_read_from_environment_on_every_call() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET).header("authorization", "Bearer first");
            then.status(200).json_body(json!({
                "results": [{"t": 1704067200000i64, "o": 1, "h": 1, "l": 1, "c": 1}]
            }));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET).header("authorization", "Bearer second");
            then.status(200).json_body(json!({"results": []}));
        })
        .await;

    // Built before any key exists: the variable is not read at construction.
    let fetcher = fetcher(&server);
    let request = BarRequest::new("MSFT", "2024-01-01", "2024-01-02", "1d");

    unsafe { std::env::remove_var(KEY_VAR) };
    assert!(fetcher.fetch(&request).await.is_empty());

    unsafe { std::env::set_var(KEY_VAR, "first") };
    assert_eq!(fetcher.fetch(&request).await.len(), 1);

    unsafe { std::env::set_var(KEY_VAR, "second") };
    assert!(fetcher.fetch(&request).await.is_empty());

    unsafe { std::env::set_var(KEY_VAR, "") };
    assert!(fetcher.fetch(&request).await.is_empty());

    unsafe { std::env::remove_var(KEY_VAR) };
    first.assert_async().await;
    second.assert_async().await;
}
