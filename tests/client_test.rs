//! HTTP client tests against a local canned-response server.

mod common;

use soltraders::TradersError;
use soltraders::api::ApiClient;
use soltraders::config::ApiConfig;

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        offline: false,
    })
}

#[tokio::test]
async fn fetches_and_deserializes_whale_notifications() {
    let (base_url, _) =
        common::spawn_server(200, common::WHALE_NOTIFICATIONS_JSON.to_string()).await;
    let client = client_for(&base_url);

    let records = client.fetch_whale_notifications(100, None).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].symbol, "SOL");
    assert_eq!(records[0].buyer_count, 245);
    assert_eq!(records[2].net_activity(), 214);
    // Source order preserved, no client-side re-sort.
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn sends_limit_and_encoded_symbol_query() {
    let (base_url, requests) =
        common::spawn_server(200, common::WHALE_NOTIFICATIONS_JSON.to_string()).await;
    let client = client_for(&base_url);

    client
        .fetch_whale_notifications(5, Some("SOL/USD"))
        .await
        .unwrap();

    let requests = requests.lock().await;
    let request = requests.first().expect("no request captured");
    assert!(request.starts_with("GET /whale-notifications?"));
    assert!(request.contains("limit=5"));
    assert!(request.contains("symbol=SOL%2FUSD"));
    assert!(request.contains("Accept: application/json") || request.contains("accept: application/json"));
}

#[tokio::test]
async fn fetches_token_stats() {
    let (base_url, requests) =
        common::spawn_server(200, common::TOKEN_STATS_JSON.to_string()).await;
    let client = client_for(&base_url);

    let stats = client.fetch_token_stats().await.unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[1].symbol, "BONK");
    assert_eq!(stats[1].net_activity, -160);

    let requests = requests.lock().await;
    assert!(requests[0].starts_with("GET /token-stats "));
}

#[tokio::test]
async fn server_error_carries_status_and_detail() {
    let (base_url, _) = common::spawn_server(500, r#"{"detail":"db down"}"#.to_string()).await;
    let client = client_for(&base_url);

    let err = client
        .fetch_whale_notifications(100, None)
        .await
        .unwrap_err();

    match &err {
        TradersError::Http { status, detail } => {
            assert_eq!(*status, 500);
            assert_eq!(detail, "db down");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("db down"));
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let (base_url, _) = common::spawn_server(500, "upstream exploded".to_string()).await;
    let client = client_for(&base_url);

    let err = client
        .fetch_whale_notifications(100, None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn non_array_success_body_is_an_error() {
    let (base_url, _) = common::spawn_server(200, r#"{"rows":[]}"#.to_string()).await;
    let client = client_for(&base_url);

    let err = client
        .fetch_whale_notifications(100, None)
        .await
        .unwrap_err();

    assert!(matches!(err, TradersError::Json(_)));
}

#[tokio::test]
async fn unparseable_success_body_is_an_error() {
    let (base_url, _) = common::spawn_server(200, "<html>oops</html>".to_string()).await;
    let client = client_for(&base_url);

    let err = client.fetch_token_stats().await.unwrap_err();

    assert!(matches!(err, TradersError::Json(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop so the port is known-closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let err = client
        .fetch_whale_notifications(100, None)
        .await
        .unwrap_err();

    assert!(matches!(err, TradersError::Transport(_)));
}

#[tokio::test]
async fn empty_array_is_a_valid_result() {
    let (base_url, _) = common::spawn_server(200, "[]".to_string()).await;
    let client = client_for(&base_url);

    let records = client.fetch_whale_notifications(100, None).await.unwrap();
    assert!(records.is_empty());
}
