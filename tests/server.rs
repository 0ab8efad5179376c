//! End-to-end over a real socket, so the peer address identity path runs.

use std::net::SocketAddr;
use std::sync::Arc;

use chicken_service::app;
use chicken_service::state::AppState;

async fn spawn_server() -> (SocketAddr, Arc<AppState>) {
    let state = Arc::new(AppState::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = app(Arc::clone(&state));
    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    (addr, state)
}

#[tokio::test]
async fn peer_address_is_the_fallback_identity() {
    let (addr, state) = spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{addr}/chicken/4"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.headers()["x-chicken-count"], "4");
    assert_eq!(res.text().await.unwrap(), "chicken chicken chicken chicken");

    assert_eq!(state.leaderboard.stats_for("127.0.0.1").unwrap().total_count, 4);
}

#[tokio::test]
async fn explicit_client_header_beats_peer_address() {
    let (addr, state) = spawn_server().await;
    let client = reqwest::Client::new();

    for count in [3, 7] {
        let res = client
            .get(format!("http://{addr}/chicken/{count}"))
            .header("x-chicken-client", "big-rooster")
            .send()
            .await
            .unwrap();
        assert!(res.status().is_success());
    }

    let board: serde_json::Value = client
        .get(format!("http://{addr}/leaderboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(board["chickens"][0]["client"], "big-rooster");
    assert_eq!(board["chickens"][0]["total"], 10);
    assert!(state.leaderboard.stats_for("127.0.0.1").is_none());
}

#[tokio::test]
async fn bad_count_over_the_wire() {
    let (addr, _) = spawn_server().await;

    let res = reqwest::get(format!("http://{addr}/chicken/abc")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "cluck": "nope" }));
}
