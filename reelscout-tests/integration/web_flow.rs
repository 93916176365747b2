//! Web router served over TCP in front of the fake service.

use std::sync::Arc;

use reelscout_web::{AppState, build_router};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::fake_omdb::FakeOmdb;

async fn start_web(fake: &FakeOmdb) -> (String, AppState) {
    let state = AppState::new(Arc::new(fake.provider()));
    let router = build_router(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{address}"), state)
}

#[tokio::test]
async fn test_search_page_round_trip() {
    let fake = FakeOmdb::start().await;
    let (base, _state) = start_web(&fake).await;
    let client = reqwest::Client::new();

    let fragment = client
        .get(format!("{base}/htmx/search"))
        .query(&[("q", "batman")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(fragment.contains("Found 57 results"));
    assert!(fragment.contains("No poster available"));

    // Full page reload shows the same session
    let page = client.get(&base).send().await.unwrap().text().await.unwrap();
    assert!(page.contains("Found 57 results"));
    assert!(page.contains(r#"value="batman""#));
}

#[tokio::test]
async fn test_api_details_reports_top_rating() {
    let fake = FakeOmdb::start().await;
    let (base, state) = start_web(&fake).await;

    let payload: Value = reqwest::get(format!("{base}/api/details/tt0000001"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(payload["commit"], "applied");
    let chips = payload["overlay"]["content"]["chips"].as_array().unwrap();
    assert!(chips.iter().any(|chip| chip == "Top Rating: 8.1/10"));
    assert!(state.app.read().await.overlay().scroll_locked);
}

#[tokio::test]
async fn test_api_view_reflects_missing_results() {
    let fake = FakeOmdb::start().await;
    let (base, _state) = start_web(&fake).await;

    let search: Value = reqwest::get(format!("{base}/api/search?q=nothing&page=1"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(search["view"]["status"], "Movie not found!");

    let view: Value = reqwest::get(format!("{base}/api/view"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["grid"]["cards"].as_array().unwrap().len(), 0);
    assert_eq!(view["query"], "nothing");
}
