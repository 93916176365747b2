//! Session state driven through the real provider.

use std::sync::Arc;
use std::time::Duration;

use reelscout_core::driver::{run_search, shared};
use reelscout_core::{Commit, MovieCatalog, ReelScout};

use crate::fake_omdb::{FAILING_QUERY, FakeOmdb, GATED_QUERY};

#[tokio::test]
async fn test_last_request_wins_across_real_requests() {
    let fake = FakeOmdb::start().await;
    let catalog: Arc<dyn MovieCatalog> = Arc::new(fake.provider());
    let app = shared(ReelScout::new());

    let slow = app.write().await.submit_query(GATED_QUERY).unwrap();
    let slow_task = {
        let app = app.clone();
        let catalog = catalog.clone();
        tokio::spawn(async move { run_search(&app, catalog.as_ref(), slow).await })
    };

    // Let the gated request reach the fake before issuing the next one
    while fake.requests().await.is_empty() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let fast = app.write().await.submit_query("batman").unwrap();
    assert_eq!(run_search(&app, catalog.as_ref(), fast).await, Commit::Applied);

    fake.release_gate();
    assert_eq!(slow_task.await.unwrap(), Commit::Superseded);

    let app = app.read().await;
    assert_eq!(app.session().query, "batman");
    assert_eq!(app.grid().cards[0].title, "Batman 0");
}

#[tokio::test]
async fn test_paging_through_results() {
    let fake = FakeOmdb::start().await;
    let catalog = fake.provider();
    let app = shared(ReelScout::new());

    let ticket = app.write().await.submit_query("Batman").unwrap();
    run_search(&app, &catalog, ticket).await;
    {
        let app = app.read().await;
        let pager = app.session().pager();
        assert_eq!(pager.max_page, 6);
        assert!(!pager.has_previous);
        assert!(pager.has_next);
    }

    for _ in 0..5 {
        let ticket = app.write().await.next_page().unwrap();
        run_search(&app, &catalog, ticket).await;
    }
    assert!(app.write().await.next_page().is_none());
    assert_eq!(app.read().await.session().page, 6);

    let ticket = app.write().await.previous_page().unwrap();
    run_search(&app, &catalog, ticket).await;
    assert_eq!(app.read().await.view().pager.label, "Page 5");

    let pages: Vec<String> = fake
        .requests()
        .await
        .iter()
        .map(|params| params["page"].clone())
        .collect();
    assert_eq!(pages, ["1", "2", "3", "4", "5", "6", "5"]);
}

#[tokio::test]
async fn test_http_failure_keeps_previous_results() {
    let fake = FakeOmdb::start().await;
    let catalog = fake.provider();
    let app = shared(ReelScout::new());

    let ticket = app.write().await.submit_query("batman").unwrap();
    run_search(&app, &catalog, ticket).await;

    let ticket = app.write().await.submit_query(FAILING_QUERY).unwrap();
    run_search(&app, &catalog, ticket).await;

    let view = app.read().await.view();
    assert_eq!(view.status, "Search failed: HTTP 500");
    assert_eq!(view.grid.cards.len(), 10);
}

#[tokio::test]
async fn test_not_found_clears_grid() {
    let fake = FakeOmdb::start().await;
    let catalog = fake.provider();
    let app = shared(ReelScout::new());

    let ticket = app.write().await.submit_query("batman").unwrap();
    run_search(&app, &catalog, ticket).await;
    let ticket = app.write().await.submit_query("nothing here").unwrap();
    run_search(&app, &catalog, ticket).await;

    let view = app.read().await.view();
    assert_eq!(view.status, "Movie not found!");
    assert!(view.grid.is_empty());
    assert_eq!(view.pager.max_page, 1);
    assert!(!view.pager.has_next);
}
