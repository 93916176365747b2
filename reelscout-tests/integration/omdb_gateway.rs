//! OMDb provider against the fake service.

use reelscout_core::grid::PosterView;
use reelscout_core::overlay::DetailView;
use reelscout_core::{GatewayError, MediaType, MovieCatalog, NOT_AVAILABLE};

use crate::fake_omdb::{FAILING_QUERY, FakeOmdb, TEST_API_KEY};

#[tokio::test]
async fn test_search_sends_expected_parameters() {
    let fake = FakeOmdb::start().await;
    let provider = fake.provider();

    let page = provider.search("batman", 3).await.unwrap();
    assert_eq!(page.total_results, 57);
    assert_eq!(page.items.len(), 10);

    let requests = fake.requests().await;
    assert_eq!(requests.len(), 1);
    let params = &requests[0];
    assert_eq!(params["apikey"], TEST_API_KEY);
    assert_eq!(params["s"], "batman");
    assert_eq!(params["type"], "movie");
    assert_eq!(params["page"], "3");
}

#[tokio::test]
async fn test_search_normalizes_missing_poster() {
    let fake = FakeOmdb::start().await;
    let page = fake.provider().search("batman", 1).await.unwrap();

    let first = &page.items[0];
    assert_eq!(first.title, "Batman 0");
    assert_eq!(first.media_type, MediaType::Movie);
    assert_eq!(first.poster_url, None);
    assert!(PosterView::for_title(first.poster_url.as_deref(), &first.title).is_placeholder());
    assert!(page.items[1].poster_url.is_some());
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let fake = FakeOmdb::start().await;
    let page = fake.provider().search("batman", 6).await.unwrap();
    assert_eq!(page.items.len(), 7);
}

#[tokio::test]
async fn test_search_not_found_carries_service_message() {
    let fake = FakeOmdb::start().await;
    let result = fake.provider().search("qwertyuiop", 1).await;

    assert_eq!(
        result,
        Err(GatewayError::NotFound {
            message: "Movie not found!".to_string()
        })
    );
}

#[tokio::test]
async fn test_http_failure_is_reported_with_status() {
    let fake = FakeOmdb::start().await;
    let result = fake.provider().search(FAILING_QUERY, 1).await;

    assert_eq!(result, Err(GatewayError::Http { status: 500 }));
}

#[tokio::test]
async fn test_details_request_and_top_rating() {
    let fake = FakeOmdb::start().await;
    let provider = fake.provider();

    let rated = provider.fetch_details("tt0000001").await.unwrap();
    assert_eq!(rated.top_rating, "8.1/10");
    let view = DetailView::from_record(&rated);
    assert!(view.chips.contains(&"Top Rating: 8.1/10".to_string()));
    assert_eq!(view.plot, "No plot available.");
    assert!(view.subtitle.contains("NR"));

    let unrated = provider.fetch_details("tt0000002").await.unwrap();
    assert_eq!(unrated.top_rating, NOT_AVAILABLE);

    let requests = fake.requests().await;
    assert_eq!(requests[0]["i"], "tt0000001");
    assert_eq!(requests[0]["plot"], "full");
    assert!(!requests[0].contains_key("s"));
}
