//! Local stand-in for the OMDb API.
//!
//! Serves canned search pages and records every query it receives. Searches
//! for a gated query block until the test releases the gate.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use reelscout_core::config::OmdbConfig;
use reelscout_search::OmdbProvider;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, Notify};

/// Query that waits on [`FakeOmdb::release_gate`] before answering.
pub const GATED_QUERY: &str = "slow";

/// Query answered with an HTTP 500.
pub const FAILING_QUERY: &str = "boom";

pub const TEST_API_KEY: &str = "test-key";

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
    gate: Arc<Notify>,
}

/// Running fake server.
pub struct FakeOmdb {
    pub base_url: String,
    state: FakeState,
}

impl FakeOmdb {
    pub async fn start() -> Self {
        let state = FakeState {
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: Arc::new(Notify::new()),
        };

        let router = Router::new()
            .route("/", get(handle))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{address}/"),
            state,
        }
    }

    pub fn config(&self) -> OmdbConfig {
        OmdbConfig {
            api_key: TEST_API_KEY.to_string(),
            base_url: self.base_url.clone(),
            ..OmdbConfig::default()
        }
    }

    pub fn provider(&self) -> OmdbProvider {
        OmdbProvider::new(&self.config()).unwrap()
    }

    pub async fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.lock().await.clone()
    }

    /// Lets one gated search answer.
    pub fn release_gate(&self) {
        self.state.gate.notify_one();
    }
}

async fn handle(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().await.push(params.clone());

    if let Some(id) = params.get("i") {
        return Json(details_body(id)).into_response();
    }

    let query = params.get("s").map(String::as_str).unwrap_or_default();
    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    match query.to_lowercase().as_str() {
        FAILING_QUERY => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        GATED_QUERY => {
            state.gate.notified().await;
            Json(search_body("Slow", 1, 1)).into_response()
        }
        "batman" => Json(search_body("Batman", 57, page)).into_response(),
        _ => Json(json!({ "Response": "False", "Error": "Movie not found!" })).into_response(),
    }
}

/// A page of `total` titles named after `prefix`; only the first entry of
/// page 1 lacks a poster.
fn search_body(prefix: &str, total: u32, page: u32) -> Value {
    let first = (page - 1) * 10;
    let last = (first + 10).min(total);
    let entries: Vec<Value> = (first..last)
        .map(|index| {
            let poster = if index == 0 {
                "N/A".to_string()
            } else {
                format!("https://img.example/{index}.jpg")
            };
            json!({
                "Title": format!("{prefix} {index}"),
                "Year": (1990 + index).to_string(),
                "imdbID": format!("tt{:07}", index + 1),
                "Type": "movie",
                "Poster": poster,
            })
        })
        .collect();

    json!({
        "Search": entries,
        "totalResults": total.to_string(),
        "Response": "True",
    })
}

/// `tt0000001` carries ratings; every other id has an empty ratings list.
fn details_body(id: &str) -> Value {
    let ratings = if id == "tt0000001" {
        json!([
            { "Source": "Internet Movie Database", "Value": "8.1/10" },
            { "Source": "Rotten Tomatoes", "Value": "84%" },
        ])
    } else {
        json!([])
    };

    json!({
        "Title": "Batman 0",
        "Year": "1990",
        "Rated": "N/A",
        "Released": "01 Jan 1990",
        "Runtime": "126 min",
        "Genre": "Action",
        "Director": "Someone",
        "Actors": "Someone Else",
        "Plot": "N/A",
        "Awards": "N/A",
        "Poster": "N/A",
        "Ratings": ratings,
        "imdbRating": "8.1",
        "imdbID": id,
        "Response": "True",
    })
}
