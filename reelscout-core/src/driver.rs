//! Async glue between the controller and a [`MovieCatalog`].
//!
//! The state lock is never held across a network call, so new input keeps
//! flowing while a request is in flight. Stale outcomes are dropped by the
//! controller's commit check.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::app::{ReelScout, SearchTicket};
use crate::catalog::MovieCatalog;
use crate::overlay::DetailsTicket;
use crate::sequencer::Commit;

/// Controller shared between concurrent request handlers.
pub type SharedReelScout = Arc<RwLock<ReelScout>>;

pub fn shared(app: ReelScout) -> SharedReelScout {
    Arc::new(RwLock::new(app))
}

/// Runs the search described by `ticket` and commits its outcome.
pub async fn run_search(
    app: &SharedReelScout,
    catalog: &dyn MovieCatalog,
    ticket: SearchTicket,
) -> Commit {
    let outcome = catalog.search(&ticket.query, ticket.page).await;
    app.write().await.complete_search(ticket, outcome)
}

/// Fetches the record described by `ticket` and commits it to the overlay.
pub async fn run_details(
    app: &SharedReelScout,
    catalog: &dyn MovieCatalog,
    ticket: DetailsTicket,
) -> Commit {
    let outcome = catalog.fetch_details(&ticket.id).await;
    app.write().await.complete_details(&ticket, outcome)
}
