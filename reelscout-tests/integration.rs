//! Integration tests for ReelScout
//!
//! These tests run the real OMDb provider, session state and web router
//! against a local fake of the OMDb API.

#[path = "integration/fake_omdb.rs"]
mod fake_omdb;

#[path = "integration/omdb_gateway.rs"]
mod omdb_gateway;
#[path = "integration/search_flow.rs"]
mod search_flow;
#[path = "integration/web_flow.rs"]
mod web_flow;
