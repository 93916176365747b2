//! Catalog implementations backing the search service.
//!
//! Each provider implements [`reelscout_core::MovieCatalog`]: the OMDb
//! provider talks to the real service, the demo provider serves a fixed
//! in-memory catalog for offline development.

pub mod demo;
pub mod omdb;

pub use demo::DemoProvider;
pub use omdb::OmdbProvider;
